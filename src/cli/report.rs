//! CLI command for the weekly pool report

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use super::CliContext;
use crate::clock::Clock;
use crate::error::{PoolBudgetError, PoolBudgetResult};
use crate::reports::WeeklyPoolReport;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Category key (case-insensitive)
    pub category: String,

    /// Month name
    #[arg(short, long)]
    pub month: String,

    /// Year (defaults to the configured or current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Monthly budget amount (otherwise read from the budgets file)
    #[arg(short, long, allow_negative_numbers = true)]
    pub budget: Option<f64>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or export the month's weekly pool breakdown
pub fn handle_report_command<C: Clock>(
    ctx: &CliContext<C>,
    args: ReportArgs,
) -> PoolBudgetResult<()> {
    let year = ctx.year_or_default(args.year);
    let month = ctx.partitioner.month_or_current(&args.month, year);
    let budget = ctx.monthly_budget(args.budget, &args.category, &month)?;
    let transactions = ctx.load_transactions()?;

    let report = WeeklyPoolReport::generate(month, budget, &transactions, &args.category);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            PoolBudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Weekly pool report exported to: {}", path.display());
    } else {
        let today = ctx.partitioner.today();
        println!("{}", report.format_terminal(ctx.symbol(), Some(today)));
    }

    Ok(())
}
