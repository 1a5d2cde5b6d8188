use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use poolbudget::cli::{
    handle_allowance_command, handle_report_command, handle_spending_command,
    handle_weeks_command, AllowanceArgs, CliContext, ReportArgs, SpendingArgs, WeeksArgs,
};
use poolbudget::config::{PoolBudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "poolbudget",
    version,
    about = "Weekly pool budgeting with carry-over",
    long_about = "Splits a monthly category budget across the calendar weeks of the \
                  month. Overspending in one week tightens the weeks after it and \
                  underspending loosens them, spread by day count."
)]
struct Cli {
    /// Transactions CSV (date,type,category,amount)
    #[arg(long, global = true, env = "POOLBUDGET_TRANSACTIONS")]
    transactions: Option<PathBuf>,

    /// Monthly budgets JSON
    #[arg(long, global = true, env = "POOLBUDGET_BUDGETS")]
    budgets: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the weeks of a month
    Weeks(WeeksArgs),

    /// Show a category's spending for one week
    Spending(SpendingArgs),

    /// Show the pool-adjusted budget for one week
    #[command(alias = "budget")]
    Allowance(AllowanceArgs),

    /// Weekly breakdown of a category for a whole month
    Report(ReportArgs),

    /// Write a default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    poolbudget::logging::init(cli.verbose);

    let paths = PoolBudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let ctx = CliContext::new(paths, settings, cli.transactions, cli.budgets);

    match cli.command {
        Some(Commands::Weeks(args)) => handle_weeks_command(&ctx, args)?,
        Some(Commands::Spending(args)) => handle_spending_command(&ctx, args)?,
        Some(Commands::Allowance(args)) => handle_allowance_command(&ctx, args)?,
        Some(Commands::Report(args)) => handle_report_command(&ctx, args)?,
        Some(Commands::Init) => {
            ctx.settings.save(&ctx.paths)?;
            println!("Configuration written to: {}", ctx.paths.settings_file().display());
            println!();
            println!("Place your data files at:");
            println!("  Transactions: {}", ctx.transactions_file.display());
            println!("  Budgets:      {}", ctx.budgets_file.display());
        }
        Some(Commands::Config) => {
            println!("poolbudget Configuration");
            println!("========================");
            println!("Config directory:  {}", ctx.paths.base_dir().display());
            println!("Settings file:     {}", ctx.paths.settings_file().display());
            println!("Transactions file: {}", ctx.transactions_file.display());
            println!("Budgets file:      {}", ctx.budgets_file.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", ctx.settings.currency_symbol);
            match ctx.settings.default_year {
                Some(year) => println!("  Default year:    {}", year),
                None => println!("  Default year:    (current)"),
            }
        }
        None => {
            println!("poolbudget - weekly pool budgeting");
            println!();
            println!("Run 'poolbudget --help' for usage information.");
        }
    }

    Ok(())
}
