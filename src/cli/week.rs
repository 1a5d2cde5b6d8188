//! CLI commands for weeks, weekly spending and pool allowances

use clap::Args;

use super::CliContext;
use crate::clock::Clock;
use crate::display::format_amount;
use crate::error::PoolBudgetResult;
use crate::services::{original_allocations, week_spending, weekly_budget_with_pool};

/// Arguments for `weeks`
#[derive(Args, Debug)]
pub struct WeeksArgs {
    /// Month name (e.g. "March" or "mar")
    pub month: String,

    /// Year (defaults to the configured or current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for `spending`
#[derive(Args, Debug)]
pub struct SpendingArgs {
    /// Category key (case-insensitive)
    pub category: String,

    /// Month name
    #[arg(short, long)]
    pub month: String,

    /// Week number within the month (1-based)
    #[arg(short, long)]
    pub week: u32,

    /// Year (defaults to the configured or current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for `allowance`
#[derive(Args, Debug)]
pub struct AllowanceArgs {
    /// Category key (case-insensitive)
    pub category: String,

    /// Month name
    #[arg(short, long)]
    pub month: String,

    /// Week number within the month (1-based)
    #[arg(short, long)]
    pub week: u32,

    /// Year (defaults to the configured or current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Monthly budget amount (otherwise read from the budgets file)
    #[arg(short, long, allow_negative_numbers = true)]
    pub budget: Option<f64>,
}

/// List the weeks of a month
pub fn handle_weeks_command<C: Clock>(ctx: &CliContext<C>, args: WeeksArgs) -> PoolBudgetResult<()> {
    let year = ctx.year_or_default(args.year);
    let month = ctx.partitioner.month_or_current(&args.month, year);
    let weeks = ctx.partitioner.all_weeks(&args.month, year);

    println!("{} ({} weeks)", month, weeks.len());
    println!("{:<6} {:<12} {:<12} {:>4}", "Week", "Start", "End", "Days");
    println!("{}", "-".repeat(37));
    for week in &weeks {
        println!(
            "{:<6} {:<12} {:<12} {:>4}",
            week.week_number,
            week.start_date.format("%a %d %b"),
            week.end_date.format("%a %d %b"),
            week.days()
        );
    }

    Ok(())
}

/// Show a category's spending for one week
pub fn handle_spending_command<C: Clock>(
    ctx: &CliContext<C>,
    args: SpendingArgs,
) -> PoolBudgetResult<()> {
    let year = ctx.year_or_default(args.year);
    let week = ctx.partitioner.week_info(&args.month, year, args.week);
    let transactions = ctx.load_transactions()?;

    let spent = week_spending(&transactions, &args.category, &week);
    println!("{}", week);
    println!("{} spending: {}", args.category, format_amount(spent, ctx.symbol()));

    Ok(())
}

/// Show the pool-adjusted budget for one week
pub fn handle_allowance_command<C: Clock>(
    ctx: &CliContext<C>,
    args: AllowanceArgs,
) -> PoolBudgetResult<()> {
    let year = ctx.year_or_default(args.year);
    let month = ctx.partitioner.month_or_current(&args.month, year);
    let budget = ctx.monthly_budget(args.budget, &args.category, &month)?;

    // An unknown month name resolves to the current week, so take the week
    // number from the resolved week rather than the argument.
    let week = ctx.partitioner.week_info(&args.month, year, args.week);
    let weeks = ctx.partitioner.all_weeks(&args.month, year);
    let transactions = ctx.load_transactions()?;

    let original = original_allocations(budget, &weeks)
        .get(week.week_number.saturating_sub(1) as usize)
        .copied()
        .filter(|_| !week.is_empty())
        .unwrap_or(0.0);
    let adjusted =
        weekly_budget_with_pool(budget, &weeks, week.week_number, &transactions, &args.category);
    let spent = week_spending(&transactions, &args.category, &week);
    let symbol = ctx.symbol();

    println!("{} - {}", args.category, week);
    println!("  Original:   {:>16}", format_amount(original, symbol));
    println!("  Adjusted:   {:>16}", format_amount(adjusted, symbol));
    println!("  Spent:      {:>16}", format_amount(spent, symbol));
    println!("  Remaining:  {:>16}", format_amount(adjusted - spent, symbol));
    if week.days() > 0 {
        println!(
            "  Per day:    {:>16}",
            format_amount(adjusted / week.days() as f64, symbol)
        );
    }

    Ok(())
}
