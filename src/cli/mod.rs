//! CLI command handlers
//!
//! Bridges the clap argument parsing with the calculation services. Data
//! files are read here; everything below this layer works on in-memory
//! values.

pub mod report;
pub mod week;

use std::path::PathBuf;

use chrono::Datelike;
use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::config::{PoolBudgetPaths, Settings};
use crate::error::{PoolBudgetError, PoolBudgetResult};
use crate::models::{find_budget, Month, Transaction};
use crate::services::WeekPartitioner;
use crate::storage;

pub use report::{handle_report_command, ReportArgs};
pub use week::{
    handle_allowance_command, handle_spending_command, handle_weeks_command, AllowanceArgs,
    SpendingArgs, WeeksArgs,
};

/// Resolved inputs shared by every command
pub struct CliContext<C: Clock = SystemClock> {
    pub paths: PoolBudgetPaths,
    pub settings: Settings,
    pub partitioner: WeekPartitioner<C>,
    pub transactions_file: PathBuf,
    pub budgets_file: PathBuf,
}

impl CliContext<SystemClock> {
    /// Build the context from paths, settings and command-line overrides
    pub fn new(
        paths: PoolBudgetPaths,
        settings: Settings,
        transactions_override: Option<PathBuf>,
        budgets_override: Option<PathBuf>,
    ) -> Self {
        Self::with_partitioner(
            paths,
            settings,
            WeekPartitioner::new(),
            transactions_override,
            budgets_override,
        )
    }
}

impl<C: Clock> CliContext<C> {
    /// Build the context with a specific partitioner (and so a specific clock)
    pub fn with_partitioner(
        paths: PoolBudgetPaths,
        settings: Settings,
        partitioner: WeekPartitioner<C>,
        transactions_override: Option<PathBuf>,
        budgets_override: Option<PathBuf>,
    ) -> Self {
        let transactions_file =
            transactions_override.unwrap_or_else(|| settings.transactions_path(&paths));
        let budgets_file = budgets_override.unwrap_or_else(|| settings.budgets_path(&paths));

        Self {
            paths,
            settings,
            partitioner,
            transactions_file,
            budgets_file,
        }
    }

    /// Year from the command line, the settings, or today's year
    pub fn year_or_default(&self, year: Option<i32>) -> i32 {
        year.or(self.settings.default_year)
            .unwrap_or_else(|| self.partitioner.today().year())
    }

    /// Currency symbol for output
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Load the transactions export
    ///
    /// A missing file means no recorded spending, not an error.
    pub fn load_transactions(&self) -> PoolBudgetResult<Vec<Transaction>> {
        if !self.transactions_file.exists() {
            warn!(
                path = %self.transactions_file.display(),
                "transactions file not found, assuming no spending"
            );
            return Ok(Vec::new());
        }
        storage::transactions::load_csv(&self.transactions_file)
    }

    /// Monthly budget for a category: the explicit amount, else the budgets file
    pub fn monthly_budget(
        &self,
        explicit: Option<f64>,
        category: &str,
        month: &Month,
    ) -> PoolBudgetResult<f64> {
        if let Some(amount) = explicit {
            if !amount.is_finite() {
                return Err(PoolBudgetError::Validation(format!(
                    "Budget must be a finite number, got {}",
                    amount
                )));
            }
            return Ok(amount);
        }

        let budgets = storage::budgets::load_json(&self.budgets_file)?;
        find_budget(&budgets, category, month)
            .map(|b| b.monthly_amount)
            .ok_or_else(|| PoolBudgetError::budget_not_found(format!("{} ({})", category, month)))
    }
}
