//! Monthly budgets loader

use std::path::Path;

use crate::error::PoolBudgetResult;
use crate::models::CategoryMonthlyBudget;

use super::file_io::read_json;

/// Load monthly category budgets from a JSON array
///
/// A missing file means no budgets have been defined yet.
pub fn load_json<P: AsRef<Path>>(path: P) -> PoolBudgetResult<Vec<CategoryMonthlyBudget>> {
    read_json(path)
}
