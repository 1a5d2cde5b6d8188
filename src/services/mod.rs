//! Service layer for poolbudget
//!
//! Pure calculations over already-loaded data: week partitioning, weekly
//! spending totals and the pool carry-over allocation.

pub mod pool;
pub mod spending;
pub mod week;

pub use pool::{original_allocations, pool_history, weekly_budget_with_pool, WeekAllocation};
pub use spending::week_spending;
pub use week::{week_in_month, week_number_of, weeks_for_month, weeks_of, WeekPartitioner};
