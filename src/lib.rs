//! poolbudget - weekly pool budgeting
//!
//! Splits a monthly category budget across the calendar weeks of the month
//! and carries each week's over- or under-spend forward into the weeks that
//! follow, spread by day count.
//!
//! # Architecture
//!
//! - `models`: transactions, monthly budgets, months and weeks
//! - `services`: week partitioning, weekly spending and the pool allocator
//! - `reports`: the month-long weekly breakdown
//! - `config`, `storage`, `cli`, `display`, `logging`: the command-line shell
//!
//! # Example
//!
//! ```rust
//! use poolbudget::models::{Month, Transaction};
//! use poolbudget::services::{weekly_budget_with_pool, weeks_of};
//!
//! let weeks = weeks_of(&Month::new(2021, 2).unwrap());
//! let txns = vec![Transaction::spending("3/2/2021", "Food", -600.0)];
//! let week2 = weekly_budget_with_pool(-1200.0, &weeks, 2, &txns, "Food");
//! assert!(week2 < 300.0);
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PoolBudgetError, PoolBudgetResult};
