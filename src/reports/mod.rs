//! Reports module for poolbudget

pub mod weekly_pool;

pub use weekly_pool::{WeeklyPoolReport, WeeklyPoolRow};
