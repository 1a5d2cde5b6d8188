//! Core data models for poolbudget
//!
//! Transactions and monthly budgets are inputs owned by external
//! collaborators; months and weeks are computed calendar values.

pub mod budget;
pub mod month;
pub mod transaction;
pub mod week;

pub use budget::{find_budget, CategoryMonthlyBudget};
pub use month::Month;
pub use transaction::{parse_transaction_date, Transaction, TransactionType};
pub use week::WeekInfo;
