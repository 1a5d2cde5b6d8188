//! Input loading for the command-line front end
//!
//! Transactions and budgets are owned by external collaborators; these
//! loaders only read exports of them from disk.

pub mod budgets;
pub mod file_io;
pub mod transactions;
