//! Terminal display helpers

pub mod format;

pub use format::{format_amount, separator};
