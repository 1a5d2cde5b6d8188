//! Configuration module for poolbudget
//!
//! - Base directory resolution (env override, platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PoolBudgetPaths;
pub use settings::Settings;
