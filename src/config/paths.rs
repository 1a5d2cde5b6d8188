//! Path management for poolbudget
//!
//! ## Path Resolution Order
//!
//! 1. `POOLBUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `poolbudget`
//!    (`~/.config/poolbudget` on Linux, `%APPDATA%\poolbudget` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::PoolBudgetError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "POOLBUDGET_DATA_DIR";

/// Manages all paths used by poolbudget
#[derive(Debug, Clone)]
pub struct PoolBudgetPaths {
    base_dir: PathBuf,
}

impl PoolBudgetPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, PoolBudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default transactions export (CSV)
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.csv")
    }

    /// Default monthly budgets file (JSON)
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PoolBudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PoolBudgetError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PoolBudgetError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| PoolBudgetError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("poolbudget"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PoolBudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("transactions.csv")
        );
        assert_eq!(paths.budgets_file(), temp_dir.path().join("budgets.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("poolbudget");
        let paths = PoolBudgetPaths::with_base_dir(base.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
