//! User settings for poolbudget
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a missing or partial file still loads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PoolBudgetPaths;
use crate::error::PoolBudgetError;

/// User settings for poolbudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Transactions CSV to read instead of the one in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions_file: Option<PathBuf>,

    /// Budgets JSON to read instead of the one in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budgets_file: Option<PathBuf>,

    /// Year used when none is given on the command line (defaults to today's)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_year: Option<i32>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            transactions_file: None,
            budgets_file: None,
            default_year: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PoolBudgetPaths) -> Result<Self, PoolBudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PoolBudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PoolBudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PoolBudgetPaths) -> Result<(), PoolBudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PoolBudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PoolBudgetError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Transactions file: the configured override or the default location
    pub fn transactions_path(&self, paths: &PoolBudgetPaths) -> PathBuf {
        self.transactions_file
            .clone()
            .unwrap_or_else(|| paths.transactions_file())
    }

    /// Budgets file: the configured override or the default location
    pub fn budgets_path(&self, paths: &PoolBudgetPaths) -> PathBuf {
        self.budgets_file
            .clone()
            .unwrap_or_else(|| paths.budgets_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.transactions_file.is_none());
        assert!(settings.default_year.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PoolBudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(
            settings.transactions_path(&paths),
            temp_dir.path().join("transactions.csv")
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PoolBudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "Rp".into(),
            budgets_file: Some(PathBuf::from("/srv/budgets.json")),
            default_year: Some(2024),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "Rp");
        assert_eq!(loaded.default_year, Some(2024));
        assert_eq!(
            loaded.budgets_path(&paths),
            PathBuf::from("/srv/budgets.json")
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PoolBudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_year": 2023}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_year, Some(2023));
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PoolBudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PoolBudgetError::Config(_)));
    }
}
