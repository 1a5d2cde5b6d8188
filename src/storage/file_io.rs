//! File reading helpers

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::PoolBudgetError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, PoolBudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_json_required(path)
}

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, PoolBudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(PoolBudgetError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        PoolBudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        PoolBudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let values: Vec<u32> = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_read_required_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<Vec<u32>, _> = read_json_required(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(PoolBudgetError::Storage(_))));
    }

    #[test]
    fn test_read_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("values.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let values: Vec<u32> = read_json(&path).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "[1, 2,").unwrap();

        let result: Result<Vec<u32>, _> = read_json(&path);
        assert!(result.is_err());
    }
}
