//! Transactions CSV loader
//!
//! Expects a headed CSV with `date,type,category,amount` columns, one row
//! per already-resolved transaction.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{PoolBudgetError, PoolBudgetResult};
use crate::models::Transaction;

/// Load transactions from a CSV file
pub fn load_csv<P: AsRef<Path>>(path: P) -> PoolBudgetResult<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        PoolBudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let transactions = from_reader(file)?;
    debug!(path = %path.display(), count = transactions.len(), "loaded transactions");
    Ok(transactions)
}

/// Parse transactions from any CSV reader
pub fn from_reader<R: Read>(reader: R) -> PoolBudgetResult<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (idx, record) in csv_reader.deserialize::<Transaction>().enumerate() {
        let txn = record
            .map_err(|e| PoolBudgetError::Csv(format!("Row {}: {}", idx + 1, e)))?;
        transactions.push(txn);
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
date,type,category,amount
3/3/2025,Spending,Groceries,-42.10
\"4/3/2025, 18:30:00\",Spending,Dining,-18
2025-03-05,Earning,Checking,1500
";

    #[test]
    fn test_parse_sample() {
        let txns = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].category_or_account, "Groceries");
        assert_eq!(txns[0].amount, -42.10);
        assert_eq!(txns[1].date, "4/3/2025, 18:30:00");
        assert_eq!(txns[2].transaction_type, TransactionType::Earning);
    }

    #[test]
    fn test_unknown_type_reports_row() {
        let data = "date,type,category,amount\n3/3/2025,Refund,Groceries,5\n";
        let err = from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PoolBudgetError::Csv(ref msg) if msg.starts_with("Row 1")));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        assert_eq!(load_csv(&path).unwrap().len(), 3);
        assert!(load_csv(temp_dir.path().join("missing.csv")).is_err());
    }
}
