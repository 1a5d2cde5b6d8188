//! Transaction model
//!
//! Transactions arrive already resolved by the external transaction store:
//! a type discriminator, a category/account label, a date string and a signed
//! cash amount. Nothing here mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a transaction record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money leaving a budget category
    Spending,
    /// Income
    Earning,
    /// Movement between accounts
    Transfer,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spending => write!(f, "Spending"),
            Self::Earning => write!(f, "Earning"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A dated, categorized transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date as exported: "D/M/YYYY" (optionally with a time) or ISO "YYYY-MM-DD"
    pub date: String,

    #[serde(rename = "type", alias = "transactionType")]
    pub transaction_type: TransactionType,

    /// Category for spending, account for transfers and earnings
    #[serde(rename = "category", alias = "categoryOrAccount")]
    pub category_or_account: String,

    /// Signed cash value (spending is usually negative)
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: impl Into<String>,
        transaction_type: TransactionType,
        category_or_account: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            transaction_type,
            category_or_account: category_or_account.into(),
            amount,
        }
    }

    /// Shorthand for a spending record
    pub fn spending(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self::new(date, TransactionType::Spending, category, amount)
    }

    /// Check if this is a spending record
    pub fn is_spending(&self) -> bool {
        self.transaction_type == TransactionType::Spending
    }

    /// Case-insensitive match against a category key
    pub fn matches_category(&self, category_key: &str) -> bool {
        self.category_or_account.trim().to_lowercase() == category_key.trim().to_lowercase()
    }

    /// Parse the date string, or None if it is not in a supported format
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_transaction_date(&self.date)
    }
}

/// Parse a transaction date
///
/// Slash-delimited dates are always read as day/month/year, never month first.
/// ISO dates (`2025-03-14`, `2025-03-14T09:00:00Z`) are accepted as well.
/// Anything after the date part (a time, separated by a space, comma or `T`)
/// is ignored.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw
        .trim()
        .split(|c: char| c.is_whitespace() || c == ',' || c == 'T')
        .next()?;

    if date_part.contains('/') {
        let mut parts = date_part.split('/');
        let day: u32 = parts.next()?.trim().parse().ok()?;
        let month: u32 = parts.next()?.trim().parse().ok()?;
        let year_str = parts.next()?.trim();
        if parts.next().is_some() || year_str.len() != 4 {
            return None;
        }
        let year: i32 = year_str.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
