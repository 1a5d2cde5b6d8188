//! Week spending aggregation

use tracing::debug;

use crate::models::{Transaction, WeekInfo};

/// Total spending for a category within a week
///
/// Counts `Spending` records whose category matches `category_key`
/// case-insensitively and whose date falls inside the week (both ends
/// inclusive). Each match contributes the absolute value of its amount, so the
/// result is never negative. Records with unreadable dates are skipped.
pub fn week_spending(transactions: &[Transaction], category_key: &str, week: &WeekInfo) -> f64 {
    if week.is_empty() {
        return 0.0;
    }

    transactions
        .iter()
        .filter(|txn| txn.is_spending() && txn.matches_category(category_key))
        .filter_map(|txn| match txn.parsed_date() {
            Some(date) => Some((date, txn)),
            None => {
                debug!(date = %txn.date, category = %txn.category_or_account, "skipping transaction with unreadable date");
                None
            }
        })
        .filter(|(date, _)| week.contains(*date))
        .map(|(_, txn)| txn.amount.abs())
        .filter(|amount| amount.is_finite())
        .fold(0.0, |total, amount| total + amount)
}
