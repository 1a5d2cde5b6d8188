//! Calendar month representation
//!
//! Resolves English month names and provides the day boundaries the week
//! partitioner works from.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month in a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    /// Month index, 1-12
    month: u32,
}

impl Month {
    /// Create a month, returning None for an index outside 1-12
    ///
    /// The whole month must be representable, so the last month chrono can
    /// express without its successor is rejected too.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return None;
        }
        let month = Self { year, month };
        month.next_first_day().map(|_| month)
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month index, 1-12
    pub fn number(&self) -> u32 {
        self.month
    }

    /// Resolve a month from its name ("March", "mar", "Sept") and a year
    pub fn from_name(name: &str, year: i32) -> Option<Self> {
        Self::parse_name(name).and_then(|month| Self::new(year, month))
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a month name into its 1-based index
    ///
    /// Accepts full English names and three-letter abbreviations (plus
    /// "sept"), case-insensitively.
    pub fn parse_name(name: &str) -> Option<u32> {
        let name = name.trim().to_lowercase();
        if name.len() < 3 {
            return None;
        }

        if name == "sept" {
            return Some(9);
        }

        MONTH_NAMES
            .iter()
            .position(|full| {
                let full = full.to_lowercase();
                full == name || (name.len() == 3 && full.starts_with(&name))
            })
            .map(|idx| idx as u32 + 1)
    }

    /// English name of this month
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.next_first_day()
            .map(|d| d - Duration::days(1))
            .unwrap_or(NaiveDate::MAX)
    }

    fn next_first_day(&self) -> Option<NaiveDate> {
        if self.month == 12 {
            self.year
                .checked_add(1)
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
    }

    /// Number of days in the month
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names() {
        assert_eq!(Month::parse_name("January"), Some(1));
        assert_eq!(Month::parse_name("december"), Some(12));
        assert_eq!(Month::parse_name("  MAY "), Some(5));
    }

    #[test]
    fn test_parse_abbreviations() {
        assert_eq!(Month::parse_name("Feb"), Some(2));
        assert_eq!(Month::parse_name("sep"), Some(9));
        assert_eq!(Month::parse_name("Sept"), Some(9));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Month::parse_name(""), None);
        assert_eq!(Month::parse_name("ma"), None);
        assert_eq!(Month::parse_name("Smarch"), None);
        assert_eq!(Month::parse_name("Janu"), None);
    }

    #[test]
    fn test_day_counts() {
        assert_eq!(Month::new(2025, 1).unwrap().days(), 31);
        assert_eq!(Month::new(2025, 4).unwrap().days(), 30);
        assert_eq!(Month::new(2023, 2).unwrap().days(), 28);
        assert_eq!(Month::new(2024, 2).unwrap().days(), 29);
        assert_eq!(
            Month::new(2024, 12).unwrap().last_day(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_new_rejects_bad_index() {
        assert!(Month::new(2025, 0).is_none());
        assert!(Month::new(2025, 13).is_none());
    }

    #[test]
    fn test_new_rejects_month_without_successor() {
        let max = NaiveDate::MAX;
        assert!(Month::new(max.year(), max.month()).is_none());
        assert!(Month::new(max.year(), 1).is_some());
        assert!(Month::new(i32::MAX, 1).is_none());
    }

    #[test]
    fn test_accessors() {
        let month = Month::new(2025, 3).unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.number(), 3);
        assert_eq!(Month::containing(month.last_day()), month);
    }

    #[test]
    fn test_display() {
        let month = Month::from_name("mar", 2025).unwrap();
        assert_eq!(month.to_string(), "March 2025");
    }
}
