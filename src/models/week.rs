//! Week-of-month representation
//!
//! A `WeekInfo` is a computed value: the partitioner recreates it on every
//! query and it carries no identity beyond its fields.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One week of a month, as an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInfo {
    /// 1-based week number within the month
    pub week_number: u32,

    /// Month name as resolved by the partitioner (e.g. "March")
    pub month: String,

    pub year: i32,

    /// First day of the week (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the week (inclusive), clamped to the month's last day
    pub end_date: NaiveDate,
}

impl WeekInfo {
    /// Create a week covering `start_date..=end_date`
    pub fn new(
        week_number: u32,
        month: impl Into<String>,
        year: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            week_number,
            month: month.into(),
            year,
            start_date,
            end_date,
        }
    }

    /// Zero-length week placed just after `last_day`
    ///
    /// Used for week numbers outside the month; it contains no dates.
    pub fn empty_after(
        week_number: u32,
        month: impl Into<String>,
        year: i32,
        last_day: NaiveDate,
    ) -> Self {
        Self::new(
            week_number,
            month,
            year,
            last_day.succ_opt().unwrap_or(last_day),
            last_day,
        )
    }

    /// Number of calendar days in the week (0 for an empty range)
    pub fn days(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as u32
        }
    }

    /// True when the range covers no days
    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Check if a date falls within this week
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Start of the week at 00:00:00
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start_date.and_time(NaiveTime::MIN)
    }

    /// End of the week at 23:59:59.999
    pub fn end_datetime(&self) -> NaiveDateTime {
        self.end_date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1)
    }
}

impl fmt::Display for WeekInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Week {} of {} {} (empty)", self.week_number, self.month, self.year);
        }
        write!(
            f,
            "Week {} of {} {}: {} - {}",
            self.week_number,
            self.month,
            self.year,
            self.start_date.format("%a %d %b"),
            self.end_date.format("%a %d %b")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_and_contains() {
        let week = WeekInfo::new(2, "March", 2025, date(2025, 3, 3), date(2025, 3, 9));
        assert_eq!(week.days(), 7);
        assert!(week.contains(date(2025, 3, 3)));
        assert!(week.contains(date(2025, 3, 9)));
        assert!(!week.contains(date(2025, 3, 10)));
    }

    #[test]
    fn test_empty_week() {
        let week = WeekInfo::empty_after(9, "March", 2025, date(2025, 3, 31));
        assert!(week.is_empty());
        assert_eq!(week.days(), 0);
        assert!(!week.contains(date(2025, 3, 31)));
        assert!(!week.contains(date(2025, 4, 1)));
    }

    #[test]
    fn test_datetime_bounds() {
        let week = WeekInfo::new(1, "March", 2025, date(2025, 3, 1), date(2025, 3, 2));
        assert_eq!(week.start_datetime().to_string(), "2025-03-01 00:00:00");
        assert_eq!(week.end_datetime().to_string(), "2025-03-02 23:59:59.999");
    }

    #[test]
    fn test_serialization() {
        let week = WeekInfo::new(1, "March", 2025, date(2025, 3, 1), date(2025, 3, 2));
        let json = serde_json::to_string(&week).unwrap();
        let back: WeekInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(week, back);
    }
}
