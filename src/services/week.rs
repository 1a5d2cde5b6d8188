//! Week partitioner
//!
//! Splits a calendar month into Monday-aligned weeks. Week 1 always starts on
//! the 1st; when the 1st is not a Monday it is a short leading week that ends
//! on the Sunday before the first Monday. Every later week starts on a Monday
//! and the final one is truncated to the month's last day, so the weeks of a
//! month cover each of its days exactly once.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::models::{Month, WeekInfo};

/// Days from the 1st to the first Monday on or after it (0 when the 1st is a Monday)
fn monday_offset(month: &Month) -> u32 {
    (7 - month.first_day().weekday().num_days_from_monday()) % 7
}

/// Number of weeks in a resolved month (4 to 6)
pub fn weeks_for_month(month: &Month) -> u32 {
    let days = month.days();
    let offset = monday_offset(month);

    if offset == 0 {
        days.div_ceil(7)
    } else {
        1 + (days - offset).div_ceil(7)
    }
}

/// Date range of a week in a resolved month
///
/// Week numbers of 0 or past `weeks_for_month` give an empty range placed
/// just after the month.
pub fn week_in_month(month: &Month, week_number: u32) -> WeekInfo {
    let first = month.first_day();
    let last = month.last_day();

    if week_number == 0 || week_number > weeks_for_month(month) {
        return WeekInfo::empty_after(week_number, month.name(), month.year(), last);
    }

    let offset = monday_offset(month) as i64;
    let (start, length) = if offset == 0 {
        (first + Duration::days(7 * (week_number as i64 - 1)), 7)
    } else if week_number == 1 {
        (first, offset)
    } else {
        let anchor = first + Duration::days(offset);
        (anchor + Duration::days(7 * (week_number as i64 - 2)), 7)
    };
    // Clamp before adding so the month at the end of chrono's range cannot overflow
    let days_left = (last - start).num_days();
    let end = start + Duration::days((length - 1).min(days_left));

    WeekInfo::new(week_number, month.name(), month.year(), start, end)
}

/// All weeks of a resolved month, in order
pub fn weeks_of(month: &Month) -> Vec<WeekInfo> {
    (1..=weeks_for_month(month))
        .map(|n| week_in_month(month, n))
        .collect()
}

/// Week number (within its own month) of the week containing `date`
pub fn week_number_of(date: NaiveDate) -> u32 {
    let month = Month::containing(date);
    let offset = monday_offset(&month);
    let day_index = date.day() - 1;

    if offset == 0 {
        day_index / 7 + 1
    } else if day_index < offset {
        1
    } else {
        (day_index - offset) / 7 + 2
    }
}

/// Resolves month names to week ranges
///
/// Month names that cannot be resolved fall back to the current real-world
/// week according to the clock. The fallback is logged, never an error.
pub struct WeekPartitioner<C = SystemClock> {
    clock: C,
}

impl WeekPartitioner<SystemClock> {
    /// Create a partitioner using the system clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for WeekPartitioner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> WeekPartitioner<C> {
    /// Create a partitioner with a custom clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Today's date according to the partitioner's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Resolve a month name, or None if it is not a known month
    pub fn resolve(&self, month_name: &str, year: i32) -> Option<Month> {
        Month::from_name(month_name, year)
    }

    /// The current month according to the clock
    pub fn current_month(&self) -> Month {
        Month::containing(self.clock.today())
    }

    /// Number of weeks in the named month
    ///
    /// Falls back to the current month when the name is not recognised.
    pub fn weeks_in_month(&self, month_name: &str, year: i32) -> u32 {
        let month = self.month_or_current(month_name, year);
        weeks_for_month(&month)
    }

    /// Date range of a week in the named month
    ///
    /// When the month name is not recognised this returns the week that
    /// contains today, whatever `week_number` was requested.
    pub fn week_info(&self, month_name: &str, year: i32, week_number: u32) -> WeekInfo {
        match self.resolve(month_name, year) {
            Some(month) => week_in_month(&month, week_number),
            None => self.current_week(month_name),
        }
    }

    /// All weeks of the named month, in order
    pub fn all_weeks(&self, month_name: &str, year: i32) -> Vec<WeekInfo> {
        let month = self.month_or_current(month_name, year);
        weeks_of(&month)
    }

    /// Week number of the week containing `date`
    pub fn week_number_for(&self, date: NaiveDate) -> u32 {
        week_number_of(date)
    }

    /// Resolve a month name, falling back to the current month
    pub fn month_or_current(&self, month_name: &str, year: i32) -> Month {
        self.resolve(month_name, year).unwrap_or_else(|| {
            let current = self.current_month();
            warn!(month = month_name, fallback = %current, "unrecognised month name, using current month");
            current
        })
    }

    fn current_week(&self, month_name: &str) -> WeekInfo {
        let today = self.clock.today();
        let month = Month::containing(today);
        let week_number = week_number_of(today);
        warn!(month = month_name, %today, week_number, "unrecognised month name, using current week");
        let week = week_in_month(&month, week_number);
        debug!(start = %week.start_date, end = %week.end_date, "fallback week");
        week
    }
}
