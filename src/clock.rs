//! Time source abstraction
//!
//! The partitioner falls back to "the current week" when a month name cannot
//! be resolved, so "today" is injected rather than read directly.

use chrono::{Local, NaiveDate};

/// Source of the current local date
pub trait Clock {
    /// Returns today's local date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
