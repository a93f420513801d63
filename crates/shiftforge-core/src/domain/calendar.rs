//! Holiday predicates.

use std::collections::HashSet;
use std::fmt::Debug;

use chrono::{Datelike, NaiveDate, Weekday};

/// Decides which dates earn the holiday wage rate.
pub trait HolidayCalendar: Send + Sync + Debug {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Sunday, and only Sunday, is a holiday.
#[derive(Debug, Clone, Copy, Default)]
pub struct SundayHolidays;

impl HolidayCalendar for SundayHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        date.weekday() == Weekday::Sun
    }
}

/// Sundays plus an explicit set of extra holiday dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftforge_core::{HolidayCalendar, HolidayList};
///
/// let wednesday = NaiveDate::from_ymd_opt(2025, 5, 28).unwrap();
/// let calendar = HolidayList::new([wednesday]);
///
/// assert!(calendar.is_holiday(wednesday));
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 29).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidayList {
    extra: HashSet<NaiveDate>,
}

impl HolidayList {
    pub fn new(extra: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            extra: extra.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for HolidayList {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        SundayHolidays.is_holiday(date) || self.extra.contains(&date)
    }
}
