//! Calendar-date handling for the prayer-time model.
//!
//! The model only needs the ordinal day of the year, so dates are plain
//! proleptic Gregorian `(year, month, day)` triples with no time-of-day part.

#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::{Error, Result};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Cumulative day counts at the start of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date without time of day, in the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use salat_times::time::CalendarDate;
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// assert_eq!(date.ordinal(), 173);
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalendarDate"))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from year, month (1-12) and day of month.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the 1-based day of the year (January 1st = 1, December 31st = 365 or 366).
    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        let leap_day = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + self.day + leap_day
    }
}

/// Unvalidated wire form of [`CalendarDate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = Error;

    fn try_from(raw: RawCalendarDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CalendarDate> for NaiveDate {
    type Error = Error;

    fn try_from(date: CalendarDate) -> Result<Self> {
        Self::from_ymd_opt(date.year, date.month, date.day)
            .ok_or(Error::invalid_date("year is outside the range supported by chrono"))
    }
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` (1-12) of `year`, or 0 for an invalid month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Minutes elapsed since midnight for a wall-clock time, including fractional seconds.
///
/// # Example
/// ```
/// # use salat_times::time::minutes_of_day;
/// use chrono::NaiveTime;
///
/// let time = NaiveTime::from_hms_opt(4, 55, 30).unwrap();
/// assert_eq!(minutes_of_day(time), 295.5);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn minutes_of_day(time: NaiveTime) -> f64 {
    f64::from(time.hour()) * 60.0
        + f64::from(time.minute())
        + (f64::from(time.second()) + f64::from(time.nanosecond()) / 1e9) / 60.0
}
