//! Monthly prayer timetables with optional Ramadan Imsak times.
//!
//! Whether a date falls in Ramadan is decided by a [`RamadanCalendar`] supplied by the
//! caller. Hijri conversion is not done here; [`RamadanRange`] covers the common case
//! of a known Gregorian start and end date.

use chrono::NaiveDate;

use crate::calculator::calculate_with_reference;
use crate::time::{CalendarDate, days_in_month};
use crate::types::{DailyTimes, GeoCoordinate, TimeReference};
use crate::{Error, Result};

/// Minutes before Fajr at which Imsak is shown.
pub const IMSAK_LEAD_MINUTES: f64 = 10.0;

/// Decides whether a Gregorian date falls within Ramadan.
pub trait RamadanCalendar {
    /// Checks whether `date` is a day of Ramadan.
    fn is_ramadan(&self, date: NaiveDate) -> bool;
}

/// Ramadan as an inclusive range of Gregorian dates.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use salat_times::calendar::{RamadanCalendar, RamadanRange};
///
/// let first = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
/// let last = NaiveDate::from_ymd_opt(2026, 3, 19).unwrap();
/// let ramadan = RamadanRange::new(first, last).unwrap();
///
/// assert!(ramadan.is_ramadan(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
/// assert!(!ramadan.is_ramadan(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamadanRange {
    first: NaiveDate,
    last: NaiveDate,
}

impl RamadanRange {
    /// Creates a range from its first and last day, both inclusive.
    ///
    /// # Errors
    /// Returns `InvalidDate` if `last` precedes `first`.
    pub fn new(first: NaiveDate, last: NaiveDate) -> Result<Self> {
        if last < first {
            return Err(Error::invalid_date("Ramadan ends before it starts"));
        }
        Ok(Self { first, last })
    }

    /// Gets the first day of the range.
    #[must_use]
    pub const fn first(&self) -> NaiveDate {
        self.first
    }

    /// Gets the last day of the range.
    #[must_use]
    pub const fn last(&self) -> NaiveDate {
        self.last
    }
}

impl RamadanCalendar for RamadanRange {
    fn is_ramadan(&self, date: NaiveDate) -> bool {
        (self.first..=self.last).contains(&date)
    }
}

/// Imsak time for a day: a fixed lead before Fajr.
#[must_use]
pub fn imsak(times: &DailyTimes) -> f64 {
    times.fajr() - IMSAK_LEAD_MINUTES
}

/// One day of a month table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthRow {
    /// The day
    pub date: NaiveDate,
    /// Calculated times for the day
    pub times: DailyTimes,
    /// Imsak, present only on Ramadan days
    pub imsak: Option<f64>,
}

/// Prayer times for every day of one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTable {
    rows: Vec<MonthRow>,
    has_ramadan_days: bool,
}

impl MonthTable {
    /// Gets the rows, one per day in date order.
    #[must_use]
    pub fn rows(&self) -> &[MonthRow] {
        &self.rows
    }

    /// Checks whether any day of the month is in Ramadan, i.e. whether an Imsak column is needed.
    #[must_use]
    pub const fn has_ramadan_days(&self) -> bool {
        self.has_ramadan_days
    }
}

/// Calculates prayer times for every day of a month.
///
/// # Arguments
/// * `year` - Gregorian year
/// * `month` - Month (1-12)
/// * `location` - Observer location
/// * `reference` - Meridian the times are expressed in
/// * `ramadan` - Optional Ramadan calendar; without one no row carries an Imsak time
///
/// # Errors
/// Returns `InvalidDate` if the month is out of range or the year is beyond chrono's range.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use salat_times::calendar::{month_table, RamadanRange};
/// use salat_times::{GeoCoordinate, TimeReference};
///
/// let tunis = GeoCoordinate::new(36.8, 10.18).unwrap();
/// let ramadan = RamadanRange::new(
///     NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 19).unwrap(),
/// )
/// .unwrap();
///
/// let table = month_table(2026, 2, tunis, TimeReference::Standard, Some(&ramadan)).unwrap();
/// assert_eq!(table.rows().len(), 28);
/// assert!(table.has_ramadan_days());
/// assert!(table.rows()[0].imsak.is_none());
/// assert!(table.rows()[17].imsak.is_some());
/// ```
pub fn month_table(
    year: i32,
    month: u32,
    location: GeoCoordinate,
    reference: TimeReference,
    ramadan: Option<&dyn RamadanCalendar>,
) -> Result<MonthTable> {
    let days = days_in_month(year, month);
    if days == 0 {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }

    let mut rows = Vec::with_capacity(days as usize);
    let mut has_ramadan_days = false;
    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(Error::invalid_date("year is outside the range supported by chrono"))?;
        let times = calculate_with_reference(
            CalendarDate::from(date),
            location.latitude(),
            location.longitude(),
            reference,
        );
        let in_ramadan = ramadan.is_some_and(|calendar| calendar.is_ramadan(date));
        has_ramadan_days |= in_ramadan;
        rows.push(MonthRow {
            date,
            times,
            imsak: in_ramadan.then(|| imsak(&times)),
        });
    }

    tracing::debug!(
        year,
        month,
        days = rows.len(),
        has_ramadan_days,
        "built month table"
    );

    Ok(MonthTable {
        rows,
        has_ramadan_days,
    })
}
