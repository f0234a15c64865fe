//! Wall-clock formatting for minute-of-day values.
//!
//! Formatting is allocation-free: the functions return small values implementing
//! [`Display`](core::fmt::Display), so they work without `std` and still give
//! `to_string()` when it is available.

#![allow(clippy::cast_sign_loss)]

use core::fmt;
use core::str::FromStr;

use crate::math::{floor, round};
use crate::{Error, Result};

const SECONDS_PER_DAY: u64 = 86_400;

/// Placeholder rendered for a time that cannot be shown.
pub const CLOCK_PLACEHOLDER: &str = "--:--";

/// Placeholder rendered for a countdown that cannot be shown.
pub const COUNTDOWN_PLACEHOLDER: &str = "--:--:--";

/// A time of day with one-second resolution.
///
/// # Example
/// ```
/// # use salat_times::clock::ClockTime;
/// let time = ClockTime::from_minutes(747.924).unwrap();
/// assert_eq!(time.to_string(), "12:27:55");
///
/// let parsed: ClockTime = "12:27:55".parse().unwrap();
/// assert_eq!(parsed, time);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    /// Creates a clock time from its components.
    ///
    /// # Errors
    /// Returns `InvalidClock` if any component is out of range.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        if hours > 23 {
            return Err(Error::invalid_clock("hour must be between 0 and 23"));
        }
        if minutes > 59 {
            return Err(Error::invalid_clock("minute must be between 0 and 59"));
        }
        if seconds > 59 {
            return Err(Error::invalid_clock("second must be between 0 and 59"));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Converts minutes since midnight to the nearest second, wrapping into one day.
    ///
    /// Returns `None` for negative or non-finite input.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Option<Self> {
        if !minutes.is_finite() || minutes < 0.0 {
            return None;
        }
        let total = round(minutes * 60.0) as u64 % SECONDS_PER_DAY;
        Some(Self {
            hours: (total / 3600) as u8,
            minutes: (total % 3600 / 60) as u8,
            seconds: (total % 60) as u8,
        })
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Gets the second (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Minutes since midnight represented by this clock time.
    #[must_use]
    pub fn minutes_of_day(&self) -> f64 {
        f64::from(self.hours) * 60.0 + f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(':');
        let mut next = || -> Result<u8> {
            parts
                .next()
                .ok_or(Error::invalid_clock("expected HH:MM:SS"))?
                .parse::<u8>()
                .map_err(|_| Error::invalid_clock("component is not a number"))
        };
        let (hours, minutes, seconds) = (next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(Error::invalid_clock("expected HH:MM:SS"));
        }
        Self::new(hours, minutes, seconds)
    }
}

/// A formatted clock value, or the placeholder when the time is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDisplay(Option<ClockTime>);

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(time) => fmt::Display::fmt(time, f),
            None => f.write_str(CLOCK_PLACEHOLDER),
        }
    }
}

/// Formats minutes since midnight as a wrapped 24-hour `HH:MM:SS` clock.
///
/// Values of 1440 or more wrap into the following day's clock. Negative and
/// non-finite values render as `--:--`.
///
/// # Example
/// ```
/// # use salat_times::clock::format_clock;
/// assert_eq!(format_clock(300.5).to_string(), "05:00:30");
/// assert_eq!(format_clock(1450.0).to_string(), "00:10:00");
/// assert_eq!(format_clock(f64::NAN).to_string(), "--:--");
/// ```
#[must_use]
pub fn format_clock(minutes: f64) -> ClockDisplay {
    ClockDisplay(ClockTime::from_minutes(minutes))
}

/// A formatted countdown, or the placeholder when the duration is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownDisplay(Option<u64>);

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(total) => write!(
                f,
                "{:02}:{:02}:{:02}",
                total / 3600,
                total % 3600 / 60,
                total % 60
            ),
            None => f.write_str(COUNTDOWN_PLACEHOLDER),
        }
    }
}

/// Formats a remaining duration in minutes as `HH:MM:SS`, truncating partial seconds.
///
/// Hours are not wrapped, so a countdown across midnight can exceed 24. Negative
/// and non-finite values render as `--:--:--`.
///
/// # Example
/// ```
/// # use salat_times::clock::format_countdown;
/// assert_eq!(format_countdown(65.999).to_string(), "01:05:59");
/// assert_eq!(format_countdown(-1.0).to_string(), "--:--:--");
/// ```
#[must_use]
pub fn format_countdown(minutes: f64) -> CountdownDisplay {
    if !minutes.is_finite() || minutes < 0.0 {
        return CountdownDisplay(None);
    }
    CountdownDisplay(Some(floor(minutes * 60.0) as u64))
}
