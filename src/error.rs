//! Error types for the prayer-time library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when building inputs or driving the tracker.
///
/// The calculator itself never fails; these errors come from validated
/// constructors and from the tick-driven [`Tracker`](crate::tracker::Tracker).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Minute-of-day fed to the tracker is not a finite number.
    InvalidMinuteOfDay {
        /// The invalid minute value provided.
        value: f64,
    },
    /// Manual prayer adjustment is not a finite number of minutes.
    InvalidAdjustment {
        /// The invalid adjustment value provided.
        value: f64,
    },
    /// Clock string could not be parsed as `HH:MM:SS`.
    InvalidClock {
        /// Description of the parse failure.
        message: &'static str,
    },
    /// The tracker was advanced before any day's times were loaded.
    NoReferenceTimes,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidMinuteOfDay { value } => {
                write!(f, "invalid minute of day {value} (must be finite)")
            }
            Self::InvalidAdjustment { value } => {
                write!(f, "invalid adjustment {value} min (must be finite)")
            }
            Self::InvalidClock { message } => write!(f, "invalid clock string: {message}"),
            Self::NoReferenceTimes => write!(f, "no reference times loaded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid minute-of-day error.
    #[must_use]
    pub const fn invalid_minute_of_day(value: f64) -> Self {
        Self::InvalidMinuteOfDay { value }
    }

    /// Creates an invalid adjustment error.
    #[must_use]
    pub const fn invalid_adjustment(value: f64) -> Self {
        Self::InvalidAdjustment { value }
    }

    /// Creates an invalid clock string error.
    #[must_use]
    pub const fn invalid_clock(message: &'static str) -> Self {
        Self::InvalidClock { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a minute-of-day value is finite.
///
/// Values outside `[0, 1440)` are accepted; only `NaN` and infinities are rejected.
///
/// # Errors
/// Returns `InvalidMinuteOfDay` if the value is not finite.
pub fn check_minute_of_day(minutes: f64) -> Result<()> {
    if !minutes.is_finite() {
        return Err(Error::invalid_minute_of_day(minutes));
    }
    Ok(())
}

/// Validates a manual adjustment is a finite number of minutes.
///
/// # Errors
/// Returns `InvalidAdjustment` if the value is not finite.
pub fn check_adjustment(minutes: f64) -> Result<()> {
    if !minutes.is_finite() {
        return Err(Error::invalid_adjustment(minutes));
    }
    Ok(())
}
