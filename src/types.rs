//! Core data types for prayer-time calculations.

use core::fmt;

use crate::error::{check_adjustment, check_coordinates};
use crate::Result;

/// A geographic coordinate in degrees.
///
/// # Example
/// ```
/// # use salat_times::types::GeoCoordinate;
/// let tunis = GeoCoordinate::new(36.8, 10.18).unwrap();
/// assert_eq!(tunis.latitude(), 36.8);
/// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoCoordinate"))]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive (-90 to +90)
    latitude: f64,
    /// Longitude in degrees, east positive (-180 to +180)
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate after validating both components.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Unvalidated wire form of [`GeoCoordinate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoCoordinate> for GeoCoordinate {
    type Error = crate::Error;

    fn try_from(raw: RawGeoCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// The five daily prayers in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrayerKey {
    /// Dawn prayer, sun 18° below the horizon before sunrise
    Fajr,
    /// Midday prayer, after solar noon
    Dhuhr,
    /// Afternoon prayer, single shadow length
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer, sun 18° below the horizon after sunset
    Isha,
}

impl PrayerKey {
    /// All prayers in chronological order.
    pub const ALL: [Self; 5] = [
        Self::Fajr,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Position of this prayer in [`PrayerKey::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The following prayer, wrapping from Isha to the next day's Fajr.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 5]
    }

    /// The preceding prayer, wrapping from Fajr to the previous day's Isha.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + 4) % 5]
    }

    /// Lowercase identifier, suitable as a lookup key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }
}

impl fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Fixed minute offsets added to the raw astronomical times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionalOffsets {
    /// Added to the -18° morning twilight time
    pub fajr: f64,
    /// Added to sunrise
    pub sunrise: f64,
    /// Added to solar noon
    pub dhuhr: f64,
    /// Added to the Asr time
    pub asr: f64,
    /// Added to sunset
    pub maghrib: f64,
    /// Added to the -18° evening twilight time
    pub isha: f64,
}

/// The regional offsets applied by the calculator: Dhuhr 7 minutes after solar noon,
/// Maghrib 2 minutes after sunset.
pub const REGIONAL_OFFSETS: RegionalOffsets = RegionalOffsets {
    fajr: 0.0,
    sunrise: 0.0,
    dhuhr: 7.0,
    asr: 0.0,
    maghrib: 2.0,
    isha: 0.0,
};

/// Caller-side manual adjustments in minutes, one per prayer.
///
/// These sit on top of the calculator output (see [`DailyTimes::adjusted`]);
/// the calculator never applies them itself.
///
/// # Example
/// ```
/// # use salat_times::types::{PrayerAdjustments, PrayerKey};
/// let adjustments = PrayerAdjustments::none()
///     .with(PrayerKey::Isha, 3.0)
///     .unwrap();
/// assert_eq!(adjustments.get(PrayerKey::Isha), 3.0);
/// assert_eq!(adjustments.get(PrayerKey::Fajr), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerAdjustments {
    minutes: [f64; 5],
}

impl PrayerAdjustments {
    /// No adjustment for any prayer.
    #[must_use]
    pub const fn none() -> Self {
        Self { minutes: [0.0; 5] }
    }

    /// Returns a copy with the adjustment for `key` set to `minutes`.
    ///
    /// # Errors
    /// Returns `InvalidAdjustment` if `minutes` is not finite.
    pub fn with(mut self, key: PrayerKey, minutes: f64) -> Result<Self> {
        check_adjustment(minutes)?;
        self.minutes[key.index()] = minutes;
        Ok(self)
    }

    /// Gets the adjustment in minutes for `key`.
    #[must_use]
    pub const fn get(&self, key: PrayerKey) -> f64 {
        self.minutes[key.index()]
    }

    /// Checks whether every adjustment is zero.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.minutes.iter().all(|&m| m == 0.0)
    }
}

/// Reference meridian used to turn local solar time into displayed clock time.
///
/// The solar-noon formula is `720 − eot + 4·(meridian − longitude)` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeReference {
    /// The fixed 15°E meridian (UTC+1), matching the established regional tables.
    #[default]
    Standard,
    /// A civil zone given as the minutes to add to UTC (e.g. `60.0` for UTC+1).
    UtcOffset {
        /// Minutes east of UTC
        minutes: f64,
    },
    /// Local mean solar time at the observer's own longitude.
    LocalMean,
}

impl TimeReference {
    /// Meridian of the standard reference, in degrees east.
    pub const STANDARD_MERIDIAN: f64 = 15.0;

    /// Gets the reference meridian in degrees east for an observer at `longitude`.
    #[must_use]
    pub fn meridian(&self, longitude: f64) -> f64 {
        match self {
            Self::Standard => Self::STANDARD_MERIDIAN,
            Self::UtcOffset { minutes } => minutes / 4.0,
            Self::LocalMean => longitude,
        }
    }
}

/// Prayer times and solar data for one day, in minutes since local midnight.
///
/// Values may fall below 0 or above 1440 at high latitudes; formatting wraps them.
/// A fresh value is produced by every calculation and is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTimes {
    fajr: f64,
    sunrise: f64,
    dhuhr: f64,
    asr: f64,
    maghrib: f64,
    sunset: f64,
    isha: f64,
    noon_raw: f64,
    equation_of_time: f64,
    declination: f64,
    day_length_minutes: f64,
}

impl DailyTimes {
    /// Builds daily times from raw astronomical values and applies `offsets`.
    ///
    /// Day length is taken from the offset-free sunrise and sunset.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_raw(
        fajr: f64,
        sunrise: f64,
        noon: f64,
        asr: f64,
        sunset: f64,
        isha: f64,
        equation_of_time: f64,
        declination: f64,
        offsets: &RegionalOffsets,
    ) -> Self {
        Self {
            fajr: fajr + offsets.fajr,
            sunrise: sunrise + offsets.sunrise,
            dhuhr: noon + offsets.dhuhr,
            asr: asr + offsets.asr,
            maghrib: sunset + offsets.maghrib,
            sunset,
            isha: isha + offsets.isha,
            noon_raw: noon,
            equation_of_time,
            declination,
            day_length_minutes: sunset - sunrise,
        }
    }

    /// Gets the Fajr time.
    #[must_use]
    pub const fn fajr(&self) -> f64 {
        self.fajr
    }

    /// Gets the sunrise time.
    #[must_use]
    pub const fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Gets the Dhuhr time (solar noon plus the regional offset).
    #[must_use]
    pub const fn dhuhr(&self) -> f64 {
        self.dhuhr
    }

    /// Gets the Asr time.
    #[must_use]
    pub const fn asr(&self) -> f64 {
        self.asr
    }

    /// Gets the Maghrib time (sunset plus the regional offset).
    #[must_use]
    pub const fn maghrib(&self) -> f64 {
        self.maghrib
    }

    /// Gets the sunset time, without any offset.
    #[must_use]
    pub const fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Gets the Isha time.
    #[must_use]
    pub const fn isha(&self) -> f64 {
        self.isha
    }

    /// Gets the true solar noon, without any offset.
    #[must_use]
    pub const fn noon_raw(&self) -> f64 {
        self.noon_raw
    }

    /// Gets the equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the day length in minutes (`sunset − sunrise`).
    #[must_use]
    pub const fn day_length_minutes(&self) -> f64 {
        self.day_length_minutes
    }

    /// Gets the time of a single prayer.
    #[must_use]
    pub const fn time_of(&self, key: PrayerKey) -> f64 {
        match key {
            PrayerKey::Fajr => self.fajr,
            PrayerKey::Dhuhr => self.dhuhr,
            PrayerKey::Asr => self.asr,
            PrayerKey::Maghrib => self.maghrib,
            PrayerKey::Isha => self.isha,
        }
    }

    /// Gets the five prayers paired with their times, in chronological order.
    #[must_use]
    pub const fn prayers(&self) -> [(PrayerKey, f64); 5] {
        [
            (PrayerKey::Fajr, self.fajr),
            (PrayerKey::Dhuhr, self.dhuhr),
            (PrayerKey::Asr, self.asr),
            (PrayerKey::Maghrib, self.maghrib),
            (PrayerKey::Isha, self.isha),
        ]
    }

    /// Returns a copy with caller-side manual adjustments added to each prayer.
    ///
    /// Sunrise, sunset, solar noon and day length are left untouched.
    #[must_use]
    pub fn adjusted(&self, adjustments: &PrayerAdjustments) -> Self {
        Self {
            fajr: self.fajr + adjustments.get(PrayerKey::Fajr),
            dhuhr: self.dhuhr + adjustments.get(PrayerKey::Dhuhr),
            asr: self.asr + adjustments.get(PrayerKey::Asr),
            maghrib: self.maghrib + adjustments.get(PrayerKey::Maghrib),
            isha: self.isha + adjustments.get(PrayerKey::Isha),
            ..*self
        }
    }
}
