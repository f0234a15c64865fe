//! Daily prayer-time calculation.
//!
//! A compact solar model: equation of time and declination from the day of the year,
//! hour angles for fixed solar elevations, and the single-shadow Asr convention.
//! Accuracy is on the order of a minute, which is all the regional tables require.
//!
//! The calculation is total. Hour-angle arguments are clamped to `[-1, 1]`, so at
//! latitudes where the sun never reaches an elevation the event collapses onto solar
//! noon (never rises) or solar midnight (never sets) instead of becoming undefined.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{PI, abs, acos, atan, cos, degrees_to_radians, radians_to_degrees, sin, tan};
use crate::time::CalendarDate;
use crate::types::{DailyTimes, REGIONAL_OFFSETS, TimeReference};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Solar elevation for Fajr and Isha (degrees).
pub const TWILIGHT_ELEVATION: f64 = -18.0;

/// Solar elevation for sunrise and sunset, allowing for refraction and the solar radius (degrees).
pub const SUNRISE_SUNSET_ELEVATION: f64 = -0.833;

/// Minutes of time per degree of hour angle.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Solar noon on the reference meridian before the equation-of-time correction.
const MEAN_NOON_MINUTES: f64 = 720.0;

/// Tangent magnitude below which the Asr shadow term is treated as unbounded.
const MIN_ASR_TANGENT: f64 = 1e-12;

/// Calculate the day's prayer times on the standard reference meridian.
///
/// # Arguments
/// * `date` - Calendar date
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Prayer times in minutes since local midnight. Never fails; `NaN` inputs yield `NaN` times.
///
/// # Example
/// ```
/// use salat_times::{calculator, time::CalendarDate};
///
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// let times = calculator::calculate(date, 36.8, 10.18); // Tunis
///
/// assert!(times.sunrise() < times.dhuhr() && times.dhuhr() < times.sunset());
/// assert!(times.day_length_minutes() > 780.0);
/// ```
#[must_use]
pub fn calculate(date: CalendarDate, latitude: f64, longitude: f64) -> DailyTimes {
    calculate_with_reference(date, latitude, longitude, TimeReference::Standard)
}

/// Calculate the day's prayer times against an explicit reference meridian.
///
/// # Arguments
/// * `date` - Calendar date
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `reference` - Meridian whose clock the results are expressed in
///
/// # Example
/// ```
/// use salat_times::{calculator, time::CalendarDate, TimeReference};
///
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// let standard = calculator::calculate(date, 36.8, 10.18);
/// let utc_plus_one = TimeReference::UtcOffset { minutes: 60.0 };
/// let explicit = calculator::calculate_with_reference(date, 36.8, 10.18, utc_plus_one);
///
/// assert!((standard.dhuhr() - explicit.dhuhr()).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_with_reference(
    date: CalendarDate,
    latitude: f64,
    longitude: f64,
    reference: TimeReference,
) -> DailyTimes {
    calculate_for_day_of_year(date.ordinal(), latitude, longitude, reference)
}

/// Calculate prayer times from a chrono date-like value on the standard reference meridian.
///
/// Only the day of the year is used; any time or zone component is ignored.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use salat_times::calculator;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
/// let times = calculator::calculate_for_date(date, 36.8, 10.18);
/// assert!(times.day_length_minutes() < 600.0);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn calculate_for_date<D: Datelike>(date: D, latitude: f64, longitude: f64) -> DailyTimes {
    calculate_for_day_of_year(date.ordinal(), latitude, longitude, TimeReference::Standard)
}

/// Calculate prayer times for a 1-based day of the year.
///
/// This is the numeric core the other entry points delegate to.
#[must_use]
pub fn calculate_for_day_of_year(
    day: u32,
    latitude: f64,
    longitude: f64,
    reference: TimeReference,
) -> DailyTimes {
    let eot = equation_of_time(day);
    let dec = declination(day);

    let noon = MEAN_NOON_MINUTES - eot
        + MINUTES_PER_DEGREE * (reference.meridian(longitude) - longitude);

    let twilight = MINUTES_PER_DEGREE * hour_angle(TWILIGHT_ELEVATION, latitude, dec);
    let horizon = MINUTES_PER_DEGREE * hour_angle(SUNRISE_SUNSET_ELEVATION, latitude, dec);
    let afternoon = MINUTES_PER_DEGREE * hour_angle(asr_elevation(latitude, dec), latitude, dec);

    DailyTimes::from_raw(
        noon - twilight,
        noon - horizon,
        noon,
        noon + afternoon,
        noon + horizon,
        noon + twilight,
        eot,
        dec,
        &REGIONAL_OFFSETS,
    )
}

/// Equation of time in minutes for a 1-based day of the year.
#[must_use]
pub fn equation_of_time(day: u32) -> f64 {
    let b = 2.0 * PI * (f64::from(day) - 81.0) / 365.25;
    9.87 * sin(2.0 * b) - 7.53 * cos(b) - 1.5 * sin(b)
}

/// Solar declination in degrees for a 1-based day of the year.
#[must_use]
pub fn declination(day: u32) -> f64 {
    23.45 * sin(2.0 * PI / 365.0 * (f64::from(day) + 284.0))
}

/// Hour angle in degrees at which the sun reaches `elevation`.
///
/// The cosine argument is clamped to `[-1, 1]`: a sun that never climbs to `elevation`
/// yields 0° (the event coincides with noon) and one that never sinks to it yields 180°.
///
/// # Arguments
/// * `elevation` - Solar elevation in degrees (negative below the horizon)
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
#[must_use]
pub fn hour_angle(elevation: f64, latitude: f64, declination: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);

    let numerator = sin(degrees_to_radians(elevation)) - sin(phi) * sin(delta);
    let denominator = cos(phi) * cos(delta);
    let ratio = numerator / denominator;

    let clamped = ratio.clamp(-1.0, 1.0);
    if clamped != ratio {
        tracing::trace!(
            elevation,
            latitude,
            declination,
            ratio,
            "hour angle clamped, sun does not cross this elevation"
        );
    }

    radians_to_degrees(acos(clamped))
}

/// Solar elevation in degrees at which a shadow equals the object's length plus its noon shadow.
///
/// At `|latitude − declination| = 90°` the noon sun sits on the horizon and the shadow
/// term is unbounded; the elevation then resolves to its limit of 0° instead of
/// propagating an infinity.
#[must_use]
pub fn asr_elevation(latitude: f64, declination: f64) -> f64 {
    let noon_altitude = 90.0 - abs(latitude - declination);
    let tangent = tan(degrees_to_radians(noon_altitude));
    if abs(tangent) < MIN_ASR_TANGENT {
        return 0.0;
    }

    let shadow = 1.0 + 1.0 / tangent;
    if abs(shadow) < MIN_ASR_TANGENT {
        return 90.0;
    }

    radians_to_degrees(atan(1.0 / shadow))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_tunis_summer_solstice() {
        let date = CalendarDate::new(2024, 6, 21).unwrap();
        let times = calculate(date, 36.8, 10.18);

        assert!((times.equation_of_time() - -1.644279).abs() < EPSILON);
        assert!((times.declination() - 23.448046).abs() < EPSILON);
        assert!((times.noon_raw() - 740.924279).abs() < EPSILON);
        assert!((times.fajr() - 188.243020).abs() < EPSILON);
        assert!((times.sunrise() - 300.376494).abs() < EPSILON);
        assert!((times.dhuhr() - 747.924279).abs() < EPSILON);
        assert!((times.asr() - 972.584945).abs() < EPSILON);
        assert!((times.sunset() - 1181.472064).abs() < EPSILON);
        assert!((times.maghrib() - 1183.472064).abs() < EPSILON);
        assert!((times.isha() - 1293.605538).abs() < EPSILON);
        assert!((times.day_length_minutes() - 881.095571).abs() < EPSILON);
    }

    #[test]
    fn test_tunis_new_year() {
        let date = CalendarDate::new(2024, 1, 1).unwrap();
        let times = calculate(date, 36.8, 10.18);

        assert!((times.fajr() - 359.694617).abs() < EPSILON);
        assert!((times.dhuhr() - 750.009637).abs() < EPSILON);
        assert!((times.isha() - 1126.324658).abs() < EPSILON);
        assert!((times.day_length_minutes() - 581.299184).abs() < EPSILON);
    }

    #[test]
    fn test_local_mean_reference_centres_noon() {
        let times = calculate_for_day_of_year(100, 36.8, 10.18, TimeReference::LocalMean);
        assert!((times.noon_raw() - (720.0 - equation_of_time(100))).abs() < 1e-9);
    }

    #[test]
    fn test_utc_offset_shifts_everything_uniformly() {
        let cairo = TimeReference::UtcOffset { minutes: 120.0 };
        let moscow = TimeReference::UtcOffset { minutes: 180.0 };
        let base = calculate_for_day_of_year(200, 30.0, 31.0, cairo);
        let shifted = calculate_for_day_of_year(200, 30.0, 31.0, moscow);

        for ((_, a), (_, b)) in base.prayers().iter().zip(shifted.prayers().iter()) {
            assert!((b - a - 60.0).abs() < 1e-9);
        }
        assert!((base.day_length_minutes() - shifted.day_length_minutes()).abs() < 1e-9);
    }

    #[test]
    fn test_hour_angle_clamps_at_polar_latitudes() {
        // Midsummer above the Arctic circle: the sun never sets.
        assert!((hour_angle(SUNRISE_SUNSET_ELEVATION, 80.0, 23.44) - 180.0).abs() < 1e-9);
        // Midwinter: the sun never rises.
        assert_eq!(hour_angle(SUNRISE_SUNSET_ELEVATION, 80.0, -23.44), 0.0);
        // Equator at equinox: the geometric horizon is six hours from noon.
        let h = hour_angle(0.0, 0.0, 0.0);
        assert!((h - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_polar_day_is_finite() {
        let times = calculate_for_day_of_year(172, 78.2, 15.6, TimeReference::Standard);
        for (_, time) in times.prayers() {
            assert!(time.is_finite());
        }
        assert!((times.day_length_minutes() - 1440.0).abs() < 1e-9);
    }

    #[test]
    fn test_asr_elevation() {
        // Sun overhead at noon: shadow factor 1 means 45°.
        assert!((asr_elevation(23.45, 23.45) - 45.0).abs() < 1e-9);
        // Noon sun on the horizon: degenerate but finite.
        let edge = asr_elevation(90.0, 0.0);
        assert!(edge.is_finite());
        assert!(edge.abs() < 1e-6);
        let edge = asr_elevation(-66.55, 23.45);
        assert!(edge.is_finite());
    }

    #[test]
    fn test_nan_input_propagates() {
        let times = calculate_for_day_of_year(1, f64::NAN, 10.0, TimeReference::Standard);
        assert!(times.fajr().is_nan());
        assert!(times.noon_raw().is_finite());
    }
}
