//! Qibla bearing.

use crate::math::{
    abs, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin, tan,
};

/// Latitude of the Kaaba in degrees.
pub const KAABA_LATITUDE: f64 = 21.4225;

/// Longitude of the Kaaba in degrees.
pub const KAABA_LONGITUDE: f64 = 39.8262;

/// Initial great-circle bearing from the observer towards the Kaaba.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Returns
/// Bearing in degrees clockwise from true north, in `[0, 360)`. At the Kaaba itself
/// the direction is undefined and the bearing is reported as 0. `NaN` coordinates
/// yield `NaN`.
///
/// # Example
/// ```
/// use salat_times::qibla::qibla_bearing;
///
/// let bearing = qibla_bearing(36.8, 10.18); // Tunis
/// assert!((bearing - 112.65).abs() < 0.01);
/// ```
#[must_use]
pub fn qibla_bearing(latitude: f64, longitude: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta_lambda = degrees_to_radians(KAABA_LONGITUDE - longitude);

    let y = sin(delta_lambda);
    let x = cos(phi) * tan(degrees_to_radians(KAABA_LATITUDE)) - sin(phi) * cos(delta_lambda);

    // Both components vanish only at the Kaaba, where atan2 would pick up rounding noise
    if abs(y) < 1e-12 && abs(x) < 1e-12 {
        return 0.0;
    }

    let bearing = normalize_degrees_0_to_360(radians_to_degrees(atan2(y, x)));
    // A tiny negative angle rounds up to exactly 360 after normalization
    if bearing >= 360.0 {
        0.0
    } else {
        bearing + 0.0
    }
}
