//! Structural properties of the calculator across latitudes and the whole year.

use salat_times::calculator::calculate_for_day_of_year;
use salat_times::{PrayerKey, TimeReference};

fn latitudes(from: i32, to: i32) -> impl Iterator<Item = f64> {
    // Half-degree steps
    (from * 2..=to * 2).map(|half| f64::from(half) / 2.0)
}

#[test]
fn test_prayers_strictly_ordered_below_sixty_degrees() {
    let mut checked = 0;
    for latitude in latitudes(-60, 60) {
        for day in 1..=366 {
            let times = calculate_for_day_of_year(day, latitude, 10.18, TimeReference::Standard);
            let sequence = [
                times.fajr(),
                times.sunrise(),
                times.dhuhr(),
                times.asr(),
                times.maghrib(),
                times.isha(),
            ];
            assert!(
                sequence.windows(2).all(|pair| pair[0] < pair[1]),
                "ordering violated at latitude {latitude}, day {day}: {sequence:?}"
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 241 * 366);
}

#[test]
fn test_regional_offsets_and_day_length_identity() {
    for latitude in latitudes(-89, 89).step_by(7) {
        for day in (1..=366).step_by(5) {
            for longitude in [-179.5, -74.0, 0.0, 10.18, 39.8, 151.2] {
                let times =
                    calculate_for_day_of_year(day, latitude, longitude, TimeReference::Standard);
                assert!((times.dhuhr() - times.noon_raw() - 7.0).abs() < 1e-9);
                assert!((times.maghrib() - times.sunset() - 2.0).abs() < 1e-9);
                assert_eq!(times.day_length_minutes(), times.sunset() - times.sunrise());
            }
        }
    }
}

#[test]
fn test_polar_latitudes_stay_finite() {
    for latitude in [-90.0, -80.0, -66.56, 66.56, 70.0, 80.0, 90.0] {
        for day in 1..=366 {
            let times = calculate_for_day_of_year(day, latitude, 18.9, TimeReference::Standard);
            for key in PrayerKey::ALL {
                let value = times.time_of(key);
                assert!(value.is_finite(), "{key} not finite at {latitude}, day {day}");
            }
            let length = times.day_length_minutes();
            assert!(
                (-1e-9..=1440.0 + 1e-9).contains(&length),
                "day length {length} at {latitude}, day {day}"
            );
        }
    }
}

#[test]
fn test_solar_noon_symmetry() {
    for latitude in latitudes(-60, 60).step_by(10) {
        for day in (1..=366).step_by(11) {
            let times = calculate_for_day_of_year(day, latitude, 10.18, TimeReference::Standard);
            let noon = times.noon_raw();
            assert!(((noon - times.sunrise()) - (times.sunset() - noon)).abs() < 1e-9);
            assert!(((noon - times.fajr()) - (times.isha() - noon)).abs() < 1e-9);
        }
    }
}

#[test]
fn test_reference_meridians_only_shift_the_clock() {
    let standard = calculate_for_day_of_year(80, 36.8, 10.18, TimeReference::Standard);
    let same_zone = calculate_for_day_of_year(
        80,
        36.8,
        10.18,
        TimeReference::UtcOffset { minutes: 60.0 },
    );
    let local_mean = calculate_for_day_of_year(80, 36.8, 10.18, TimeReference::LocalMean);

    assert!((standard.fajr() - same_zone.fajr()).abs() < 1e-9);
    // Tunis lies 4.82° west of 15°E: local mean time runs 19.28 minutes behind
    let shift = standard.dhuhr() - local_mean.dhuhr();
    assert!((shift - 4.0 * (15.0 - 10.18)).abs() < 1e-9);
    assert!((standard.day_length_minutes() - local_mean.day_length_minutes()).abs() < 1e-9);
}
