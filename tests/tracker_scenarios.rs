//! Tracker behaviour over realistic days.

use salat_times::time::CalendarDate;
use salat_times::tracker::{APPROACH_THRESHOLD_MINUTES, ZERO_CROSSING_WINDOW_MINUTES};
use salat_times::{Error, PrayerKey, Tracker, calculate};

fn tunis(year: i32, month: u32, day: u32) -> salat_times::DailyTimes {
    calculate(CalendarDate::new(year, month, day).unwrap(), 36.8, 10.18)
}

#[test]
fn test_unloaded_tracker_fails() {
    let mut tracker = Tracker::new();
    assert_eq!(tracker.advance(0.0).unwrap_err(), Error::NoReferenceTimes);
    assert_eq!(tracker.advance_at(0.0, 0).unwrap_err(), Error::NoReferenceTimes);
}

#[test]
fn test_approach_fires_once_per_prayer() {
    let times = tunis(2024, 6, 21);
    let mut tracker = Tracker::with_day(times);

    for key in PrayerKey::ALL {
        let at = times.time_of(key);
        let before = tracker.advance(at - APPROACH_THRESHOLD_MINUTES - 0.1).unwrap();
        assert_eq!(before.just_crossed_approach_threshold, None);

        let inside = tracker.advance(at - APPROACH_THRESHOLD_MINUTES + 0.01).unwrap();
        assert_eq!(inside.just_crossed_approach_threshold, Some(key));

        let again = tracker.advance(at - 1.0).unwrap();
        assert_eq!(again.just_crossed_approach_threshold, None);
        assert_eq!(again.next_prayer(), key);
    }
}

#[test]
fn test_zero_crossing_at_one_hertz() {
    let times = tunis(2024, 6, 21);
    let mut tracker = Tracker::with_day(times);
    let dhuhr = times.dhuhr();

    // Tick once per second across the minute before Dhuhr and a little after
    let start = (dhuhr * 60.0).floor() as i64 - 60;
    let mut fired = Vec::new();
    for second in start..start + 90 {
        let now = second as f64 / 60.0;
        let snapshot = tracker.advance_at(now, second).unwrap();
        if let Some(key) = snapshot.just_reached_zero {
            fired.push((key, dhuhr - now));
        }
    }

    assert_eq!(fired.len(), 1);
    let (key, remaining) = fired[0];
    assert_eq!(key, PrayerKey::Dhuhr);
    assert!(remaining > 0.0 && remaining < ZERO_CROSSING_WINDOW_MINUTES);
}

#[test]
fn test_zero_crossing_ignores_sub_second_repeats() {
    let times = tunis(2024, 6, 21);
    let mut tracker = Tracker::with_day(times);
    let asr = times.asr();

    let first = tracker.advance_at(asr - 0.015, 42).unwrap();
    let second = tracker.advance_at(asr - 0.010, 42).unwrap();
    let third = tracker.advance_at(asr - 0.005, 42).unwrap();

    assert_eq!(first.just_reached_zero, Some(PrayerKey::Asr));
    assert_eq!(second.just_reached_zero, None);
    assert_eq!(third.just_reached_zero, None);
}

#[test]
fn test_midnight_wraparound() {
    let times = tunis(2024, 12, 21);
    let mut tracker = Tracker::with_day(times);

    let late = tracker.advance(1439.0).unwrap();
    assert_eq!(late.previous_prayer(), PrayerKey::Isha);
    assert_eq!(late.next_prayer(), PrayerKey::Fajr);
    assert!((late.minutes_until_next - (times.fajr() + 1440.0 - 1439.0)).abs() < 1e-9);
    // Isha at 18:40, Fajr at 05:56: midnight falls just before the middle of the night
    assert!(late.progress_percent > 45.0 && late.progress_percent < 50.0);

    let early = tracker.advance(1.0).unwrap();
    assert_eq!(early.previous.time, times.isha() - 1440.0);
    // Two minutes of the night later than 23:59
    let step = 200.0 / (times.fajr() + 1440.0 - times.isha());
    assert!((early.progress_percent - late.progress_percent - step).abs() < 1e-9);
}

#[test]
fn test_fresh_tracker_for_next_day_notifies_again() {
    let mut today = Tracker::with_day(tunis(2024, 6, 21));
    let tomorrow_times = tunis(2024, 6, 22);

    let fired = today.advance(tomorrow_times.fajr() - 2.0).unwrap();
    assert_eq!(fired.just_crossed_approach_threshold, Some(PrayerKey::Fajr));

    // Reloading keeps the guard, so the same tracker stays silent...
    today.load_day(tomorrow_times);
    let silent = today.advance(tomorrow_times.fajr() - 1.0).unwrap();
    assert_eq!(silent.just_crossed_approach_threshold, None);

    // ...while a fresh tracker for the new day notifies.
    let mut fresh = Tracker::with_day(tomorrow_times);
    let notified = fresh.advance(tomorrow_times.fajr() - 1.0).unwrap();
    assert_eq!(notified.just_crossed_approach_threshold, Some(PrayerKey::Fajr));
}

#[test]
fn test_progress_bounds_over_a_day() {
    let times = tunis(2024, 3, 20);
    let mut tracker = Tracker::with_day(times);

    let mut minute = -30.0;
    while minute < 1470.0 {
        let snapshot = tracker.advance(minute).unwrap();
        assert!((0.0..=100.0).contains(&snapshot.progress_percent));
        assert!(snapshot.minutes_until_next > 0.0);
        assert!(snapshot.previous.time <= minute && minute < snapshot.next.time);
        minute += 0.25;
    }
}
