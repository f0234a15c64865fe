//! Tick-driven tracking of the current prayer window.
//!
//! A [`Tracker`] holds one day's [`DailyTimes`] and the session guards that keep
//! notifications edge-triggered. The caller feeds it the current minute of day
//! roughly once per second; each call returns a [`TrackerSnapshot`] describing the
//! surrounding prayers and any event that fired on this tick.
//!
//! The windows form a cycle: Fajr → Dhuhr → Asr → Maghrib → Isha → next day's Fajr.
//! Before today's Fajr the previous prayer is yesterday's Isha (today's Isha minus
//! one day); after today's Isha the next prayer is tomorrow's Fajr (today's Fajr
//! plus one day).
//!
//! The tracker is not thread-safe by itself; a single owner drives it.

use crate::error::check_minute_of_day;
use crate::math::floor;
use crate::time::MINUTES_PER_DAY;
use crate::types::{DailyTimes, PrayerKey};
use crate::{Error, Result};

/// Minutes before a prayer at which the approach notification fires.
pub const APPROACH_THRESHOLD_MINUTES: f64 = 5.0;

/// Width of the window before a prayer in which the zero-crossing fires (1.2 seconds).
pub const ZERO_CROSSING_WINDOW_MINUTES: f64 = 0.02;

/// A prayer placed on the tracker's timeline.
///
/// `time` is in minutes relative to midnight of the loaded day, so yesterday's Isha
/// is negative and tomorrow's Fajr exceeds 1440.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerEntry {
    /// Which prayer
    pub key: PrayerKey,
    /// When it occurs, in minutes since the loaded day's midnight
    pub time: f64,
}

/// State of the prayer windows at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerSnapshot {
    /// The most recent prayer at or before now
    pub previous: PrayerEntry,
    /// The first prayer strictly after now
    pub next: PrayerEntry,
    /// Minutes remaining until `next`
    pub minutes_until_next: f64,
    /// Elapsed share of the `previous` → `next` interval, 0 to 100
    pub progress_percent: f64,
    /// Set on the single tick where `next` comes within the approach threshold
    pub just_crossed_approach_threshold: Option<PrayerKey>,
    /// Set on the single tick where `next` is reached
    pub just_reached_zero: Option<PrayerKey>,
    /// Set when the current window differs from the one last reported
    pub background_changed: Option<PrayerKey>,
}

impl TrackerSnapshot {
    /// Gets the key of the previous prayer.
    #[must_use]
    pub const fn previous_prayer(&self) -> PrayerKey {
        self.previous.key
    }

    /// Gets the key of the next prayer.
    #[must_use]
    pub const fn next_prayer(&self) -> PrayerKey {
        self.next.key
    }
}

/// Session state for one live prayer countdown.
///
/// # Example
/// ```
/// use salat_times::{calculator, time::CalendarDate, tracker::Tracker, PrayerKey};
///
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// let mut tracker = Tracker::new();
/// tracker.load_day(calculator::calculate(date, 36.8, 10.18));
///
/// // 10:00, between Fajr and Dhuhr
/// let snapshot = tracker.advance(600.0).unwrap();
/// assert_eq!(snapshot.previous_prayer(), PrayerKey::Fajr);
/// assert_eq!(snapshot.next_prayer(), PrayerKey::Dhuhr);
/// assert!(snapshot.progress_percent > 0.0 && snapshot.progress_percent < 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    times: Option<DailyTimes>,
    last_notified: Option<PrayerKey>,
    last_trigger_second: Option<i64>,
    last_reached: Option<PrayerKey>,
    last_background: Option<PrayerKey>,
}

impl Tracker {
    /// Creates a tracker with no day loaded and all guards cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            times: None,
            last_notified: None,
            last_trigger_second: None,
            last_reached: None,
            last_background: None,
        }
    }

    /// Creates a tracker with `times` already loaded.
    #[must_use]
    pub const fn with_day(times: DailyTimes) -> Self {
        Self {
            times: Some(times),
            ..Self::new()
        }
    }

    /// Replaces the reference times.
    ///
    /// Notification and trigger guards are kept; use [`Tracker::reset`] or a fresh
    /// tracker when the calendar day changes.
    pub fn load_day(&mut self, times: DailyTimes) {
        tracing::debug!(
            fajr = times.fajr(),
            dhuhr = times.dhuhr(),
            asr = times.asr(),
            maghrib = times.maghrib(),
            isha = times.isha(),
            "loaded prayer times"
        );
        self.times = Some(times);
    }

    /// Gets the loaded reference times, if any.
    #[must_use]
    pub const fn times(&self) -> Option<&DailyTimes> {
        self.times.as_ref()
    }

    /// Clears every notification, trigger and background guard, keeping the loaded times.
    pub fn reset(&mut self) {
        self.last_notified = None;
        self.last_trigger_second = None;
        self.last_reached = None;
        self.last_background = None;
    }

    /// Advances to `now`, using the second of the loaded day as the trigger guard.
    ///
    /// # Arguments
    /// * `now` - Minutes since midnight of the loaded day
    ///
    /// # Errors
    /// Returns `NoReferenceTimes` before any day is loaded, or `InvalidMinuteOfDay`
    /// if `now` is not finite.
    pub fn advance(&mut self, now: f64) -> Result<TrackerSnapshot> {
        check_minute_of_day(now)?;
        self.advance_at(now, floor(now * 60.0) as i64)
    }

    /// Advances to `now` with an explicit one-second-resolution guard value.
    ///
    /// `epoch_second` only needs to change once per real second (a Unix timestamp is
    /// the usual choice); repeated calls within the same second never fire the
    /// zero-crossing twice.
    ///
    /// # Errors
    /// Returns `NoReferenceTimes` before any day is loaded, or `InvalidMinuteOfDay`
    /// if `now` is not finite.
    pub fn advance_at(&mut self, now: f64, epoch_second: i64) -> Result<TrackerSnapshot> {
        check_minute_of_day(now)?;
        let times = self.times.ok_or(Error::NoReferenceTimes)?;

        let (previous, next) = surrounding_prayers(&times, now);
        let minutes_until_next = next.time - now;

        let span = next.time - previous.time;
        let progress_percent = if span > 0.0 {
            (100.0 * (now - previous.time) / span).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let mut just_crossed_approach_threshold = None;
        if minutes_until_next > 0.0
            && minutes_until_next <= APPROACH_THRESHOLD_MINUTES
            && self.last_notified != Some(next.key)
        {
            tracing::debug!(prayer = %next.key, minutes_until_next, "approach threshold crossed");
            self.last_notified = Some(next.key);
            just_crossed_approach_threshold = Some(next.key);
        }

        let mut just_reached_zero = None;
        if minutes_until_next > 0.0
            && minutes_until_next < ZERO_CROSSING_WINDOW_MINUTES
            && self.last_trigger_second != Some(epoch_second)
            && self.last_reached != Some(next.key)
        {
            tracing::debug!(prayer = %next.key, epoch_second, "prayer time reached");
            self.last_trigger_second = Some(epoch_second);
            self.last_reached = Some(next.key);
            just_reached_zero = Some(next.key);
        }

        let mut background_changed = None;
        if self.last_background != Some(previous.key) {
            tracing::debug!(window = %previous.key, "prayer window changed");
            self.last_background = Some(previous.key);
            background_changed = Some(previous.key);
        }

        Ok(TrackerSnapshot {
            previous,
            next,
            minutes_until_next,
            progress_percent,
            just_crossed_approach_threshold,
            just_reached_zero,
            background_changed,
        })
    }
}

/// Finds the prayers immediately before and after `now` on the loaded day's timeline.
fn surrounding_prayers(times: &DailyTimes, now: f64) -> (PrayerEntry, PrayerEntry) {
    let at = |key: PrayerKey, day_shift: f64| PrayerEntry {
        key,
        time: times.time_of(key) + day_shift,
    };

    match PrayerKey::ALL.iter().position(|&key| times.time_of(key) > now) {
        Some(i) => {
            let next = PrayerKey::ALL[i];
            // Fajr's predecessor is the previous day's Isha
            let shift = if i == 0 { -MINUTES_PER_DAY } else { 0.0 };
            (at(next.previous(), shift), at(next, 0.0))
        }
        None => {
            let last = PrayerKey::Isha;
            (at(last, 0.0), at(last.next(), MINUTES_PER_DAY))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::REGIONAL_OFFSETS;

    /// Fajr 300, Dhuhr 727, Asr 930, Maghrib 1112, Isha 1200.
    fn fixed_day() -> DailyTimes {
        DailyTimes::from_raw(
            300.0,
            390.0,
            720.0,
            930.0,
            1110.0,
            1200.0,
            0.0,
            0.0,
            &REGIONAL_OFFSETS,
        )
    }

    #[test]
    fn test_advance_requires_loaded_day() {
        let mut tracker = Tracker::new();
        assert_eq!(tracker.advance(100.0), Err(Error::NoReferenceTimes));
        assert!(tracker.times().is_none());
    }

    #[test]
    fn test_advance_rejects_non_finite_now() {
        let mut tracker = Tracker::with_day(fixed_day());
        assert!(matches!(
            tracker.advance(f64::NAN),
            Err(Error::InvalidMinuteOfDay { .. })
        ));
    }

    #[test]
    fn test_window_between_prayers() {
        let mut tracker = Tracker::with_day(fixed_day());
        let snapshot = tracker.advance(828.5).unwrap();

        assert_eq!(snapshot.previous_prayer(), PrayerKey::Dhuhr);
        assert_eq!(snapshot.next_prayer(), PrayerKey::Asr);
        assert_eq!(snapshot.minutes_until_next, 101.5);
        assert!((snapshot.progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_before_fajr_uses_yesterdays_isha() {
        let mut tracker = Tracker::with_day(fixed_day());
        let snapshot = tracker.advance(60.0).unwrap();

        assert_eq!(snapshot.previous.key, PrayerKey::Isha);
        assert_eq!(snapshot.previous.time, 1200.0 - 1440.0);
        assert_eq!(snapshot.next.key, PrayerKey::Fajr);
        assert_eq!(snapshot.minutes_until_next, 240.0);
        // 300 minutes elapsed of a 540-minute night
        assert!((snapshot.progress_percent - 300.0 / 540.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_after_isha_wraps_to_tomorrows_fajr() {
        let mut tracker = Tracker::with_day(fixed_day());
        let snapshot = tracker.advance(1300.0).unwrap();

        assert_eq!(snapshot.previous.key, PrayerKey::Isha);
        assert_eq!(snapshot.next.key, PrayerKey::Fajr);
        assert_eq!(snapshot.next.time, 300.0 + 1440.0);
        assert_eq!(snapshot.minutes_until_next, (300.0 + 1440.0) - 1300.0);
    }

    #[test]
    fn test_exactly_at_prayer_time_moves_to_next_window() {
        let mut tracker = Tracker::with_day(fixed_day());
        let snapshot = tracker.advance(930.0).unwrap();
        assert_eq!(snapshot.previous_prayer(), PrayerKey::Asr);
        assert_eq!(snapshot.next_prayer(), PrayerKey::Maghrib);
        assert_eq!(snapshot.progress_percent, 0.0);
    }

    #[test]
    fn test_approach_threshold_fires_once() {
        let mut tracker = Tracker::with_day(fixed_day());

        let first = tracker.advance(294.9).unwrap();
        let second = tracker.advance(295.0).unwrap();
        let third = tracker.advance(295.0).unwrap();

        assert_eq!(first.just_crossed_approach_threshold, None);
        assert_eq!(second.just_crossed_approach_threshold, Some(PrayerKey::Fajr));
        assert_eq!(third.just_crossed_approach_threshold, None);
    }

    #[test]
    fn test_zero_crossing_guarded_per_second() {
        let mut tracker = Tracker::with_day(fixed_day());

        let early = tracker.advance_at(299.97, 1_000).unwrap();
        assert_eq!(early.just_reached_zero, None);

        let hit = tracker.advance_at(299.99, 1_001).unwrap();
        assert_eq!(hit.just_reached_zero, Some(PrayerKey::Fajr));

        // Same second, faster than 1 Hz
        let repeat = tracker.advance_at(299.995, 1_001).unwrap();
        assert_eq!(repeat.just_reached_zero, None);

        // Next second still inside the window: same prayer, no second fire
        let later = tracker.advance_at(299.999, 1_002).unwrap();
        assert_eq!(later.just_reached_zero, None);
    }

    #[test]
    fn test_background_reports_transitions_only() {
        let mut tracker = Tracker::with_day(fixed_day());

        let first = tracker.advance(400.0).unwrap();
        assert_eq!(first.background_changed, Some(PrayerKey::Fajr));
        let same = tracker.advance(401.0).unwrap();
        assert_eq!(same.background_changed, None);
        let moved = tracker.advance(728.0).unwrap();
        assert_eq!(moved.background_changed, Some(PrayerKey::Dhuhr));
    }

    #[test]
    fn test_load_day_keeps_guards_reset_clears_them() {
        let mut tracker = Tracker::with_day(fixed_day());
        let fired = tracker.advance(296.0).unwrap();
        assert_eq!(fired.just_crossed_approach_threshold, Some(PrayerKey::Fajr));

        tracker.load_day(fixed_day());
        let reloaded = tracker.advance(296.5).unwrap();
        assert_eq!(reloaded.just_crossed_approach_threshold, None);
        assert_eq!(reloaded.background_changed, None);

        tracker.reset();
        let after_reset = tracker.advance(297.0).unwrap();
        assert_eq!(after_reset.just_crossed_approach_threshold, Some(PrayerKey::Fajr));
        assert_eq!(after_reset.background_changed, Some(PrayerKey::Isha));
    }

    #[test]
    fn test_every_prayer_notifies_in_a_full_day() {
        let mut tracker = Tracker::with_day(fixed_day());
        let mut approached = [false; 5];
        let mut reached = [false; 5];

        // One tick per second across the whole day
        for second in 0..86_400_i64 {
            let now = second as f64 / 60.0;
            let snapshot = tracker.advance_at(now, second).unwrap();
            if let Some(key) = snapshot.just_crossed_approach_threshold {
                assert!(!approached[key.index()], "{key} notified twice");
                approached[key.index()] = true;
            }
            if let Some(key) = snapshot.just_reached_zero {
                assert!(!reached[key.index()], "{key} reached twice");
                reached[key.index()] = true;
            }
        }

        assert_eq!(approached, [true; 5]);
        assert_eq!(reached, [true; 5]);
    }
}
