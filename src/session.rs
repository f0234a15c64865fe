//! Live prayer session driven by wall-clock ticks.
//!
//! [`PrayerSession`] pairs a location with a [`Tracker`] and handles the midnight
//! rollover: when the date of `now` changes, the day's times are recomputed and a
//! fresh tracker replaces the old one, so every notification guard starts clean.

use chrono::{NaiveDate, NaiveDateTime};

use crate::Result;
use crate::calculator::calculate_with_reference;
use crate::time::{CalendarDate, minutes_of_day};
use crate::tracker::{Tracker, TrackerSnapshot};
use crate::types::{DailyTimes, GeoCoordinate, PrayerAdjustments, TimeReference};

/// Settings for a live session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Meridian the displayed clock times refer to
    pub reference: TimeReference,
    /// Manual per-prayer adjustments applied on top of the calculated times
    pub adjustments: PrayerAdjustments,
}

/// Result of one session tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTick {
    /// Tracker state at this tick
    pub snapshot: TrackerSnapshot,
    /// Whether this tick moved the session onto a new date
    pub rolled_over: bool,
}

/// A tracker bound to one location that follows the calendar date of its ticks.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use salat_times::{GeoCoordinate, PrayerKey};
/// use salat_times::session::{PrayerSession, SessionConfig};
///
/// let tunis = GeoCoordinate::new(36.8, 10.18).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 6, 21)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
///
/// let mut session = PrayerSession::new(tunis, SessionConfig::default(), start);
/// let tick = session.tick(start).unwrap();
/// assert_eq!(tick.snapshot.next_prayer(), PrayerKey::Dhuhr);
/// assert!(!tick.rolled_over);
/// ```
#[derive(Debug, Clone)]
pub struct PrayerSession {
    location: GeoCoordinate,
    config: SessionConfig,
    date: NaiveDate,
    times: DailyTimes,
    tracker: Tracker,
}

impl PrayerSession {
    /// Starts a session on the date of `now`.
    #[must_use]
    pub fn new(location: GeoCoordinate, config: SessionConfig, now: NaiveDateTime) -> Self {
        let date = now.date();
        let times = compute_day(location, &config, date);
        Self {
            location,
            config,
            date,
            times,
            tracker: Tracker::with_day(times),
        }
    }

    /// Advances the session to `now`.
    ///
    /// A change of calendar date recomputes the times and starts a fresh tracker
    /// before advancing. Going backwards in date is treated the same way.
    ///
    /// # Errors
    /// Propagates tracker errors; with times always loaded this only happens for
    /// non-finite clock values, which `NaiveDateTime` cannot produce.
    pub fn tick(&mut self, now: NaiveDateTime) -> Result<SessionTick> {
        let date = now.date();
        let rolled_over = date != self.date;
        if rolled_over {
            tracing::debug!(from = %self.date, to = %date, "date changed, reloading prayer times");
            self.date = date;
            self.times = compute_day(self.location, &self.config, date);
            self.tracker = Tracker::with_day(self.times);
        }

        let snapshot = self
            .tracker
            .advance_at(minutes_of_day(now.time()), now.and_utc().timestamp())?;
        Ok(SessionTick {
            snapshot,
            rolled_over,
        })
    }

    /// Moves the session to a new location.
    ///
    /// Times are recomputed for the current date and loaded into the existing
    /// tracker, so notifications already sent today are not repeated.
    pub fn set_location(&mut self, location: GeoCoordinate) {
        self.location = location;
        self.times = compute_day(location, &self.config, self.date);
        self.tracker.load_day(self.times);
    }

    /// Gets the session location.
    #[must_use]
    pub const fn location(&self) -> GeoCoordinate {
        self.location
    }

    /// Gets the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Gets the date the current times belong to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the current day's times, with adjustments applied.
    #[must_use]
    pub const fn times(&self) -> &DailyTimes {
        &self.times
    }
}

fn compute_day(location: GeoCoordinate, config: &SessionConfig, date: NaiveDate) -> DailyTimes {
    calculate_with_reference(
        CalendarDate::from(date),
        location.latitude(),
        location.longitude(),
        config.reference,
    )
    .adjusted(&config.adjustments)
}
