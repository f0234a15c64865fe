//! # Salat Times
//!
//! Daily Islamic prayer times, the Qibla bearing, and a tick-driven tracker for the
//! current prayer window.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculator is a compact solar model: an equation-of-time and declination
//! approximation from the day of the year, hour angles at fixed solar elevations
//! (-18° for Fajr and Isha, -0.833° for sunrise and sunset) and the single-shadow Asr
//! convention. Regional offsets of +7 minutes (Dhuhr) and +2 minutes (Maghrib) are
//! applied on top. Times are minutes since local midnight.
//!
//! ## Features
//!
//! - Total calculation: polar latitudes and degenerate inputs give finite (or `NaN`)
//!   values, never panics or errors
//! - Allocation-free core that runs on `no_std` targets
//! - Edge-triggered notifications: the tracker reports "5 minutes left" and
//!   "time reached" exactly once per prayer
//! - Explicit reference meridian instead of an implicit time zone
//!
//! ## Feature Flags
//!
//! - `std` (default): Native math functions, `std::error::Error`, the month [`calendar`]
//! - `chrono` (default): `NaiveDate`/`NaiveDateTime` convenience API and the live [`session`]
//! - `libm`: Pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` on the public data types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! salat-times = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! salat-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Daily times
//! ```rust
//! use salat_times::{calculator, clock::format_clock, qibla_bearing, time::CalendarDate};
//!
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let times = calculator::calculate(date, 36.8, 10.18); // Tunis
//!
//! for (prayer, minutes) in times.prayers() {
//!     println!("{prayer:>8}  {}", format_clock(minutes));
//! }
//! println!("Day length: {:.0} min", times.day_length_minutes());
//! println!("Qibla: {:.1}°", qibla_bearing(36.8, 10.18));
//! ```
//!
//! ### Tracking the current window
//! ```rust
//! use salat_times::{calculator, time::CalendarDate, PrayerKey, Tracker};
//!
//! let times = calculator::calculate(CalendarDate::new(2024, 6, 21).unwrap(), 36.8, 10.18);
//! let mut tracker = Tracker::with_day(times);
//!
//! // Called about once per second with the current minute of day
//! let snapshot = tracker.advance(times.fajr() - 4.0).unwrap();
//! assert_eq!(snapshot.just_crossed_approach_threshold, Some(PrayerKey::Fajr));
//! assert!(snapshot.minutes_until_next > 3.99);
//! ```
//!
//! ## Time Reference
//!
//! By default solar noon is `720 − eot + 4·(15 − longitude)` minutes, i.e. clock time
//! on the 15°E meridian (UTC+1). Use [`TimeReference::UtcOffset`] for another civil
//! zone or [`TimeReference::LocalMean`] for local mean solar time.
//!
//! ## Coordinate System
//!
//! - **Latitude**: north positive (-90° to +90°)
//! - **Longitude**: east positive (-180° to +180°)
//! - **Qibla bearing**: 0° = North, measured clockwise (0° to 360°)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of fixed offsets in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::calculator::calculate;
pub use crate::clock::{format_clock, format_countdown};
pub use crate::error::{Error, Result};
pub use crate::qibla::qibla_bearing;
pub use crate::tracker::{Tracker, TrackerSnapshot};
pub use crate::types::{
    DailyTimes, GeoCoordinate, PrayerAdjustments, PrayerKey, REGIONAL_OFFSETS, RegionalOffsets,
    TimeReference,
};

// Calculation modules
pub mod calculator;
pub mod qibla;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod clock;
pub mod time;
pub mod tracker;

#[cfg(all(feature = "chrono", feature = "std"))]
pub mod calendar;
#[cfg(feature = "chrono")]
pub mod session;
