//! Run a live countdown to the next prayer, ticking once per second.
//!
//! `RUST_LOG=salat_times=debug cargo run --example live_countdown` also shows the
//! tracker's events as they fire. Stops after `SALAT_DEMO_SECONDS` ticks (default 10).

use chrono::Local;
use salat_times::session::{PrayerSession, SessionConfig};
use salat_times::{GeoCoordinate, TimeReference, format_countdown};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: INFO, use RUST_LOG=debug for tracker events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let seconds: u64 = std::env::var("SALAT_DEMO_SECONDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10);

    let now = Local::now();
    let config = SessionConfig {
        reference: TimeReference::UtcOffset {
            minutes: f64::from(now.offset().local_minus_utc()) / 60.0,
        },
        ..SessionConfig::default()
    };
    let location = GeoCoordinate::new(36.8, 10.18)?;
    let mut session = PrayerSession::new(location, config, now.naive_local());
    info!(date = %session.date(), "session started");

    for _ in 0..seconds {
        let tick = session.tick(Local::now().naive_local())?;
        let snapshot = tick.snapshot;

        if let Some(key) = snapshot.just_crossed_approach_threshold {
            info!(prayer = %key, "five minutes remaining");
        }
        if let Some(key) = snapshot.just_reached_zero {
            info!(prayer = %key, "prayer time");
        }
        println!(
            "{:>8} in {}  [{:5.1}% of the {} window]",
            snapshot.next_prayer(),
            format_countdown(snapshot.minutes_until_next),
            snapshot.progress_percent,
            snapshot.previous_prayer()
        );

        std::thread::sleep(Duration::from_secs(1));
    }

    Ok(())
}
