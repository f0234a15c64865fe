//! Print one day's prayer times, solar data and Qibla bearing.
//!
//! This example uses the numeric API only, so it runs without chrono:
//! `cargo run --example daily_times -- 36.8 10.18 2024 6 21`

use salat_times::time::CalendarDate;
use salat_times::{GeoCoordinate, PrayerKey, calculate, format_clock, qibla_bearing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (location, date) = if args.len() == 5 {
        (
            GeoCoordinate::new(args[0].parse()?, args[1].parse()?)?,
            CalendarDate::new(args[2].parse()?, args[3].parse()?, args[4].parse()?)?,
        )
    } else {
        // Tunis on the summer solstice
        (GeoCoordinate::new(36.8, 10.18)?, CalendarDate::new(2024, 6, 21)?)
    };

    let times = calculate(date, location.latitude(), location.longitude());

    println!(
        "{:04}-{:02}-{:02} at ({}, {}), clock on 15°E:",
        date.year(),
        date.month(),
        date.day(),
        location.latitude(),
        location.longitude()
    );
    for (key, minutes) in times.prayers() {
        println!("  {key:<8} {}", format_clock(minutes));
        if key == PrayerKey::Fajr {
            println!("  {:<8} {}", "sunrise", format_clock(times.sunrise()));
        }
    }
    println!();
    println!("  Solar noon:  {}", format_clock(times.noon_raw()));
    println!("  Day length:  {:.0} min", times.day_length_minutes());
    println!("  Declination: {:.2}°", times.declination());
    println!(
        "  Qibla:       {:.1}°",
        qibla_bearing(location.latitude(), location.longitude())
    );

    Ok(())
}
