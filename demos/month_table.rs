//! Print a month of prayer times, with an Imsak column during Ramadan.

use chrono::NaiveDate;
use salat_times::calendar::{RamadanRange, month_table};
use salat_times::{GeoCoordinate, PrayerKey, TimeReference, format_clock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let location = GeoCoordinate::new(36.8, 10.18)?;
    let ramadan = RamadanRange::new(
        NaiveDate::from_ymd_opt(2026, 2, 18).ok_or("invalid date")?,
        NaiveDate::from_ymd_opt(2026, 3, 19).ok_or("invalid date")?,
    )?;

    let table = month_table(2026, 3, location, TimeReference::Standard, Some(&ramadan))?;
    println!("Ramadan {} to {}", ramadan.first(), ramadan.last());

    print!("{:<12}", "date");
    if table.has_ramadan_days() {
        print!("{:<10}", "imsak");
    }
    for key in PrayerKey::ALL {
        print!("{key:<10}");
    }
    println!();

    for row in table.rows() {
        print!("{:<12}", row.date.to_string());
        if table.has_ramadan_days() {
            match row.imsak {
                Some(imsak) => print!("{:<10}", format_clock(imsak).to_string()),
                None => print!("{:<10}", ""),
            }
        }
        for (_, minutes) in row.times.prayers() {
            print!("{:<10}", format_clock(minutes).to_string());
        }
        println!();
    }

    Ok(())
}
