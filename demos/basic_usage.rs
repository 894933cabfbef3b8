//! Basic ephemeris and sun position example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_ephemeris::{CivilInstant, GeoPosition, Strategy, SunriseResult, precision};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: local clock with its own offset
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: the same moment on a UTC clock
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT
    let san_francisco = GeoPosition::new(37.7749, -122.4194)?;

    let local = CivilInstant::from_datetime(&datetime_fixed)?;
    let utc = CivilInstant::from_datetime(&datetime_utc)?;

    println!("Sun position for San Francisco on June 21, 2023 at noon Pacific Time:");
    for strategy in [Strategy::Precision, Strategy::Approximate] {
        let fixed = strategy.solar_position(san_francisco, &local);
        let universal = strategy.solar_position(san_francisco, &utc);
        println!(
            "  {strategy:<11} local clock: azimuth {:.3}°, elevation {:.3}°",
            fixed.azimuth().to_degrees().value(),
            fixed.elevation().to_degrees().value()
        );
        println!(
            "  {strategy:<11} UTC clock:   azimuth {:.3}°, elevation {:.3}°",
            universal.azimuth().to_degrees().value(),
            universal.elevation().to_degrees().value()
        );
    }

    // Daily values at local midnight, as shown in the charts
    let day = CivilInstant::at_midnight(2023, 6, 21, -7.0)?;
    let sample = precision::ephemeris_sample(san_francisco, &day);

    println!("\nDaily ephemeris:");
    println!("  Equation of time: {:.2} min", sample.equation_of_time_minutes());
    println!("  Declination: {:.3}°", sample.solar_declination().value());
    println!("  Max elevation: {:.3}°", sample.max_elevation().value());

    match sample.sunrise_sunset() {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("  Sunrise: {sunrise}");
            println!("  Solar noon: {transit}");
            println!("  Sunset: {sunset}");
        }
        SunriseResult::AllDay { transit } => println!("  Midnight sun, solar noon {transit}"),
        SunriseResult::AllNight { transit } => println!("  Polar night, solar noon {transit}"),
    }

    Ok(())
}
