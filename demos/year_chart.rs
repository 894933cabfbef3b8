//! Prints the yearly chart data for a location, one row per week.
//!
//! Usage: `cargo run --example year_chart -- <latitude> <longitude> [year] [utc_offset]`

use solar_ephemeris::{GeoPosition, series};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let latitude = args.first().map_or(Ok(51.51), |s| s.parse())?;
    let longitude = args.get(1).map_or(Ok(-0.06), |s| s.parse())?;
    let year = args.get(2).map_or(Ok(2024), |s| s.parse())?;
    let utc_offset = args.get(3).map(|s| s.parse::<f64>()).transpose()?;

    let position = GeoPosition::new(latitude, longitude)?;
    let chart = series::year_series(position, year, utc_offset)?;
    let labels = series::chart_labels(year);

    println!(
        "{year} at {latitude:.2}, {longitude:.2} (UTC{:+})",
        chart.utc_offset()
    );
    println!(
        "{:<7} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "day", "eot", "decl", "noon", "sunrise", "sunset", "max elev"
    );

    for index in (0..chart.len()).step_by(7) {
        let sunrise = chart.sunrise()[index].map_or_else(|| "-".to_string(), |t| t.to_string());
        let sunset = chart.sunset()[index].map_or_else(|| "-".to_string(), |t| t.to_string());
        println!(
            "{:<7} {:>9.2} {:>9.2} {:>9} {:>9} {:>9} {:>9.2}",
            labels[index],
            chart.equation_of_time()[index],
            chart.solar_declination()[index].value(),
            chart.solar_noon()[index].to_string(),
            sunrise,
            sunset,
            chart.max_elevation()[index].value()
        );
    }

    let polar = chart
        .sunrise_sunset()
        .iter()
        .filter(|day| !day.is_regular_day())
        .count();
    if polar > 0 {
        println!("\n{polar} days without sunrise or sunset");
    }

    Ok(())
}
