//! Sweeps a day in 15-minute steps with the approximate model, as a time slider does.

use solar_ephemeris::{DayFraction, GeoPosition, approximate};

const SCENE_RADIUS: f64 = 10.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let london = GeoPosition::new(51.51, -0.06)?;
    let day_of_year = 172;

    println!("London, day {day_of_year}, clock UTC+1");
    println!(
        "{:<6} {:>9} {:>9} {:>24}",
        "time", "elev °", "azim °", "scene (x, y, z)"
    );

    for step in 0..96 {
        let minutes = f64::from(step) * 15.0;
        let sample = approximate::solar_position(london, day_of_year, minutes, Some(1.0))?;
        if !sample.is_sun_up() {
            continue;
        }

        let [x, y, z] = sample.scene_coordinates(SCENE_RADIUS);
        let clock = DayFraction::from_minutes(minutes).to_string();
        println!(
            "{:<6} {:>9.2} {:>9.2}   ({x:>6.2}, {y:>6.2}, {z:>6.2})",
            &clock[..5],
            sample.elevation().to_degrees().value(),
            sample.azimuth().to_degrees().value()
        );
    }

    Ok(())
}
