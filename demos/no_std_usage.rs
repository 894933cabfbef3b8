//! Example demonstrating usage without chrono.
//!
//! Only the numeric API is used, as in `no_std` environments where callers
//! handle their own time conversions.

use solar_ephemeris::{
    CivilInstant, GeoPosition, SunriseHourAngle, approximate, orbit::OrbitalElements, precision,
    time,
};

fn main() {
    // 2024-06-21 00:00 on a UTC+2 clock in Vienna
    let vienna = GeoPosition::new(48.21, 16.37).expect("valid coordinates");
    let instant = CivilInstant::at_midnight(2024, 6, 21, 2.0).expect("valid date");

    println!("Solar ephemeris without chrono\n");
    println!("Julian Day: {:.6}", instant.julian_day());
    println!("Julian Century: {:.9}\n", instant.julian_century());

    // Orbital elements, then the precision model built from them
    let elements = OrbitalElements::from_julian_century(instant.julian_century());
    let eot = precision::equation_of_time(
        elements.mean_longitude,
        elements.mean_anomaly,
        elements.eccentricity,
        elements.variation_y,
    );
    let declination =
        precision::solar_declination(elements.apparent_longitude, elements.corrected_obliquity);
    let noon = precision::solar_noon(vienna.longitude(), eot, instant.utc_offset());

    println!("Precision model:");
    println!("  Equation of time: {eot:.3} min");
    println!("  Declination: {:.3}°", declination.value());
    println!("  Solar noon: {noon}");

    match precision::hour_angle_sunrise(vienna.latitude(), declination) {
        SunriseHourAngle::Regular(hour_angle) => {
            println!("  Sunrise: {}", precision::sunrise_time(hour_angle, noon));
            println!("  Sunset: {}", precision::sunset_time(hour_angle, noon));
        }
        SunriseHourAngle::PolarDay => println!("  Sun stays up"),
        SunriseHourAngle::PolarNight => println!("  Sun stays down"),
    }

    // Approximate model from a day of year
    let day_of_year = time::day_of_year(2024, 6, 21);
    println!("\nApproximate model (day {day_of_year}):");
    println!(
        "  Equation of time: {:.3} min",
        approximate::alternate_equation_of_time(day_of_year).expect("valid day")
    );
    println!(
        "  Declination: {:.3}°",
        approximate::alternate_declination(day_of_year)
            .expect("valid day")
            .value()
    );

    let locations = [
        ("Vienna", 48.21, 16.37),
        ("San Francisco", 37.7749, -122.4194),
        ("Sydney", -33.8688, 151.2093),
    ];

    println!("\nSun at 12:00 UTC:");
    for (name, lat, lon) in locations {
        let position = GeoPosition::new(lat, lon).expect("valid coordinates");
        let sample = approximate::solar_position(position, day_of_year, 720.0, Some(0.0))
            .expect("valid inputs");
        println!(
            "  {name} - Azimuth: {:.1}°, Elevation: {:.1}°",
            sample.azimuth().to_degrees().value(),
            sample.elevation().to_degrees().value()
        );
    }
}
