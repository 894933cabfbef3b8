//! # Solar Ephemeris
//!
//! Equation of time, solar declination, solar noon, sunrise/sunset, maximum
//! elevation and instantaneous sun position for any point on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Two complementary models are provided:
//! - **Precision**: NOAA formulation of the Meeus low-accuracy solar series, driven by a
//!   Julian Century. Used for yearly charts and day tables.
//! - **Approximate**: a few harmonics of the day of year. Cheap enough for every frame of
//!   an animated time slider; sub-degree accuracy.
//!
//! Pick one at run time with [`Strategy`].
//!
//! ## Features
//!
//! - Pure functions over validated, immutable inputs; no global state, no I/O
//! - Polar day and polar night are ordinary results, never NaN
//! - Every returned angle carries its unit: [`Degrees`] for declination and elevation limits,
//!   [`Radians`] for position samples
//! - `std` or `no_std`, with or without `chrono`, math via native or `libm`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions; enables [`series`]
//! - `chrono` (default): Build a [`CivilInstant`] from `chrono` date/time types
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for all output types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-ephemeris = "0.1"
//!
//! # JSON output for a web API
//! solar-ephemeris = { version = "0.1", features = ["serde"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell. Ch. 7, 22, 25, 28.
//! - NOAA Global Monitoring Laboratory, Solar Calculator. <https://gml.noaa.gov/grad/solcalc/>
//! - Honsberg, C.; Bowden, S. Photovoltaics Education (PVEducation), "The Sun's Position".
//!   <https://www.pveducation.org/pvcdrom/properties-of-sunlight/the-suns-position>
//!
//! ## Quick Start
//!
//! ### Daily ephemeris (precision model)
//! ```rust
//! use solar_ephemeris::{precision, CivilInstant, GeoPosition, SunriseResult};
//!
//! let london = GeoPosition::new(51.51, -0.06).unwrap();
//! let instant = CivilInstant::at_midnight(2022, 6, 21, 1.0).unwrap();
//!
//! let sample = precision::ephemeris_sample(london, &instant);
//! println!("Equation of time: {:.2} min", sample.equation_of_time_minutes());
//! println!("Declination: {:.2}°", sample.solar_declination().value());
//!
//! match sample.sunrise_sunset() {
//!     SunriseResult::RegularDay { sunrise, transit, sunset } => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Solar noon: {transit}");
//!         println!("Sunset: {sunset}");
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### Sun position for a slider (approximate model)
//! ```rust
//! use solar_ephemeris::{approximate, GeoPosition};
//!
//! let position = GeoPosition::new(37.7749, -122.4194).unwrap();
//!
//! for minutes in (0..1440).step_by(60) {
//!     let sample = approximate::solar_position(position, 172, f64::from(minutes), None).unwrap();
//!     let [x, y, z] = sample.scene_coordinates(10.0);
//!     println!("{minutes:4} min: elevation {:.3} rad, at ({x:.2}, {y:.2}, {z:.2})",
//!         sample.elevation().value());
//! }
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{CivilInstant, GeoPosition, Strategy};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let instant = CivilInstant::from_datetime(&datetime).unwrap();
//! let vienna = GeoPosition::new(48.21, 16.37).unwrap();
//!
//! let position = Strategy::Precision.solar_position(vienna, &instant);
//! println!("Azimuth: {:.3}°", position.azimuth().to_degrees().value());
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0 = North, measured clockwise (0 to 2π)
//! - **Zenith angle**: 0 = directly overhead, π/2 = horizon
//! - **Elevation angle**: 0 = horizon, π/2 = directly overhead
//! - **Times of day**: [`DayFraction`] of the caller's local clock, 0.5 = 12:00:00

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::strategy::Strategy;
pub use crate::time::CivilInstant;
pub use crate::types::{
    DayFraction, GeoPosition, Horizon, SolarEphemerisSample, SolarPositionSample,
    SunriseHourAngle, SunriseResult,
};
pub use crate::units::{Degrees, Radians};

// Model modules
pub mod approximate;
pub mod precision;
pub mod strategy;

// Core modules
pub mod error;
pub mod orbit;
pub mod types;
pub mod units;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "std")]
pub mod series;
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_chrono_instants_in_both_models() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let local = CivilInstant::from_datetime(&datetime_fixed).unwrap();
        let utc = CivilInstant::from_datetime(&datetime_utc).unwrap();
        assert_eq!(local.utc_offset(), -7.0);
        assert_eq!(utc.utc_offset(), 0.0);

        let san_francisco = GeoPosition::new(37.7749, -122.4194).unwrap();
        for strategy in [Strategy::Precision, Strategy::Approximate] {
            let position1 = strategy.solar_position(san_francisco, &local);
            let position2 = strategy.solar_position(san_francisco, &utc);

            // the same moment seen from two clocks; the Julian Day adds the
            // offset to the local hour, so the precision elements differ slightly
            assert!((position1.azimuth().value() - position2.azimuth().value()).abs() < 5e-3);
            assert!((position1.zenith().value() - position2.zenith().value()).abs() < 5e-3);

            assert!(position1.azimuth().value() >= 0.0);
            assert!(position1.azimuth().value() <= 2.0 * core::f64::consts::PI);
            assert!(position1.zenith().value() >= 0.0);
            assert!(position1.zenith().value() <= core::f64::consts::PI);
        }
    }
}
