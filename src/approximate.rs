//! Approximate harmonic solar model.
//!
//! A handful of sine and cosine terms in the day of year, cheap enough to be
//! evaluated once per frame while a time slider is dragged. Sub-degree
//! accuracy; use [`crate::precision`] when that matters.
//!
//! Angles of the sun's position are returned in **radians** (declination and
//! hour angle stay in degrees). Every public function validates its raw
//! arguments; passing `None` as the UTC offset estimates it from longitude.
//!
//! # Example
//! ```
//! use solar_ephemeris::{approximate, GeoPosition};
//!
//! let london = GeoPosition::new(51.51, -0.06).unwrap();
//!
//! // 21 June, 13:00 on a UTC+1 clock
//! let sample = approximate::solar_position(london, 172, 780.0, Some(1.0)).unwrap();
//! assert!(sample.is_sun_up());
//! assert!((sample.elevation().to_degrees().value() - 61.9).abs() < 1.0);
//! ```

use crate::error::{check_day_of_year, check_elapsed_minutes, check_utc_offset};
use crate::math::{PI, cos, sin};
use crate::types::{GeoPosition, SolarPositionSample};
use crate::units::{Degrees, Radians};
use crate::Result;

/// Radians the Earth advances along its orbit per day, on a 365-day year.
const RADIANS_PER_DAY: f64 = 2.0 * PI / 365.0;

/// Day of year of the March equinox the harmonics are phased on.
const EQUINOX_DAY: f64 = 81.0;

fn orbit_angle(day_of_year: u16) -> f64 {
    RADIANS_PER_DAY * (f64::from(day_of_year) - EQUINOX_DAY)
}

fn resolve_utc_offset(position: GeoPosition, utc_offset: Option<f64>) -> Result<f64> {
    match utc_offset {
        Some(hours) => {
            check_utc_offset(hours)?;
            Ok(hours)
        }
        None => Ok(position.estimated_utc_offset()),
    }
}

fn check_day_and_minutes(day_of_year: u16, elapsed_minutes: f64) -> Result<()> {
    check_day_of_year(day_of_year)?;
    check_elapsed_minutes(elapsed_minutes)
}

/// Equation of time in minutes, `9.87·sin(2B) − 7.53·cos(B) − 1.5·sin(B)`.
///
/// `B = (2π/365)·(day_of_year − 81)`.
///
/// # Errors
/// Returns `InvalidDayOfYear` outside 1 to 366.
///
/// # Example
/// ```
/// # use solar_ephemeris::approximate::alternate_equation_of_time;
/// assert_eq!(alternate_equation_of_time(81).unwrap(), -7.53);
/// ```
pub fn alternate_equation_of_time(day_of_year: u16) -> Result<f64> {
    check_day_of_year(day_of_year)?;
    Ok(equation_of_time_unchecked(day_of_year))
}

pub(crate) fn equation_of_time_unchecked(day_of_year: u16) -> f64 {
    let b = orbit_angle(day_of_year);
    9.87 * sin(2.0 * b) - 7.53 * cos(b) - 1.5 * sin(b)
}

/// Solar declination, `23.45°·sin((2π/365)·(day_of_year − 81))`.
///
/// # Errors
/// Returns `InvalidDayOfYear` outside 1 to 366.
pub fn alternate_declination(day_of_year: u16) -> Result<Degrees> {
    check_day_of_year(day_of_year)?;
    Ok(declination_unchecked(day_of_year))
}

pub(crate) fn declination_unchecked(day_of_year: u16) -> Degrees {
    Degrees::new(23.45 * sin(orbit_angle(day_of_year)))
}

/// Local solar time in hours.
///
/// `(elapsed_minutes + 4·(longitude − 15·utc_offset) + equation_of_time) / 60`
///
/// # Errors
/// Returns `InvalidDayOfYear`, `InvalidElapsedMinutes` or `InvalidUtcOffset`.
pub fn local_solar_time(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: Option<f64>,
) -> Result<f64> {
    check_day_and_minutes(day_of_year, elapsed_minutes)?;
    let utc_offset = resolve_utc_offset(position, utc_offset)?;
    Ok(local_solar_time_unchecked(
        position,
        day_of_year,
        elapsed_minutes,
        utc_offset,
    ))
}

fn local_solar_time_unchecked(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: f64,
) -> f64 {
    let local_meridian = 15.0 * utc_offset;
    let time_correction =
        4.0 * (position.longitude() - local_meridian) + equation_of_time_unchecked(day_of_year);
    (elapsed_minutes + time_correction) / 60.0
}

/// Hour angle in degrees, `15·(local_solar_time − 12)`; negative in the morning.
///
/// # Errors
/// Returns `InvalidDayOfYear`, `InvalidElapsedMinutes` or `InvalidUtcOffset`.
pub fn hour_angle(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: Option<f64>,
) -> Result<Degrees> {
    let solar_time = local_solar_time(position, day_of_year, elapsed_minutes, utc_offset)?;
    Ok(Degrees::new(15.0 * (solar_time - 12.0)))
}

fn hour_angle_unchecked(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: f64,
) -> Degrees {
    let solar_time =
        local_solar_time_unchecked(position, day_of_year, elapsed_minutes, utc_offset);
    Degrees::new(15.0 * (solar_time - 12.0))
}

/// Elevation angle of the sun in radians.
///
/// # Errors
/// Returns `InvalidDayOfYear`, `InvalidElapsedMinutes` or `InvalidUtcOffset`.
pub fn elevation_angle(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: Option<f64>,
) -> Result<Radians> {
    solar_position(position, day_of_year, elapsed_minutes, utc_offset)
        .map(|sample| sample.elevation())
}

/// Zenith angle in radians, `π/2 − elevation`.
///
/// # Errors
/// Returns `InvalidDayOfYear`, `InvalidElapsedMinutes` or `InvalidUtcOffset`.
pub fn zenith_angle(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: Option<f64>,
) -> Result<Radians> {
    solar_position(position, day_of_year, elapsed_minutes, utc_offset)
        .map(|sample| sample.zenith())
}

/// Azimuth in radians clockwise from north; afternoon values lie in (π, 2π).
///
/// # Errors
/// Returns `InvalidDayOfYear`, `InvalidElapsedMinutes` or `InvalidUtcOffset`.
pub fn azimuth_angle(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: Option<f64>,
) -> Result<Radians> {
    solar_position(position, day_of_year, elapsed_minutes, utc_offset)
        .map(|sample| sample.azimuth())
}

/// Elevation, zenith and azimuth from one evaluation of declination and hour angle.
///
/// # Errors
/// Returns `InvalidDayOfYear` outside 1 to 366, `InvalidElapsedMinutes` outside
/// [0, 1440) and `InvalidUtcOffset` for an explicit offset outside -14 to +14 hours.
pub fn solar_position(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: Option<f64>,
) -> Result<SolarPositionSample> {
    check_day_and_minutes(day_of_year, elapsed_minutes)?;
    let utc_offset = resolve_utc_offset(position, utc_offset)?;
    Ok(solar_position_unchecked(
        position,
        day_of_year,
        elapsed_minutes,
        utc_offset,
    ))
}

pub(crate) fn solar_position_unchecked(
    position: GeoPosition,
    day_of_year: u16,
    elapsed_minutes: f64,
    utc_offset: f64,
) -> SolarPositionSample {
    let declination = declination_unchecked(day_of_year);
    let hour_angle = hour_angle_unchecked(position, day_of_year, elapsed_minutes, utc_offset);
    SolarPositionSample::from_equatorial(position.latitude(), declination, hour_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn london() -> GeoPosition {
        GeoPosition::new(51.51, -0.06).unwrap()
    }

    #[test]
    fn test_equation_of_time_at_equinox_day() {
        assert_eq!(alternate_equation_of_time(81).unwrap(), -7.53);
    }

    #[test]
    fn test_declination_extremes() {
        assert!(alternate_declination(81).unwrap().value().abs() < 0.5);
        assert!((alternate_declination(172).unwrap().value() - 23.45).abs() < 0.5);
        assert!((alternate_declination(355).unwrap().value() - -23.45).abs() < 0.5);

        for day in 1..=366 {
            assert!(alternate_declination(day).unwrap().value().abs() <= 23.45);
        }
    }

    #[test]
    fn test_day_of_year_domain() {
        assert_eq!(
            alternate_equation_of_time(0),
            Err(Error::invalid_day_of_year(0))
        );
        assert!(alternate_declination(367).is_err());
        assert!(alternate_declination(366).is_ok());
    }

    #[test]
    fn test_elapsed_minutes_domain() {
        assert_eq!(
            solar_position(london(), 100, 1440.0, None),
            Err(Error::invalid_elapsed_minutes(1440.0))
        );
        assert!(solar_position(london(), 100, -1.0, None).is_err());
        assert!(solar_position(london(), 100, 1439.5, None).is_ok());
    }

    #[test]
    fn test_explicit_offset_validated() {
        assert_eq!(
            hour_angle(london(), 100, 600.0, Some(15.0)),
            Err(Error::invalid_utc_offset(15.0))
        );
    }

    #[test]
    fn test_offset_defaults_to_longitude_estimate() {
        let denver = GeoPosition::new(39.74, -104.99).unwrap();
        assert_eq!(
            local_solar_time(denver, 172, 720.0, None),
            local_solar_time(denver, 172, 720.0, Some(-7.0))
        );
    }

    #[test]
    fn test_local_solar_time_formula() {
        let greenwich = GeoPosition::new(51.48, 0.0).unwrap();
        let solar_time = local_solar_time(greenwich, 81, 720.0, Some(0.0)).unwrap();
        assert!((solar_time - (720.0 - 7.53) / 60.0).abs() < 1e-12);

        let angle = hour_angle(greenwich, 81, 720.0, Some(0.0)).unwrap();
        assert!((angle.value() - 15.0 * ((720.0 - 7.53) / 60.0 - 12.0)).abs() < 1e-12);
    }

    #[test]
    fn test_london_equinox_reference() {
        let sample = solar_position(london(), 81, 720.0, Some(0.0)).unwrap();
        assert!((sample.elevation().value() - 0.6713203766608227).abs() < 1e-9);
        assert!((sample.zenith().value() - 0.8994759501340739).abs() < 1e-9);
        assert!((sample.azimuth().value() - 3.0982885957249184).abs() < 1e-9);
    }

    #[test]
    fn test_individual_angles_match_bundle() {
        let position = GeoPosition::new(-33.87, 151.21).unwrap();
        let sample = solar_position(position, 200, 845.0, Some(10.0)).unwrap();

        assert_eq!(
            elevation_angle(position, 200, 845.0, Some(10.0)).unwrap(),
            sample.elevation()
        );
        assert_eq!(
            zenith_angle(position, 200, 845.0, Some(10.0)).unwrap(),
            sample.zenith()
        );
        assert_eq!(
            azimuth_angle(position, 200, 845.0, Some(10.0)).unwrap(),
            sample.azimuth()
        );
        assert_eq!(
            sample.zenith().value(),
            PI / 2.0 - sample.elevation().value()
        );
    }

    #[test]
    fn test_morning_east_afternoon_west() {
        let morning = solar_position(london(), 172, 9.0 * 60.0, Some(1.0)).unwrap();
        let afternoon = solar_position(london(), 172, 17.0 * 60.0, Some(1.0)).unwrap();
        assert!(morning.azimuth().value() < PI);
        assert!(afternoon.azimuth().value() > PI);
    }

    #[test]
    fn test_midnight_sun_below_horizon() {
        let sample = solar_position(london(), 355, 0.0, Some(0.0)).unwrap();
        assert!(!sample.is_sun_up());
        assert!(sample.elevation().value() > -PI / 2.0);
    }
}
