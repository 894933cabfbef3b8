//! Precision solar model (NOAA / Meeus low-accuracy series).
//!
//! Equation of time, declination, solar noon, sunrise, sunset and maximum
//! elevation for a calendar date, plus the instantaneous sun position derived
//! from the same orbital elements. Accurate to well under a minute of time
//! for dates between 1900 and 2100.
//!
//! Angles are returned in **degrees** (unlike [`crate::approximate`]); the
//! [`SolarPositionSample`] returned by [`solar_position`] carries radians like
//! every other position sample.
//!
//! # Example
//! ```
//! use solar_ephemeris::{precision, CivilInstant, GeoPosition};
//!
//! let london = GeoPosition::new(51.51, -0.06).unwrap();
//! let instant = CivilInstant::new(2022, 1, 1, 12, 0, 0.0, 0.0).unwrap();
//!
//! let sample = precision::ephemeris_sample(london, &instant);
//! assert!((sample.equation_of_time_minutes() - -3.56).abs() < 0.05);
//! assert!((sample.solar_declination().value() - -22.98).abs() < 0.05);
//! assert!(sample.sunrise().is_some());
//! ```

#![allow(clippy::unreadable_literal)]

use crate::math::{
    acos, asin, clamp_unit, cos, degrees_to_radians, radians_to_degrees, sin, tan,
};
use crate::orbit::OrbitalElements;
use crate::time::CivilInstant;
use crate::types::{
    DayFraction, GeoPosition, Horizon, SolarEphemerisSample, SolarPositionSample,
    SunriseHourAngle, SunriseResult,
};
use crate::units::Degrees;

/// Equation of time in minutes from the orbital elements.
///
/// Positive when apparent solar time runs ahead of mean solar time. The
/// result depends on the date only, never on the observer's position.
#[must_use]
pub fn equation_of_time(
    mean_longitude: f64,
    mean_anomaly: f64,
    eccentricity: f64,
    variation_y: f64,
) -> f64 {
    let l0 = degrees_to_radians(mean_longitude);
    let m = degrees_to_radians(mean_anomaly);
    let e = eccentricity;
    let y = variation_y;

    let radians = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    4.0 * radians_to_degrees(radians)
}

/// Solar declination from apparent longitude and corrected obliquity, both in degrees.
#[must_use]
pub fn solar_declination(apparent_longitude: f64, corrected_obliquity: f64) -> Degrees {
    let sin_declination = sin(degrees_to_radians(corrected_obliquity))
        * sin(degrees_to_radians(apparent_longitude));
    Degrees::new(radians_to_degrees(asin(clamp_unit(sin_declination))))
}

/// Solar noon as a day fraction of the local clock.
///
/// `(720 − 4·longitude − equation_of_time + 60·utc_offset) / 1440`
#[must_use]
pub fn solar_noon(longitude: f64, equation_of_time: f64, utc_offset: f64) -> DayFraction {
    DayFraction::from_minutes(720.0 - 4.0 * longitude - equation_of_time + utc_offset * 60.0)
}

/// Hour angle of standard sunrise (solar zenith 90.833°).
///
/// An `acos` argument below -1 means the sun stays up all day, above 1 that it
/// never rises; both are reported as polar variants rather than a number.
///
/// # Example
/// ```
/// use solar_ephemeris::precision::hour_angle_sunrise;
/// use solar_ephemeris::{Degrees, SunriseHourAngle};
///
/// let polar = hour_angle_sunrise(80.0, Degrees::new(-23.44));
/// assert_eq!(polar, SunriseHourAngle::PolarNight);
/// ```
#[must_use]
pub fn hour_angle_sunrise(latitude: f64, declination: Degrees) -> SunriseHourAngle {
    hour_angle_for_horizon(latitude, declination, Horizon::SunriseSunset)
}

/// Hour angle at which the sun crosses the given horizon.
///
/// A `Horizon::Custom` angle of NaN is reported as `PolarNight`.
#[must_use]
pub fn hour_angle_for_horizon(
    latitude: f64,
    declination: Degrees,
    horizon: Horizon,
) -> SunriseHourAngle {
    let phi = degrees_to_radians(latitude);
    let delta = declination.to_radians().value();
    let zenith = degrees_to_radians(horizon.zenith_angle());

    let cos_hour_angle = cos(zenith) / (cos(phi) * cos(delta)) - tan(phi) * tan(delta);

    // a NaN horizon angle has no crossing
    if cos_hour_angle.is_nan() {
        SunriseHourAngle::PolarNight
    } else if cos_hour_angle < -1.0 {
        SunriseHourAngle::PolarDay
    } else if cos_hour_angle > 1.0 {
        SunriseHourAngle::PolarNight
    } else {
        SunriseHourAngle::Regular(Degrees::new(radians_to_degrees(acos(cos_hour_angle))))
    }
}

/// Sunrise as a day fraction, `solar_noon − 4·hour_angle` minutes.
#[must_use]
pub fn sunrise_time(hour_angle: Degrees, solar_noon: DayFraction) -> DayFraction {
    DayFraction::from_minutes(solar_noon.minutes() - hour_angle.value() * 4.0)
}

/// Sunset as a day fraction, `solar_noon + 4·hour_angle` minutes.
#[must_use]
pub fn sunset_time(hour_angle: Degrees, solar_noon: DayFraction) -> DayFraction {
    DayFraction::from_minutes(solar_noon.minutes() + hour_angle.value() * 4.0)
}

/// Maximum (noon) solar elevation in degrees.
///
/// `90 − latitude + declination` north of the equator, otherwise
/// `90 + latitude − declination`. Values above 90 occur when the noon sun
/// passes on the polar side of the zenith; they are returned as-is.
#[must_use]
pub fn max_solar_elevation(latitude: f64, declination: Degrees) -> Degrees {
    if latitude > 0.0 {
        Degrees::new(90.0 - latitude + declination.value())
    } else {
        Degrees::new(90.0 + latitude - declination.value())
    }
}

fn elements(instant: &CivilInstant) -> OrbitalElements {
    OrbitalElements::from_julian_century(instant.julian_century())
}

fn equation_of_time_from(elements: &OrbitalElements) -> f64 {
    equation_of_time(
        elements.mean_longitude,
        elements.mean_anomaly,
        elements.eccentricity,
        elements.variation_y,
    )
}

fn declination_from(elements: &OrbitalElements) -> Degrees {
    solar_declination(elements.apparent_longitude, elements.corrected_obliquity)
}

/// Equation of time in minutes for a civil instant.
#[must_use]
pub fn calculate_equation_of_time(instant: &CivilInstant) -> f64 {
    equation_of_time_from(&elements(instant))
}

/// Solar declination for a civil instant.
#[must_use]
pub fn calculate_solar_declination(instant: &CivilInstant) -> Degrees {
    declination_from(&elements(instant))
}

/// Solar noon for a position on the instant's date, in the instant's UTC offset.
#[must_use]
pub fn calculate_solar_noon(position: GeoPosition, instant: &CivilInstant) -> DayFraction {
    solar_noon(
        position.longitude(),
        calculate_equation_of_time(instant),
        instant.utc_offset(),
    )
}

/// Maximum solar elevation for a position on the instant's date.
#[must_use]
pub fn calculate_max_solar_elevation(position: GeoPosition, instant: &CivilInstant) -> Degrees {
    max_solar_elevation(position.latitude(), calculate_solar_declination(instant))
}

/// Sunrise, solar noon and sunset from a single orbital-element evaluation.
///
/// Times are day fractions of the instant's local clock and may fall outside
/// [0, 1) for locations far from their time-zone meridian.
#[must_use]
pub fn sunrise_sunset(position: GeoPosition, instant: &CivilInstant) -> SunriseResult {
    sunrise_sunset_for_horizon(position, instant, Horizon::SunriseSunset)
}

/// Like [`sunrise_sunset`], for a twilight or custom horizon.
///
/// # Example
/// ```
/// use solar_ephemeris::{precision, CivilInstant, GeoPosition, Horizon};
///
/// let london = GeoPosition::new(51.51, -0.06).unwrap();
/// let instant = CivilInstant::at_midnight(2022, 6, 21, 1.0).unwrap();
///
/// let sunrise = precision::sunrise_sunset(london, &instant);
/// let dawn = precision::sunrise_sunset_for_horizon(london, &instant, Horizon::CivilTwilight);
/// assert!(dawn.sunrise().unwrap() < sunrise.sunrise().unwrap());
/// ```
#[must_use]
pub fn sunrise_sunset_for_horizon(
    position: GeoPosition,
    instant: &CivilInstant,
    horizon: Horizon,
) -> SunriseResult {
    let elements = elements(instant);
    sunrise_sunset_from(position, instant, &elements, horizon)
}

fn sunrise_sunset_from(
    position: GeoPosition,
    instant: &CivilInstant,
    elements: &OrbitalElements,
    horizon: Horizon,
) -> SunriseResult {
    let transit = solar_noon(
        position.longitude(),
        equation_of_time_from(elements),
        instant.utc_offset(),
    );
    let declination = declination_from(elements);

    match hour_angle_for_horizon(position.latitude(), declination, horizon) {
        SunriseHourAngle::Regular(hour_angle) => SunriseResult::RegularDay {
            sunrise: sunrise_time(hour_angle, transit),
            transit,
            sunset: sunset_time(hour_angle, transit),
        },
        SunriseHourAngle::PolarDay => SunriseResult::AllDay { transit },
        SunriseHourAngle::PolarNight => SunriseResult::AllNight { transit },
    }
}

/// Every precision-model output for one position and date.
#[must_use]
pub fn ephemeris_sample(position: GeoPosition, instant: &CivilInstant) -> SolarEphemerisSample {
    let elements = elements(instant);
    let equation_of_time = equation_of_time_from(&elements);
    let declination = declination_from(&elements);
    let sunrise_sunset =
        sunrise_sunset_from(position, instant, &elements, Horizon::SunriseSunset);

    SolarEphemerisSample::new(
        equation_of_time,
        declination,
        *sunrise_sunset.transit(),
        sunrise_sunset,
        max_solar_elevation(position.latitude(), declination),
    )
}

/// Hour angle in degrees from true solar time, `true_solar_minutes / 4 − 180`.
fn hour_angle(
    position: GeoPosition,
    instant: &CivilInstant,
    equation_of_time: f64,
) -> Degrees {
    let time_correction =
        4.0 * (position.longitude() - 15.0 * instant.utc_offset()) + equation_of_time;
    let true_solar_minutes = instant.elapsed_minutes() + time_correction;
    Degrees::new(true_solar_minutes / 4.0 - 180.0)
}

/// Sun position at the instant, using precision declination and equation of time.
///
/// The orbital elements follow the hour-granular Julian Day; the hour angle
/// uses the full clock time including minutes and seconds.
///
/// # Example
/// ```
/// use solar_ephemeris::{precision, CivilInstant, GeoPosition};
///
/// let position = GeoPosition::new(51.51, -0.06).unwrap();
/// let instant = CivilInstant::new(2022, 6, 21, 13, 0, 0.0, 1.0).unwrap();
///
/// let sample = precision::solar_position(position, &instant);
/// assert!(sample.is_sun_up());
/// assert!((sample.elevation().to_degrees().value() - 61.9).abs() < 0.5);
/// ```
#[must_use]
pub fn solar_position(position: GeoPosition, instant: &CivilInstant) -> SolarPositionSample {
    let elements = elements(instant);
    let declination = declination_from(&elements);
    let hour_angle = hour_angle(position, instant, equation_of_time_from(&elements));

    SolarPositionSample::from_equatorial(position.latitude(), declination, hour_angle)
}
