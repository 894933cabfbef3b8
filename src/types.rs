//! Core data types shared by both solar models.

use crate::error::check_coordinates;
use crate::math::{PI, acos, asin, clamp_unit, cos, degrees_to_radians, floor, sin};
use crate::time::estimate_utc_offset_unchecked;
use crate::units::{Degrees, Radians};
use crate::{Error, Result};
use core::fmt;

/// A point on the Earth's surface in decimal degrees.
///
/// Validated on construction and immutable afterwards; passed by value into
/// every calculation.
///
/// # Example
/// ```
/// # use solar_ephemeris::GeoPosition;
/// let london = GeoPosition::new(51.51, -0.06).unwrap();
/// assert_eq!(london.latitude(), 51.51);
/// assert!(GeoPosition::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Creates a position from latitude (-90 to +90) and longitude (-180 to +180).
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Longitude-based UTC offset estimate, `round(longitude / 15)` hours.
    #[must_use]
    pub fn estimated_utc_offset(&self) -> f64 {
        estimate_utc_offset_unchecked(self.longitude)
    }
}

/// Predefined elevation angles for sunrise/sunset calculations.
///
/// Corresponds to different twilight definitions for consistent sunrise, sunset, and twilight calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset: solar zenith of 90.833° (refraction and solar radius)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle in degrees.
    ///
    /// Built directly, the angle is not validated; [`Horizon::custom`] checks
    /// the range. A NaN angle never produces a crossing.
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the solar zenith angle in degrees at which the event occurs.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => 90.833,
            other => 90.0 - other.elevation_angle(),
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::SunriseSunset
    }
}

/// A time of day as a fraction of a day, where 0.5 is 12:00:00.
///
/// Values below 0 belong to the previous day and values of 1 or more to the
/// following day; sunrise and sunset near the date line routinely produce both.
///
/// `Display` renders the wall-clock time within its day as `hh:mm:ss`, each
/// component truncated.
///
/// # Example
/// ```
/// # use solar_ephemeris::DayFraction;
/// assert_eq!(DayFraction::from_fraction(0.5).to_string(), "12:00:00");
/// assert_eq!(DayFraction::from_fraction(1.25).to_string(), "06:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DayFraction(f64);

impl DayFraction {
    /// Wraps a raw day fraction.
    #[must_use]
    pub const fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Creates a day fraction from minutes since midnight.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Self {
        Self(minutes / 1440.0)
    }

    /// Gets the raw fraction; may be negative or ≥ 1.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Gets the time as minutes since midnight of the reference day.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.0 * 1440.0
    }

    /// Gets the time as hours since midnight of the reference day.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.0 * 24.0
    }

    /// Gets the day offset and the fraction within that day (0.0 to < 1.0).
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::DayFraction;
    /// let (offset, within) = DayFraction::from_fraction(-0.25).day_and_fraction();
    /// assert_eq!(offset, -1);
    /// assert!((within - 0.75).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn day_and_fraction(&self) -> (i32, f64) {
        let value = self.0;
        if !value.is_finite() {
            return (0, value);
        }

        let day_offset_raw = floor(value);
        let mut within = value - day_offset_raw;
        let mut day_offset_raw = day_offset_raw;
        if within >= 1.0 {
            within -= 1.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, within)
    }

    /// Hours, minutes and seconds on the wall clock, each truncated.
    ///
    /// Returns `None` for non-finite values.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn clock_components(&self) -> Option<(u32, u32, u32)> {
        if !self.0.is_finite() {
            return None;
        }
        let (_, within) = self.day_and_fraction();

        let hours = within * 24.0;
        let whole_hours = floor(hours);
        let minutes = (hours - whole_hours) * 60.0;
        let whole_minutes = floor(minutes);
        let seconds = (minutes - whole_minutes) * 60.0;

        Some((whole_hours as u32, whole_minutes as u32, floor(seconds) as u32))
    }
}

impl fmt::Display for DayFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.clock_components() {
            Some((hh, mm, ss)) => write!(f, "{hh:02}:{mm:02}:{ss:02}"),
            None => f.write_str("--:--:--"),
        }
    }
}

/// Hour angle of the sunrise/sunset event, or the polar condition preventing it.
///
/// Produced by [`crate::precision::hour_angle_sunrise`]. The polar cases are
/// expected outcomes near the poles around the solstices, not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "degrees", rename_all = "camelCase")
)]
pub enum SunriseHourAngle {
    /// The sun crosses the horizon; half the daylight arc, in degrees.
    Regular(Degrees),
    /// The sun does not set (the `acos` argument fell below -1).
    PolarDay,
    /// The sun does not rise (the `acos` argument rose above 1).
    PolarNight,
}

impl SunriseHourAngle {
    /// The hour angle if the sun rises and sets.
    #[must_use]
    pub const fn degrees(&self) -> Option<Degrees> {
        if let Self::Regular(angle) = self {
            Some(*angle)
        } else {
            None
        }
    }

    /// Checks if this is polar day or polar night.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        !matches!(self, Self::Regular(_))
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// Solar events can vary significantly based on location and time of year,
/// especially at extreme latitudes where polar days and nights occur.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum SunriseResult<T = DayFraction> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the specified horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

/// Output of the precision model for one date and position.
///
/// All fields are derived from a single evaluation of the orbital elements
/// and are independent of each other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SolarEphemerisSample {
    equation_of_time_minutes: f64,
    solar_declination: Degrees,
    solar_noon: DayFraction,
    sunrise_sunset: SunriseResult<DayFraction>,
    max_elevation: Degrees,
}

impl SolarEphemerisSample {
    pub(crate) const fn new(
        equation_of_time_minutes: f64,
        solar_declination: Degrees,
        solar_noon: DayFraction,
        sunrise_sunset: SunriseResult<DayFraction>,
        max_elevation: Degrees,
    ) -> Self {
        Self {
            equation_of_time_minutes,
            solar_declination,
            solar_noon,
            sunrise_sunset,
            max_elevation,
        }
    }

    /// Equation of time in minutes; positive when apparent solar time is ahead of mean time.
    #[must_use]
    pub const fn equation_of_time_minutes(&self) -> f64 {
        self.equation_of_time_minutes
    }

    /// Solar declination in degrees.
    #[must_use]
    pub const fn solar_declination(&self) -> Degrees {
        self.solar_declination
    }

    /// Solar noon as a day fraction.
    #[must_use]
    pub const fn solar_noon(&self) -> DayFraction {
        self.solar_noon
    }

    /// Sunrise, noon and sunset, or the polar condition for the day.
    #[must_use]
    pub const fn sunrise_sunset(&self) -> &SunriseResult<DayFraction> {
        &self.sunrise_sunset
    }

    /// Sunrise as a day fraction, `None` during polar day or night.
    #[must_use]
    pub fn sunrise(&self) -> Option<DayFraction> {
        self.sunrise_sunset.sunrise().copied()
    }

    /// Sunset as a day fraction, `None` during polar day or night.
    #[must_use]
    pub fn sunset(&self) -> Option<DayFraction> {
        self.sunrise_sunset.sunset().copied()
    }

    /// Maximum (noon) solar elevation in degrees.
    #[must_use]
    pub const fn max_elevation(&self) -> Degrees {
        self.max_elevation
    }
}

/// Distance of the elevation sine from ±1 below which the azimuth is undefined.
const ZENITH_TOLERANCE: f64 = 1e-12;

/// Sun position in horizontal coordinates, all angles in **radians**.
///
/// - Elevation: 0 = horizon, π/2 = directly overhead
/// - Zenith: π/2 − elevation, exactly
/// - Azimuth: 0 = North, increasing clockwise to 2π
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPositionSample {
    elevation: Radians,
    zenith: Radians,
    azimuth: Radians,
}

impl SolarPositionSample {
    /// Solves the spherical triangle for the given latitude, declination and hour angle.
    ///
    /// The `acos` in the azimuth picks the eastern solution; a positive hour
    /// angle (afternoon) mirrors it to the western sky. With the sun overhead
    /// (or straight below) the azimuth is undefined and reported as 0.
    pub(crate) fn from_equatorial(
        latitude: f64,
        declination: Degrees,
        hour_angle: Degrees,
    ) -> Self {
        let phi = degrees_to_radians(latitude);
        let delta = declination.to_radians().value();
        let h = hour_angle.to_radians().value();

        let (sin_phi, cos_phi) = (sin(phi), cos(phi));
        let (sin_delta, cos_delta) = (sin(delta), cos(delta));
        let cos_h = cos(h);

        let sin_elevation = clamp_unit(sin_delta * sin_phi + cos_delta * cos_phi * cos_h);
        let elevation = asin(sin_elevation);
        let zenith = PI / 2.0 - elevation;

        // asin loses precision next to 1, so test the sine, not cos(elevation)
        let azimuth = if 1.0 - sin_elevation.abs() < ZENITH_TOLERANCE {
            0.0
        } else {
            let az = acos(clamp_unit(
                (sin_delta * cos_phi - cos_delta * sin_phi * cos_h) / cos(elevation),
            ));
            if hour_angle.value() > 0.0 {
                2.0 * PI - az
            } else {
                az
            }
        };

        Self {
            elevation: Radians::new(elevation),
            zenith: Radians::new(zenith),
            azimuth: Radians::new(azimuth),
        }
    }

    /// Elevation angle in radians.
    #[must_use]
    pub const fn elevation(&self) -> Radians {
        self.elevation
    }

    /// Zenith angle in radians.
    #[must_use]
    pub const fn zenith(&self) -> Radians {
        self.zenith
    }

    /// Azimuth in radians, 0 = North, clockwise.
    #[must_use]
    pub const fn azimuth(&self) -> Radians {
        self.azimuth
    }

    /// Checks if the sun is above the horizon (elevation > 0).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation.value() > 0.0
    }

    /// Y-up Cartesian position of the sun on a sphere of `radius` around the observer.
    ///
    /// Returns `[x, y, z]` with `y` pointing to the zenith:
    /// `x = r·sin(zenith)·cos(azimuth)`, `y = r·cos(zenith)`, `z = r·sin(zenith)·sin(azimuth)`.
    #[must_use]
    pub fn scene_coordinates(&self, radius: f64) -> [f64; 3] {
        let zenith = self.zenith.value();
        let azimuth = self.azimuth.value();
        [
            radius * sin(zenith) * cos(azimuth),
            radius * cos(zenith),
            radius * sin(zenith) * sin(azimuth),
        ]
    }
}
