//! Error types for the solar ephemeris engine.
//!
//! Every error here is an invalid-argument condition detected before any
//! computation starts. Polar day and polar night are *not* errors; they are
//! ordinary results (see [`crate::SunriseResult`]).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Lowest accepted UTC offset in hours.
pub const MIN_UTC_OFFSET: f64 = -14.0;

/// Highest accepted UTC offset in hours.
pub const MAX_UTC_OFFSET: f64 = 14.0;

/// Errors that can occur when calling into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid day of year (must be between 1 and 366).
    InvalidDayOfYear {
        /// The invalid day of year provided.
        value: u16,
    },
    /// Invalid elapsed minutes since local midnight (must be in [0, 1440)).
    InvalidElapsedMinutes {
        /// The invalid minute count provided.
        value: f64,
    },
    /// Invalid UTC offset (must be between -14 and +14 hours).
    InvalidUtcOffset {
        /// The invalid offset provided, in hours.
        value: f64,
    },
    /// Invalid elevation angle (must be between -90 and +90 degrees).
    InvalidElevationAngle {
        /// The invalid elevation angle provided.
        value: f64,
    },
    /// Strategy name other than `precision` or `approximate`.
    UnknownStrategy,
    /// Invalid calendar date or clock time.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidElapsedMinutes { value } => {
                write!(
                    f,
                    "invalid elapsed minutes {value} (must be at least 0 and below 1440)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid UTC offset {value} h (must be between -14 h and +14 h)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::UnknownStrategy => {
                f.write_str("unknown strategy (expected \"precision\" or \"approximate\")")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid day-of-year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u16) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid elapsed-minutes error.
    #[must_use]
    pub const fn invalid_elapsed_minutes(value: f64) -> Self {
        Self::InvalidElapsedMinutes { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a day of year (1 to 366).
///
/// # Errors
/// Returns `InvalidDayOfYear` for 0 or anything above 366.
pub fn check_day_of_year(day_of_year: u16) -> Result<()> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}

/// Validates minutes elapsed since local midnight, `0 <= minutes < 1440`.
///
/// # Errors
/// Returns `InvalidElapsedMinutes` for negative, non-finite or full-day values.
pub fn check_elapsed_minutes(minutes: f64) -> Result<()> {
    if !(0.0..1440.0).contains(&minutes) {
        return Err(Error::invalid_elapsed_minutes(minutes));
    }
    Ok(())
}

/// Validates a UTC offset in hours (-14 to +14).
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is outside -14 to +14 hours or not finite.
pub fn check_utc_offset(hours: f64) -> Result<()> {
    if !(MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&hours) {
        return Err(Error::invalid_utc_offset(hours));
    }
    Ok(())
}
