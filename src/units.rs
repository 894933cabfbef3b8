//! Angle newtypes that make the unit of every returned angle explicit.
//!
//! The precision model reports declination and elevation in degrees, while the
//! approximate model reports elevation, zenith and azimuth in radians. Both are
//! kept as-is; converting between them is always an explicit call.

use crate::math::{degrees_to_radians, radians_to_degrees};

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Degrees(f64);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Radians(f64);

impl Degrees {
    /// Wraps a raw value in degrees.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value in degrees.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts to radians.
    #[must_use]
    pub const fn to_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }
}

impl Radians {
    /// Wraps a raw value in radians.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value in radians.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts to degrees.
    #[must_use]
    pub const fn to_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }
}

impl From<Degrees> for Radians {
    fn from(degrees: Degrees) -> Self {
        degrees.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(radians: Radians) -> Self {
        radians.to_degrees()
    }
}
