//! Model selection.
//!
//! Callers pick a model by the accuracy and call rate they need, not by which
//! module they import: [`Strategy::Precision`] for charts and tables,
//! [`Strategy::Approximate`] for per-frame animation.

use crate::time::CivilInstant;
use crate::types::{GeoPosition, SolarPositionSample};
use crate::units::Degrees;
use crate::{Error, approximate, precision};
use core::fmt;
use core::str::FromStr;

/// Which solar model evaluates a request.
///
/// # Example
/// ```
/// use solar_ephemeris::{CivilInstant, GeoPosition, Strategy};
///
/// let position = GeoPosition::new(51.51, -0.06).unwrap();
/// let instant = CivilInstant::new(2022, 6, 21, 13, 0, 0.0, 1.0).unwrap();
///
/// let strategy: Strategy = "approximate".parse().unwrap();
/// let fast = strategy.solar_position(position, &instant);
/// let precise = Strategy::Precision.solar_position(position, &instant);
/// assert!((fast.elevation().value() - precise.elevation().value()).abs() < 0.02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// NOAA orbital-element series, see [`crate::precision`].
    #[default]
    Precision,
    /// Day-of-year harmonics, see [`crate::approximate`].
    Approximate,
}

impl Strategy {
    /// Equation of time in minutes.
    #[must_use]
    pub fn equation_of_time(self, instant: &CivilInstant) -> f64 {
        match self {
            Self::Precision => precision::calculate_equation_of_time(instant),
            Self::Approximate => approximate::equation_of_time_unchecked(instant.day_of_year()),
        }
    }

    /// Solar declination in degrees.
    #[must_use]
    pub fn declination(self, instant: &CivilInstant) -> Degrees {
        match self {
            Self::Precision => precision::calculate_solar_declination(instant),
            Self::Approximate => approximate::declination_unchecked(instant.day_of_year()),
        }
    }

    /// Sun position at the instant.
    ///
    /// The approximate model reads the instant's day of year, its minutes since
    /// local midnight and its UTC offset.
    #[must_use]
    pub fn solar_position(self, position: GeoPosition, instant: &CivilInstant) -> SolarPositionSample {
        match self {
            Self::Precision => precision::solar_position(position, instant),
            Self::Approximate => approximate::solar_position_unchecked(
                position,
                instant.day_of_year(),
                instant.elapsed_minutes(),
                instant.utc_offset(),
            ),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Precision => "precision",
            Self::Approximate => "approximate",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parses `precision` or `approximate`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("precision") {
            Ok(Self::Precision)
        } else if s.eq_ignore_ascii_case("approximate") {
            Ok(Self::Approximate)
        } else {
            Err(Error::UnknownStrategy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("precision".parse::<Strategy>(), Ok(Strategy::Precision));
        assert_eq!(" Approximate ".parse::<Strategy>(), Ok(Strategy::Approximate));
        assert_eq!("fast".parse::<Strategy>(), Err(Error::UnknownStrategy));
        assert_eq!(Strategy::Approximate.name(), "approximate");
        assert_eq!(Strategy::default(), Strategy::Precision);
    }

    #[test]
    fn test_precision_dispatch() {
        let instant = CivilInstant::new(2022, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert_eq!(
            Strategy::Precision.equation_of_time(&instant),
            precision::calculate_equation_of_time(&instant)
        );
        assert_eq!(
            Strategy::Precision.declination(&instant),
            precision::calculate_solar_declination(&instant)
        );
    }

    #[test]
    fn test_approximate_dispatch_reads_instant() {
        let position = GeoPosition::new(40.0, -105.0).unwrap();
        let instant = CivilInstant::new(2021, 6, 21, 13, 0, 0.0, -7.0).unwrap();

        assert_eq!(
            Strategy::Approximate.equation_of_time(&instant),
            approximate::alternate_equation_of_time(172).unwrap()
        );
        assert_eq!(
            Strategy::Approximate.declination(&instant),
            approximate::alternate_declination(172).unwrap()
        );
        assert_eq!(
            Strategy::Approximate.solar_position(position, &instant),
            approximate::solar_position(position, 172, 780.0, Some(-7.0)).unwrap()
        );
    }

    #[test]
    fn test_models_agree_roughly() {
        let position = GeoPosition::new(-33.87, 151.21).unwrap();
        for month in 1..=12 {
            let instant = CivilInstant::new(2023, month, 15, 12, 0, 0.0, 10.0).unwrap();
            let precise = Strategy::Precision.declination(&instant).value();
            let fast = Strategy::Approximate.declination(&instant).value();
            assert!((precise - fast).abs() < 2.0, "month {month}: {precise} vs {fast}");

            let precise = Strategy::Precision.equation_of_time(&instant);
            let fast = Strategy::Approximate.equation_of_time(&instant);
            assert!((precise - fast).abs() < 1.5, "month {month}: {precise} vs {fast}");

            let precise = Strategy::Precision.solar_position(position, &instant);
            let fast = Strategy::Approximate.solar_position(position, &instant);
            assert!((precise.elevation().value() - fast.elevation().value()).abs() < 0.05);
        }
    }
}
