//! Solar orbital elements as a function of Julian Century.
//!
//! Series from Meeus, "Astronomical Algorithms", ch. 25 (low accuracy), in the
//! form used by the NOAA solar calculator. All angles are degrees; conversion
//! to radians happens at each trigonometric call.

#![allow(clippy::unreadable_literal)]

use crate::math::{cos, degrees_to_radians, polynomial, sin, tan};

/// Longitude of the Moon's ascending node, `125.04° − 1934.136°·T`.
///
/// Shared by the obliquity and apparent-longitude nutation corrections.
fn ascending_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, degrees, reduced with `% 360`.
///
/// The remainder keeps the sign of the dividend, so dates before roughly
/// 1999-12-24 can yield negative values.
#[must_use]
pub fn mean_longitude(t: f64) -> f64 {
    polynomial(&[280.46646, 36000.76983, 0.0003032], t) % 360.0
}

/// Geometric mean anomaly of the Sun, degrees (not reduced).
#[must_use]
pub fn mean_anomaly(t: f64) -> f64 {
    polynomial(&[357.52911, 35999.05029, -0.0001537], t)
}

/// Eccentricity of Earth's orbit (unitless).
#[must_use]
pub fn eccentricity(t: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Mean obliquity of the ecliptic, degrees.
///
/// 23°26′ plus the arcsecond polynomial `21.448″ − 46.815″T − 0.00059″T² + 0.001813″T³`.
#[must_use]
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = polynomial(&[21.448, -46.815, -0.00059, 0.001813], t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Mean obliquity corrected for nutation, degrees.
#[must_use]
pub fn corrected_obliquity(mean_obliquity: f64, t: f64) -> f64 {
    mean_obliquity + 0.00256 * cos(degrees_to_radians(ascending_node(t)))
}

/// The "variation" term `y = tan²(ε/2)` of the equation of time.
#[must_use]
pub fn variation_y(corrected_obliquity: f64) -> f64 {
    let half = tan(degrees_to_radians(corrected_obliquity / 2.0));
    half * half
}

/// Equation of the center, degrees: the three-term sine series in the mean anomaly.
#[must_use]
pub fn equation_of_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * (0.019993 - 0.000101 * t)
        + sin(3.0 * m) * 0.000289
}

/// True geometric longitude of the Sun, degrees.
#[must_use]
pub fn true_longitude(mean_longitude: f64, equation_of_center: f64) -> f64 {
    mean_longitude + equation_of_center
}

/// Apparent longitude of the Sun (aberration and nutation applied), degrees.
#[must_use]
pub fn apparent_longitude(t: f64, true_longitude: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * sin(degrees_to_radians(ascending_node(t)))
}

/// All orbital elements for one Julian Century, evaluated in dependency order.
///
/// Each consumer needs a different subset; computing them together keeps the
/// per-day chart loop to a single pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Julian Century the elements were evaluated for.
    pub julian_century: f64,
    /// Geometric mean longitude, degrees.
    pub mean_longitude: f64,
    /// Geometric mean anomaly, degrees.
    pub mean_anomaly: f64,
    /// Orbital eccentricity.
    pub eccentricity: f64,
    /// Mean obliquity of the ecliptic, degrees.
    pub mean_obliquity: f64,
    /// Corrected obliquity of the ecliptic, degrees.
    pub corrected_obliquity: f64,
    /// `tan²(ε/2)`.
    pub variation_y: f64,
    /// Equation of the center, degrees.
    pub equation_of_center: f64,
    /// True longitude, degrees.
    pub true_longitude: f64,
    /// Apparent longitude, degrees.
    pub apparent_longitude: f64,
}

impl OrbitalElements {
    /// Evaluates every element for Julian Century `t`.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::orbit::OrbitalElements;
    /// let elements = OrbitalElements::from_julian_century(0.0);
    /// assert!((elements.mean_longitude - 280.46646).abs() < 1e-12);
    /// assert!((elements.corrected_obliquity - 23.44).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn from_julian_century(t: f64) -> Self {
        let mean_longitude = mean_longitude(t);
        let mean_anomaly = mean_anomaly(t);
        let eccentricity = eccentricity(t);
        let mean_obliquity = mean_obliquity(t);
        let corrected_obliquity = corrected_obliquity(mean_obliquity, t);
        let variation_y = variation_y(corrected_obliquity);
        let equation_of_center = equation_of_center(t, mean_anomaly);
        let true_longitude = true_longitude(mean_longitude, equation_of_center);
        let apparent_longitude = apparent_longitude(t, true_longitude);

        Self {
            julian_century: t,
            mean_longitude,
            mean_anomaly,
            eccentricity,
            mean_obliquity,
            corrected_obliquity,
            variation_y,
            equation_of_center,
            true_longitude,
            apparent_longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_elements_at_j2000() {
        assert!((mean_longitude(0.0) - 280.46646).abs() < EPSILON);
        assert!((mean_anomaly(0.0) - 357.52911).abs() < EPSILON);
        assert!((eccentricity(0.0) - 0.016708634).abs() < EPSILON);
        assert!((mean_obliquity(0.0) - (23.0 + 26.0 / 60.0 + 21.448 / 3600.0)).abs() < EPSILON);
    }

    #[test]
    fn test_mean_longitude_wraps_like_truncated_remainder() {
        // one century after J2000 the raw value is far beyond 360
        let l0 = mean_longitude(1.0);
        assert!((0.0..360.0).contains(&l0));

        // a century before J2000 the dividend is negative and so is the remainder
        let l0_past = mean_longitude(-1.0);
        assert!(l0_past < 0.0 && l0_past > -360.0);
    }

    #[test]
    fn test_eccentricity_decreases() {
        assert!(eccentricity(1.0) < eccentricity(0.0));
        assert!(eccentricity(-1.0) > eccentricity(0.0));
    }

    #[test]
    fn test_corrected_obliquity_stays_near_mean() {
        for i in -20..=20 {
            let t = f64::from(i) / 10.0;
            let mean = mean_obliquity(t);
            assert!((corrected_obliquity(mean, t) - mean).abs() <= 0.00256 + EPSILON);
        }
    }

    #[test]
    fn test_variation_y() {
        let expected = (23.44_f64 / 2.0).to_radians().tan().powi(2);
        assert!((variation_y(23.44) - expected).abs() < 1e-12);
        assert!(variation_y(0.0).abs() < 1e-15);
    }

    #[test]
    fn test_equation_of_center_bounds() {
        // amplitude is dominated by 1.9146°
        for degrees in (0..360).step_by(5) {
            let c = equation_of_center(0.2, f64::from(degrees));
            assert!(c.abs() < 1.95, "C({degrees}) = {c}");
        }
        assert!(equation_of_center(0.0, 0.0).abs() < EPSILON);
        assert!((equation_of_center(0.0, 90.0) - (1.914602 - 0.000289)).abs() < EPSILON);
    }

    #[test]
    fn test_apparent_longitude_correction_is_small() {
        let t = 0.22;
        let lambda = apparent_longitude(t, 100.0);
        assert!((lambda - 100.0).abs() < 0.00569 + 0.00478 + EPSILON);
    }

    #[test]
    fn test_bundle_matches_individual_functions() {
        let t = 0.2199;
        let elements = OrbitalElements::from_julian_century(t);
        assert_eq!(elements.mean_longitude, mean_longitude(t));
        assert_eq!(elements.mean_anomaly, mean_anomaly(t));
        assert_eq!(elements.eccentricity, eccentricity(t));
        assert_eq!(
            elements.corrected_obliquity,
            corrected_obliquity(mean_obliquity(t), t)
        );
        assert_eq!(
            elements.apparent_longitude,
            apparent_longitude(
                t,
                true_longitude(mean_longitude(t), equation_of_center(t, mean_anomaly(t)))
            )
        );
    }
}
