//! Per-day series over a civil year, as plotted by the yearly charts.
//!
//! Each day is evaluated with the precision model at local midnight. Index `i`
//! of every vector belongs to day of year `i + 1`.

use crate::error::check_utc_offset;
use crate::precision;
use crate::time::{CivilInstant, days_in_month, days_in_year};
use crate::types::{DayFraction, GeoPosition, SolarEphemerisSample, SunriseResult};
use crate::units::Degrees;
use crate::Result;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Aligned per-day outputs of the precision model for one year and position.
///
/// Sunrise and sunset are `None` on days of polar day or polar night; the
/// full per-day result is kept in [`YearSeries::sunrise_sunset`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearSeries {
    year: i32,
    utc_offset: f64,
    #[cfg_attr(feature = "serde", serde(rename = "solarNoonData"))]
    solar_noon: Vec<DayFraction>,
    #[cfg_attr(feature = "serde", serde(rename = "equationOfTimeData"))]
    equation_of_time: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "solarDeclinationData"))]
    solar_declination: Vec<Degrees>,
    #[cfg_attr(feature = "serde", serde(rename = "sunriseTimeData"))]
    sunrise: Vec<Option<DayFraction>>,
    #[cfg_attr(feature = "serde", serde(rename = "sunsetTimeData"))]
    sunset: Vec<Option<DayFraction>>,
    #[cfg_attr(feature = "serde", serde(rename = "maxElevationData"))]
    max_elevation: Vec<Degrees>,
    #[cfg_attr(feature = "serde", serde(rename = "sunriseSunsetData"))]
    sunrise_sunset: Vec<SunriseResult>,
}

impl YearSeries {
    fn with_capacity(year: i32, utc_offset: f64, days: usize) -> Self {
        Self {
            year,
            utc_offset,
            solar_noon: Vec::with_capacity(days),
            equation_of_time: Vec::with_capacity(days),
            solar_declination: Vec::with_capacity(days),
            sunrise: Vec::with_capacity(days),
            sunset: Vec::with_capacity(days),
            max_elevation: Vec::with_capacity(days),
            sunrise_sunset: Vec::with_capacity(days),
        }
    }

    fn push(&mut self, sample: SolarEphemerisSample) {
        self.solar_noon.push(sample.solar_noon());
        self.equation_of_time.push(sample.equation_of_time_minutes());
        self.solar_declination.push(sample.solar_declination());
        self.sunrise.push(sample.sunrise());
        self.sunset.push(sample.sunset());
        self.max_elevation.push(sample.max_elevation());
        self.sunrise_sunset.push(sample.sunrise_sunset().clone());
    }

    /// Calendar year of the series.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// UTC offset in hours the clock times refer to.
    #[must_use]
    pub const fn utc_offset(&self) -> f64 {
        self.utc_offset
    }

    /// Number of days, 365 or 366.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solar_noon.len()
    }

    /// Always false for a computed series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solar_noon.is_empty()
    }

    /// Solar noon per day.
    #[must_use]
    pub fn solar_noon(&self) -> &[DayFraction] {
        &self.solar_noon
    }

    /// Equation of time per day, in minutes.
    #[must_use]
    pub fn equation_of_time(&self) -> &[f64] {
        &self.equation_of_time
    }

    /// Solar declination per day.
    #[must_use]
    pub fn solar_declination(&self) -> &[Degrees] {
        &self.solar_declination
    }

    /// Sunrise per day, `None` during polar day or night.
    #[must_use]
    pub fn sunrise(&self) -> &[Option<DayFraction>] {
        &self.sunrise
    }

    /// Sunset per day, `None` during polar day or night.
    #[must_use]
    pub fn sunset(&self) -> &[Option<DayFraction>] {
        &self.sunset
    }

    /// Maximum solar elevation per day.
    #[must_use]
    pub fn max_elevation(&self) -> &[Degrees] {
        &self.max_elevation
    }

    /// Sunrise, noon and sunset per day, including the polar variants.
    #[must_use]
    pub fn sunrise_sunset(&self) -> &[SunriseResult] {
        &self.sunrise_sunset
    }

    /// All outputs for one day of year (1-based).
    #[must_use]
    pub fn day(&self, day_of_year: u16) -> Option<SolarEphemerisSample> {
        let index = usize::from(day_of_year).checked_sub(1)?;
        Some(SolarEphemerisSample::new(
            *self.equation_of_time.get(index)?,
            *self.solar_declination.get(index)?,
            *self.solar_noon.get(index)?,
            self.sunrise_sunset.get(index)?.clone(),
            *self.max_elevation.get(index)?,
        ))
    }
}

/// Evaluates every day of `year` at local midnight for one position.
///
/// `utc_offset` of `None` uses the longitude estimate.
///
/// # Errors
/// Returns `InvalidUtcOffset` for an explicit offset outside -14 to +14 hours.
///
/// # Example
/// ```
/// use solar_ephemeris::{series, GeoPosition};
///
/// let london = GeoPosition::new(51.51, -0.06).unwrap();
/// let chart = series::year_series(london, 2024, None).unwrap();
///
/// assert_eq!(chart.len(), 366);
/// assert_eq!(chart.utc_offset(), 0.0);
/// assert!(chart.sunrise().iter().all(Option::is_some));
/// ```
pub fn year_series(position: GeoPosition, year: i32, utc_offset: Option<f64>) -> Result<YearSeries> {
    let utc_offset = match utc_offset {
        Some(hours) => {
            check_utc_offset(hours)?;
            hours
        }
        None => position.estimated_utc_offset(),
    };

    let days = days_of_year(year);
    let mut series = YearSeries::with_capacity(year, utc_offset, days.len());
    for (month, day) in days {
        let instant = CivilInstant::at_midnight(year, month, day, utc_offset)?;
        series.push(precision::ephemeris_sample(position, &instant));
    }
    Ok(series)
}

/// `(month, day)` of every day in the year, from January 1st.
///
/// # Example
/// ```
/// # use solar_ephemeris::series::days_of_year;
/// let days = days_of_year(2021);
/// assert_eq!(days.len(), 365);
/// assert_eq!(days[59], (3, 1));
/// ```
#[must_use]
pub fn days_of_year(year: i32) -> Vec<(u32, u32)> {
    let mut days = Vec::with_capacity(usize::from(days_in_year(year)));
    for month in 1..=12 {
        for day in 1..=days_in_month(year, month) {
            days.push((month, day));
        }
    }
    days
}

/// Chart axis labels, `"Mmm-dd"`, one per day of the year.
///
/// # Example
/// ```
/// # use solar_ephemeris::series::chart_labels;
/// let labels = chart_labels(2020);
/// assert_eq!(labels[0], "Jan-01");
/// assert_eq!(labels[59], "Feb-29");
/// ```
#[must_use]
pub fn chart_labels(year: i32) -> Vec<String> {
    days_of_year(year)
        .into_iter()
        .map(|(month, day)| {
            let name = MONTH_ABBREVIATIONS[(month - 1) as usize];
            format!("{name}-{day:02}")
        })
        .collect()
}
