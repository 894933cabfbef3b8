//! Calendar and time primitives.
//!
//! Converts a civil date/time plus UTC offset into a Julian Day on the Dublin
//! baseline and a Julian Century relative to J2000.0, and provides the small
//! calendar helpers (day of year, leap years) the models and series need.
//!
//! The Julian Day deliberately uses only the *hour* of the local clock time;
//! minutes and seconds are ignored at this stage. Existing chart output relies
//! on that granularity.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_longitude, check_utc_offset};
use crate::math::{floor, round_half_up};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian Day of the Dublin baseline, 1899-12-31 12:00 UTC.
pub const DUBLIN_BASELINE_JD: f64 = 2_415_020.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of 1900-01-01 00:00, the civil day the baseline day count starts from.
const BASELINE_MIDNIGHT_JD: f64 = 2_415_020.5;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// A civil calendar date and clock time with an explicit UTC offset.
///
/// Constructed once and never mutated. All fields are validated on
/// construction, so every engine function accepting a `CivilInstant` is total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CivilInstant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset: f64,
}

impl CivilInstant {
    /// Creates an instant from local calendar and clock components.
    ///
    /// # Arguments
    /// * `year` - Year (proleptic Gregorian)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    /// * `utc_offset` - UTC offset in hours (-14 to +14)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is out of range and
    /// `InvalidUtcOffset` for an offset outside -14 to +14 hours.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::CivilInstant;
    /// let instant = CivilInstant::new(2022, 1, 1, 12, 0, 0.0, 0.0).unwrap();
    /// assert_eq!(instant.day_of_year(), 1);
    /// assert!((instant.julian_day() - 2_459_581.0).abs() < 1e-9);
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        check_utc_offset(utc_offset)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset,
        })
    }

    /// Creates an instant at local midnight of the given date.
    ///
    /// # Errors
    /// Same conditions as [`CivilInstant::new`].
    pub fn at_midnight(year: i32, month: u32, day: u32, utc_offset: f64) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0.0, utc_offset)
    }

    /// Creates an instant from a naive local date/time and a UTC offset in hours.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` for an offset outside -14 to +14 hours.
    #[cfg(feature = "chrono")]
    pub fn from_naive(datetime: &chrono::NaiveDateTime, utc_offset: f64) -> Result<Self> {
        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            f64::from(datetime.second()) + f64::from(datetime.nanosecond() % 1_000_000_000) / 1e9,
            utc_offset,
        )
    }

    /// Creates an instant from a timezone-aware `DateTime`.
    ///
    /// The local wall-clock fields are kept and the zone's offset at that
    /// moment becomes the UTC offset.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the zone's offset is outside -14 to +14 hours.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::CivilInstant;
    /// use chrono::{DateTime, FixedOffset};
    ///
    /// let datetime = "2021-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let instant = CivilInstant::from_datetime(&datetime).unwrap();
    /// assert_eq!(instant.hour(), 12);
    /// assert_eq!(instant.utc_offset(), 2.0);
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        use chrono::Offset;

        let offset_seconds = datetime.offset().fix().local_minus_utc();
        Self::from_naive(
            &datetime.naive_local(),
            f64::from(offset_seconds) / 3600.0,
        )
    }

    /// Year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hour of the local clock (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of the local clock (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second of the local clock, possibly fractional.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// UTC offset in hours.
    #[must_use]
    pub const fn utc_offset(&self) -> f64 {
        self.utc_offset
    }

    /// Day of year (1-366) of the local date.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Minutes elapsed since local midnight, including minutes and seconds.
    #[must_use]
    pub fn elapsed_minutes(&self) -> f64 {
        f64::from(self.hour) * 60.0 + f64::from(self.minute) + self.second / 60.0
    }

    /// Julian Day of this instant, see [`julian_day`].
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        julian_day(self)
    }

    /// Julian Century of this instant, see [`julian_century`].
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        julian_century(self.julian_day())
    }
}

/// Julian Day on the Dublin baseline.
///
/// `DUBLIN_BASELINE_JD + whole days since 1900-01-01 + 0.5 + (hour + utc_offset) / 24`.
///
/// Only the hour of the local clock contributes; minutes and seconds are
/// ignored. The UTC offset is added to the local hour.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::{julian_day, CivilInstant};
/// let instant = CivilInstant::new(1900, 1, 1, 0, 59, 0.0, 0.0).unwrap();
/// assert_eq!(julian_day(&instant), 2_415_020.5);
/// ```
#[must_use]
pub fn julian_day(instant: &CivilInstant) -> f64 {
    let days = whole_days_since_baseline(instant.year, instant.month, instant.day);
    DUBLIN_BASELINE_JD + days + 0.5 + (f64::from(instant.hour) + instant.utc_offset) / 24.0
}

/// Julian centuries since J2000.0.
///
/// JC = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Approximate UTC offset in whole hours from longitude alone.
///
/// `round(longitude / 15)`, with halves rounded toward positive infinity.
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::estimate_utc_offset;
/// assert_eq!(estimate_utc_offset(-0.06).unwrap(), 0.0);
/// assert_eq!(estimate_utc_offset(-122.42).unwrap(), -8.0);
/// ```
pub fn estimate_utc_offset(longitude: f64) -> Result<f64> {
    check_longitude(longitude)?;
    Ok(estimate_utc_offset_unchecked(longitude))
}

pub(crate) fn estimate_utc_offset_unchecked(longitude: f64) -> f64 {
    round_half_up(longitude / 15.0)
}

/// Whole civil days from 1900-01-01 to the given date (negative before it).
fn whole_days_since_baseline(year: i32, month: u32, day: u32) -> f64 {
    calculate_julian_date_at_midnight(year, month, day) - BASELINE_MIDNIGHT_JD
}

/// Julian Date at 00:00 of a proleptic Gregorian date.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, ch. 7. The Gregorian
/// correction is always applied; the engine does not model the Julian calendar.
fn calculate_julian_date_at_midnight(year: i32, month: u32, day: u32) -> f64 {
    let mut y = f64::from(year);
    let mut m = f64::from(month);

    // January and February count as months 13 and 14 of the previous year
    if month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

/// Whether the year is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the year (365 or 366).
#[must_use]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in a month; 0 for an invalid month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Day of year (1-366) for a calendar date.
///
/// The date is assumed valid; use [`CivilInstant::new`] to validate.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::day_of_year;
/// assert_eq!(day_of_year(2021, 3, 22), 81);
/// assert_eq!(day_of_year(2020, 12, 31), 366);
/// ```
#[must_use]
pub fn day_of_year(year: i32, month: u32, day: u32) -> u16 {
    let preceding: u32 = (1..month).map(|m| days_in_month(year, m)).sum();
    // at most 366
    (preceding + day) as u16
}

/// Day of year (1-366) of any chrono date-like value.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn day_of_year_of<D: Datelike>(date: D) -> u16 {
    // ordinal() is at most 366
    date.ordinal() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_dublin_baseline() {
        // 1900-01-01 local midnight at UTC is half a day after the baseline
        let start = CivilInstant::at_midnight(1900, 1, 1, 0.0).unwrap();
        assert_eq!(julian_day(&start), DUBLIN_BASELINE_JD + 0.5);

        let next_day = CivilInstant::at_midnight(1900, 1, 2, 0.0).unwrap();
        assert_eq!(julian_day(&next_day), DUBLIN_BASELINE_JD + 1.5);

        let before = CivilInstant::at_midnight(1899, 12, 31, 0.0).unwrap();
        assert_eq!(julian_day(&before), DUBLIN_BASELINE_JD - 0.5);
    }

    #[test]
    fn test_julian_day_matches_standard_epochs() {
        // J2000.0: 2000-01-01 12:00 UTC
        let j2000 = CivilInstant::new(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert!((julian_day(&j2000) - J2000_JDN).abs() < EPSILON);
        assert!(j2000.julian_century().abs() < EPSILON);

        // Unix epoch
        let unix = CivilInstant::at_midnight(1970, 1, 1, 0.0).unwrap();
        assert!((julian_day(&unix) - 2_440_587.5).abs() < EPSILON);
    }

    #[test]
    fn test_julian_day_ignores_minutes_and_seconds() {
        let on_the_hour = CivilInstant::new(2022, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        let later = CivilInstant::new(2022, 1, 1, 12, 59, 59.9, 0.0).unwrap();
        assert_eq!(julian_day(&on_the_hour), julian_day(&later));
    }

    #[test]
    fn test_julian_day_adds_utc_offset() {
        let utc = CivilInstant::new(2022, 6, 1, 10, 0, 0.0, 0.0).unwrap();
        let plus_two = CivilInstant::new(2022, 6, 1, 10, 0, 0.0, 2.0).unwrap();
        let noon = CivilInstant::new(2022, 6, 1, 12, 0, 0.0, 0.0).unwrap();

        // 10:00 at +2 lands on the same Julian Day as 12:00 at +0
        assert_eq!(julian_day(&plus_two), julian_day(&noon));
        // one ulp at this magnitude is ~4.7e-10
        assert!((julian_day(&plus_two) - julian_day(&utc) - 2.0 / 24.0).abs() < 1e-8);
    }

    #[test]
    fn test_julian_century() {
        assert_eq!(julian_century(J2000_JDN), 0.0);
        assert!((julian_century(J2000_JDN + DAYS_PER_CENTURY) - 1.0).abs() < EPSILON);
        assert!((julian_century(DUBLIN_BASELINE_JD) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_civil_instant_validation() {
        assert!(CivilInstant::new(2024, 13, 1, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 0, 1, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 1, 0, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 1, 32, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 1, 1, 24, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 1, 1, 0, 60, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 1, 1, 0, 0, 60.0, 0.0).is_err());
        assert!(CivilInstant::new(2024, 1, 1, 0, 0, 0.0, 15.0).is_err());

        assert!(CivilInstant::new(2024, 2, 29, 0, 0, 0.0, 0.0).is_ok());
        assert!(CivilInstant::new(2023, 2, 29, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(1900, 2, 29, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilInstant::new(2000, 2, 29, 0, 0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_elapsed_minutes() {
        let instant = CivilInstant::new(2022, 3, 1, 6, 30, 30.0, 1.0).unwrap();
        assert!((instant.elapsed_minutes() - 390.5).abs() < EPSILON);
        assert_eq!(
            CivilInstant::at_midnight(2022, 3, 1, 1.0)
                .unwrap()
                .elapsed_minutes(),
            0.0
        );
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2022, 1, 1), 1);
        assert_eq!(day_of_year(2022, 3, 22), 81);
        assert_eq!(day_of_year(2022, 6, 21), 172);
        assert_eq!(day_of_year(2022, 12, 21), 355);
        assert_eq!(day_of_year(2022, 12, 31), 365);
        assert_eq!(day_of_year(2024, 12, 31), 366);
        assert_eq!(day_of_year(2024, 3, 1), 61);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2020), 366);
        assert_eq!(days_in_year(2021), 365);
    }

    #[test]
    fn test_estimate_utc_offset() {
        assert_eq!(estimate_utc_offset(0.0).unwrap(), 0.0);
        assert_eq!(estimate_utc_offset(-0.06).unwrap(), 0.0);
        assert_eq!(estimate_utc_offset(16.37).unwrap(), 1.0);
        assert_eq!(estimate_utc_offset(151.21).unwrap(), 10.0);
        assert_eq!(estimate_utc_offset(-74.0).unwrap(), -5.0);
        assert_eq!(estimate_utc_offset(180.0).unwrap(), 12.0);
        assert_eq!(estimate_utc_offset(-180.0).unwrap(), -12.0);

        // halves round up
        assert_eq!(estimate_utc_offset(7.5).unwrap(), 1.0);
        assert_eq!(estimate_utc_offset(-7.5).unwrap(), 0.0);

        assert!(estimate_utc_offset(200.0).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_chrono() {
        use chrono::{DateTime, FixedOffset, NaiveDate};

        let datetime = "2022-01-01T12:34:56-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let instant = CivilInstant::from_datetime(&datetime).unwrap();
        assert_eq!(instant.year(), 2022);
        assert_eq!(instant.hour(), 12);
        assert_eq!(instant.minute(), 34);
        assert_eq!(instant.second(), 56.0);
        assert_eq!(instant.utc_offset(), -5.0);

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(day_of_year_of(date), 366);

        let naive = date.and_hms_opt(6, 0, 0).unwrap();
        let instant = CivilInstant::from_naive(&naive, 5.5).unwrap();
        assert_eq!(instant.day_of_year(), 366);
        assert_eq!(instant.utc_offset(), 5.5);
    }
}
