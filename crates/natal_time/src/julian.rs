//! Julian Day arithmetic on the proleptic Gregorian calendar.
//!
//! The forward conversion uses the integer Julian Day Number formula, so
//! results are exact for whole minutes and identical across platforms.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day Number of a proleptic Gregorian calendar date (noon-based).
///
/// ```text
/// a   = floor((14 - month) / 12)
/// y   = year + 4800 - a
/// m   = month + 12a - 3
/// JDN = day + floor((153m + 2) / 5) + 365y + floor(y/4) - floor(y/100) + floor(y/400) - 32045
/// ```
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Julian Date for a calendar date and a UTC clock reading.
///
/// `utc_hour` may lie outside 0..24 (local hour minus a timezone offset);
/// the day roll-over is absorbed by the fractional part.
pub fn julian_day(year: i32, month: u32, day: u32, utc_hour: f64, utc_minute: f64) -> f64 {
    julian_day_number(year, month, day) as f64 + (utc_hour + utc_minute / 60.0) / 24.0 - 0.5
}

/// Julian centuries since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Convert a Julian Date back to a proleptic Gregorian calendar date.
///
/// Returns `(year, month, day_with_fraction)`.
///
/// Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7, with the
/// Gregorian correction applied unconditionally.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A Julian Date together with its Julian century, computed once per chart
/// and shared by every body model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianEpoch {
    julian_day: f64,
    julian_century: f64,
}

impl JulianEpoch {
    /// Build an epoch from a Julian Date.
    pub fn from_jd(julian_day: f64) -> Self {
        Self {
            julian_day,
            julian_century: julian_century(julian_day),
        }
    }

    /// Julian Date.
    pub fn julian_day(self) -> f64 {
        self.julian_day
    }

    /// Julian centuries since J2000.0.
    pub fn julian_century(self) -> f64 {
        self.julian_century
    }

    /// Days since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.julian_day - J2000_JD
    }

    /// The epoch shifted by a number of days.
    pub fn offset_days(self, days: f64) -> Self {
        Self::from_jd(self.julian_day + days)
    }
}
