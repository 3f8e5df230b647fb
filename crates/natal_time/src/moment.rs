//! The validated birth instant and place.
//!
//! [`BirthMoment`] can only be built through constructors that check every
//! field, so downstream numerical code never sees an out-of-range latitude
//! or an impossible calendar date.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{JulianEpoch, days_in_month, julian_day};

const YEAR_MIN: i32 = 1;
const YEAR_MAX: i32 = 9999;
const LATITUDE_MAX: f64 = 90.0;
const LONGITUDE_MAX: f64 = 180.0;
const TZ_OFFSET_MIN: f64 = -12.0;
const TZ_OFFSET_MAX: f64 = 14.0;

/// Wire shape of a chart request.
///
/// `timezoneOffsetHours` may be omitted (or sent under its legacy name
/// `timezone`); it then defaults to the nautical zone of the longitude,
/// `round(longitude / 15)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// Civil date, `YYYY-MM-DD`.
    pub date: String,
    /// Local 24-hour clock time, `HH:MM`.
    pub time: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Offset of local time from UTC in hours.
    #[serde(default, alias = "timezone", skip_serializing_if = "Option::is_none")]
    pub timezone_offset_hours: Option<f64>,
}

/// One unambiguous birth instant and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    latitude_deg: f64,
    longitude_deg: f64,
    tz_offset_hours: f64,
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), TimeError> {
    // NaN fails `contains`, so it is rejected here too.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(TimeError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Split `text` on `sep` into exactly `N` zero-padded decimal parts of the
/// given widths.
fn parse_fields<const N: usize>(
    field: &'static str,
    expected: &'static str,
    text: &str,
    sep: char,
    widths: [usize; N],
) -> Result<[u32; N], TimeError> {
    let malformed = || TimeError::Malformed {
        field,
        value: text.to_string(),
        expected,
    };
    let mut out = [0u32; N];
    let mut parts = text.split(sep);
    for (slot, width) in out.iter_mut().zip(widths) {
        let part = parts.next().ok_or_else(malformed)?;
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *slot = part.parse().map_err(|_| malformed())?;
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(out)
}

impl BirthMoment {
    /// Build a birth moment from numeric fields, validating each one.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        latitude_deg: f64,
        longitude_deg: f64,
        tz_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        check_range("year", f64::from(year), f64::from(YEAR_MIN), f64::from(YEAR_MAX))?;
        check_range("month", f64::from(month), 1.0, 12.0)?;
        check_range("day", f64::from(day), 1.0, f64::from(days_in_month(year, month)))?;
        check_range("hour", f64::from(hour), 0.0, 23.0)?;
        check_range("minute", f64::from(minute), 0.0, 59.0)?;
        check_range("latitude", latitude_deg, -LATITUDE_MAX, LATITUDE_MAX)?;
        check_range("longitude", longitude_deg, -LONGITUDE_MAX, LONGITUDE_MAX)?;
        check_range(
            "timezoneOffsetHours",
            tz_offset_hours,
            TZ_OFFSET_MIN,
            TZ_OFFSET_MAX,
        )?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            latitude_deg,
            longitude_deg,
            tz_offset_hours,
        })
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` strings plus coordinates.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        tz_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        let [year, month, day] = parse_fields("date", "YYYY-MM-DD", date, '-', [4, 2, 2])?;
        let [hour, minute] = parse_fields("time", "HH:MM", time, ':', [2, 2])?;
        let year = i32::try_from(year).map_err(|_| TimeError::OutOfRange {
            field: "year",
            value: f64::from(year),
            min: f64::from(YEAR_MIN),
            max: f64::from(YEAR_MAX),
        })?;
        Self::new(
            year,
            month,
            day,
            hour,
            minute,
            latitude_deg,
            longitude_deg,
            tz_offset_hours,
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Offset of local civil time from UTC in hours.
    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    /// Hour of the day in UTC. May fall outside 0..24.
    pub fn utc_hour(&self) -> f64 {
        f64::from(self.hour) - self.tz_offset_hours
    }

    /// Julian Date of the instant.
    pub fn julian_day(&self) -> f64 {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.utc_hour(),
            f64::from(self.minute),
        )
    }

    /// Julian Date and century of the instant.
    pub fn julian_epoch(&self) -> JulianEpoch {
        JulianEpoch::from_jd(self.julian_day())
    }
}

impl TryFrom<&BirthInput> for BirthMoment {
    type Error = TimeError;

    fn try_from(input: &BirthInput) -> Result<Self, Self::Error> {
        let tz = input
            .timezone_offset_hours
            .unwrap_or_else(|| (input.longitude / 15.0).round());
        Self::parse(&input.date, &input.time, input.latitude, input.longitude, tz)
    }
}

impl TryFrom<BirthInput> for BirthMoment {
    type Error = TimeError;

    fn try_from(input: BirthInput) -> Result<Self, Self::Error> {
        Self::try_from(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn parse_valid() {
        let m = BirthMoment::parse("1990-07-15", "08:30", 40.7, -74.0, -4.0).unwrap();
        assert_eq!((m.year(), m.month(), m.day()), (1990, 7, 15));
        assert_eq!((m.hour(), m.minute()), (8, 30));
        assert!((m.utc_hour() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn j2000_epoch() {
        let m = BirthMoment::parse("2000-01-01", "12:00", 0.0, 0.0, 0.0).unwrap();
        assert_eq!(m.julian_day(), J2000_JD);
        assert_eq!(m.julian_epoch().julian_century(), 0.0);
    }

    #[test]
    fn timezone_shifts_instant() {
        let local = BirthMoment::parse("2000-01-01", "17:30", 0.0, 80.0, 5.5).unwrap();
        let utc = BirthMoment::parse("2000-01-01", "12:00", 0.0, 80.0, 0.0).unwrap();
        assert!((local.julian_day() - utc.julian_day()).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_date() {
        for bad in [
            "2000/01/01",
            "2000-01",
            "2000-01-01-01",
            "20x0-01-01",
            "",
            "2000--01",
            "2000-1-1",
            "02000-001-0001",
            "  2000-01-01 ",
            "2000-01-01\n",
            "+200-01-01",
        ] {
            let err = BirthMoment::parse(bad, "12:00", 0.0, 0.0, 0.0).unwrap_err();
            assert_eq!(err.field(), "date", "input {bad:?}");
        }
    }

    #[test]
    fn rejects_malformed_time() {
        for bad in [
            "12", "12:00:00", "ab:cd", "-1:00", "12h30", "7:5", "0012:0000", " 12:00", "12:00 ", "+1:00",
        ] {
            let err = BirthMoment::parse("2000-01-01", bad, 0.0, 0.0, 0.0).unwrap_err();
            assert_eq!(err.field(), "time", "input {bad:?}");
        }
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let cases = [
            (BirthMoment::parse("2000-13-01", "12:00", 0.0, 0.0, 0.0), "month"),
            (BirthMoment::parse("2001-02-29", "12:00", 0.0, 0.0, 0.0), "day"),
            (BirthMoment::parse("2000-01-00", "12:00", 0.0, 0.0, 0.0), "day"),
            (BirthMoment::parse("2000-01-01", "24:00", 0.0, 0.0, 0.0), "hour"),
            (BirthMoment::parse("2000-01-01", "12:60", 0.0, 0.0, 0.0), "minute"),
            (BirthMoment::parse("2000-01-01", "12:00", 90.5, 0.0, 0.0), "latitude"),
            (BirthMoment::parse("2000-01-01", "12:00", 0.0, -181.0, 0.0), "longitude"),
            (BirthMoment::parse("2000-01-01", "12:00", 0.0, 0.0, 14.5), "timezoneOffsetHours"),
            (BirthMoment::parse("2000-01-01", "12:00", 0.0, 0.0, -12.5), "timezoneOffsetHours"),
            (BirthMoment::parse("0000-01-01", "12:00", 0.0, 0.0, 0.0), "year"),
        ];
        for (result, field) in cases {
            let err = result.unwrap_err();
            assert_eq!(err.field(), field, "{err}");
        }
    }

    #[test]
    fn rejects_nan_coordinates() {
        let err = BirthMoment::parse("2000-01-01", "12:00", f64::NAN, 0.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "latitude");
    }

    #[test]
    fn leap_day_accepted() {
        assert!(BirthMoment::parse("2000-02-29", "00:00", 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn input_json_roundtrip_into_moment() {
        let json = r#"{"date":"1985-03-10","time":"06:45","latitude":51.5,"longitude":-0.12,"timezoneOffsetHours":0}"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        let m = BirthMoment::try_from(&input).unwrap();
        assert_eq!((m.year(), m.month(), m.day()), (1985, 3, 10));
        assert_eq!(m.tz_offset_hours(), 0.0);
    }

    #[test]
    fn input_defaults_timezone_from_longitude() {
        let json = r#"{"date":"1985-03-10","time":"06:45","latitude":40.0,"longitude":-74.0}"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        let m = BirthMoment::try_from(input).unwrap();
        assert_eq!(m.tz_offset_hours(), -5.0);
    }

    #[test]
    fn input_accepts_legacy_timezone_key() {
        let json = r#"{"date":"1985-03-10","time":"06:45","latitude":40.0,"longitude":-74.0,"timezone":-4}"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.timezone_offset_hours, Some(-4.0));
    }
}
