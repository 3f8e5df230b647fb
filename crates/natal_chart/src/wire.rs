//! Reading chart requests from wire JSON.
//!
//! Fields are pulled out of the JSON object one at a time so that a value
//! of the wrong type is reported against its field name, in the same
//! [`TimeError`] shape as a semantic validation failure.

use natal_time::{BirthInput, TimeError};
use serde_json::{Map, Value};

use crate::error::ChartError;

const TZ_FIELD: &str = "timezoneOffsetHours";
const TZ_LEGACY_FIELD: &str = "timezone";

fn malformed(field: &'static str, value: &Value, expected: &'static str) -> TimeError {
    TimeError::Malformed {
        field,
        value: value.to_string(),
        expected,
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, TimeError> {
    obj.get(field).ok_or(TimeError::Missing { field })
}

fn string_field(
    obj: &Map<String, Value>,
    field: &'static str,
    expected: &'static str,
) -> Result<String, TimeError> {
    let value = required(obj, field)?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| malformed(field, value, expected))
}

fn number(field: &'static str, value: &Value) -> Result<f64, TimeError> {
    value
        .as_f64()
        .ok_or_else(|| malformed(field, value, "a number"))
}

/// Parse a chart request.
///
/// Syntax errors and non-object documents are [`ChartError::Json`]. A
/// missing or wrongly typed field is [`ChartError::Input`] naming that
/// field. `timezoneOffsetHours` (or legacy `timezone`) may be absent or
/// `null`.
pub fn birth_input_from_json(json: &str) -> Result<BirthInput, ChartError> {
    let doc: Value = serde_json::from_str(json)?;
    let Some(obj) = doc.as_object() else {
        return Err(ChartError::Json(format!("expected a JSON object, got {doc}")));
    };

    let date = string_field(obj, "date", "YYYY-MM-DD")?;
    let time = string_field(obj, "time", "HH:MM")?;
    let latitude = number("latitude", required(obj, "latitude")?)?;
    let longitude = number("longitude", required(obj, "longitude")?)?;
    let timezone_offset_hours = match obj.get(TZ_FIELD).or_else(|| obj.get(TZ_LEGACY_FIELD)) {
        None | Some(Value::Null) => None,
        Some(value) => Some(number(TZ_FIELD, value)?),
    };

    Ok(BirthInput {
        date,
        time,
        latitude,
        longitude,
        timezone_offset_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_error(json: &str) -> TimeError {
        match birth_input_from_json(json) {
            Err(ChartError::Input(e)) => e,
            other => panic!("expected input error for {json}, got {other:?}"),
        }
    }

    #[test]
    fn reads_all_fields() {
        let input = birth_input_from_json(
            r#"{"date":"2000-01-01","time":"12:00","latitude":51.5,"longitude":-0.1,"timezoneOffsetHours":1}"#,
        )
        .unwrap();
        assert_eq!(input.date, "2000-01-01");
        assert_eq!(input.time, "12:00");
        assert_eq!(input.latitude, 51.5);
        assert_eq!(input.longitude, -0.1);
        assert_eq!(input.timezone_offset_hours, Some(1.0));
    }

    #[test]
    fn timezone_optional_null_or_legacy() {
        let base = r#""date":"2000-01-01","time":"12:00","latitude":0,"longitude":0"#;
        let absent = birth_input_from_json(&format!("{{{base}}}")).unwrap();
        assert_eq!(absent.timezone_offset_hours, None);
        let null = birth_input_from_json(&format!(r#"{{{base},"timezoneOffsetHours":null}}"#)).unwrap();
        assert_eq!(null.timezone_offset_hours, None);
        let legacy = birth_input_from_json(&format!(r#"{{{base},"timezone":-4}}"#)).unwrap();
        assert_eq!(legacy.timezone_offset_hours, Some(-4.0));
    }

    #[test]
    fn wrong_type_names_each_field() {
        let cases = [
            (r#"{"date":20000101,"time":"12:00","latitude":0,"longitude":0}"#, "date"),
            (r#"{"date":"2000-01-01","time":1200,"latitude":0,"longitude":0}"#, "time"),
            (r#"{"date":"2000-01-01","time":"12:00","latitude":"north","longitude":0}"#, "latitude"),
            (r#"{"date":"2000-01-01","time":"12:00","latitude":0,"longitude":[0]}"#, "longitude"),
            (
                r#"{"date":"2000-01-01","time":"12:00","latitude":0,"longitude":0,"timezoneOffsetHours":"+5"}"#,
                "timezoneOffsetHours",
            ),
            (
                r#"{"date":"2000-01-01","time":"12:00","latitude":0,"longitude":0,"timezone":true}"#,
                "timezoneOffsetHours",
            ),
        ];
        for (json, field) in cases {
            let e = input_error(json);
            assert!(matches!(e, TimeError::Malformed { .. }), "{e}");
            assert_eq!(e.field(), field);
            assert!(e.to_string().contains(field), "{e}");
        }
    }

    #[test]
    fn missing_field_named() {
        let e = input_error(r#"{"date":"2000-01-01","time":"12:00","longitude":0}"#);
        assert_eq!(e, TimeError::Missing { field: "latitude" });
    }

    #[test]
    fn syntax_and_shape_errors_are_json() {
        for json in ["{", "[]", "\"2000-01-01\""] {
            assert!(
                matches!(birth_input_from_json(json), Err(ChartError::Json(_))),
                "{json}"
            );
        }
    }
}
