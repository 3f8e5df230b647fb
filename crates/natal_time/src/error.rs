//! Error types for birth-moment parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while turning caller input into a [`crate::BirthMoment`].
///
/// Every variant names the offending field so a caller can report a single
/// clear validation message.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A required field was absent from the request.
    Missing { field: &'static str },
    /// A date or clock string did not match its expected layout.
    Malformed {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    /// A numeric field fell outside its permitted closed range.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl TimeError {
    /// Name of the input field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Malformed { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing {field}"),
            Self::Malformed {
                field,
                value,
                expected,
            } => write!(f, "invalid {field}: {value:?} (expected {expected})"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "invalid {field}: {value} is outside [{min}, {max}]"),
        }
    }
}

impl Error for TimeError {}
