//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_time::TimeError;

/// Errors surfaced at the chart boundary.
///
/// The astronomy itself cannot fail; every variant comes from input,
/// configuration or wire handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth data failed validation.
    Input(TimeError),
    /// Configuration could not be parsed or holds an invalid value.
    Config(String),
    /// A configuration or input file could not be read.
    Io(String),
    /// Wire JSON could not be parsed or produced.
    Json(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input error: {e}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Input(e)
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
