//! Chart computation options.
//!
//! All fields have defaults, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! ascendant_rule = "eastern-horizon"      # or "lst-half-circle"
//! retrograde_method = "solar-elongation"  # or "longitude-rate"
//! rate_step_days = 0.5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ascendant::AscendantRule;
use crate::error::ChartError;
use crate::retrograde::RetrogradeMethod;

/// Upper bound on the half-width of the longitude-rate stencil.
pub const MAX_RATE_STEP_DAYS: f64 = 5.0;

/// Model options for [`crate::compute_chart`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Quadrant resolution of the Ascendant.
    pub ascendant_rule: AscendantRule,
    /// Retrograde classifier.
    pub retrograde_method: RetrogradeMethod,
    /// Half-width in days of the central difference used by
    /// [`RetrogradeMethod::LongitudeRate`].
    pub rate_step_days: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ascendant_rule: AscendantRule::default(),
            retrograde_method: RetrogradeMethod::default(),
            rate_step_days: 0.5,
        }
    }
}

impl ChartConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.rate_step_days.is_finite() || self.rate_step_days <= 0.0 {
            return Err("rate_step_days must be positive");
        }
        if self.rate_step_days > MAX_RATE_STEP_DAYS {
            return Err("rate_step_days must not exceed 5 days");
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        let config: Self = toml::from_str(text)?;
        config
            .validate()
            .map_err(|msg| ChartError::Config(msg.to_string()))?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ChartError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded chart config from {}: {config:?}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_valid() {
        let c = ChartConfig::default();
        assert_eq!(c.ascendant_rule, AscendantRule::EasternHorizon);
        assert_eq!(c.retrograde_method, RetrogradeMethod::SolarElongation);
        assert!((c.rate_step_days - 0.5).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let c = ChartConfig::from_toml_str(
            r#"
            ascendant_rule = "lst-half-circle"
            retrograde_method = "longitude-rate"
            rate_step_days = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(c.ascendant_rule, AscendantRule::LstHalfCircle);
        assert_eq!(c.retrograde_method, RetrogradeMethod::LongitudeRate);
        assert!((c.rate_step_days - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_step() {
        let mut c = ChartConfig::default();
        c.rate_step_days = 0.0;
        assert!(c.validate().is_err());
        let e = ChartConfig::from_toml_str("rate_step_days = 0.0").unwrap_err();
        assert!(matches!(e, ChartError::Config(_)));
    }

    #[test]
    fn rejects_huge_step() {
        let mut c = ChartConfig::default();
        c.rate_step_days = 30.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_unknown_key() {
        let e = ChartConfig::from_toml_str("house_system = \"placidus\"").unwrap_err();
        assert!(matches!(e, ChartError::Config(_)));
    }

    #[test]
    fn rejects_unknown_rule() {
        assert!(ChartConfig::from_toml_str("ascendant_rule = \"whole-sign\"").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let e = ChartConfig::load("/nonexistent/natal.toml").unwrap_err();
        assert!(matches!(e, ChartError::Io(_)));
    }
}
