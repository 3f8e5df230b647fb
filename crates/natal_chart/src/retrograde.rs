//! Retrograde classification.
//!
//! Two methods are available. The solar elongation heuristic flags inner
//! planets near conjunction with the Sun and outer planets near opposition.
//! It is cheap but misjudges bodies close to its thresholds. The longitude
//! rate method samples the geocentric longitude either side of the epoch
//! and flags a negative rate, which tracks the true stations.

use natal_ephem::{Body, geocentric_longitude_deg};
use natal_time::{JulianEpoch, normalize_degrees, signed_separation_deg};
use serde::{Deserialize, Serialize};

/// Inner planets are flagged within this elongation of the Sun.
pub const INNER_CONJUNCTION_WINDOW_DEG: f64 = 30.0;

/// Outer planets are flagged within this elongation of opposition.
pub const OUTER_OPPOSITION_WINDOW_DEG: f64 = 30.0;

/// How the retrograde flag is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetrogradeMethod {
    /// Elongation from the Sun.
    #[default]
    SolarElongation,
    /// Sign of the central-difference longitude rate.
    LongitudeRate,
}

/// Elongation heuristic.
///
/// `diff = normalize(body − sun)`. Inner planets: `diff < 30` or
/// `diff > 330`. Outer planets: `150 < diff < 210`.
pub fn is_retrograde(body_longitude_deg: f64, sun_longitude_deg: f64, is_inner: bool) -> bool {
    let diff = normalize_degrees(body_longitude_deg - sun_longitude_deg);
    if is_inner {
        diff < INNER_CONJUNCTION_WINDOW_DEG || diff > 360.0 - INNER_CONJUNCTION_WINDOW_DEG
    } else {
        diff > 180.0 - OUTER_OPPOSITION_WINDOW_DEG && diff < 180.0 + OUTER_OPPOSITION_WINDOW_DEG
    }
}

/// Geocentric longitude rate of `body` in degrees per day, by central
/// difference over `±step_days`.
pub fn longitude_rate_deg_per_day(body: Body, epoch: JulianEpoch, step_days: f64) -> f64 {
    let before = geocentric_longitude_deg(body, epoch.offset_days(-step_days));
    let after = geocentric_longitude_deg(body, epoch.offset_days(step_days));
    signed_separation_deg(after, before) / (2.0 * step_days)
}

/// Retrograde flag for one body. The Sun and Moon are never retrograde.
pub fn retrograde_flag(
    body: Body,
    body_longitude_deg: f64,
    sun_longitude_deg: f64,
    epoch: JulianEpoch,
    method: RetrogradeMethod,
    step_days: f64,
) -> bool {
    if !body.is_planet() {
        return false;
    }
    match method {
        RetrogradeMethod::SolarElongation => {
            is_retrograde(body_longitude_deg, sun_longitude_deg, body.is_inner())
        }
        RetrogradeMethod::LongitudeRate => longitude_rate_deg_per_day(body, epoch, step_days) < 0.0,
    }
}
