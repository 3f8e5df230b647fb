//! Mutual perturbations of the giant planets.
//!
//! Additive longitude corrections driven by the mean anomalies of Jupiter,
//! Saturn and Uranus (Schlyter, "Computing planetary positions"). The
//! 900-year great inequality terms are left out; the remaining terms keep
//! Jupiter and Saturn within a few tenths of a degree. The inner planets and
//! Neptune carry no terms.

use natal_time::normalize_degrees;

use crate::body::Body;
use crate::elements::{JUPITER, SATURN, URANUS};

/// Trigonometric function of a perturbation term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmonic {
    Sin,
    Cos,
}

/// One additive longitude term:
/// `amplitude · f(j·Mj + s·Ms + u·Mu + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationTerm {
    /// Degrees.
    pub amplitude_deg: f64,
    pub harmonic: Harmonic,
    /// Multiplier of Jupiter's mean anomaly.
    pub jupiter: f64,
    /// Multiplier of Saturn's mean anomaly.
    pub saturn: f64,
    /// Multiplier of Uranus's mean anomaly.
    pub uranus: f64,
    /// Degrees.
    pub phase_deg: f64,
}

impl PerturbationTerm {
    const fn new(
        amplitude_deg: f64,
        harmonic: Harmonic,
        jupiter: f64,
        saturn: f64,
        uranus: f64,
        phase_deg: f64,
    ) -> Self {
        Self {
            amplitude_deg,
            harmonic,
            jupiter,
            saturn,
            uranus,
            phase_deg,
        }
    }

    /// Contribution in degrees for the given anomalies.
    pub fn evaluate(&self, anomalies: &GiantAnomalies) -> f64 {
        let arg = (self.jupiter * anomalies.jupiter_deg
            + self.saturn * anomalies.saturn_deg
            + self.uranus * anomalies.uranus_deg
            + self.phase_deg)
            .to_radians();
        let f = match self.harmonic {
            Harmonic::Sin => arg.sin(),
            Harmonic::Cos => arg.cos(),
        };
        self.amplitude_deg * f
    }
}

/// Mean anomalies of Jupiter, Saturn and Uranus, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GiantAnomalies {
    pub jupiter_deg: f64,
    pub saturn_deg: f64,
    pub uranus_deg: f64,
}

impl GiantAnomalies {
    /// Anomalies from the mean elements at `t` Julian centuries since J2000.0.
    pub fn at(t: f64) -> Self {
        Self {
            jupiter_deg: JUPITER.at(t).mean_anomaly_deg(),
            saturn_deg: SATURN.at(t).mean_anomaly_deg(),
            uranus_deg: URANUS.at(t).mean_anomaly_deg(),
        }
    }
}

use Harmonic::{Cos, Sin};

#[rustfmt::skip]
static JUPITER_TERMS: [PerturbationTerm; 6] = [
    PerturbationTerm::new(-0.056, Sin, 2.0, -2.0, 0.0,  21.0),
    PerturbationTerm::new( 0.042, Sin, 3.0, -5.0, 0.0,  21.0),
    PerturbationTerm::new(-0.036, Sin, 1.0, -2.0, 0.0,   0.0),
    PerturbationTerm::new( 0.022, Cos, 1.0, -1.0, 0.0,   0.0),
    PerturbationTerm::new( 0.023, Sin, 2.0, -3.0, 0.0,  52.0),
    PerturbationTerm::new(-0.016, Sin, 1.0, -5.0, 0.0, -69.0),
];

#[rustfmt::skip]
static SATURN_TERMS: [PerturbationTerm; 4] = [
    PerturbationTerm::new(-0.229, Cos, 2.0, -4.0, 0.0,  -2.0),
    PerturbationTerm::new( 0.119, Sin, 1.0, -2.0, 0.0,  -3.0),
    PerturbationTerm::new( 0.046, Sin, 2.0, -6.0, 0.0, -69.0),
    PerturbationTerm::new( 0.014, Sin, 1.0, -3.0, 0.0,  32.0),
];

#[rustfmt::skip]
static URANUS_TERMS: [PerturbationTerm; 3] = [
    PerturbationTerm::new( 0.040, Sin, 0.0,  1.0, -2.0,  6.0),
    PerturbationTerm::new( 0.035, Sin, 0.0,  1.0, -3.0, 33.0),
    PerturbationTerm::new(-0.015, Sin, 1.0,  0.0, -1.0, 20.0),
];

/// Perturbation terms for a body (empty for all but Jupiter, Saturn, Uranus).
pub fn perturbation_terms(body: Body) -> &'static [PerturbationTerm] {
    match body {
        Body::Jupiter => &JUPITER_TERMS,
        Body::Saturn => &SATURN_TERMS,
        Body::Uranus => &URANUS_TERMS,
        _ => &[],
    }
}

/// Sum of the perturbation terms for `body`, degrees.
pub fn longitude_correction_deg(body: Body, anomalies: &GiantAnomalies) -> f64 {
    perturbation_terms(body)
        .iter()
        .map(|term| term.evaluate(anomalies))
        .sum()
}

/// Apply the perturbation for `body` to a heliocentric longitude.
pub fn perturbed_longitude_deg(body: Body, longitude_deg: f64, t: f64) -> f64 {
    let terms = perturbation_terms(body);
    if terms.is_empty() {
        return longitude_deg;
    }
    normalize_degrees(longitude_deg + longitude_correction_deg(body, &GiantAnomalies::at(t)))
}
