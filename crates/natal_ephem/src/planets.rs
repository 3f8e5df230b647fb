//! Heliocentric positions of Mercury through Pluto.

use crate::body::Body;
use crate::elements::{ElementsAt, elements_of};
use crate::kepler::HeliocentricPosition;
use crate::perturbation::perturbed_longitude_deg;
use crate::pluto::pluto_heliocentric_longitude_deg;

/// Heliocentric state of a planet, J2000 ecliptic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetHeliocentric {
    /// Two-body longitude plus perturbations (Pluto: its own series),
    /// degrees in [0, 360).
    pub longitude_deg: f64,
    /// AU.
    pub radius_au: f64,
    /// Degrees in [0, 360).
    pub mean_anomaly_deg: f64,
    /// Elements the position was solved from.
    pub elements: ElementsAt,
}

/// Heliocentric position of `body` at `t` Julian centuries since J2000.0.
///
/// `None` for the Sun and the Moon.
pub fn planet_heliocentric(body: Body, t: f64) -> Option<PlanetHeliocentric> {
    let elements = elements_of(body)?.at(t);
    let pos = HeliocentricPosition::from_elements(&elements);
    let longitude_deg = match body {
        Body::Pluto => pluto_heliocentric_longitude_deg(t),
        _ => perturbed_longitude_deg(body, pos.longitude_deg, t),
    };
    Some(PlanetHeliocentric {
        longitude_deg,
        radius_au: pos.radius_au,
        mean_anomaly_deg: elements.mean_anomaly_deg(),
        elements,
    })
}
