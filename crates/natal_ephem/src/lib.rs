//! Geocentric ecliptic longitudes of the Sun, Moon and planets.
//!
//! The model is a perturbed two-body Keplerian one, tuned for zodiac-sign
//! precision rather than arc-seconds:
//! - Sun: mean longitude plus equation of center
//! - Moon: mean longitude plus the largest periodic terms
//! - Mercury–Neptune: mean orbital elements, Kepler's equation, additive
//!   perturbation terms for the giant planets
//! - Pluto: polynomial mean longitude plus a sine series in its mean anomaly
//!
//! Planetary longitudes are converted from heliocentric to geocentric by
//! vector subtraction against Earth's own orbit and carried from the J2000
//! equinox to the equinox of date.

pub mod body;
pub mod elements;
pub mod ephemeris;
pub mod geocentric;
pub mod kepler;
pub mod moon;
pub mod perturbation;
pub mod planets;
pub mod pluto;
pub mod sun;

pub use body::{ALL_BODIES, Body};
pub use elements::{ElementsAt, Linear, OrbitalElements};
pub use ephemeris::{Ephemeris, geocentric_longitude_deg};
pub use geocentric::{EarthPosition, earth_position, heliocentric_to_geocentric};
pub use kepler::{HeliocentricPosition, KEPLER_ITERATIONS, solve_kepler, true_anomaly_rad};
pub use moon::moon_longitude_deg;
pub use perturbation::{GiantAnomalies, Harmonic, PerturbationTerm};
pub use planets::{PlanetHeliocentric, planet_heliocentric};
pub use pluto::pluto_heliocentric_longitude_deg;
pub use sun::{SolarPosition, sun_position};
