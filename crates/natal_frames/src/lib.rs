//! Ecliptic frame helpers for chart computation.
//!
//! Provides the mean obliquity of the ecliptic, general precession in
//! longitude (to carry J2000 longitudes to the equinox of date), and a
//! planar ecliptic vector for heliocentric/geocentric conversion.

pub mod obliquity;
pub mod planar;
pub mod precession;

pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use planar::EclipticVector;
pub use precession::{general_precession_deg, j2000_to_date_deg};
