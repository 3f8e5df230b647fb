//! Natal chart assembly.
//!
//! Combines the body longitudes of `natal_ephem` with the Ascendant, maps
//! every longitude to a zodiac sign and degree, and flags retrograde
//! planets. The entry points are [`compute_chart`] for a validated
//! [`natal_time::BirthMoment`] and [`chart_from_input`] / [`chart_from_json`]
//! for wire input.
//!
//! ```no_run
//! use natal_chart::{ChartConfig, compute_chart};
//! use natal_time::BirthMoment;
//!
//! let moment = BirthMoment::parse("1990-06-15", "14:30", 40.71, -74.01, -4.0)?;
//! let chart = compute_chart(&moment, &ChartConfig::default());
//! println!("{}", chart.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ascendant;
pub mod chart;
pub mod config;
pub mod error;
pub mod retrograde;
pub mod sign;
pub mod wire;

pub use ascendant::{
    AscendantRule, ChartAngles, ascendant_deg, ascendant_from_lst, chart_angles, midheaven_from_lst,
};
pub use chart::{
    ALL_CHART_POINTS, BodyPosition, ChartPoint, ChartResult, chart_from_input, chart_from_json,
    compute_chart,
};
pub use config::ChartConfig;
pub use error::ChartError;
pub use retrograde::{RetrogradeMethod, is_retrograde, longitude_rate_deg_per_day, retrograde_flag};
pub use sign::{ALL_SIGNS, Dms, Sign, SignInfo, deg_to_dms, sign_from_longitude};
pub use wire::birth_input_from_json;
