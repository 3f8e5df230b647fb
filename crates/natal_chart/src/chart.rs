//! Chart assembly: every body, the Ascendant, signs and retrograde flags.

use natal_ephem::{ALL_BODIES, Body, Ephemeris};
use natal_time::{BirthInput, BirthMoment};
use serde::{Deserialize, Serialize};

use crate::ascendant::{AscendantRule, ascendant_deg};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::retrograde::retrograde_flag;
use crate::sign::{Sign, sign_from_longitude};
use crate::wire::birth_input_from_json;

/// A point reported in a chart: the ten bodies plus the Ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPoint {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
}

/// All chart points in output order.
pub const ALL_CHART_POINTS: [ChartPoint; 11] = [
    ChartPoint::Sun,
    ChartPoint::Moon,
    ChartPoint::Mercury,
    ChartPoint::Venus,
    ChartPoint::Mars,
    ChartPoint::Jupiter,
    ChartPoint::Saturn,
    ChartPoint::Uranus,
    ChartPoint::Neptune,
    ChartPoint::Pluto,
    ChartPoint::Ascendant,
];

impl ChartPoint {
    pub const fn name(self) -> &'static str {
        match self.body() {
            Some(b) => b.name(),
            None => "Ascendant",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self.body() {
            Some(b) => b.symbol(),
            None => "AC",
        }
    }

    /// The underlying body, `None` for the Ascendant.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Sun => Some(Body::Sun),
            Self::Moon => Some(Body::Moon),
            Self::Mercury => Some(Body::Mercury),
            Self::Venus => Some(Body::Venus),
            Self::Mars => Some(Body::Mars),
            Self::Jupiter => Some(Body::Jupiter),
            Self::Saturn => Some(Body::Saturn),
            Self::Uranus => Some(Body::Uranus),
            Self::Neptune => Some(Body::Neptune),
            Self::Pluto => Some(Body::Pluto),
            Self::Ascendant => None,
        }
    }
}

impl From<Body> for ChartPoint {
    fn from(body: Body) -> Self {
        ALL_CHART_POINTS[body.index()]
    }
}

/// One row of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPosition {
    pub name: ChartPoint,
    /// Tropical ecliptic longitude, [0, 360).
    pub longitude_degrees: f64,
    pub sign: Sign,
    /// [0, 30).
    pub degree_in_sign: f64,
    pub is_retrograde: bool,
}

impl BodyPosition {
    fn new(name: ChartPoint, longitude_degrees: f64, is_retrograde: bool) -> Self {
        let info = sign_from_longitude(longitude_degrees);
        Self {
            name,
            longitude_degrees,
            sign: info.sign,
            degree_in_sign: info.degree_in_sign,
            is_retrograde,
        }
    }
}

/// A computed natal chart.
///
/// `planets` always holds the eleven points in [`ALL_CHART_POINTS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub planets: [BodyPosition; 11],
    pub sun_sign: Sign,
    pub moon_sign: Sign,
    pub ascendant_sign: Sign,
}

impl ChartResult {
    /// Row for a chart point.
    pub fn position(&self, point: ChartPoint) -> &BodyPosition {
        &self.planets[point as usize]
    }

    /// Pretty-printed wire JSON.
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute a chart for a validated birth moment.
///
/// `config` is expected to have passed [`ChartConfig::validate`].
pub fn compute_chart(moment: &BirthMoment, config: &ChartConfig) -> ChartResult {
    let epoch = moment.julian_epoch();
    let eph = Ephemeris::at(epoch);
    let sun_lon = eph.sun().longitude_deg;

    let longitudes = eph.longitudes();
    let bodies = ALL_BODIES.map(|body| {
        let lon = longitudes[body.index()];
        let retro = retrograde_flag(
            body,
            lon,
            sun_lon,
            epoch,
            config.retrograde_method,
            config.rate_step_days,
        );
        let pos = BodyPosition::new(body.into(), lon, retro);
        log::debug!(
            "{} {}: {:.4}° {} {:.2}°{}",
            body.symbol(),
            body.name(),
            pos.longitude_degrees,
            pos.sign.name(),
            pos.degree_in_sign,
            if retro { " R" } else { "" }
        );
        pos
    });

    let asc_lon = ascendant_deg(
        epoch.julian_day(),
        epoch.julian_century(),
        moment.latitude_deg(),
        moment.longitude_deg(),
        config.ascendant_rule,
    );
    let ascendant = BodyPosition::new(ChartPoint::Ascendant, asc_lon, false);
    log::debug!(
        "Ascendant: {:.4}° {} {:.2}° ({})",
        asc_lon,
        ascendant.sign.name(),
        ascendant.degree_in_sign,
        match config.ascendant_rule {
            AscendantRule::EasternHorizon => "eastern-horizon",
            AscendantRule::LstHalfCircle => "lst-half-circle",
        }
    );

    let planets = [
        bodies[0], bodies[1], bodies[2], bodies[3], bodies[4], bodies[5], bodies[6], bodies[7],
        bodies[8], bodies[9], ascendant,
    ];

    ChartResult {
        planets,
        sun_sign: bodies[Body::Sun.index()].sign,
        moon_sign: bodies[Body::Moon.index()].sign,
        ascendant_sign: ascendant.sign,
    }
}

/// Validate wire input and configuration, then compute the chart.
pub fn chart_from_input(input: &BirthInput, config: &ChartConfig) -> Result<ChartResult, ChartError> {
    config
        .validate()
        .map_err(|msg| ChartError::Config(msg.to_string()))?;
    let moment = BirthMoment::try_from(input)?;
    Ok(compute_chart(&moment, config))
}

/// Parse wire JSON input and compute the chart.
///
/// A wrongly typed or missing field is reported as [`ChartError::Input`]
/// naming that field.
pub fn chart_from_json(json: &str, config: &ChartConfig) -> Result<ChartResult, ChartError> {
    let input = birth_input_from_json(json)?;
    chart_from_input(&input, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j2000_london() -> BirthMoment {
        BirthMoment::new(2000, 1, 1, 12, 0, 51.48, 0.0, 0.0).unwrap()
    }

    #[test]
    fn point_order_matches_bodies() {
        for body in ALL_BODIES {
            assert_eq!(ChartPoint::from(body).body(), Some(body));
            assert_eq!(ChartPoint::from(body).name(), body.name());
        }
        assert_eq!(ChartPoint::Ascendant as usize, 10);
        assert_eq!(ChartPoint::Ascendant.body(), None);
    }

    #[test]
    fn eleven_rows_in_order() {
        let chart = compute_chart(&j2000_london(), &ChartConfig::default());
        for (row, point) in chart.planets.iter().zip(ALL_CHART_POINTS) {
            assert_eq!(row.name, point);
        }
    }

    #[test]
    fn convenience_signs_copy_rows() {
        let chart = compute_chart(&j2000_london(), &ChartConfig::default());
        assert_eq!(chart.sun_sign, chart.position(ChartPoint::Sun).sign);
        assert_eq!(chart.moon_sign, chart.position(ChartPoint::Moon).sign);
        assert_eq!(chart.ascendant_sign, chart.position(ChartPoint::Ascendant).sign);
    }

    #[test]
    fn wire_json_shape() {
        let chart = compute_chart(&j2000_london(), &ChartConfig::default());
        let v: serde_json::Value = serde_json::from_str(&chart.to_json().unwrap()).unwrap();
        let planets = v["planets"].as_array().unwrap();
        assert_eq!(planets.len(), 11);
        assert_eq!(planets[0]["name"], "Sun");
        assert_eq!(planets[0]["sign"], "Capricorn");
        assert_eq!(planets[10]["name"], "Ascendant");
        assert_eq!(planets[10]["isRetrograde"], false);
        assert!(planets[3]["longitudeDegrees"].is_number());
        assert!(planets[3]["degreeInSign"].is_number());
        assert_eq!(v["sunSign"], "Capricorn");
        assert!(v["moonSign"].is_string());
        assert!(v["ascendantSign"].is_string());
    }

    #[test]
    fn invalid_config_rejected() {
        let input = BirthInput {
            date: "2000-01-01".into(),
            time: "12:00".into(),
            latitude: 51.48,
            longitude: 0.0,
            timezone_offset_hours: Some(0.0),
        };
        let config = ChartConfig {
            rate_step_days: -1.0,
            ..ChartConfig::default()
        };
        assert!(matches!(chart_from_input(&input, &config), Err(ChartError::Config(_))));
    }

    #[test]
    fn bad_json_rejected() {
        let e = chart_from_json("{\"date\": ", &ChartConfig::default()).unwrap_err();
        assert!(matches!(e, ChartError::Json(_)));
        let e = chart_from_json("{\"date\": 5}", &ChartConfig::default()).unwrap_err();
        assert!(matches!(e, ChartError::Input(ref t) if t.field() == "date"), "{e}");
    }
}
