//! Wind Analysis for Kitesurf Conditions
//!
//! Unit conversion, compass mapping and rideability classification of the
//! current wind. Everything here is pure and deterministic.

use std::fmt;

use crate::models::WeatherSnapshot;

/// Kilometres per hour in one knot
pub const KMH_PER_KNOT: f64 = 1.852;

/// Placeholder rendered for any value the provider did not send
pub const NOT_AVAILABLE: &str = "N/A";

const CARDINAL_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEGREES: f64 = 360.0 / CARDINAL_POINTS.len() as f64;

/// Convert km/h to knots, rounded to one decimal.
#[must_use]
pub fn to_knots(speed_kmh: f64) -> f64 {
    (speed_kmh / KMH_PER_KNOT * 10.0).round() / 10.0
}

/// Map a direction in degrees onto one of the 16 compass points.
///
/// Sectors are 22.5° wide and centred on each point, so 350° is `N`.
/// A missing direction renders as `N/A`.
#[must_use]
pub fn degrees_to_cardinal(degrees: Option<f64>) -> &'static str {
    let Some(degrees) = degrees else {
        return NOT_AVAILABLE;
    };
    #[allow(clippy::cast_possible_truncation)]
    let sector = (degrees / SECTOR_DEGREES).round_ties_even() as i64;
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let index = sector.rem_euclid(CARDINAL_POINTS.len() as i64) as usize;
    CARDINAL_POINTS[index]
}

/// Rideability bands for kitesurfing, in knots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindCondition {
    /// Below 8 kn
    VeryWeak,
    /// 8 kn up to (excluding) 12 kn
    Light,
    /// 12 kn to 25 kn inclusive
    Perfect,
    /// Above 25 kn up to 30 kn inclusive
    Strong,
    /// Above 30 kn
    Dangerous,
}

impl WindCondition {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WindCondition::VeryWeak => "very weak wind, unrideable",
            WindCondition::Light => "light wind, beginners/foil only",
            WindCondition::Perfect => "perfect condition",
            WindCondition::Strong => "strong wind, experienced riders / small kite",
            WindCondition::Dangerous => "dangerous wind",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            WindCondition::VeryWeak => "😴",
            WindCondition::Light => "😅",
            WindCondition::Perfect => "🚀",
            WindCondition::Strong => "⚡",
            WindCondition::Dangerous => "☢️",
        }
    }
}

impl fmt::Display for WindCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Classify an average wind speed in knots.
#[must_use]
pub fn classify(speed_knots: f64) -> WindCondition {
    if speed_knots < 8.0 {
        WindCondition::VeryWeak
    } else if speed_knots < 12.0 {
        WindCondition::Light
    } else if speed_knots <= 25.0 {
        WindCondition::Perfect
    } else if speed_knots <= 30.0 {
        WindCondition::Strong
    } else {
        WindCondition::Dangerous
    }
}

/// Wind figures derived from a [`WeatherSnapshot`]
#[derive(Debug, Clone, PartialEq)]
pub struct WindAssessment {
    /// Average wind in knots (0 when the provider omitted it)
    pub speed_knots: f64,
    /// Gusts in knots (0 when the provider omitted them)
    pub gust_knots: f64,
    /// Compass point, or `N/A`
    pub cardinal: String,
    /// Rideability band of the average wind
    pub condition: WindCondition,
}

impl WindAssessment {
    /// Derive the assessment; absent speeds count as zero for the arithmetic.
    #[must_use]
    pub fn assess(weather: &WeatherSnapshot) -> Self {
        let speed_knots = to_knots(weather.wind_speed_kmh.unwrap_or_default());
        let gust_knots = to_knots(weather.wind_gust_kmh.unwrap_or_default());

        Self {
            speed_knots,
            gust_knots,
            cardinal: degrees_to_cardinal(weather.wind_direction_deg).to_string(),
            condition: classify(speed_knots),
        }
    }

    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        self.condition.label()
    }

    #[must_use]
    pub fn condition_emoji(&self) -> &'static str {
        self.condition.emoji()
    }
}
