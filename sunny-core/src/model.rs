use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Coarse weather classification reported by the provider.
///
/// The set is closed and case-sensitive; anything the provider sends outside
/// it decodes to [`Condition::Unknown`] rather than an error, since providers
/// introduce new codes over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

impl Condition {
    /// Decode the provider's `weather[0].main` string.
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "Thunderstorm" => Condition::Thunderstorm,
            "Drizzle" => Condition::Drizzle,
            "Rain" => Condition::Rain,
            "Snow" => Condition::Snow,
            "Atmosphere" => Condition::Atmosphere,
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            _ => Condition::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Drizzle => "Drizzle",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Atmosphere => "Atmosphere",
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Unknown => "Unknown",
        }
    }

    /// The seven known categories, in the provider's documented order.
    pub const fn known() -> &'static [Condition] {
        &[
            Condition::Thunderstorm,
            Condition::Drizzle,
            Condition::Rain,
            Condition::Snow,
            Condition::Atmosphere,
            Condition::Clear,
            Condition::Clouds,
        ]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit system for temperature and wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn degree_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    pub fn wind_unit(&self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mi/h",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported values: metric, imperial."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

/// One observation of current conditions, already parsed from the provider.
///
/// Immutable once constructed; lives for a single CLI invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub description: String,
    pub condition: Condition,
    /// Provider icon code, e.g. "01d". Selects glyph sub-variants for
    /// `Clear` and `Clouds`; ignored for every other category.
    pub icon: String,
    pub coord: Coordinates,
    pub country: String,
}

/// One forecast slot: a snapshot plus the time it applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub at: DateTime<Utc>,
    pub snapshot: WeatherSnapshot,
}
