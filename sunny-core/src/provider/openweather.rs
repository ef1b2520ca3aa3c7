use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::model::{Condition, Coordinates, ForecastEntry, Units, WeatherSnapshot};

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn get_json(&self, url: &str, city: &str, units: Units) -> Result<String> {
        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", units.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather response body")?;

        match status {
            StatusCode::UNAUTHORIZED => Err(anyhow!(
                "OpenWeather rejected the request (HTTP 401). Check your API key."
            )),
            StatusCode::NOT_FOUND => Err(anyhow!("Location '{city}' not found.")),
            s if !s.is_success() => Err(anyhow!(
                "OpenWeather request failed with status {s}: {}",
                truncate_body(&body),
            )),
            _ => Ok(body),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize, Default)]
struct OwWeather {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize, Default)]
struct OwCoord {
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    lat: f64,
}

#[derive(Debug, Deserialize, Default)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    coord: OwCoord,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    coord: OwCoord,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn snapshot_from_current(parsed: OwCurrentResponse) -> WeatherSnapshot {
    // A missing weather entry is not an error: the snapshot decodes to the
    // unknown category and downstream lookups serve their defaults.
    let weather = parsed.weather.into_iter().next().unwrap_or_default();

    WeatherSnapshot {
        city: parsed.name,
        temperature: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        condition: Condition::from_provider(&weather.main),
        description: weather.description,
        icon: weather.icon,
        coord: Coordinates {
            lon: parsed.coord.lon,
            lat: parsed.coord.lat,
        },
        country: parsed.sys.country,
    }
}

fn entries_from_forecast(parsed: OwForecastResponse) -> Vec<ForecastEntry> {
    let city = parsed.city;
    parsed
        .list
        .into_iter()
        .map(|entry| {
            let at = DateTime::<Utc>::from_timestamp(entry.dt, 0).unwrap_or_else(Utc::now);
            let weather = entry.weather.into_iter().next().unwrap_or_default();
            ForecastEntry {
                at,
                snapshot: WeatherSnapshot {
                    city: city.name.clone(),
                    temperature: entry.main.temp,
                    feels_like: entry.main.feels_like,
                    humidity: entry.main.humidity,
                    wind_speed: entry.wind.speed,
                    condition: Condition::from_provider(&weather.main),
                    description: weather.description,
                    icon: weather.icon,
                    coord: Coordinates {
                        lon: city.coord.lon,
                        lat: city.coord.lat,
                    },
                    country: city.country.clone(),
                },
            }
        })
        .collect()
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str, units: Units) -> Result<WeatherSnapshot> {
        let body = self.get_json(CURRENT_URL, city, units).await?;
        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;
        Ok(snapshot_from_current(parsed))
    }

    async fn forecast(&self, city: &str, units: Units) -> Result<Vec<ForecastEntry>> {
        let body = self.get_json(FORECAST_URL, city, units).await?;
        let parsed: OwForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;
        Ok(entries_from_forecast(parsed))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
