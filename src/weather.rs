//! Weather client for the Open-Meteo current-conditions API
//!
//! Fetches temperature, wind speed, gusts and direction for a coordinate pair.
//! Speeds arrive in km/h, temperature in Celsius, direction in degrees.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::WeatherSnapshot;
use crate::{KiteBotError, Result};

/// Variables requested from the `current` block
pub const CURRENT_FIELDS: &str = "temperature_2m,wind_speed_10m,wind_gusts_10m,wind_direction_10m";

/// Fetches the current weather for coordinates.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_conditions(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot>;
}

/// Open-Meteo forecast API client
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a new client from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("kitebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KiteBotError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}&timezone=auto",
            self.base_url, latitude, longitude, CURRENT_FIELDS
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn current_conditions(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot> {
        let start_time = Instant::now();
        let url = self.current_url(latitude, longitude);
        debug!("OpenMeteo API request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| KiteBotError::weather(format!("OpenMeteo request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KiteBotError::weather(format!(
                "OpenMeteo answered with HTTP {status}"
            )));
        }

        let forecast: openmeteo::ForecastResponse = response.json().await.map_err(|e| {
            error!("Failed to parse weather response: {}", e);
            KiteBotError::weather(format!("Invalid weather data received from OpenMeteo: {e}"))
        })?;

        let total_duration = start_time.elapsed();
        if total_duration > Duration::from_secs(5) {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        let current = forecast.current.ok_or_else(|| {
            KiteBotError::weather(format!(
                "No current weather data available from OpenMeteo for {latitude:.4},{longitude:.4}"
            ))
        })?;

        info!(
            "Retrieved current weather in {:.3}s",
            total_duration.as_secs_f64()
        );
        Ok(current.into())
    }
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use super::WeatherSnapshot;
    use serde::Deserialize;

    /// Forecast endpoint response; only the `current` block is used
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    /// Current conditions; every variable may be missing or null
    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m", default)]
        pub temperature: Option<f64>,
        #[serde(rename = "wind_speed_10m", default)]
        pub wind_speed: Option<f64>,
        #[serde(rename = "wind_gusts_10m", default)]
        pub wind_gusts: Option<f64>,
        #[serde(rename = "wind_direction_10m", default)]
        pub wind_direction: Option<f64>,
    }

    impl From<CurrentData> for WeatherSnapshot {
        fn from(current: CurrentData) -> Self {
            Self {
                temperature_c: current.temperature,
                wind_speed_kmh: current.wind_speed,
                wind_gust_kmh: current.wind_gusts,
                wind_direction_deg: current.wind_direction,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_url() {
        let config = WeatherConfig {
            base_url: "https://weather.example/v1/".to_string(),
            ..WeatherConfig::default()
        };
        let client = OpenMeteoClient::new(&config).unwrap();
        assert_eq!(
            client.current_url(-2.7957, -40.5123),
            format!(
                concat!(
                    "https://weather.example/v1/forecast",
                    "?latitude=-2.7957&longitude=-40.5123&current={}&timezone=auto"
                ),
                CURRENT_FIELDS
            )
        );
    }

    #[test]
    fn test_parse_current_block() {
        // language=json
        let body = r#"{
            "latitude": -2.75,
            "longitude": -40.5,
            "timezone": "America/Fortaleza",
            "current": {
                "time": "2026-10-19T14:00",
                "interval": 900,
                "temperature_2m": 29.1,
                "wind_speed_10m": 27.78,
                "wind_gusts_10m": 38.2,
                "wind_direction_10m": 95
            }
        }"#;
        let response: openmeteo::ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot: WeatherSnapshot = response.current.unwrap().into();
        assert_eq!(snapshot.temperature_c, Some(29.1));
        assert_eq!(snapshot.wind_speed_kmh, Some(27.78));
        assert_eq!(snapshot.wind_gust_kmh, Some(38.2));
        assert_eq!(snapshot.wind_direction_deg, Some(95.0));
    }

    #[test]
    fn test_parse_missing_and_null_fields() {
        let body = r#"{"current": {"temperature_2m": null, "wind_speed_10m": 12.0}}"#;
        let response: openmeteo::ForecastResponse = serde_json::from_str(body).unwrap();
        let snapshot: WeatherSnapshot = response.current.unwrap().into();
        assert_eq!(snapshot.temperature_c, None);
        assert_eq!(snapshot.wind_speed_kmh, Some(12.0));
        assert_eq!(snapshot.wind_direction_deg, None);
    }

    #[test]
    fn test_parse_without_current_block() {
        let body = r#"{"error": true, "reason": "Latitude must be in range of -90 to 90°."}"#;
        let response: openmeteo::ForecastResponse = serde_json::from_str(body).unwrap();
        assert!(response.current.is_none());
    }
}
