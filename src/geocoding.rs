//! Geocoding client for Nominatim (OpenStreetMap)
//!
//! Resolves a free-text beach description into coordinates and a canonical
//! address. One request per query, bounded by the configured timeout, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::GeocodingConfig;
use crate::models::{GeoResult, LocationQuery};
use crate::{KiteBotError, Result};

/// Resolves place descriptions to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for `query`.
    ///
    /// `Ok(None)` means the provider answered but found nothing; `Err` means the
    /// provider could not be asked or answered with garbage.
    async fn geocode(&self, query: &LocationQuery) -> Result<Option<GeoResult>>;
}

/// Nominatim search API client
pub struct NominatimClient {
    client: Client,
    base_url: String,
    country_qualifier: String,
}

/// One place from the Nominatim `jsonv2` search output
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimClient {
    /// Create a new client from configuration
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| KiteBotError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_qualifier: config.country_qualifier.clone(),
        })
    }

    /// Text actually sent to the provider: the bounded query plus the country
    #[must_use]
    pub fn search_text(&self, query: &LocationQuery) -> String {
        if self.country_qualifier.is_empty() {
            query.as_str().to_string()
        } else {
            format!("{}, {}", query.as_str(), self.country_qualifier)
        }
    }

    fn search_url(&self, query: &LocationQuery) -> String {
        format!(
            "{}/search?q={}&format=jsonv2&limit=1",
            self.base_url,
            urlencoding::encode(&self.search_text(query))
        )
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    #[instrument(skip(self), fields(query = query.as_str()))]
    async fn geocode(&self, query: &LocationQuery) -> Result<Option<GeoResult>> {
        let start_time = Instant::now();
        let url = self.search_url(query);
        debug!("Nominatim request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| KiteBotError::geocoding(format!("Nominatim request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KiteBotError::geocoding(format!(
                "Nominatim answered with HTTP {status}"
            )));
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            KiteBotError::geocoding(format!("Failed to parse Nominatim response: {e}"))
        })?;

        let Some(place) = places.into_iter().next() else {
            warn!("No results found for location '{}'", query.as_str());
            return Ok(None);
        };

        let latitude = parse_coordinate(&place.lat, "lat")?;
        let longitude = parse_coordinate(&place.lon, "lon")?;
        let result = GeoResult::new(latitude, longitude, place.display_name);

        info!(
            "Geocoded '{}' to {} in {:.3}s",
            query.as_str(),
            result.format_coordinates(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(Some(result))
    }
}

fn parse_coordinate(raw: &str, field: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        KiteBotError::geocoding(format!("Nominatim returned a non-numeric {field}: '{raw}'"))
    })
}
