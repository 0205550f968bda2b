//! Google Geocoding API client
//!
//! Precise-address provider of the cascade. Strongest at resolving
//! landmark and mountain names in natural language; results are
//! always treated as venue-level (`exact`).

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoPoint;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    config::GeocodingConfig,
    error::GeocodeError,
    models::{GeocodeBias, GeocodeHit},
    provider::GeocodeProvider,
};

/// Google Geocoding API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        pub status: String,
        #[serde(default)]
        pub results: Vec<GeocodeResult>,
        pub error_message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResult {
        pub geometry: Geometry,
        pub formatted_address: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub location: Location,
    }

    #[derive(Debug, Deserialize)]
    pub struct Location {
        pub lat: f64,
        pub lng: f64,
    }
}

/// Google Geocoding API client
#[derive(Debug)]
pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl GoogleGeocoder {
    /// Create a new Google geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// cannot be created.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        let api_key = config.google_api_key.clone().ok_or_else(|| {
            GeocodeError::ConfigurationError("Google Maps API key is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.google_base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl GeocodeProvider for GoogleGeocoder {
    #[instrument(skip(self, bias), fields(provider = "google"))]
    async fn resolve(
        &self,
        query: &str,
        bias: &GeocodeBias,
    ) -> Result<Option<GeocodeHit>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::InvalidQuery(
                "Geocoding query cannot be empty".to_string(),
            ));
        }

        let mut params = vec![
            ("address", query.to_string()),
            ("key", self.api_key.clone()),
        ];

        if let Some(country) = &bias.country {
            debug!(region = %country, "Using region bias");
            params.push(("region", country.as_str().to_string()));
        }

        let url = format!("{}/maps/api/geocode/json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    GeocodeError::ConnectionFailed(e.to_string())
                } else {
                    GeocodeError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimitExceeded);
        }
        if !status.is_success() {
            return Err(GeocodeError::RequestFailed(format!("HTTP {status}")));
        }

        let body: api::GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::ParseError(e.to_string()))?;

        match body.status.as_str() {
            "OK" => {},
            "ZERO_RESULTS" => {
                debug!("No results");
                return Ok(None);
            },
            "REQUEST_DENIED" | "OVER_QUERY_LIMIT" => {
                return Err(GeocodeError::AuthenticationFailed(
                    body.error_message.unwrap_or(body.status),
                ));
            },
            other => {
                warn!(status = other, "Unexpected API status");
                return Ok(None);
            },
        }

        let Some(result) = body.results.into_iter().next() else {
            return Ok(None);
        };

        let location = result.geometry.location;
        let coordinates = GeoPoint::new(location.lng, location.lat)
            .map_err(|e| GeocodeError::ParseError(e.to_string()))?;
        let formatted_name = result
            .formatted_address
            .unwrap_or_else(|| query.to_string());

        debug!(name = %formatted_name, %coordinates, "Geocoded address");
        Ok(Some(GeocodeHit::exact(coordinates, formatted_name)))
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }
}
