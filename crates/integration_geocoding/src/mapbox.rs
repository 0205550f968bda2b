//! Mapbox Geocoding API client
//!
//! Commercial fallback provider of the cascade, with two modes. In
//! strict mode only POI-typed features above 0.6 relevance are
//! accepted. In fallback mode the request additionally asks for
//! place/locality features, and the first such feature above 0.5
//! relevance is kept as a non-exact answer while the scan keeps
//! looking for a real POI.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoPoint;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::GeocodingConfig,
    error::GeocodeError,
    models::{GeocodeBias, GeocodeHit},
    provider::GeocodeProvider,
    urlencoding,
};

/// Minimum relevance for a POI-typed feature
const POI_RELEVANCE: f64 = 0.6;

/// Minimum relevance for a place/locality-typed fallback feature
const PLACE_RELEVANCE: f64 = 0.5;

/// Mapbox Geocoding API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        #[serde(default)]
        pub features: Vec<Feature>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Feature {
        #[serde(default)]
        pub place_type: Vec<String>,
        #[serde(default)]
        pub relevance: f64,
        #[serde(default)]
        pub place_name: String,
        #[serde(default)]
        pub center: Vec<f64>,
    }
}

/// Mapbox Geocoding API client
#[derive(Debug)]
pub struct MapboxGeocoder {
    client: Client,
    access_token: String,
    base_url: String,
    timeout_secs: u64,
    max_results: usize,
}

impl MapboxGeocoder {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is missing or the HTTP
    /// client cannot be created.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        let access_token = config.mapbox_access_token.clone().ok_or_else(|| {
            GeocodeError::ConfigurationError("Mapbox access token is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            access_token,
            base_url: config.mapbox_base_url.clone(),
            timeout_secs: config.timeout_secs,
            max_results: config.max_results,
        })
    }

    fn feature_point(feature: &api::Feature) -> Option<GeoPoint> {
        let lng = feature.center.first().copied()?;
        let lat = feature.center.get(1).copied()?;
        GeoPoint::new(lng, lat).ok()
    }
}

#[async_trait]
impl GeocodeProvider for MapboxGeocoder {
    #[instrument(skip(self, bias), fields(provider = "mapbox"))]
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

        let types = if bias.allow_place_fallback {
            "poi,address,place,locality"
        } else {
            "poi,address"
        };

        let mut params = vec![
            ("access_token", self.access_token.clone()),
            ("limit", self.max_results.to_string()),
            ("types", types.to_string()),
        ];

        if let Some(proximity) = bias.proximity {
            params.push((
                "proximity",
                format!("{},{}", proximity.longitude(), proximity.latitude()),
            ));
        }

        if let Some(country) = &bias.country {
            debug!(country = %country, "Restricting search to country");
            params.push(("country", country.as_str().to_string()));
        }

        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.base_url,
            urlencoding::encode(query)
        );

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
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::AuthenticationFailed(
                "Invalid Mapbox access token".to_string(),
            ));
        }
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

        debug!(count = body.features.len(), "Received features");

        let mut place_fallback: Option<GeocodeHit> = None;

        for feature in &body.features {
            let Some(coordinates) = Self::feature_point(feature) else {
                continue;
            };

            debug!(
                name = %feature.place_name,
                types = ?feature.place_type,
                relevance = feature.relevance,
                "Inspecting feature"
            );

            let is_poi = feature.place_type.iter().any(|t| t == "poi");
            if is_poi && feature.relevance > POI_RELEVANCE {
                debug!(name = %feature.place_name, "Accepted POI");
                return Ok(Some(GeocodeHit::exact(
                    coordinates,
                    feature.place_name.clone(),
                )));
            }

            // Remember the first locality-level feature, but keep
            // scanning in case a real POI ranks below it
            if bias.allow_place_fallback
                && place_fallback.is_none()
                && feature.relevance > PLACE_RELEVANCE
                && feature
                    .place_type
                    .iter()
                    .any(|t| t == "place" || t == "locality")
            {
                place_fallback = Some(GeocodeHit::approximate(
                    coordinates,
                    feature.place_name.clone(),
                ));
            }
        }

        if let Some(hit) = &place_fallback {
            debug!(name = %hit.formatted_name, "Accepted place-level fallback");
        } else {
            debug!("No acceptable feature");
        }

        Ok(place_fallback)
    }

    fn provider_name(&self) -> &'static str {
        "mapbox"
    }
}
