//! Nominatim (OpenStreetMap) geocoding client
//!
//! Community POI provider of the cascade. Keyless open data; the
//! usage policy requires an identifying User-Agent. Preferred for
//! accommodations and venues that commercial geocoders collapse into
//! the wrong locality, which is why results are filtered to an
//! allow-list of POI categories instead of accepting the top match.

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
};

/// OSM types accepted even when the class is something generic
const TOURISM_TYPES: &[&str] = &[
    "hostel",
    "hotel",
    "guest_house",
    "motel",
    "attraction",
    "museum",
    "viewpoint",
    "camp_site",
];

const AMENITY_TYPES: &[&str] = &[
    "restaurant",
    "cafe",
    "bar",
    "pub",
    "fast_food",
    "bus_station",
    "ferry_terminal",
];

/// OSM classes accepted wholesale
const POI_CLASSES: &[&str] = &["tourism", "amenity", "leisure", "natural", "historic"];

/// Nominatim API response structures
#[allow(dead_code)]
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        pub lat: String,
        pub lon: String,
        #[serde(default)]
        pub class: String,
        #[serde(default, rename = "type")]
        pub kind: String,
        #[serde(default)]
        pub display_name: String,
        pub importance: Option<f64>,
    }
}

/// Nominatim geocoding client
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    timeout_secs: u64,
    max_results: usize,
}

impl NominatimGeocoder {
    /// Create a new Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodeError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.nominatim_base_url.clone(),
            timeout_secs: config.timeout_secs,
            max_results: config.max_results,
        })
    }

    fn is_poi(result: &api::SearchResult) -> bool {
        POI_CLASSES.contains(&result.class.as_str())
            || TOURISM_TYPES.contains(&result.kind.as_str())
            || AMENITY_TYPES.contains(&result.kind.as_str())
    }
}

#[async_trait]
impl GeocodeProvider for NominatimGeocoder {
    #[instrument(skip(self, bias), fields(provider = "nominatim"))]
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
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", self.max_results.to_string()),
            ("addressdetails", "1".to_string()),
        ];

        if let Some(viewbox) = bias.viewbox {
            // bounded=0: prefer, but do not require, results in the box
            params.push((
                "viewbox",
                format!(
                    "{},{},{},{}",
                    viewbox.west, viewbox.north, viewbox.east, viewbox.south
                ),
            ));
            params.push(("bounded", "0".to_string()));
        }

        let url = format!("{}/search", self.base_url);

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

        let results: Vec<api::SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodeError::ParseError(e.to_string()))?;

        debug!(count = results.len(), "Received ranked results");

        for result in results {
            debug!(
                class = %result.class,
                kind = %result.kind,
                name = %result.display_name,
                "Inspecting result"
            );

            if !Self::is_poi(&result) {
                continue;
            }

            let lat: f64 = result
                .lat
                .parse()
                .map_err(|_| GeocodeError::ParseError("Invalid latitude".to_string()))?;
            let lon: f64 = result
                .lon
                .parse()
                .map_err(|_| GeocodeError::ParseError("Invalid longitude".to_string()))?;
            let coordinates = GeoPoint::new(lon, lat)
                .map_err(|e| GeocodeError::ParseError(e.to_string()))?;

            debug!(name = %result.display_name, %coordinates, "Accepted POI");
            return Ok(Some(GeocodeHit::exact(coordinates, result.display_name)));
        }

        debug!("No suitable POI in ranked results");
        Ok(None)
    }

    fn provider_name(&self) -> &'static str {
        "nominatim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(class: &str, kind: &str) -> api::SearchResult {
        api::SearchResult {
            lat: "0.0".to_string(),
            lon: "0.0".to_string(),
            class: class.to_string(),
            kind: kind.to_string(),
            display_name: String::new(),
            importance: None,
        }
    }

    #[test]
    fn test_accepts_tourism_and_amenity() {
        assert!(NominatimGeocoder::is_poi(&result("tourism", "hotel")));
        assert!(NominatimGeocoder::is_poi(&result("amenity", "restaurant")));
        assert!(NominatimGeocoder::is_poi(&result("building", "hostel")));
        assert!(NominatimGeocoder::is_poi(&result("highway", "bus_station")));
    }

    #[test]
    fn test_accepts_leisure_natural_historic() {
        assert!(NominatimGeocoder::is_poi(&result("leisure", "park")));
        assert!(NominatimGeocoder::is_poi(&result("natural", "peak")));
        assert!(NominatimGeocoder::is_poi(&result("historic", "ruins")));
    }

    #[test]
    fn test_rejects_localities_and_roads() {
        assert!(!NominatimGeocoder::is_poi(&result("place", "city")));
        assert!(!NominatimGeocoder::is_poi(&result("boundary", "administrative")));
        assert!(!NominatimGeocoder::is_poi(&result("highway", "residential")));
    }

    #[test]
    fn test_result_parsing() {
        let json = r#"[{
            "lat": "-0.2295",
            "lon": "-78.5243",
            "class": "tourism",
            "type": "hostel",
            "display_name": "Secret Garden, Quito, Ecuador",
            "importance": 0.201
        }]"#;
        let results: Vec<api::SearchResult> = serde_json::from_str(json).expect("parse");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, "hostel");
        assert_eq!(results[0].display_name, "Secret Garden, Quito, Ecuador");
    }

    #[test]
    fn test_empty_result_parsing() {
        let results: Vec<api::SearchResult> = serde_json::from_str("[]").expect("parse");
        assert!(results.is_empty());
    }
}
