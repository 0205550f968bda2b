//! Geocoding configuration

use serde::{Deserialize, Serialize};

/// Configuration for the geocoding providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Google Maps API key (optional, enables the precise-address provider)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_api_key: Option<String>,

    /// Google Geocoding API base URL
    #[serde(default = "default_google_base_url")]
    pub google_base_url: String,

    /// Nominatim (OpenStreetMap) base URL
    #[serde(default = "default_nominatim_base_url")]
    pub nominatim_base_url: String,

    /// Mapbox access token (optional, enables the commercial fallback provider)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox_access_token: Option<String>,

    /// Mapbox Geocoding API base URL
    #[serde(default = "default_mapbox_base_url")]
    pub mapbox_base_url: String,

    /// User-Agent header, required by the Nominatim usage policy
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How many ranked results to inspect per provider call
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_google_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_mapbox_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

fn default_user_agent() -> String {
    "pinpoint-geocoder/0.1 (map pin resolution)".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_results() -> usize {
    5
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_base_url: default_google_base_url(),
            nominatim_base_url: default_nominatim_base_url(),
            mapbox_access_token: None,
            mapbox_base_url: default_mapbox_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
        }
    }
}

impl GeocodingConfig {
    /// Build a configuration from the environment
    ///
    /// Reads `GOOGLE_MAPS_API_KEY` and `MAPBOX_ACCESS_TOKEN`; a
    /// missing or empty variable leaves that provider disabled.
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty =
            |name: &str| std::env::var(name).ok().filter(|value| !value.trim().is_empty());

        Self {
            google_api_key: non_empty("GOOGLE_MAPS_API_KEY"),
            mapbox_access_token: non_empty("MAPBOX_ACCESS_TOKEN"),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing (short timeout, no credentials)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }

        if self.max_results > 10 {
            return Err("max_results must be 10 or less".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty (Nominatim usage policy)".to_string());
        }

        Ok(())
    }
}
