#![forbid(unsafe_code)]
//! Geocoding integration for pinpoint
//!
//! Resolves an informal place mention (a name plus a loose geographic
//! hint) into coordinates for plotting a map pin, by cascading over a
//! static gazetteer and three upstream geocoding services.
//!
//! # Architecture
//!
//! The crate follows a provider pattern with a common trait
//! [`GeocodeProvider`] implemented by [`GoogleGeocoder`],
//! [`NominatimGeocoder`], and [`MapboxGeocoder`]. The [`PlaceResolver`]
//! runs the fixed cascade over them:
//!
//! `gazetteer -> google -> nominatim -> mapbox (strict) -> mapbox (fallback)`
//!
//! Each stage exhausts every candidate query (context-qualified
//! variant first, then the bare name) before the next stage starts.
//! The order encodes two hierarchies at once: trust (curated data
//! over precise commercial over community POI over commercial
//! fallback) and specificity. Provider calls are strictly sequential;
//! a faster out-of-order answer must not win.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{PlaceQuery, PlaceResolver};
//!
//! let resolver = PlaceResolver::from_env()?;
//! let query = PlaceQuery::new("Secret Garden Hostel").with_context("Cotopaxi");
//!
//! let resolution = resolver.resolve(&query).await;
//! if let Some(coordinates) = resolution.coordinates {
//!     println!("pin at {coordinates}");
//! }
//! ```

mod config;
mod country;
mod error;
mod gazetteer;
mod google;
mod mapbox;
mod models;
mod nominatim;
mod provider;
mod proximity;
mod query;
mod urlencoding;
mod validator;

pub use config::GeocodingConfig;
pub use error::GeocodeError;
pub use google::GoogleGeocoder;
pub use mapbox::MapboxGeocoder;
pub use models::{GeocodeBias, GeocodeHit, PlaceQuery, Resolution};
pub use nominatim::NominatimGeocoder;
pub use provider::GeocodeProvider;

use std::sync::Arc;

use domain::CountryCode;
use tracing::{debug, info, instrument, warn};

/// Suffix appended to locality-level fallback matches
const APPROXIMATE_SUFFIX: &str = " (approximate)";

/// Place-mention resolver running the full cascade
///
/// Stateless apart from the shared read-only tables; safe to share
/// across concurrent resolutions. Providers whose credentials are
/// missing are simply absent and their stages are skipped.
pub struct PlaceResolver {
    precise: Option<Arc<dyn GeocodeProvider>>,
    community: Option<Arc<dyn GeocodeProvider>>,
    commercial: Option<Arc<dyn GeocodeProvider>>,
}

impl std::fmt::Debug for PlaceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceResolver")
            .field("precise", &self.precise.is_some())
            .field("community", &self.community.is_some())
            .field("commercial", &self.commercial.is_some())
            .finish()
    }
}

impl PlaceResolver {
    /// Create a resolver with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an HTTP
    /// client cannot be initialized. A missing credential is not an
    /// error; it disables that provider's stages.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        config
            .validate()
            .map_err(GeocodeError::ConfigurationError)?;

        let precise: Option<Arc<dyn GeocodeProvider>> = if config.google_api_key.is_some() {
            Some(Arc::new(GoogleGeocoder::new(config)?))
        } else {
            warn!("No Google Maps API key configured, skipping precise-address stage");
            None
        };

        let community: Option<Arc<dyn GeocodeProvider>> =
            Some(Arc::new(NominatimGeocoder::new(config)?));

        let commercial: Option<Arc<dyn GeocodeProvider>> = if config.mapbox_access_token.is_some()
        {
            Some(Arc::new(MapboxGeocoder::new(config)?))
        } else {
            warn!("No Mapbox access token configured, skipping commercial stages");
            None
        };

        Ok(Self {
            precise,
            community,
            commercial,
        })
    }

    /// Create a resolver configured from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be initialized.
    pub fn from_env() -> Result<Self, GeocodeError> {
        Self::new(&GeocodingConfig::from_env())
    }

    /// Create a resolver over explicit providers
    ///
    /// Intended for tests and for hosts that wire their own adapters.
    #[must_use]
    pub fn with_providers(
        precise: Option<Arc<dyn GeocodeProvider>>,
        community: Option<Arc<dyn GeocodeProvider>>,
        commercial: Option<Arc<dyn GeocodeProvider>>,
    ) -> Self {
        Self {
            precise,
            community,
            commercial,
        }
    }

    /// Resolve a place mention into coordinates
    ///
    /// Never fails: every provider error is logged and treated as an
    /// absent result, and exhaustion of all stages yields
    /// `Resolution { success: false }`.
    #[instrument(skip(self, place), fields(place_name = %place.place_name))]
    pub async fn resolve(&self, place: &PlaceQuery) -> Resolution {
        let place_name = place.place_name.trim();
        if place_name.is_empty() {
            warn!("Empty place name");
            return Resolution::not_found();
        }

        let location_context = place.location_context();

        // Stage 1: gazetteer shortcut. A hit wins outright, before
        // any network call and before country validation.
        if let Some((key, center)) = gazetteer::shortcut(place_name) {
            info!(key, "Gazetteer hit");
            let formatted_name = if location_context.is_empty() {
                place_name.to_string()
            } else {
                format!("{place_name}, {location_context}")
            };
            return Resolution::found(center, formatted_name);
        }

        let country = country::detect(location_context);
        let area = proximity::bias_for(location_context);
        let queries = query::variants(place_name, location_context);

        debug!(
            ?queries,
            country = country.as_ref().map(CountryCode::as_str),
            proximity = area.is_some(),
            "Starting provider cascade"
        );

        // Stage 2: precise-address provider, validated against the
        // expected country.
        if let Some(provider) = &self.precise {
            let bias = GeocodeBias::for_country(country.clone());
            if let Some(hit) = self
                .run_stage("precise", provider, &queries, &bias, country.as_ref())
                .await
            {
                return Resolution::found(hit.coordinates, hit.formatted_name);
            }
        }

        // Stage 3: community POI provider with viewbox bias, validated.
        if let Some(provider) = &self.community {
            let bias = GeocodeBias {
                viewbox: area.map(|(_, viewbox)| viewbox),
                ..GeocodeBias::default()
            };
            if let Some(hit) = self
                .run_stage("community", provider, &queries, &bias, country.as_ref())
                .await
            {
                return Resolution::found(hit.coordinates, hit.formatted_name);
            }
        }

        // Stages 4 and 5: commercial provider, strict then fallback
        // mode. Its own country restriction is trusted, so no
        // separate validation pass.
        if let Some(provider) = &self.commercial {
            let strict = GeocodeBias {
                country: country.clone(),
                proximity: area.map(|(center, _)| center),
                ..GeocodeBias::default()
            };
            if let Some(hit) = self
                .run_stage("commercial_strict", provider, &queries, &strict, None)
                .await
            {
                return Resolution::found(hit.coordinates, hit.formatted_name);
            }

            let fallback = GeocodeBias {
                allow_place_fallback: true,
                ..strict
            };
            if let Some(hit) = self
                .run_stage("commercial_fallback", provider, &queries, &fallback, None)
                .await
            {
                let mut formatted_name = hit.formatted_name;
                if !hit.exact {
                    formatted_name.push_str(APPROXIMATE_SUFFIX);
                }
                return Resolution::found(hit.coordinates, formatted_name);
            }
        }

        warn!("No provider resolved the place");
        Resolution::not_found()
    }

    /// Run one cascade stage: every query variant in order against a
    /// single provider, optionally validating the expected country
    async fn run_stage(
        &self,
        stage: &'static str,
        provider: &Arc<dyn GeocodeProvider>,
        queries: &[String],
        bias: &GeocodeBias,
        expected_country: Option<&CountryCode>,
    ) -> Option<GeocodeHit> {
        for query in queries {
            match provider.resolve(query, bias).await {
                Ok(Some(hit)) => {
                    if !validator::result_in_expected_country(&hit.formatted_name, expected_country)
                    {
                        warn!(
                            stage,
                            provider = provider.provider_name(),
                            name = %hit.formatted_name,
                            "Discarding result outside expected country"
                        );
                        continue;
                    }
                    info!(
                        stage,
                        provider = provider.provider_name(),
                        name = %hit.formatted_name,
                        "Resolved"
                    );
                    return Some(hit);
                },
                Ok(None) => {
                    debug!(stage, query = %query, "No result");
                },
                Err(e) => {
                    warn!(
                        stage,
                        query = %query,
                        error = %e,
                        fallback = e.should_fallback(),
                        "Provider call failed"
                    );
                },
            }
        }
        None
    }
}
