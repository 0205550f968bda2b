//! Geocoding provider trait

use async_trait::async_trait;

use crate::{GeocodeBias, GeocodeError, GeocodeHit};

/// Trait for geocoding providers
///
/// Implemented by all upstream adapters (Google, Nominatim, Mapbox).
/// `Ok(None)` is the expected, frequent "no usable result" outcome and
/// is not an error; `Err` covers transport and protocol failures. The
/// cascade treats both the same way: log and move on.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Resolve a single query string into at most one hit
    ///
    /// # Arguments
    ///
    /// * `query` - The candidate query string, most-specific variant first
    /// * `bias` - Soft bias hints; providers ignore hints they do not support
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success HTTP status,
    /// or an unparseable response.
    async fn resolve(
        &self,
        query: &str,
        bias: &GeocodeBias,
    ) -> Result<Option<GeocodeHit>, GeocodeError>;

    /// Get the provider name (e.g., "google", "nominatim", "mapbox")
    fn provider_name(&self) -> &'static str;
}
