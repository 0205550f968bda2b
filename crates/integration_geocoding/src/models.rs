//! Request, bias, and result models for place resolution

use domain::{CountryCode, GeoPoint, Viewbox};
use serde::{Deserialize, Serialize};

/// An informal place mention to resolve into coordinates
///
/// Typically produced by an LLM extraction layer: a venue or landmark
/// name plus a loose geographic hint ("Cotopaxi", "Bangkok, Thailand").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceQuery {
    /// The place name to resolve (required)
    pub place_name: String,

    /// Free-form region/country hint, e.g. "Bangkok, Thailand"
    #[serde(default)]
    pub context: String,

    /// Specific city to search in; overrides `context` when non-empty
    #[serde(default)]
    pub city: String,
}

impl PlaceQuery {
    /// Create a query with just a place name
    #[must_use]
    pub fn new(place_name: impl Into<String>) -> Self {
        Self {
            place_name: place_name.into(),
            context: String::new(),
            city: String::new(),
        }
    }

    /// Set the free-form context hint
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the city hint (takes precedence over context)
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// The effective geographic hint: the city when set, else the context
    #[must_use]
    pub fn location_context(&self) -> &str {
        if self.city.trim().is_empty() {
            self.context.trim()
        } else {
            self.city.trim()
        }
    }
}

/// A single result from a geocoding provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeHit {
    /// Resolved coordinates
    pub coordinates: GeoPoint,

    /// The provider's formatted address or display name
    pub formatted_name: String,

    /// False only for locality/place-level fallback matches; never
    /// false for a precise venue match
    pub exact: bool,
}

impl GeocodeHit {
    /// A venue-level match
    #[must_use]
    pub fn exact(coordinates: GeoPoint, formatted_name: impl Into<String>) -> Self {
        Self {
            coordinates,
            formatted_name: formatted_name.into(),
            exact: true,
        }
    }

    /// A locality-level match (city/town rather than a specific venue)
    #[must_use]
    pub fn approximate(coordinates: GeoPoint, formatted_name: impl Into<String>) -> Self {
        Self {
            coordinates,
            formatted_name: formatted_name.into(),
            exact: false,
        }
    }
}

/// Soft bias hints passed to a provider call
///
/// Every field is advisory; a provider reads the hints it supports
/// and ignores the rest. Bias never excludes valid results outside
/// the hinted area, except for the commercial provider's hard
/// `country` restriction.
#[derive(Debug, Clone, Default)]
pub struct GeocodeBias {
    /// Expected country, used for region biasing or restriction
    pub country: Option<CountryCode>,

    /// Center point to bias ranking towards
    pub proximity: Option<GeoPoint>,

    /// Soft bounding rectangle to prefer results within
    pub viewbox: Option<Viewbox>,

    /// Commercial provider only: also accept locality/place-typed
    /// results (marked non-exact) instead of POI/address results only
    pub allow_place_fallback: bool,
}

impl GeocodeBias {
    /// Bias by expected country only
    #[must_use]
    pub fn for_country(country: Option<CountryCode>) -> Self {
        Self {
            country,
            ..Self::default()
        }
    }
}

/// The outcome of a full resolution cascade
///
/// Serializes to the caller-facing wire shape: absent fields are
/// omitted and coordinates are a `[longitude, latitude]` array. The
/// `formatted_name` ends with `" (approximate)"` when the match is
/// locality-level rather than venue-level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Whether any stage of the cascade produced a result
    pub success: bool,

    /// Resolved coordinates as `[longitude, latitude]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoPoint>,

    /// Display name for the pin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
}

impl Resolution {
    /// A successful resolution
    #[must_use]
    pub fn found(coordinates: GeoPoint, formatted_name: impl Into<String>) -> Self {
        Self {
            success: true,
            coordinates: Some(coordinates),
            formatted_name: Some(formatted_name.into()),
        }
    }

    /// Exhaustion of every stage
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            success: false,
            coordinates: None,
            formatted_name: None,
        }
    }
}
