//! Value Objects - Immutable, identity-less domain primitives

mod country_code;
mod geo_point;
mod viewbox;

pub use country_code::{CountryCode, InvalidCountryCode};
pub use geo_point::{GeoPoint, InvalidCoordinates};
pub use viewbox::Viewbox;
