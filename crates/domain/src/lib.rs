//! Domain layer for pinpoint
//!
//! Contains the value objects shared by the geocoding integrations:
//! coordinates, bias rectangles, and country codes. This layer has no
//! external service dependencies and defines the ubiquitous language.

pub mod value_objects;

pub use value_objects::*;
