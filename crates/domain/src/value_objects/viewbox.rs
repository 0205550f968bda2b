//! Soft bounding rectangle for biasing geocoding results
//!
//! A viewbox nudges a provider towards an area without excluding
//! results outside it. Providers that honor it treat it as a
//! preference, never a hard filter.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A west/north/east/south rectangle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewbox {
    /// Western edge (minimum longitude)
    pub west: f64,
    /// Northern edge (maximum latitude)
    pub north: f64,
    /// Eastern edge (maximum longitude)
    pub east: f64,
    /// Southern edge (minimum latitude)
    pub south: f64,
}

impl Viewbox {
    /// Build a viewbox extending `delta_degrees` in each direction
    /// around a center point
    ///
    /// Half a degree is roughly 50 km at the equator, which is the
    /// bias used for known city centers.
    #[must_use]
    pub fn around(center: GeoPoint, delta_degrees: f64) -> Self {
        Self {
            west: center.longitude() - delta_degrees,
            north: center.latitude() + delta_degrees,
            east: center.longitude() + delta_degrees,
            south: center.latitude() - delta_degrees,
        }
    }

    /// Whether the point lies inside the rectangle (inclusive)
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.longitude())
            && (self.south..=self.north).contains(&point.latitude())
    }
}
