//! Proximity bias lookup for known cities and regions
//!
//! Maps a context/city hint onto a center point and a ±0.5° viewbox
//! (roughly 50 km in each direction). The result is only ever passed
//! to providers as a soft bias, never as a hard filter.

use domain::{GeoPoint, Viewbox};

use crate::gazetteer;

/// Degrees extended in each direction around a known center
const VIEWBOX_DELTA: f64 = 0.5;

/// Find a bias center for the given context string
///
/// Unlike the gazetteer shortcut this matches one direction only: a
/// table key must appear inside the context ("hostels near Cotopaxi"
/// matches "cotopaxi"); a bare fragment of a key does not.
pub(crate) fn bias_for(context: &str) -> Option<(GeoPoint, Viewbox)> {
    let haystack = context.trim().to_lowercase();
    if haystack.is_empty() {
        return None;
    }

    gazetteer::PLACE_CENTERS
        .iter()
        .find(|(key, _)| haystack.contains(key))
        .map(|(_, center)| (*center, Viewbox::around(*center, VIEWBOX_DELTA)))
}
