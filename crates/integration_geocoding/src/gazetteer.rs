//! Static gazetteer of well-known cities, regions, and landmarks
//!
//! A curated name-fragment -> center table used two ways: as a free,
//! instant shortcut for place names that geocoding services handle
//! poorly (remote mountains, trekking regions), and as the source of
//! proximity bias centers for known cities.
//!
//! The table is scanned in order and the first match wins, so more
//! specific multi-word keys must be listed before their shorter
//! generic prefixes ("illiniza norte" before "illiniza").

use domain::GeoPoint;

/// Known place centers, longitude first
pub(crate) const PLACE_CENTERS: &[(&str, GeoPoint)] = &[
    // Europe
    ("athens", GeoPoint::new_unchecked(23.73, 37.98)),
    ("london", GeoPoint::new_unchecked(-0.12, 51.51)),
    ("paris", GeoPoint::new_unchecked(2.35, 48.86)),
    ("barcelona", GeoPoint::new_unchecked(2.17, 41.39)),
    ("lisbon", GeoPoint::new_unchecked(-9.14, 38.72)),
    ("berlin", GeoPoint::new_unchecked(13.41, 52.52)),
    ("amsterdam", GeoPoint::new_unchecked(4.90, 52.37)),
    ("rome", GeoPoint::new_unchecked(12.50, 41.90)),
    ("prague", GeoPoint::new_unchecked(14.42, 50.08)),
    // Southeast Asia
    ("bangkok", GeoPoint::new_unchecked(100.50, 13.76)),
    ("bali", GeoPoint::new_unchecked(115.19, -8.41)),
    ("ubud", GeoPoint::new_unchecked(115.26, -8.51)),
    ("chiang mai", GeoPoint::new_unchecked(98.99, 18.79)),
    ("hanoi", GeoPoint::new_unchecked(105.85, 21.03)),
    ("ho chi minh", GeoPoint::new_unchecked(106.63, 10.82)),
    ("saigon", GeoPoint::new_unchecked(106.63, 10.82)),
    ("singapore", GeoPoint::new_unchecked(103.82, 1.35)),
    ("kuala lumpur", GeoPoint::new_unchecked(101.69, 3.14)),
    ("phnom penh", GeoPoint::new_unchecked(104.92, 11.56)),
    ("siem reap", GeoPoint::new_unchecked(103.86, 13.36)),
    // East Asia
    ("tokyo", GeoPoint::new_unchecked(139.69, 35.69)),
    ("seoul", GeoPoint::new_unchecked(126.98, 37.57)),
    ("hong kong", GeoPoint::new_unchecked(114.17, 22.32)),
    // South Asia - Bangladesh
    ("dhaka", GeoPoint::new_unchecked(90.41, 23.81)),
    // Default to Dhaka
    ("bangladesh", GeoPoint::new_unchecked(90.41, 23.81)),
    ("chittagong", GeoPoint::new_unchecked(91.83, 22.36)),
    ("sylhet", GeoPoint::new_unchecked(91.87, 24.90)),
    ("sreemangal", GeoPoint::new_unchecked(91.73, 24.31)),
    // Alternative spelling
    ("srimongol", GeoPoint::new_unchecked(91.73, 24.31)),
    ("cox's bazar", GeoPoint::new_unchecked(91.98, 21.43)),
    ("coxs bazar", GeoPoint::new_unchecked(91.98, 21.43)),
    ("sundarbans", GeoPoint::new_unchecked(89.18, 21.95)),
    ("khulna", GeoPoint::new_unchecked(89.56, 22.82)),
    ("rajshahi", GeoPoint::new_unchecked(88.60, 24.37)),
    ("rangpur", GeoPoint::new_unchecked(89.25, 25.75)),
    // South Asia - India
    ("mumbai", GeoPoint::new_unchecked(72.88, 19.08)),
    ("new delhi", GeoPoint::new_unchecked(77.21, 28.64)),
    ("delhi", GeoPoint::new_unchecked(77.21, 28.64)),
    ("kolkata", GeoPoint::new_unchecked(88.36, 22.57)),
    ("bangalore", GeoPoint::new_unchecked(77.59, 12.97)),
    ("chennai", GeoPoint::new_unchecked(80.27, 13.08)),
    ("goa", GeoPoint::new_unchecked(73.83, 15.50)),
    ("jaipur", GeoPoint::new_unchecked(75.79, 26.92)),
    ("varanasi", GeoPoint::new_unchecked(83.00, 25.32)),
    ("agra", GeoPoint::new_unchecked(78.02, 27.18)),
    ("kerala", GeoPoint::new_unchecked(76.27, 10.85)),
    ("kochi", GeoPoint::new_unchecked(76.27, 9.93)),
    ("rishikesh", GeoPoint::new_unchecked(78.27, 30.09)),
    ("mcleod ganj", GeoPoint::new_unchecked(76.32, 32.24)),
    ("dharamsala", GeoPoint::new_unchecked(76.32, 32.22)),
    ("manali", GeoPoint::new_unchecked(77.19, 32.24)),
    ("leh", GeoPoint::new_unchecked(77.58, 34.16)),
    ("ladakh", GeoPoint::new_unchecked(77.58, 34.16)),
    ("darjeeling", GeoPoint::new_unchecked(88.27, 27.04)),
    ("sikkim", GeoPoint::new_unchecked(88.51, 27.33)),
    ("gangtok", GeoPoint::new_unchecked(88.61, 27.33)),
    // South Asia - Nepal
    ("kathmandu", GeoPoint::new_unchecked(85.32, 27.72)),
    ("pokhara", GeoPoint::new_unchecked(83.98, 28.21)),
    ("chitwan", GeoPoint::new_unchecked(84.43, 27.53)),
    // South America - Ecuador
    ("quito", GeoPoint::new_unchecked(-78.47, -0.18)),
    // Default to Quito for Ecuador
    ("ecuador", GeoPoint::new_unchecked(-78.47, -0.18)),
    ("guayaquil", GeoPoint::new_unchecked(-79.90, -2.17)),
    ("cuenca", GeoPoint::new_unchecked(-79.01, -2.90)),
    ("banos", GeoPoint::new_unchecked(-78.42, -1.40)),
    ("baños", GeoPoint::new_unchecked(-78.42, -1.40)),
    ("cotopaxi", GeoPoint::new_unchecked(-78.44, -0.68)),
    ("otavalo", GeoPoint::new_unchecked(-78.26, 0.23)),
    ("mindo", GeoPoint::new_unchecked(-78.77, -0.05)),
    ("montanita", GeoPoint::new_unchecked(-80.75, -1.83)),
    ("galapagos", GeoPoint::new_unchecked(-90.35, -0.74)),
    ("quilotoa", GeoPoint::new_unchecked(-78.90, -0.86)),
    ("tena", GeoPoint::new_unchecked(-77.81, -1.00)),
    ("puyo", GeoPoint::new_unchecked(-77.99, -1.49)),
    ("riobamba", GeoPoint::new_unchecked(-78.65, -1.67)),
    ("loja", GeoPoint::new_unchecked(-79.20, -4.00)),
    // Ecuador mountains/volcanoes
    ("illiniza norte", GeoPoint::new_unchecked(-78.71, -0.66)),
    ("illiniza sur", GeoPoint::new_unchecked(-78.71, -0.66)),
    ("illiniza", GeoPoint::new_unchecked(-78.71, -0.66)),
    ("chimborazo", GeoPoint::new_unchecked(-78.82, -1.47)),
    ("cayambe", GeoPoint::new_unchecked(-77.99, 0.03)),
    ("antisana", GeoPoint::new_unchecked(-78.14, -0.48)),
    ("tungurahua", GeoPoint::new_unchecked(-78.44, -1.47)),
    ("sangay", GeoPoint::new_unchecked(-78.34, -2.07)),
    ("el altar", GeoPoint::new_unchecked(-78.41, -1.68)),
    ("pichincha", GeoPoint::new_unchecked(-78.60, -0.17)),
    ("pasochoa", GeoPoint::new_unchecked(-78.49, -0.44)),
    ("imbabura", GeoPoint::new_unchecked(-78.18, 0.26)),
    ("cotacachi", GeoPoint::new_unchecked(-78.33, 0.37)),
    // South America - Colombia and beyond
    ("bogota", GeoPoint::new_unchecked(-74.07, 4.71)),
    ("medellin", GeoPoint::new_unchecked(-75.56, 6.25)),
    ("cartagena", GeoPoint::new_unchecked(-75.51, 10.39)),
    ("lima", GeoPoint::new_unchecked(-77.03, -12.05)),
    ("cusco", GeoPoint::new_unchecked(-71.97, -13.53)),
    ("arequipa", GeoPoint::new_unchecked(-71.54, -16.41)),
    ("buenos aires", GeoPoint::new_unchecked(-58.38, -34.60)),
    ("rio de janeiro", GeoPoint::new_unchecked(-43.17, -22.91)),
    ("santiago", GeoPoint::new_unchecked(-70.65, -33.45)),
    ("la paz", GeoPoint::new_unchecked(-68.15, -16.50)),
    ("bolivia", GeoPoint::new_unchecked(-68.15, -16.50)),
    // Central America
    ("mexico city", GeoPoint::new_unchecked(-99.13, 19.43)),
    ("cancun", GeoPoint::new_unchecked(-86.85, 21.16)),
    ("guatemala city", GeoPoint::new_unchecked(-90.51, 14.63)),
    // North America
    ("new york", GeoPoint::new_unchecked(-74.01, 40.71)),
    ("los angeles", GeoPoint::new_unchecked(-118.24, 34.05)),
    ("san francisco", GeoPoint::new_unchecked(-122.42, 37.77)),
    // Middle East
    ("dubai", GeoPoint::new_unchecked(55.27, 25.20)),
    ("istanbul", GeoPoint::new_unchecked(29.00, 41.01)),
    // Africa
    ("cape town", GeoPoint::new_unchecked(18.42, -33.93)),
    ("marrakech", GeoPoint::new_unchecked(-8.01, 31.63)),
    // Oceania
    ("sydney", GeoPoint::new_unchecked(151.21, -33.87)),
    ("melbourne", GeoPoint::new_unchecked(144.96, -37.81)),
    ("auckland", GeoPoint::new_unchecked(174.76, -36.85)),
];

/// Look up a place name in the gazetteer, in table order
///
/// Matching is bidirectional substring containment on the lower-cased
/// name: "illiniza norte climb" matches the "illiniza norte" entry,
/// and "quilotoa" matches a mention of "quilotoa loop". Short keys
/// can false-positive inside unrelated longer names; that looseness
/// is intentional and pinned by tests below.
pub(crate) fn shortcut(place_name: &str) -> Option<(&'static str, GeoPoint)> {
    let needle = place_name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    PLACE_CENTERS
        .iter()
        .find(|(key, _)| needle.contains(key) || key.contains(needle.as_str()))
        .map(|(key, center)| (*key, *center))
}
