//! URL encoding utility for path-embedded queries
//!
//! The Mapbox geocoding endpoint carries the search text in the URL
//! path rather than in a query parameter, so spaces must become `%20`
//! (a `+` is only a space inside query strings).

/// Percent-encode a string for use as a URL path segment
///
/// Encodes all characters except unreserved characters (`A-Z`, `a-z`,
/// `0-9`, `-`, `_`, `.`, `~`).
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                for b in c.to_string().as_bytes() {
                    result.push_str(&format!("%{b:02X}"));
                }
            },
        }
    }
    result
}
