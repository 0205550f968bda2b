//! Candidate query string builder
//!
//! Builds the ordered list of query strings each provider stage
//! tries. The context-qualified variant comes first because it
//! disambiguates common names; the bare name is the last resort for
//! providers that degrade with extra tokens.

/// Placeholder contexts that carry no geographic information
const PLACEHOLDER_CONTEXTS: &[&str] = &["general"];

/// Build the ordered, deduplicated candidate queries
pub(crate) fn variants(place_name: &str, location_context: &str) -> Vec<String> {
    let place_name = place_name.trim();
    let context = location_context.trim();

    let mut queries = Vec::with_capacity(2);

    if !context.is_empty()
        && !PLACEHOLDER_CONTEXTS
            .iter()
            .any(|p| context.eq_ignore_ascii_case(p))
    {
        queries.push(format!("{place_name}, {context}"));
    }

    let bare = place_name.to_string();
    if !queries.contains(&bare) {
        queries.push(bare);
    }

    queries
}
