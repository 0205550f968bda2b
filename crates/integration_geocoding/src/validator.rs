//! Expected-country validation of geocoded results
//!
//! Guards against a provider returning a plausible POI in the wrong
//! country (a hostel chain's branch on another continent, say).
//! Checking the formatted address against known country names is more
//! reliable than bounding boxes: it works for every country without
//! hardcoded bounds and handles overseas territories the way the
//! provider itself classifies them.

use domain::CountryCode;
use tracing::warn;

use crate::country;

/// Whether a formatted address plausibly lies in the expected country
///
/// With no expected code, an empty address, or an unknown code there
/// is nothing to check against and the result is accepted.
pub(crate) fn result_in_expected_country(
    formatted_name: &str,
    expected: Option<&CountryCode>,
) -> bool {
    let Some(code) = expected else {
        return true;
    };

    if formatted_name.is_empty() {
        return true;
    }

    let names = country::names_for(code);
    if names.is_empty() {
        return true;
    }

    let address = formatted_name.to_lowercase();
    if names.iter().any(|name| address.contains(name)) {
        return true;
    }

    warn!(
        address = %formatted_name,
        country = %code,
        "Address does not contain expected country"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::new(s).expect("valid code")
    }

    #[test]
    fn test_accepts_matching_country() {
        assert!(result_in_expected_country(
            "Secret Garden, Cotopaxi, Ecuador",
            Some(&code("ec"))
        ));
    }

    #[test]
    fn test_accepts_formal_name() {
        assert!(result_in_expected_country(
            "Red Square, Moscow, Russian Federation",
            Some(&code("ru"))
        ));
    }

    #[test]
    fn test_rejects_wrong_country() {
        assert!(!result_in_expected_country(
            "Local Markets, Tasmania, Australia",
            Some(&code("ec"))
        ));
    }

    #[test]
    fn test_accepts_when_no_expected_code() {
        assert!(result_in_expected_country("Anywhere At All", None));
    }

    #[test]
    fn test_accepts_when_code_unknown() {
        assert!(result_in_expected_country("Somewhere", Some(&code("zz"))));
    }

    #[test]
    fn test_accepts_empty_address() {
        assert!(result_in_expected_country("", Some(&code("ec"))));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(result_in_expected_country(
            "KHAO SAN ROAD, BANGKOK, THAILAND",
            Some(&code("th"))
        ));
    }
}
