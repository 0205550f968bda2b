//! ISO 3166-1 alpha-2 country code value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validated two-letter country code, stored lowercase
///
/// Geocoding providers expect lowercase alpha-2 codes in their
/// region/country parameters ("ec", "th", "gb").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

/// Error type for malformed country codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid country code '{0}': expected two ASCII letters")]
pub struct InvalidCountryCode(pub String);

impl CountryCode {
    /// Create a new country code, lowercasing the input
    ///
    /// # Errors
    ///
    /// Returns `InvalidCountryCode` unless the input is exactly two
    /// ASCII letters.
    pub fn new(code: &str) -> Result<Self, InvalidCountryCode> {
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(InvalidCountryCode(code.to_string()))
        }
    }

    /// Get the lowercase code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = InvalidCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}
