//! Phone number normalization and dial URIs.
//!
//! Numbers arrive in whatever format the data tables use (`202-456-1111`,
//! `(202) 456-1111`, `1-866-4-USA-DOL`). Normalization keeps ASCII digits
//! only. Letters are dropped, not mapped to keypad digits, so vanity numbers
//! normalize to a shorter, incomplete string.
//!
//! The dial URI always prefixes `+1`, even when the digits already start
//! with a country code or are not ten digits long.

use std::fmt;

/// Country code prefixed to every dial URI.
pub const COUNTRY_CODE: &str = "+1";

/// Strip every character that is not an ASCII digit.
///
/// ```
/// use civic_core::phone::normalize_digits;
///
/// assert_eq!(normalize_digits("(202) 456-1111"), "2024561111");
/// assert_eq!(normalize_digits("1-800-USA-LEARN"), "1800");
/// ```
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Build the `tel:` URI for a raw phone string.
///
/// ```
/// use civic_core::phone::dial_uri;
///
/// assert_eq!(dial_uri("202.456.1111"), "tel:+12024561111");
/// ```
pub fn dial_uri(raw: &str) -> String {
    format!("tel:{COUNTRY_CODE}{}", normalize_digits(raw))
}

/// A phone number as displayed plus its normalized digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    formatted: String,
    digits: String,
}

impl PhoneNumber {
    /// Parse a raw, human-formatted phone string.
    pub fn new(raw: impl Into<String>) -> Self {
        let formatted = raw.into();
        let digits = normalize_digits(&formatted);
        Self { formatted, digits }
    }

    /// The number exactly as provided.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Digits only.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The `tel:+1…` dial URI.
    pub fn dial_uri(&self) -> String {
        format!("tel:{COUNTRY_CODE}{}", self.digits)
    }

    /// Returns `true` if the raw string contained letters that were dropped.
    ///
    /// Vanity numbers dial incorrectly; hosts may want to flag them.
    pub fn is_vanity(&self) -> bool {
        self.formatted.chars().any(|c| c.is_ascii_alphabetic())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted)
    }
}

impl From<&str> for PhoneNumber {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
