// Copyright (c) 2025 - Cowboy AI, Inc.
//! UK Postcode Value Object with Structural Validation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Postcode validation error
///
/// The `Display` text is shown inline under the postcode field, so every
/// message is written for the person filling in the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostcodeError {
    #[error("Please enter a postcode")]
    Empty,

    #[error("Postcode contains an invalid character: '{0}'")]
    InvalidCharacter(char),

    #[error("Please enter a valid UK postcode (expected 5 to 7 letters and numbers, found {0})")]
    InvalidLength(usize),

    #[error("Please enter a valid UK postcode")]
    InvalidFormat(String),
}

/// Compact (space-free) postcode shape: outward code then inward code
fn compact_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]?[0-9][A-Z]{2}$")
            .expect("postcode pattern is a valid regex")
    })
}

/// Trim, collapse internal whitespace runs to one space and uppercase.
///
/// This is the best-effort cleaned form reported for input that does not
/// parse as a postcode.
pub fn clean(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

/// UK postcode value object in canonical form
///
/// Invariants:
/// - Uppercase ASCII letters and digits only, plus exactly one space
/// - The space sits immediately before the three-character inward code
/// - Outward code is 1-2 letters, one digit, then an optional letter or digit
/// - Inward code is one digit followed by two letters
///
/// # Examples
///
/// ```rust
/// use watt_savings_intake::domain::Postcode;
///
/// let postcode = Postcode::new("sw1a1aa").unwrap();
/// assert_eq!(postcode.as_str(), "SW1A 1AA");
/// assert_eq!(postcode.outward(), "SW1A");
/// assert_eq!(postcode.inward(), "1AA");
/// assert_eq!(postcode.area(), "SW");
///
/// assert!(Postcode::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode(String);

impl Postcode {
    /// Length of the inward code
    pub const INWARD_LENGTH: usize = 3;

    /// Shortest compact postcode (e.g. "M11AE")
    pub const MIN_COMPACT_LENGTH: usize = 5;

    /// Longest compact postcode (e.g. "SW1A1AA")
    pub const MAX_COMPACT_LENGTH: usize = 7;

    /// Parse free text into a canonical postcode
    ///
    /// Casing and whitespace are irrelevant: `"  sw1a   1aa "`, `"SW1A1AA"`
    /// and `"SW1A 1AA"` all produce `"SW1A 1AA"`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PostcodeError> {
        let raw = raw.as_ref();

        // Checked before uppercasing: Unicode case mapping can turn a
        // non-ASCII letter into ASCII ("ß" becomes "SS")
        if let Some(ch) = raw
            .chars()
            .find(|c| !c.is_whitespace() && !c.is_ascii_alphanumeric())
        {
            return Err(PostcodeError::InvalidCharacter(ch));
        }

        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if compact.is_empty() {
            return Err(PostcodeError::Empty);
        }

        // ASCII from here on, so byte length equals character count
        let len = compact.len();
        if !(Self::MIN_COMPACT_LENGTH..=Self::MAX_COMPACT_LENGTH).contains(&len) {
            return Err(PostcodeError::InvalidLength(len));
        }

        if !compact_pattern().is_match(&compact) {
            return Err(PostcodeError::InvalidFormat(compact));
        }

        let (outward, inward) = compact.split_at(len - Self::INWARD_LENGTH);
        Ok(Self(format!("{outward} {inward}")))
    }

    /// Get the canonical postcode as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Outward code, also called the district (e.g. "SW1A")
    pub fn outward(&self) -> &str {
        self.0.split_once(' ').map_or(self.0.as_str(), |(outward, _)| outward)
    }

    /// Inward code: sector digit and unit letters (e.g. "1AA")
    pub fn inward(&self) -> &str {
        self.0.split_once(' ').map_or("", |(_, inward)| inward)
    }

    /// Postcode area: the alphabetic prefix of the outward code (e.g. "SW")
    pub fn area(&self) -> &str {
        let outward = self.outward();
        let end = outward
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(outward.len());
        &outward[..end]
    }

    /// Compact form without the separating space
    pub fn compact(&self) -> String {
        self.0.replace(' ', "")
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Postcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Postcode {
    type Error = PostcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Postcode {
    type Error = PostcodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Postcode> for String {
    fn from(postcode: Postcode) -> Self {
        postcode.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_postcodes() {
        assert!(Postcode::new("SW1A 1AA").is_ok());
        assert!(Postcode::new("M1 1AE").is_ok());
        assert!(Postcode::new("B33 8TH").is_ok());
        assert!(Postcode::new("CR2 6XH").is_ok());
        assert!(Postcode::new("DN55 1PT").is_ok());
        assert!(Postcode::new("EC1A 1BB").is_ok());
        assert!(Postcode::new("W1A 0AX").is_ok());
    }

    #[test]
    fn test_invalid_postcodes() {
        assert_eq!(Postcode::new(""), Err(PostcodeError::Empty));
        assert_eq!(Postcode::new("   "), Err(PostcodeError::Empty));
        assert_eq!(
            Postcode::new("SW1A-1AA"),
            Err(PostcodeError::InvalidCharacter('-'))
        );
        assert_eq!(Postcode::new("SW1"), Err(PostcodeError::InvalidLength(3)));
        assert_eq!(
            Postcode::new("SW1A 1AAA"),
            Err(PostcodeError::InvalidLength(8))
        );
        assert!(matches!(
            Postcode::new("12345"),
            Err(PostcodeError::InvalidFormat(_))
        ));
        assert!(matches!(
            Postcode::new("SWA 1AA"),
            Err(PostcodeError::InvalidFormat(_))
        ));
        assert!(matches!(
            Postcode::new("SW1A AAA"),
            Err(PostcodeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Postcode::new("sw1a1aa").unwrap().as_str(), "SW1A 1AA");
        assert_eq!(Postcode::new("  sw1a   1aa ").unwrap().as_str(), "SW1A 1AA");
        assert_eq!(Postcode::new("m11ae").unwrap().as_str(), "M1 1AE");
        assert_eq!(Postcode::new("S W1A1AA").unwrap().as_str(), "SW1A 1AA");
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(matches!(
            Postcode::new("SW1Ä 1AA"),
            Err(PostcodeError::InvalidCharacter('Ä'))
        ));
        // Reported as typed, not uppercased
        assert!(matches!(
            Postcode::new("sw1ä 1aa"),
            Err(PostcodeError::InvalidCharacter('ä'))
        ));
    }

    #[test]
    fn test_case_expanding_letters_rejected() {
        assert!(matches!(
            Postcode::new("m1 1ß"),
            Err(PostcodeError::InvalidCharacter('ß'))
        ));
        assert!(matches!(
            Postcode::new("ﬀ1 1AA"),
            Err(PostcodeError::InvalidCharacter('ﬀ'))
        ));
    }

    #[test]
    fn test_postcode_parts() {
        let postcode = Postcode::new("EC1A 1BB").unwrap();
        assert_eq!(postcode.outward(), "EC1A");
        assert_eq!(postcode.inward(), "1BB");
        assert_eq!(postcode.area(), "EC");
        assert_eq!(postcode.compact(), "EC1A1BB");

        let single_letter = Postcode::new("B33 8TH").unwrap();
        assert_eq!(single_letter.area(), "B");
        assert_eq!(single_letter.outward(), "B33");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean("  ab  12 \t 3 "), "AB 12 3");
        assert_eq!(clean(""), "");
        assert_eq!(clean("m1 1ß"), "M1 1ß");
    }

    #[test]
    fn test_serde_round_trip_rejects_garbage() {
        let json = serde_json::to_string(&Postcode::new("m1 1ae").unwrap()).unwrap();
        assert_eq!(json, "\"M1 1AE\"");
        assert!(serde_json::from_str::<Postcode>("\"not a postcode\"").is_err());
    }
}
