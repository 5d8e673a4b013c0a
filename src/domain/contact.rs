// Copyright (c) 2025 - Cowboy AI, Inc.
//! Contact Detail Value Objects
//!
//! Structural checks only: no DNS lookups, no mailbox verification, no
//! number-range validation against Ofcom allocations.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Structural check for a single `local-part@domain.tld` address
pub fn validate_email(text: &str) -> bool {
    email_pattern().is_match(text.trim())
}

/// Structural check for a plausible UK phone number
///
/// Spaces, parentheses, hyphens and dots are ignored. A leading `+` must be
/// followed by the `44` country code. A number carrying the country code
/// must have 11-13 digits in total, a national number 10-11.
pub fn validate_phone(text: &str) -> bool {
    phone_digits(text).is_some()
}

fn phone_digits(text: &str) -> Option<String> {
    let stripped: String = text
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-' | '.'))
        .collect();
    let (plus, body) = match stripped.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, stripped.as_str()),
    };

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let count = body.len();
    let international = PhoneNumber::MIN_INTERNATIONAL_DIGITS..=PhoneNumber::MAX_INTERNATIONAL_DIGITS;
    let plausible = if plus {
        // "+" is only meaningful in front of the UK country code
        body.starts_with("44") && international.contains(&count)
    } else if body.starts_with("44") && count > PhoneNumber::MAX_NATIONAL_DIGITS {
        international.contains(&count)
    } else {
        (PhoneNumber::MIN_NATIONAL_DIGITS..=PhoneNumber::MAX_NATIONAL_DIGITS).contains(&count)
    };

    plausible.then(|| body.to_string())
}

/// Email validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is empty")]
    Empty,

    #[error("Invalid email address: {0}")]
    InvalidFormat(String),
}

/// Email address value object
///
/// ```rust
/// use watt_savings_intake::domain::EmailAddress;
///
/// assert!(EmailAddress::new("john@company.com").is_ok());
/// assert!(EmailAddress::new("john@").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address with validation; surrounding whitespace is dropped
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if !validate_email(email) {
            return Err(EmailError::InvalidFormat(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part after the `@`
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Phone validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone number is empty")]
    Empty,

    #[error("Invalid phone number: {0}")]
    InvalidFormat(String),
}

/// UK phone number value object
///
/// Keeps the number as typed (trimmed) for display and exposes the bare
/// digits separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    display: String,
    digits: String,
}

impl PhoneNumber {
    pub const MIN_NATIONAL_DIGITS: usize = 10;
    pub const MAX_NATIONAL_DIGITS: usize = 11;
    pub const MIN_INTERNATIONAL_DIGITS: usize = 11;
    pub const MAX_INTERNATIONAL_DIGITS: usize = 13;

    pub fn new(phone: impl AsRef<str>) -> Result<Self, PhoneError> {
        let display = phone.as_ref().trim();

        if display.is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits =
            phone_digits(display).ok_or_else(|| PhoneError::InvalidFormat(display.to_string()))?;

        Ok(Self {
            display: display.to_string(),
            digits,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.display
    }
}
