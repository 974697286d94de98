//! EmailAddress value object.

use crate::error::CatalogError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Structural check only: no '@' or whitespace in the local part, exactly one
// '@', and at least one '.' in the domain. Deliberately loose — consecutive
// or leading dots pass. Do not tighten; it would reject addresses the
// catalog historically accepts.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile"));

/// A type-safe wrapper for email addresses.
///
/// Validation happens at construction time against the trimmed input. The
/// stored form is trimmed and lowercased, and doubles as the
/// case-insensitive uniqueness key across the repository.
///
/// # Example
///
/// ```
/// use contact_catalog::domain::EmailAddress;
///
/// let email = EmailAddress::new("  User@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating and normalizing the input.
    ///
    /// The input is trimmed before validation and lowercased for storage.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidEmail` carrying the input exactly as
    /// supplied if the trimmed form does not match the structural pattern.
    pub fn new(email: impl Into<String>) -> Result<Self, CatalogError> {
        let email = email.into();
        let trimmed = email.trim();

        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(CatalogError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the normalized email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
