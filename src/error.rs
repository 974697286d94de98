//! Error types for the contact catalog.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised while validating or storing contacts.
///
/// All three kinds are expected and recoverable. They are raised at the
/// point of detection and propagated unchanged to the caller; the menu
/// layer renders each one through its `Display` message. Anything else
/// (e.g. a poisoned repository lock) is a programming error and panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Name was blank or whitespace-only after trimming
    #[error("Name cannot be empty.")]
    EmptyName,

    /// Email failed the structural format check; carries the rejected
    /// input exactly as the caller supplied it
    #[error("The email '{0}' is not a valid email address.")]
    InvalidEmail(String),

    /// Normalized email is already present in the repository
    #[error("A contact with the email '{0}' already exists.")]
    DuplicateEmail(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::EmptyName;
        assert_eq!(err.to_string(), "Name cannot be empty.");

        let err = CatalogError::InvalidEmail("not-an-email".to_string());
        assert_eq!(
            err.to_string(),
            "The email 'not-an-email' is not a valid email address."
        );

        let err = CatalogError::DuplicateEmail("john@example.com".to_string());
        assert_eq!(
            err.to_string(),
            "A contact with the email 'john@example.com' already exists."
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACT_INITIAL_CAPACITY".to_string(),
            reason: "Must be a positive number, got: abc".to_string(),
        };
        assert!(err.to_string().contains("CONTACT_INITIAL_CAPACITY"));
        assert!(err.to_string().contains("abc"));
    }
}
