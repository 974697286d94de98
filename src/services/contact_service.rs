//! Contact service layer.
//!
//! Validation and normalization gatekeeper between raw input and the
//! repository's well-formed record contract.

use crate::domain::{ContactName, EmailAddress};
use crate::error::CatalogResult;
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use std::sync::Arc;

/// Business operations over the contact catalog.
///
/// Holds no contact state of its own; the repository owns the canonical
/// collection and this layer only validates, normalizes, and filters.
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    /// Create a new contact service over the given repository.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Validate and normalize raw input, then insert it.
    ///
    /// Validation order is part of the contract: name emptiness is checked
    /// before email format, and email format is checked before the
    /// uniqueness check in the repository. An invalid email never reaches
    /// the repository; an empty name is reported even when the email is
    /// also invalid.
    ///
    /// # Errors
    ///
    /// - `CatalogError::EmptyName` if the name is blank after trimming
    /// - `CatalogError::InvalidEmail` if the email fails the format check
    /// - `CatalogError::DuplicateEmail` if the repository already holds the
    ///   normalized email
    pub fn add_contact(&self, name: &str, email: &str, tags_raw: &str) -> CatalogResult<Contact> {
        tracing::info!("Adding contact with email {}", email);

        let name = match ContactName::new(name) {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!("Invalid name input (empty)");
                return Err(err);
            }
        };

        let email = match EmailAddress::new(email) {
            Ok(email) => email,
            Err(err) => {
                tracing::warn!("Invalid email format");
                return Err(err);
            }
        };

        let tags = parse_tags(tags_raw);
        let contact = self.repository.add(ContactDraft::new(name, email, tags))?;

        tracing::info!(
            "Contact successfully added: {} ({})",
            contact.name,
            contact.email
        );
        Ok(contact)
    }

    /// All stored contacts in insertion order.
    pub fn list_contacts(&self) -> Vec<Contact> {
        tracing::info!("Listing all contacts");
        self.repository.get_all()
    }

    /// Case-insensitive substring search over name or email.
    pub fn search(&self, term: &str) -> Vec<Contact> {
        tracing::info!("Searching contacts for term: {}", term);
        let term = term.to_lowercase();
        self.repository
            .get_all()
            .into_iter()
            .filter(|c| {
                // Stored emails are already lowercase
                c.name.as_str().to_lowercase().contains(&term)
                    || c.email.as_str().contains(&term)
            })
            .collect()
    }

    /// Contacts carrying the given tag (case-insensitive exact match, not
    /// substring).
    pub fn filter_by_tag(&self, tag: &str) -> Vec<Contact> {
        tracing::info!("Filtering contacts by tag: {}", tag);
        let tag = tag.to_lowercase();
        self.repository
            .get_all()
            .into_iter()
            .filter(|c| c.tags.iter().any(|t| t.to_lowercase() == tag))
            .collect()
    }
}

/// Split comma-separated tag input, trimming each segment and dropping
/// empty ones.
fn parse_tags(tags_raw: &str) -> Vec<String> {
    tags_raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_drops_blank_segments() {
        assert_eq!(parse_tags("friend, ,colleague,"), vec!["friend", "colleague"]);
    }

    #[test]
    fn test_parse_tags_preserves_order_and_duplicates() {
        assert_eq!(parse_tags("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_parse_tags_trims_segments() {
        assert_eq!(parse_tags("  friend ,colleague  "), vec!["friend", "colleague"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,, ").is_empty());
    }
}
