//! Contact model representing a person in the catalog.

use crate::domain::{ContactId, ContactName, EmailAddress};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated contact without an identity.
///
/// Drafts are produced by the service layer from raw input and consumed by
/// `ContactRepository::add`, which allocates the id and returns the
/// finalized [`Contact`]. The type has no id field, so caller-supplied
/// identities are unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    /// Trimmed, non-blank name with original casing
    pub name: ContactName,

    /// Normalized (trimmed, lowercased) email address
    pub email: EmailAddress,

    /// Tags in input order; duplicates within one contact are permitted
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ContactDraft {
    /// Create a draft from already-validated parts.
    pub fn new(name: ContactName, email: EmailAddress, tags: Vec<String>) -> Self {
        Self { name, email, tags }
    }

    /// Finalize the draft with a repository-assigned id.
    pub(crate) fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            tags: self.tags,
        }
    }
}

/// A contact stored in the catalog.
///
/// Records are immutable once inserted: the id is unique, allocated by the
/// repository, and the fields are never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, allocated at insertion time
    pub id: ContactId,

    /// Trimmed, non-blank name with original casing
    pub name: ContactName,

    /// Normalized (trimmed, lowercased) email address
    pub email: EmailAddress,

    /// Tags in input order
    #[serde(default)]
    pub tags: Vec<String>,
}

// Display support - one line per contact for console listings
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag_list = if self.tags.is_empty() {
            "No tags".to_string()
        } else {
            self.tags.join(", ")
        };
        write!(
            f,
            "ID: {}, Name: {}, Email: {}, Tags: {}",
            self.id, self.name, self.email, tag_list
        )
    }
}
