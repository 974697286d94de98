use crate::error::CatalogResult;
use crate::models::{Contact, ContactDraft};

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (in-memory, mock). The repository is the sole
/// authority for contact identity and email uniqueness.
pub trait ContactRepository: Send + Sync {
    /// Insert a draft, allocating its id and enforcing email uniqueness.
    ///
    /// Returns the finalized contact. Fails with `CatalogError::DuplicateEmail`
    /// when the draft's normalized email is already present; nothing is
    /// stored and no id is consumed in that case.
    fn add(&self, draft: ContactDraft) -> CatalogResult<Contact>;

    /// Snapshot of every stored contact, in insertion order.
    ///
    /// The returned vector is a defensive copy; mutating it cannot affect
    /// the repository.
    fn get_all(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Whether the repository holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
