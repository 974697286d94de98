use crate::domain::ContactId;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Contact, ContactDraft};
use crate::repositories::traits::ContactRepository;
use std::collections::HashSet;
use std::sync::Mutex;

/// Canonical in-memory contact store.
///
/// Owns the record collection, the email uniqueness index, and the id
/// counter. All three live behind a single mutex, so the check-and-insert
/// in `add` is one atomic step and readers never observe a partially
/// inserted record.
pub struct InMemoryContactRepository {
    state: Mutex<RepositoryState>,
}

struct RepositoryState {
    /// Records in insertion order
    contacts: Vec<Contact>,
    /// Normalized emails of every stored record
    emails: HashSet<String>,
    next_id: ContactId,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty repository with a pre-allocated backing vector.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(RepositoryState {
                contacts: Vec::with_capacity(capacity),
                emails: HashSet::with_capacity(capacity),
                next_id: ContactId::FIRST,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RepositoryState> {
        self.state.lock().expect("repository lock poisoned")
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add(&self, draft: ContactDraft) -> CatalogResult<Contact> {
        tracing::info!("Attempting to add contact: {}, {}", draft.name, draft.email);

        let mut state = self.lock();

        if state.emails.contains(draft.email.as_str()) {
            tracing::warn!("Duplicate email detected: {}", draft.email);
            return Err(CatalogError::DuplicateEmail(draft.email.as_str().to_string()));
        }

        let id = state.next_id;
        state.next_id = id.next();

        let contact = draft.into_contact(id);
        state.emails.insert(contact.email.as_str().to_string());
        state.contacts.push(contact.clone());

        tracing::info!("Contact added successfully with ID {}", contact.id);
        Ok(contact)
    }

    fn get_all(&self) -> Vec<Contact> {
        let state = self.lock();
        tracing::debug!("Retrieving all contacts ({})", state.contacts.len());
        state.contacts.clone()
    }

    fn len(&self) -> usize {
        self.lock().contacts.len()
    }
}
