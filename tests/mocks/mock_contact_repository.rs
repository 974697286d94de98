use contact_catalog::domain::ContactId;
use contact_catalog::error::{CatalogError, CatalogResult};
use contact_catalog::models::{Contact, ContactDraft};
use contact_catalog::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that behaves
/// like the real store and tracks method calls for verification. Cloning
/// shares the underlying state, so tests can hold a handle while the
/// service owns another.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Snapshot of the stored contacts without bumping call counts.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&self, draft: ContactDraft) -> CatalogResult<Contact> {
        self.track_call("add");

        let mut contacts = self.contacts.lock().unwrap();

        if contacts.iter().any(|c| c.email == draft.email) {
            return Err(CatalogError::DuplicateEmail(
                draft.email.as_str().to_string(),
            ));
        }

        let contact = Contact {
            id: ContactId::new(contacts.len() as u64 + 1),
            name: draft.name,
            email: draft.email,
            tags: draft.tags,
        };
        contacts.push(contact.clone());
        Ok(contact)
    }

    fn get_all(&self) -> Vec<Contact> {
        self.track_call("get_all");
        self.contacts.lock().unwrap().clone()
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.contacts.lock().unwrap().len()
    }
}
