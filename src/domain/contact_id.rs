//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for contact identifiers.
///
/// Identifiers are allocated by the repository at insertion time, starting
/// at 1 and strictly increasing. An id is never reused, and callers cannot
/// supply their own: the only way to obtain a `ContactId` attached to a
/// stored record is through `ContactRepository::add`.
///
/// # Example
///
/// ```
/// use contact_catalog::domain::ContactId;
///
/// let id = ContactId::new(42);
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// The first id the repository hands out.
    pub const FIRST: ContactId = ContactId(1);

    /// Create a ContactId from a raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id allocated after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

// Display support
impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
