//! Contact Catalog - an in-process catalog of contact records.
//!
//! This library stores contacts (name, email, tags) for the lifetime of one
//! process, enforces case-insensitive uniqueness of email addresses, and
//! serves linear search/filter queries over the stored set.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (ids, email addresses, names)
//! - **models**: contact records (draft and finalized)
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **repositories**: canonical contact storage, identity, and uniqueness
//! - **services**: validation/normalization layer over the repository
//! - **menu**: interactive console loop (thin glue, no invariants)

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{ContactId, ContactName, EmailAddress};
pub use error::{CatalogError, CatalogResult, ConfigError, ConfigResult};
pub use menu::Menu;
pub use models::{Contact, ContactDraft};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::ContactService;
