//! Data models for contact catalog entities.
//!
//! This module contains the data structures representing contacts: the
//! validated draft handed to the repository and the finalized record it
//! returns.

pub mod contact;

pub use contact::{Contact, ContactDraft};
