//! Kinfolk Storage Layer
//!
//! Implements the [`ContactRepository`] trait and the import/export formats.
//!
//! # Architecture
//!
//! - [`SqliteStore`]: file-backed repository; each contact is kept as a JSON
//!   payload next to its insertion position
//! - [`MemoryStore`]: vector-backed repository for tests and one-shot pipelines
//! - [`snapshot`]: JSON export/import of the whole address book
//! - [`vcard`]: vCard import/export
//!
//! # Examples
//!
//! ```no_run
//! use kinfolk_domain::{Contact, ContactRepository};
//! use kinfolk_store::SqliteStore;
//!
//! let mut store = SqliteStore::new("kinfolk.db").unwrap();
//! store.upsert(Contact::new("Ada", "Lovelace")).unwrap();
//! assert_eq!(store.list().unwrap().len(), 1);
//! ```
//!
//! [`ContactRepository`]: kinfolk_domain::ContactRepository

#![warn(missing_docs)]

mod memory;
pub mod snapshot;
mod sqlite;
pub mod vcard;

pub use memory::MemoryStore;
pub use snapshot::{export_snapshot, import_snapshot, Snapshot, SnapshotError};
pub use sqlite::SqliteStore;
pub use vcard::{parse_vcards, write_vcards};

use kinfolk_domain::{Contact, ContactId, DomainError, Relationship};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Contact or relationship not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A record broke a domain rule
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Drop `removed` from every contact's parent links, returning the contacts
/// that changed
pub(crate) fn strip_parent_links(contacts: &mut [Contact], removed: &ContactId) -> Vec<ContactId> {
    let mut changed = Vec::new();
    for contact in contacts.iter_mut() {
        if contact.parent_ids.remove(removed) {
            contact.touch();
            changed.push(contact.id.clone());
        }
    }
    changed
}

/// Fail with [`StoreError::InvalidData`] when two records share an id
pub(crate) fn check_unique_ids(
    contacts: &[Contact],
    relationships: &[Relationship],
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    if let Some(repeated) = contacts.iter().find(|c| !seen.insert(&c.id)) {
        return Err(StoreError::InvalidData(format!(
            "Contact {} appears more than once",
            repeated.id
        )));
    }

    let mut seen = HashSet::new();
    if let Some(repeated) = relationships.iter().find(|r| !seen.insert(&r.id)) {
        return Err(StoreError::InvalidData(format!(
            "Relationship {} appears more than once",
            repeated.id
        )));
    }

    Ok(())
}
