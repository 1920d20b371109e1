//! Command implementations.
//!
//! Commands work against any [`ContactRepository`] backed by the store's
//! error type, so tests can run them on a [`kinfolk_store::MemoryStore`].

pub mod add;
pub mod config;
pub mod family;
pub mod link;
pub mod list;
pub mod relate;
pub mod reminders;
pub mod remove;
pub mod transfer;

pub use self::add::execute_add;
pub use self::config::execute_config;
pub use self::family::{execute_anomalies, execute_edges, execute_relations};
pub use self::link::{execute_link, execute_unlink};
pub use self::list::{execute_list, execute_show};
pub use self::relate::{execute_relate, execute_relationships};
pub use self::reminders::execute_reminders;
pub use self::remove::execute_remove;
pub use self::transfer::{execute_export, execute_import};

use crate::error::{CliError, Result};
use kinfolk_domain::{Contact, ContactId, ContactRepository};
use kinfolk_graph::FamilyGraph;
use kinfolk_store::StoreError;

/// Fetch a contact or fail with [`CliError::ContactNotFound`].
pub(crate) fn require_contact<R>(store: &R, id: &str) -> Result<Contact>
where
    R: ContactRepository<Error = StoreError>,
{
    store
        .get(&ContactId::from(id))?
        .ok_or_else(|| CliError::ContactNotFound(id.to_string()))
}

/// Build the family graph over everything in the store.
pub(crate) fn load_graph<R>(store: &R) -> Result<FamilyGraph>
where
    R: ContactRepository<Error = StoreError>,
{
    Ok(FamilyGraph::from_contacts(store.list()?))
}
