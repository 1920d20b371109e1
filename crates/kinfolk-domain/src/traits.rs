//! Trait definitions for external interactions
//!
//! These traits define the boundary between the domain and storage.
//! Implementations live in `kinfolk-store`.

use crate::{Contact, ContactId, Relationship, RelationshipId};

/// Trait for storing and retrieving contacts and their explicit relationships
///
/// The family graph never talks to a repository directly: callers take a
/// snapshot with [`ContactRepository::list`] and build a graph from it.
pub trait ContactRepository {
    /// Error type for repository operations
    type Error;

    /// All contacts in insertion order
    fn list(&self) -> Result<Vec<Contact>, Self::Error>;

    /// Replace every stored contact with `contacts`
    fn save(&mut self, contacts: &[Contact]) -> Result<(), Self::Error>;

    /// Replace every stored contact and relationship at once
    ///
    /// Either both sets are replaced or the store is left untouched.
    fn replace_all(
        &mut self,
        contacts: &[Contact],
        relationships: &[Relationship],
    ) -> Result<(), Self::Error>;

    /// Upsert `contacts` and add each relationship whose id is not stored yet
    ///
    /// Returns the number of relationships added. Either every record is
    /// written or the store is left untouched.
    fn merge_all(
        &mut self,
        contacts: &[Contact],
        relationships: &[Relationship],
    ) -> Result<usize, Self::Error>;

    /// Get a contact by ID
    fn get(&self, id: &ContactId) -> Result<Option<Contact>, Self::Error>;

    /// Insert a new contact or replace the one with the same id
    fn upsert(&mut self, contact: Contact) -> Result<(), Self::Error>;

    /// Delete a contact, returning whether it existed
    ///
    /// Explicit relationships touching the contact are removed and the id is
    /// dropped from other contacts' parent links.
    fn delete(&mut self, id: &ContactId) -> Result<bool, Self::Error>;

    /// All explicit relationships
    fn list_relationships(&self) -> Result<Vec<Relationship>, Self::Error>;

    /// Replace every stored relationship with `relationships`
    fn save_relationships(&mut self, relationships: &[Relationship]) -> Result<(), Self::Error>;

    /// Record an explicit relationship
    fn add_relationship(&mut self, relationship: Relationship) -> Result<(), Self::Error>;

    /// Remove an explicit relationship, returning whether it existed
    fn remove_relationship(&mut self, id: &RelationshipId) -> Result<bool, Self::Error>;
}
