//! Relationship module - explicit links the user records between two contacts
//!
//! These are not inferred: a spouse, a friend, or a colleague is recorded by
//! hand with a label for each direction. Family relations derived from parent
//! links live in [`crate::relation`].

use crate::{ContactId, DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a relationship (UUIDv7 string for new records)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipId(String);

impl RelationshipId {
    /// Generate a new UUIDv7-based RelationshipId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RelationshipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelationshipId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A pairwise relationship between two contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Unique identifier
    pub id: RelationshipId,

    /// First contact
    pub contact_id1: ContactId,

    /// Second contact
    pub contact_id2: ContactId,

    /// What the first contact is to the second (e.g. "Spouse")
    #[serde(rename = "type1To2")]
    pub type_1_to_2: String,

    /// What the second contact is to the first
    #[serde(rename = "type2To1")]
    pub type_2_to_1: String,

    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: String,

    /// Last update timestamp (RFC 3339)
    #[serde(default)]
    pub updated_at: String,
}

impl Relationship {
    /// Create a new relationship
    ///
    /// # Errors
    /// Returns [`DomainError::SelfRelationship`] if both ends are the same contact
    pub fn new(
        contact_id1: ContactId,
        contact_id2: ContactId,
        type_1_to_2: impl Into<String>,
        type_2_to_1: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if contact_id1 == contact_id2 {
            return Err(DomainError::SelfRelationship(contact_id1.to_string()));
        }

        let now = crate::now_rfc3339();
        Ok(Self {
            id: RelationshipId::new(),
            contact_id1,
            contact_id2,
            type_1_to_2: type_1_to_2.into(),
            type_2_to_1: type_2_to_1.into(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Check whether the relationship touches `id`
    pub fn involves(&self, id: &ContactId) -> bool {
        &self.contact_id1 == id || &self.contact_id2 == id
    }

    /// The other end and the label describing it, as seen from `id`
    pub fn counterpart(&self, id: &ContactId) -> Option<(&ContactId, &str)> {
        if &self.contact_id1 == id {
            Some((&self.contact_id2, &self.type_2_to_1))
        } else if &self.contact_id2 == id {
            Some((&self.contact_id1, &self.type_1_to_2))
        } else {
            None
        }
    }
}
