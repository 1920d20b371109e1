//! Error types for domain validation

use thiserror::Error;

/// Errors raised when a record violates a domain rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// More than two parents were recorded on a contact
    #[error("A contact can have at most 2 parents, got {0}")]
    TooManyParents(usize),

    /// A contact was linked as its own parent
    #[error("Contact {0} cannot be its own parent")]
    SelfParent(String),

    /// A descendant was linked as a parent of its own ancestor
    #[error("Contact {parent} descends from {child} and cannot be its parent")]
    DescendantAsParent {
        /// The contact that would become a parent
        parent: String,
        /// The contact that would gain the parent
        child: String,
    },

    /// A relationship was recorded between a contact and itself
    #[error("Relationship endpoints must differ, got {0} twice")]
    SelfRelationship(String),
}
