//! Kinfolk Domain Layer
//!
//! This crate contains the domain model for Kinfolk, a personal
//! relationship manager. It performs no I/O and defines the records,
//! value objects, and trait interfaces that all other crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Contact**: A person the user keeps track of
//! - **Parent link**: Up to two parent ids recorded on each contact
//! - **Relationship**: An explicit, user-recorded link between two contacts (spouse, friend)
//! - **Relation kind**: A family relation inferred from parent links (cousin, aunt/uncle)
//! - **Family edge**: An unordered contact pair used to draw the family graph
//!
//! ## Architecture
//!
//! - Pure data and validation only
//! - Storage implementations live in `kinfolk-store`
//! - Relationship inference lives in `kinfolk-graph`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod contact;
pub mod edge;
pub mod error;
pub mod relation;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use contact::{Contact, ContactId, ImportantDate, ParentIds, MAX_PARENTS};
pub use edge::{EdgeKind, FamilyEdge};
pub use error::DomainError;
pub use relation::{InferredRelation, RelationKind};
pub use relationship::{Relationship, RelationshipId};
pub use traits::ContactRepository;

/// Current time as an RFC 3339 string, the timestamp format used on records.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
