//! Kinfolk Family Graph
//!
//! Infers extended-family relations from the parent links recorded on
//! contacts.
//!
//! # Overview
//!
//! A [`FamilyGraph`] is built once from a snapshot of the contact list and
//! answers three kinds of questions:
//! - **Direct links**: parents and children
//! - **Derived relations**: siblings (full and half), grandparents,
//!   aunts/uncles, nieces/nephews, cousins, great-grandparents and their
//!   descending counterparts
//! - **Aggregate views**: a deduplicated, proximity-ordered listing of every
//!   relation, the extended family beyond parents/children/siblings, and a
//!   deduplicated edge set for drawing the family tree
//!
//! The graph never observes later changes to the contact list. Rebuild it
//! whenever the list changes.
//!
//! # Usage
//!
//! ```
//! use kinfolk_domain::{Contact, ParentIds};
//! use kinfolk_graph::FamilyGraph;
//!
//! let mom = Contact::new("Ann", "Smith").with_id("mom");
//! let dad = Contact::new("Bill", "Smith").with_id("dad");
//! let kid = Contact::new("Cara", "Smith")
//!     .with_id("kid")
//!     .with_parents(ParentIds::new(vec!["mom".into(), "dad".into()]).unwrap());
//!
//! let graph = FamilyGraph::build(&[mom, dad, kid]);
//! let parents: Vec<&str> = graph
//!     .parents(&"kid".into())
//!     .iter()
//!     .map(|c| c.id.as_str())
//!     .collect();
//! assert_eq!(parents, ["mom", "dad"]);
//! ```
//!
//! # Malformed input
//!
//! Nothing is rejected. Parent ids that do not resolve to a contact are
//! dropped from query results but still count as recorded parents when
//! deciding full vs. half siblings. Self-parent links and ancestry cycles
//! are reported through [`FamilyGraph::anomalies`].

#![warn(missing_docs)]

mod aggregate;
mod anomaly;
mod graph;
mod queries;

pub use anomaly::GraphAnomaly;
pub use graph::FamilyGraph;
pub use queries::Siblings;
