//! Edges for drawing the family graph

use crate::ContactId;
use serde::{Deserialize, Serialize};

/// Label of a family edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// `from` is a parent of `to`
    #[serde(rename = "Parent/Child")]
    ParentChild,

    /// `from` and `to` share at least one parent
    Sibling,
}

impl EdgeKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::ParentChild => "Parent/Child",
            EdgeKind::Sibling => "Sibling",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An edge between two contacts, drawn once per unordered pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyEdge {
    /// Parent for parent/child edges, the visited contact for sibling edges
    pub from: ContactId,

    /// Child for parent/child edges, the sibling for sibling edges
    pub to: ContactId,

    /// Edge label
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

impl FamilyEdge {
    /// Create a new edge
    pub fn new(from: ContactId, to: ContactId, kind: EdgeKind) -> Self {
        Self { from, to, kind }
    }

    /// The unordered pair this edge connects, smaller id first
    pub fn pair_key(&self) -> (ContactId, ContactId) {
        pair_key(&self.from, &self.to)
    }
}

/// Unordered pair key for two ids, smaller id first
pub fn pair_key(a: &ContactId, b: &ContactId) -> (ContactId, ContactId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
