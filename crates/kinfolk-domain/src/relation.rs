//! Relation module - family relations inferred from parent links

use crate::Contact;
use serde::{Deserialize, Serialize};

/// Kind of an inferred family relation
///
/// Variants are declared in proximity order, the same order in which the
/// family graph evaluates them when building a combined listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Direct parent
    Parent,

    /// Direct child
    Child,

    /// Shares both recorded parents
    Sibling,

    /// Shares some but not all recorded parents
    #[serde(rename = "Half-Sibling")]
    HalfSibling,

    /// Parent of a parent
    Grandparent,

    /// Child of a child
    Grandchild,

    /// Sibling of a parent
    #[serde(rename = "Aunt/Uncle")]
    AuntUncle,

    /// Child of a sibling
    #[serde(rename = "Niece/Nephew")]
    NieceNephew,

    /// Child of an aunt or uncle
    Cousin,

    /// Parent of a grandparent
    #[serde(rename = "Great-Grandparent")]
    GreatGrandparent,

    /// Child of a grandchild
    #[serde(rename = "Great-Grandchild")]
    GreatGrandchild,
}

impl RelationKind {
    /// Every kind in evaluation order
    pub const ALL: [RelationKind; 11] = [
        RelationKind::Parent,
        RelationKind::Child,
        RelationKind::Sibling,
        RelationKind::HalfSibling,
        RelationKind::Grandparent,
        RelationKind::Grandchild,
        RelationKind::AuntUncle,
        RelationKind::NieceNephew,
        RelationKind::Cousin,
        RelationKind::GreatGrandparent,
        RelationKind::GreatGrandchild,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RelationKind::Parent => "Parent",
            RelationKind::Child => "Child",
            RelationKind::Sibling => "Sibling",
            RelationKind::HalfSibling => "Half-Sibling",
            RelationKind::Grandparent => "Grandparent",
            RelationKind::Grandchild => "Grandchild",
            RelationKind::AuntUncle => "Aunt/Uncle",
            RelationKind::NieceNephew => "Niece/Nephew",
            RelationKind::Cousin => "Cousin",
            RelationKind::GreatGrandparent => "Great-Grandparent",
            RelationKind::GreatGrandchild => "Great-Grandchild",
        }
    }

    /// Parents, children and siblings of either kind
    pub fn is_immediate(&self) -> bool {
        matches!(
            self,
            RelationKind::Parent | RelationKind::Child | RelationKind::Sibling | RelationKind::HalfSibling
        )
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A contact paired with the relation under which it was found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferredRelation {
    /// The related contact
    pub contact: Contact,

    /// How the contact is related to the subject of the query
    pub relation: RelationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(RelationKind::HalfSibling.label(), "Half-Sibling");
        assert_eq!(RelationKind::AuntUncle.to_string(), "Aunt/Uncle");
    }

    #[test]
    fn test_immediate_family() {
        let immediate: Vec<_> = RelationKind::ALL.iter().filter(|k| k.is_immediate()).collect();
        assert_eq!(immediate.len(), 4);
        assert!(!RelationKind::Cousin.is_immediate());
    }

    #[test]
    fn test_all_is_in_proximity_order() {
        let mut sorted = RelationKind::ALL;
        sorted.sort();
        assert_eq!(sorted, RelationKind::ALL);
    }
}
