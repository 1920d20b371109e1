//! Detection of malformed parent links
//!
//! The graph accepts any snapshot. This module lists what is wrong with it so
//! callers can warn the user instead of silently showing odd relations.

use crate::FamilyGraph;
use kinfolk_domain::ContactId;
use std::collections::HashSet;
use std::fmt;

/// A problem found in the parent links of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GraphAnomaly {
    /// A contact lists itself as a parent
    SelfParent {
        /// The offending contact
        contact: ContactId,
    },

    /// A parent id does not resolve to any contact
    DanglingParent {
        /// Contact holding the link
        child: ContactId,
        /// Unresolved parent id
        parent: ContactId,
    },

    /// The same parent is listed twice on one contact
    DuplicateParent {
        /// Contact holding the link
        child: ContactId,
        /// Repeated parent id
        parent: ContactId,
    },

    /// A contact is its own ancestor through two or more links
    Cycle {
        /// A contact on the cycle
        contact: ContactId,
    },
}

impl fmt::Display for GraphAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphAnomaly::SelfParent { contact } => {
                write!(f, "{} is listed as its own parent", contact)
            }
            GraphAnomaly::DanglingParent { child, parent } => {
                write!(f, "{} names unknown parent {}", child, parent)
            }
            GraphAnomaly::DuplicateParent { child, parent } => {
                write!(f, "{} names parent {} more than once", child, parent)
            }
            GraphAnomaly::Cycle { contact } => {
                write!(f, "{} is its own ancestor", contact)
            }
        }
    }
}

/// Scan a freshly built graph, in contact input order
pub(crate) fn detect(graph: &FamilyGraph) -> Vec<GraphAnomaly> {
    let mut found = Vec::new();

    for id in &graph.order {
        let Some(contact) = graph.contacts.get(id) else {
            continue;
        };

        let mut listed = HashSet::new();
        for parent in &contact.parent_ids {
            if !listed.insert(parent) {
                found.push(GraphAnomaly::DuplicateParent {
                    child: id.clone(),
                    parent: parent.clone(),
                });
            }
        }

        for parent in graph.parent_ids(id) {
            if parent == id {
                found.push(GraphAnomaly::SelfParent { contact: id.clone() });
            } else if !graph.contacts.contains_key(parent) {
                found.push(GraphAnomaly::DanglingParent {
                    child: id.clone(),
                    parent: parent.clone(),
                });
            }
        }

        if is_own_ancestor(graph, id) {
            found.push(GraphAnomaly::Cycle { contact: id.clone() });
        }
    }

    found
}

/// Depth-first walk up the parent links, ignoring direct self-parent links
fn is_own_ancestor(graph: &FamilyGraph, id: &ContactId) -> bool {
    let mut stack: Vec<&ContactId> = graph.parent_ids(id).iter().filter(|p| *p != id).collect();
    let mut visited: HashSet<&ContactId> = HashSet::new();

    while let Some(current) = stack.pop() {
        if current == id {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        stack.extend(graph.parent_ids(current));
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::{Contact, ParentIds};

    fn person(id: &str, parents: &[&str]) -> Contact {
        let parents = parents.iter().map(|p| ContactId::from(*p)).collect();
        Contact::new(id, "Test")
            .with_id(id)
            .with_parents(ParentIds::new(parents).unwrap())
    }

    #[test]
    fn test_clean_snapshot() {
        let graph = FamilyGraph::build(&[person("a", &[]), person("b", &["a"])]);
        assert!(graph.anomalies().is_empty());
    }

    #[test]
    fn test_self_parent() {
        let graph = FamilyGraph::build(&[person("a", &["a"])]);
        assert_eq!(
            graph.anomalies(),
            &[GraphAnomaly::SelfParent { contact: "a".into() }]
        );
    }

    #[test]
    fn test_dangling_and_duplicate() {
        let graph = FamilyGraph::build(&[person("a", &[]), person("b", &["a", "a"]), person("c", &["ghost"])]);
        assert_eq!(
            graph.anomalies(),
            &[
                GraphAnomaly::DuplicateParent { child: "b".into(), parent: "a".into() },
                GraphAnomaly::DanglingParent { child: "c".into(), parent: "ghost".into() },
            ]
        );
    }

    #[test]
    fn test_two_step_cycle() {
        let graph = FamilyGraph::build(&[person("a", &["b"]), person("b", &["a"]), person("c", &["a"])]);
        assert_eq!(
            graph.anomalies(),
            &[
                GraphAnomaly::Cycle { contact: "a".into() },
                GraphAnomaly::Cycle { contact: "b".into() },
            ]
        );
    }

    #[test]
    fn test_display() {
        let anomaly = GraphAnomaly::DanglingParent { child: "c".into(), parent: "ghost".into() };
        assert_eq!(anomaly.to_string(), "c names unknown parent ghost");
    }
}
