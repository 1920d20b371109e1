//! Graph index built from a contact snapshot

use crate::anomaly::{self, GraphAnomaly};
use kinfolk_domain::{Contact, ContactId};
use std::collections::{HashMap, HashSet};

/// Read-only family index over a snapshot of contacts
///
/// `parents_of` and `children_of` are exact inverses: for every child `c`
/// and every `p` in `parents_of[c]`, `c` is in `children_of[p]`. Only
/// contacts with at least one recorded parent are keys of `parents_of`.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    /// id -> contact
    pub(crate) contacts: HashMap<ContactId, Contact>,

    /// Contact ids in input order, first occurrence wins
    pub(crate) order: Vec<ContactId>,

    /// child id -> parent ids, record order, duplicates collapsed
    pub(crate) parents_of: HashMap<ContactId, Vec<ContactId>>,

    /// parent id -> child ids, input order of the children
    pub(crate) children_of: HashMap<ContactId, Vec<ContactId>>,

    anomalies: Vec<GraphAnomaly>,
}

impl FamilyGraph {
    /// Build the index from a borrowed snapshot
    pub fn build(contacts: &[Contact]) -> Self {
        Self::from_contacts(contacts.to_vec())
    }

    /// Build the index, taking ownership of the snapshot
    ///
    /// If two records share an id, the later record replaces the earlier
    /// one but keeps its position.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        let mut graph = Self::default();
        let mut link_count = 0usize;

        for contact in contacts {
            let id = contact.id.clone();

            // A repeated id replaces the earlier record's links
            if let Some(stale) = graph.parents_of.remove(&id) {
                for parent in stale {
                    if let Some(children) = graph.children_of.get_mut(&parent) {
                        let before = children.len();
                        children.retain(|c| c != &id);
                        link_count -= before - children.len();
                        if children.is_empty() {
                            graph.children_of.remove(&parent);
                        }
                    }
                }
            }

            if !contact.parent_ids.is_empty() {
                let mut parents: Vec<ContactId> = Vec::with_capacity(contact.parent_ids.len());
                for parent in &contact.parent_ids {
                    if !parents.contains(parent) {
                        parents.push(parent.clone());
                    }
                }

                for parent in &parents {
                    let children = graph.children_of.entry(parent.clone()).or_default();
                    if !children.contains(&id) {
                        children.push(id.clone());
                        link_count += 1;
                    }
                }

                graph.parents_of.insert(id.clone(), parents);
            }

            if graph.contacts.insert(id.clone(), contact).is_none() {
                graph.order.push(id);
            }
        }

        graph.anomalies = anomaly::detect(&graph);

        tracing::debug!(
            contacts = graph.order.len(),
            links = link_count,
            "Built family graph"
        );
        for found in &graph.anomalies {
            tracing::warn!("Family graph anomaly: {}", found);
        }

        graph
    }

    /// Look up a contact by id
    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.get(id)
    }

    /// Contacts in input order
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.order.iter().filter_map(|id| self.contacts.get(id))
    }

    /// Number of distinct contacts
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the snapshot was empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of parent ids recorded for `id`, counting ids that do not
    /// resolve to a contact
    pub fn recorded_parent_count(&self, id: &ContactId) -> usize {
        self.parents_of.get(id).map_or(0, Vec::len)
    }

    /// Problems found in the snapshot when the graph was built
    pub fn anomalies(&self) -> &[GraphAnomaly] {
        &self.anomalies
    }

    /// Resolve ids to contacts, dropping unknown ids and repeated ids
    pub(crate) fn resolve<'a, I>(&'a self, ids: I) -> Vec<&'a Contact>
    where
        I: IntoIterator<Item = &'a ContactId>,
    {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.contacts.get(id))
            .collect()
    }

    pub(crate) fn parent_ids(&self, id: &ContactId) -> &[ContactId] {
        self.parents_of.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn child_ids(&self, id: &ContactId) -> &[ContactId] {
        self.children_of.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
