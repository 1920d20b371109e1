//! Combined relation listings and edge export

use crate::FamilyGraph;
use kinfolk_domain::edge::pair_key;
use kinfolk_domain::{Contact, ContactId, EdgeKind, FamilyEdge, InferredRelation, RelationKind};
use std::collections::HashSet;

/// Collects relations, keeping the first kind under which each contact appears
struct RelationCollector<'a> {
    seen: HashSet<&'a ContactId>,
    relations: Vec<InferredRelation>,
}

impl<'a> RelationCollector<'a> {
    /// The subject is pre-seeded so a malformed snapshot can never list a
    /// contact as its own relative
    fn new(subject: &'a ContactId) -> Self {
        let mut seen = HashSet::new();
        seen.insert(subject);
        Self {
            seen,
            relations: Vec::new(),
        }
    }

    fn exclude(&mut self, contacts: Vec<&'a Contact>) {
        self.seen.extend(contacts.into_iter().map(|c| &c.id));
    }

    fn add(&mut self, contacts: Vec<&'a Contact>, relation: RelationKind) {
        for contact in contacts {
            if self.seen.insert(&contact.id) {
                self.relations.push(InferredRelation {
                    contact: contact.clone(),
                    relation,
                });
            }
        }
    }

    /// Everything past immediate family, in proximity order
    fn add_extended(&mut self, graph: &'a FamilyGraph, id: &ContactId) {
        self.add(graph.grandparents(id), RelationKind::Grandparent);
        self.add(graph.grandchildren(id), RelationKind::Grandchild);
        self.add(graph.aunts_uncles(id), RelationKind::AuntUncle);
        self.add(graph.nieces_nephews(id), RelationKind::NieceNephew);
        self.add(graph.cousins(id), RelationKind::Cousin);
        self.add(graph.great_grandparents(id), RelationKind::GreatGrandparent);
        self.add(graph.great_grandchildren(id), RelationKind::GreatGrandchild);
    }
}

impl FamilyGraph {
    /// Every inferred relation of `id`, closest first, each contact once
    ///
    /// Kinds are evaluated in the order of [`RelationKind::ALL`]. A contact
    /// reachable through several kinds is tagged with the first.
    pub fn all_family_relations(&self, id: &ContactId) -> Vec<InferredRelation> {
        let mut collector = RelationCollector::new(id);

        collector.add(self.parents(id), RelationKind::Parent);
        collector.add(self.children(id), RelationKind::Child);

        let siblings = self.siblings(id);
        collector.add(siblings.full, RelationKind::Sibling);
        collector.add(siblings.half, RelationKind::HalfSibling);

        collector.add_extended(self, id);
        collector.relations
    }

    /// Relations of `id` beyond parents, children and siblings
    pub fn extended_family(&self, id: &ContactId) -> Vec<InferredRelation> {
        let mut collector = RelationCollector::new(id);

        collector.exclude(self.parents(id));
        collector.exclude(self.children(id));
        collector.exclude(self.all_siblings(id));

        collector.add_extended(self, id);
        collector.relations
    }

    /// Edges for drawing the whole family, at most one per contact pair
    ///
    /// Parent/child edges come first (parent as `from`), then sibling edges.
    /// A pair already connected keeps its first edge.
    pub fn all_family_edges(&self) -> Vec<FamilyEdge> {
        let mut edges = Vec::new();
        let mut drawn: HashSet<(ContactId, ContactId)> = HashSet::new();

        let mut add_edge = |from: &ContactId, to: &ContactId, kind: EdgeKind| {
            if drawn.insert(pair_key(from, to)) {
                edges.push(FamilyEdge::new(from.clone(), to.clone(), kind));
            }
        };

        for child in &self.order {
            for parent in self.parent_ids(child) {
                if self.contacts.contains_key(parent) {
                    add_edge(parent, child, EdgeKind::ParentChild);
                }
            }
        }

        for id in &self.order {
            for sibling in self.all_siblings(id) {
                add_edge(id, &sibling.id, EdgeKind::Sibling);
            }
        }

        tracing::debug!(edges = edges.len(), "Exported family edges");
        edges
    }
}
