//! Direct and derived relationship queries
//!
//! Every query returns resolved contacts without repeats, in the order they
//! are first reached. Ids that do not resolve to a contact are dropped.

use crate::FamilyGraph;
use kinfolk_domain::{Contact, ContactId};
use std::collections::{HashMap, HashSet};

/// Siblings of a contact split into full and half siblings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Siblings<'a> {
    /// Share at least two of the contact's recorded parents
    pub full: Vec<&'a Contact>,

    /// Share fewer parents, or the contact has fewer than two recorded
    pub half: Vec<&'a Contact>,
}

impl<'a> Siblings<'a> {
    /// Full siblings first, then half siblings
    pub fn into_all(self) -> Vec<&'a Contact> {
        let mut all = self.full;
        all.extend(self.half);
        all
    }

    /// True when neither list has entries
    pub fn is_empty(&self) -> bool {
        self.full.is_empty() && self.half.is_empty()
    }
}

impl FamilyGraph {
    /// Direct parents
    pub fn parents(&self, id: &ContactId) -> Vec<&Contact> {
        self.resolve(self.parent_ids(id))
    }

    /// Direct children
    pub fn children(&self, id: &ContactId) -> Vec<&Contact> {
        self.resolve(self.child_ids(id))
    }

    /// Everyone sharing at least one parent with `id`, split into full and
    /// half siblings
    ///
    /// A candidate is a full sibling only when it shares two or more of
    /// `id`'s parents and `id` has at least two recorded parents. Parent ids
    /// that do not resolve to a contact still count as recorded.
    pub fn siblings(&self, id: &ContactId) -> Siblings<'_> {
        let parent_ids = self.parent_ids(id);
        if parent_ids.is_empty() {
            return Siblings::default();
        }

        // candidate -> shared parent count, in first-seen order
        let mut shared: Vec<(&ContactId, usize)> = Vec::new();
        let mut slot: HashMap<&ContactId, usize> = HashMap::new();

        for parent in parent_ids {
            for child in self.child_ids(parent) {
                if child == id {
                    continue;
                }
                match slot.get(child) {
                    Some(&i) => shared[i].1 += 1,
                    None => {
                        slot.insert(child, shared.len());
                        shared.push((child, 1));
                    }
                }
            }
        }

        let two_parents = parent_ids.len() >= 2;
        let mut siblings = Siblings::default();

        for (candidate, count) in shared {
            let Some(contact) = self.contacts.get(candidate) else {
                continue;
            };
            if count >= 2 && two_parents {
                siblings.full.push(contact);
            } else {
                siblings.half.push(contact);
            }
        }

        siblings
    }

    /// Full siblings followed by half siblings
    pub fn all_siblings(&self, id: &ContactId) -> Vec<&Contact> {
        self.siblings(id).into_all()
    }

    /// Parents of each parent
    pub fn grandparents(&self, id: &ContactId) -> Vec<&Contact> {
        let parents = self.parents(id);
        self.resolve(parents.iter().flat_map(|p| self.parent_ids(&p.id)))
    }

    /// Parents of each grandparent
    pub fn great_grandparents(&self, id: &ContactId) -> Vec<&Contact> {
        let grandparents = self.grandparents(id);
        self.resolve(grandparents.iter().flat_map(|gp| self.parent_ids(&gp.id)))
    }

    /// Children of each child
    pub fn grandchildren(&self, id: &ContactId) -> Vec<&Contact> {
        let children = self.children(id);
        self.resolve(children.iter().flat_map(|c| self.child_ids(&c.id)))
    }

    /// Children of each grandchild
    pub fn great_grandchildren(&self, id: &ContactId) -> Vec<&Contact> {
        let grandchildren = self.grandchildren(id);
        self.resolve(grandchildren.iter().flat_map(|gc| self.child_ids(&gc.id)))
    }

    /// Full and half siblings of each parent
    pub fn aunts_uncles(&self, id: &ContactId) -> Vec<&Contact> {
        let siblings_of_parents: Vec<&Contact> = self
            .parents(id)
            .into_iter()
            .flat_map(|parent| self.all_siblings(&parent.id))
            .collect();
        self.resolve(siblings_of_parents.into_iter().map(|c| &c.id))
    }

    /// Children of each full or half sibling
    pub fn nieces_nephews(&self, id: &ContactId) -> Vec<&Contact> {
        let siblings = self.all_siblings(id);
        self.resolve(siblings.iter().flat_map(|s| self.child_ids(&s.id)))
    }

    /// Children of each aunt or uncle
    pub fn cousins(&self, id: &ContactId) -> Vec<&Contact> {
        let aunts_uncles = self.aunts_uncles(id);
        self.resolve(aunts_uncles.iter().flat_map(|au| self.child_ids(&au.id)))
    }

    /// True when `ancestor` is reached by walking up `id`'s parent links,
    /// dangling ids included
    pub fn is_ancestor(&self, ancestor: &ContactId, id: &ContactId) -> bool {
        let mut stack: Vec<&ContactId> = self.parent_ids(id).iter().collect();
        let mut visited = HashSet::new();

        while let Some(current) = stack.pop() {
            if current == ancestor {
                return true;
            }
            if visited.insert(current) {
                stack.extend(self.parent_ids(current));
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::ParentIds;

    fn person(id: &str, parents: &[&str]) -> Contact {
        let parents = parents.iter().map(|p| ContactId::from(*p)).collect();
        Contact::new(id, "Test")
            .with_id(id)
            .with_parents(ParentIds::new(parents).unwrap())
    }

    fn ids(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.id.to_string()).collect()
    }

    /// Three generations:
    ///
    /// ```text
    ///   gpa + gma          other
    ///      |                 |
    ///   mom + dad  aunt     step (child of dad and other)
    ///      |         |
    ///     me, sis   cuz
    ///      |
    ///     kid
    /// ```
    fn family() -> FamilyGraph {
        FamilyGraph::build(&[
            person("gpa", &[]),
            person("gma", &[]),
            person("other", &[]),
            person("mom", &["gpa", "gma"]),
            person("aunt", &["gpa", "gma"]),
            person("dad", &[]),
            person("me", &["mom", "dad"]),
            person("sis", &["mom", "dad"]),
            person("step", &["dad", "other"]),
            person("cuz", &["aunt"]),
            person("kid", &["me"]),
        ])
    }

    #[test]
    fn test_parents_and_children() {
        let graph = family();
        assert_eq!(ids(&graph.parents(&"me".into())), ["mom", "dad"]);
        assert_eq!(ids(&graph.children(&"dad".into())), ["me", "sis", "step"]);
        assert!(graph.parents(&"gpa".into()).is_empty());
        assert!(graph.children(&"kid".into()).is_empty());
    }

    #[test]
    fn test_full_and_half_siblings() {
        let graph = family();
        let siblings = graph.siblings(&"me".into());
        assert_eq!(ids(&siblings.full), ["sis"]);
        assert_eq!(ids(&siblings.half), ["step"]);
        assert_eq!(ids(&graph.all_siblings(&"me".into())), ["sis", "step"]);
    }

    #[test]
    fn test_single_parent_degrades_to_half() {
        let graph = FamilyGraph::build(&[
            person("p1", &[]),
            person("p2", &[]),
            person("x", &["p1", "p2"]),
            person("y", &["p1"]),
        ]);

        // y has one recorded parent, so x is half even though p1 is fully shared
        let for_y = graph.siblings(&"y".into());
        assert!(for_y.full.is_empty());
        assert_eq!(ids(&for_y.half), ["x"]);

        // x has two parents but y shares only one
        let for_x = graph.siblings(&"x".into());
        assert!(for_x.full.is_empty());
        assert_eq!(ids(&for_x.half), ["y"]);
    }

    #[test]
    fn test_only_child_has_no_siblings() {
        let graph = family();
        assert!(graph.siblings(&"cuz".into()).is_empty());
        let aunt = graph.siblings(&"aunt".into());
        assert_eq!(ids(&aunt.full), ["mom"]);
        assert!(aunt.half.is_empty());
    }

    #[test]
    fn test_grandparents_and_grandchildren() {
        let graph = family();
        assert_eq!(ids(&graph.grandparents(&"me".into())), ["gpa", "gma"]);
        assert_eq!(ids(&graph.grandchildren(&"mom".into())), ["kid"]);
        assert_eq!(ids(&graph.great_grandparents(&"kid".into())), ["gpa", "gma"]);
        assert_eq!(ids(&graph.great_grandchildren(&"gma".into())), ["kid"]);
    }

    #[test]
    fn test_aunts_cousins_nieces() {
        let graph = family();
        assert_eq!(ids(&graph.aunts_uncles(&"me".into())), ["aunt"]);
        assert_eq!(ids(&graph.cousins(&"me".into())), ["cuz"]);
        assert_eq!(ids(&graph.nieces_nephews(&"sis".into())), ["kid"]);
        assert_eq!(ids(&graph.aunts_uncles(&"cuz".into())), ["mom"]);
    }

    #[test]
    fn test_unknown_contact_is_empty() {
        let graph = family();
        let nobody = ContactId::from("nobody");
        assert!(graph.parents(&nobody).is_empty());
        assert!(graph.siblings(&nobody).is_empty());
        assert!(graph.cousins(&nobody).is_empty());
    }

    #[test]
    fn test_dangling_parent_counts_for_full_siblings() {
        // Both children name the same missing parent alongside a real one
        let graph = FamilyGraph::build(&[
            person("mom", &[]),
            person("a", &["mom", "ghost"]),
            person("b", &["mom", "ghost"]),
        ]);

        assert_eq!(ids(&graph.parents(&"a".into())), ["mom"]);
        let siblings = graph.siblings(&"a".into());
        assert_eq!(ids(&siblings.full), ["b"]);
    }

    #[test]
    fn test_shared_missing_parent_makes_siblings() {
        let graph = FamilyGraph::build(&[person("a", &["ghost"]), person("b", &["ghost"])]);
        assert_eq!(ids(&graph.siblings(&"a".into()).half), ["b"]);
    }

    #[test]
    fn test_sibling_never_includes_self() {
        let graph = family();
        for contact in graph.contacts() {
            assert!(graph.all_siblings(&contact.id).iter().all(|s| s.id != contact.id));
        }
    }

    #[test]
    fn test_is_ancestor() {
        let graph = family();
        assert!(graph.is_ancestor(&"gpa".into(), &"kid".into()));
        assert!(graph.is_ancestor(&"me".into(), &"kid".into()));
        assert!(!graph.is_ancestor(&"kid".into(), &"gpa".into()));
        assert!(!graph.is_ancestor(&"aunt".into(), &"me".into()));
        assert!(!graph.is_ancestor(&"kid".into(), &"kid".into()));
    }

    #[test]
    fn test_is_ancestor_terminates_on_cycle() {
        let graph = FamilyGraph::build(&[person("a", &["b"]), person("b", &["a"])]);
        assert!(graph.is_ancestor(&"a".into(), &"a".into()));
        assert!(!graph.is_ancestor(&"c".into(), &"a".into()));
    }
}
