//! Family scenarios exercised through the public API
//!
//! Each test builds a small family and checks the answers a user would see.

use kinfolk_domain::{Contact, ContactId, ParentIds, RelationKind};
use kinfolk_graph::{FamilyGraph, GraphAnomaly};

fn person(id: &str, parents: &[&str]) -> Contact {
    let parents = parents.iter().map(|p| ContactId::from(*p)).collect();
    Contact::new(id, "Family")
        .with_id(id)
        .with_parents(ParentIds::new(parents).unwrap())
}

fn ids(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.id.to_string()).collect()
}

#[test]
fn test_two_parents_one_child() {
    let graph = FamilyGraph::build(&[person("A", &[]), person("B", &[]), person("C", &["A", "B"])]);

    assert_eq!(ids(&graph.parents(&"C".into())), ["A", "B"]);
    assert_eq!(ids(&graph.children(&"A".into())), ["C"]);
    assert_eq!(ids(&graph.children(&"B".into())), ["C"]);
    assert!(graph.all_siblings(&"C".into()).is_empty());
}

#[test]
fn test_partial_overlap_is_half_both_ways() {
    let graph = FamilyGraph::build(&[
        person("A", &[]),
        person("B", &[]),
        person("D", &["A"]),
        person("E", &["A", "B"]),
    ]);

    let for_e = graph.siblings(&"E".into());
    assert!(for_e.full.is_empty());
    assert_eq!(ids(&for_e.half), ["D"]);

    let for_d = graph.siblings(&"D".into());
    assert!(for_d.full.is_empty());
    assert_eq!(ids(&for_d.half), ["E"]);
}

#[test]
fn test_same_two_parents_are_full_siblings() {
    let graph = FamilyGraph::build(&[
        person("A", &[]),
        person("B", &[]),
        person("F", &["A", "B"]),
        person("G", &["A", "B"]),
    ]);

    let siblings = graph.siblings(&"F".into());
    assert_eq!(ids(&siblings.full), ["G"]);
    assert!(siblings.half.is_empty());
}

#[test]
fn test_grandchild_sees_grandparents_and_aunts() {
    let graph = FamilyGraph::build(&[
        person("A", &[]),
        person("B", &[]),
        person("C", &["A", "B"]),
        person("D", &["A"]),
        person("E", &["A", "B"]),
        person("H", &["C"]),
    ]);

    assert_eq!(ids(&graph.grandparents(&"H".into())), ["A", "B"]);
    assert_eq!(ids(&graph.aunts_uncles(&"H".into())), ["E", "D"]);

    let relations = graph.all_family_relations(&"H".into());
    let kinds: Vec<(&str, RelationKind)> = relations
        .iter()
        .map(|r| (r.contact.id.as_str(), r.relation))
        .collect();
    assert_eq!(
        kinds,
        [
            ("C", RelationKind::Parent),
            ("A", RelationKind::Grandparent),
            ("B", RelationKind::Grandparent),
            ("E", RelationKind::AuntUncle),
            ("D", RelationKind::AuntUncle),
        ]
    );
}

#[test]
fn test_dangling_parent_filtered_but_counted() {
    let graph = FamilyGraph::build(&[
        person("A", &[]),
        person("X", &["A", "missing"]),
        person("Y", &["A", "missing"]),
    ]);

    assert_eq!(ids(&graph.parents(&"X".into())), ["A"]);
    assert_eq!(graph.recorded_parent_count(&"X".into()), 2);
    assert_eq!(ids(&graph.siblings(&"X".into()).full), ["Y"]);
    assert_eq!(
        graph.anomalies(),
        &[
            GraphAnomaly::DanglingParent { child: "X".into(), parent: "missing".into() },
            GraphAnomaly::DanglingParent { child: "Y".into(), parent: "missing".into() },
        ]
    );
}

#[test]
fn test_four_generations() {
    let graph = FamilyGraph::build(&[
        person("great", &[]),
        person("grand", &["great"]),
        person("parent", &["grand"]),
        person("child", &["parent"]),
    ]);

    assert_eq!(ids(&graph.great_grandparents(&"child".into())), ["great"]);
    assert_eq!(ids(&graph.great_grandchildren(&"great".into())), ["child"]);

    let extended = graph.extended_family(&"child".into());
    let kinds: Vec<RelationKind> = extended.iter().map(|r| r.relation).collect();
    assert_eq!(kinds, [RelationKind::Grandparent, RelationKind::GreatGrandparent]);
}

#[test]
fn test_self_parent_edge_is_kept() {
    let graph = FamilyGraph::build(&[person("loop", &["loop"])]);

    let edges = graph.all_family_edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].from, edges[0].to);
    assert!(graph.all_family_relations(&"loop".into()).is_empty());
    assert_eq!(graph.anomalies(), &[GraphAnomaly::SelfParent { contact: "loop".into() }]);
}
