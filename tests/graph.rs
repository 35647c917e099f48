//! Tests for the graph store and its structural edit operations.
mod common;
use common::{linear_graph, path_ids, template};
use haichi::error::GraphEditError;
use haichi::prelude::*;

#[test]
fn insertion_adds_one_node_and_one_net_edge() {
    let mut store = linear_graph(&["start", "a", "b"]);
    let nodes_before = store.nodes().len();
    let edges_before = store.edges().len();

    store
        .insert_on_edge("e-a-b", &template("email"))
        .expect("edge exists");

    assert_eq!(store.nodes().len(), nodes_before + 1);
    // One edge removed, two added.
    assert_eq!(store.edges().len(), edges_before + 1);
}

#[test]
fn insertion_on_missing_edge_leaves_store_untouched() {
    let mut store = linear_graph(&["start", "a", "b"]);
    let before = store.clone();

    let result = store.insert_on_edge("e-nope-nada", &template("email"));

    assert!(matches!(result, Err(GraphEditError::EdgeNotFound(_))));
    assert_eq!(store, before);
}

#[test]
fn insertion_preserves_endpoints_and_inherits_handles() {
    let mut store = linear_graph(&["start", "a"]);
    let original = store.edge("e-start-a").cloned().expect("seed edge");

    let new_id = store
        .insert_on_edge("e-start-a", &template("webhook"))
        .expect("edge exists");

    assert!(store.edge("e-start-a").is_none());

    let upper = store
        .edge(&Edge::derive_id("start", &new_id))
        .expect("upper edge");
    assert_eq!(upper.source, original.source);
    assert_eq!(upper.target, new_id);
    assert_eq!(upper.source_handle, original.source_handle);
    assert_eq!(upper.target_handle, Some(Handle::Top));

    let lower = store
        .edge(&Edge::derive_id(&new_id, "a"))
        .expect("lower edge");
    assert_eq!(lower.source, new_id);
    assert_eq!(lower.target, original.target);
    assert_eq!(lower.source_handle, Some(Handle::Bottom));
    assert_eq!(lower.target_handle, original.target_handle);

    // No dangling references anywhere.
    for edge in store.edges() {
        assert!(store.node(&edge.source).is_some());
        assert!(store.node(&edge.target).is_some());
    }
}

#[test]
fn inserted_node_id_uses_template_category_prefix() {
    let mut store = linear_graph(&["start", "a"]);
    let new_id = store
        .insert_on_edge("e-start-a", &template("time-delay"))
        .expect("edge exists");
    assert!(new_id.starts_with("timing-"), "got id '{}'", new_id);
    assert_eq!(store.node(&new_id).map(|n| n.kind), Some(NodeKind::Action));
    assert_eq!(store.node(&new_id).map(|n| n.position), Some(Position::default()));
}

#[test]
fn insertion_keeps_path_order() {
    let mut store = linear_graph(&["start", "a", "b"]);
    let new_id = store
        .insert_on_edge("e-a-b", &template("sms"))
        .expect("edge exists");
    assert_eq!(path_ids(&store), vec!["start", "a", new_id.as_str(), "b"]);
}

#[test]
fn append_after_start_creates_first_step() {
    let mut store = GraphStore::new();
    store.push_node(Node::start("start"));

    let new_id = store
        .append_after("start", &template("email"))
        .expect("start exists");

    assert_eq!(store.nodes().len(), 2);
    assert_eq!(store.edges().len(), 1);
    let edge = &store.edges()[0];
    assert_eq!(edge.source, "start");
    assert_eq!(edge.target, new_id);
    assert_eq!(edge.source_handle, Some(Handle::Bottom));
    assert_eq!(edge.target_handle, Some(Handle::Top));
}

#[test]
fn append_after_missing_node_is_rejected() {
    let mut store = GraphStore::new();
    let before = store.clone();
    let result = store.append_after("ghost", &template("email"));
    assert!(matches!(result, Err(GraphEditError::NodeNotFound(_))));
    assert_eq!(store, before);
}

#[test]
fn relocation_preserves_node_and_edge_counts() {
    let mut store = linear_graph(&["start", "a", "b", "end"]);
    let nodes_before = store.nodes().len();
    let edges_before = store.edges().len();

    store
        .relocate_onto_edge("a", "e-b-end")
        .expect("both exist");

    assert_eq!(store.nodes().len(), nodes_before);
    // Three removed, three added.
    assert_eq!(store.edges().len(), edges_before);
}

#[test]
fn relocation_reorders_the_path() {
    let mut store = linear_graph(&["start", "a", "b", "end"]);

    store
        .relocate_onto_edge("a", "e-b-end")
        .expect("both exist");

    assert_eq!(path_ids(&store), vec!["start", "b", "a", "end"]);

    // The bridge inherits the outer handles of the removed neighbor edges.
    let bridge = store.edge("e-start-b").expect("bridge edge");
    assert_eq!(bridge.source_handle, Some(Handle::Bottom));
    assert_eq!(bridge.target_handle, Some(Handle::Top));
}

#[test]
fn relocating_a_node_without_predecessor_is_a_rejected_precondition() {
    let mut store = linear_graph(&["start", "a", "b"]);
    let before = store.clone();

    // The start node has no incoming edge.
    let result = store.relocate_onto_edge("start", "e-a-b");

    assert!(matches!(
        result,
        Err(GraphEditError::DetachedNode { side: "incoming", .. })
    ));
    assert_eq!(store, before);
}

#[test]
fn relocating_the_last_node_is_a_rejected_precondition() {
    let mut store = linear_graph(&["start", "a", "b"]);
    let before = store.clone();

    let result = store.relocate_onto_edge("b", "e-start-a");

    assert!(matches!(
        result,
        Err(GraphEditError::DetachedNode { side: "outgoing", .. })
    ));
    assert_eq!(store, before);
}

#[test]
fn connect_requires_both_endpoints() {
    let mut store = linear_graph(&["start", "a"]);
    assert!(store.connect("a", "ghost").is_err());
    assert_eq!(store.edges().len(), 1);

    store.connect("start", "a").expect("both exist");
    assert_eq!(store.edges().len(), 2);
}

#[test]
fn terminal_node_is_the_one_without_outgoing_edges() {
    let store = linear_graph(&["start", "a", "b"]);
    assert_eq!(store.terminal_node().map(|n| n.id.as_str()), Some("b"));

    let empty = GraphStore::new();
    assert!(empty.terminal_node().is_none());
}
