//! Tests for the drag gesture dispatch loop and the drop resolver.
mod common;
use common::{linear_graph, path_ids};
use haichi::prelude::*;

fn edge_target(id: &str) -> DropTarget {
    DropTarget::Edge(id.to_string())
}

#[test]
fn sidebar_drop_splits_the_hovered_edge() {
    let mut session = CanvasSession::new(linear_graph(&["start", "a", "b"]), Catalog::builtin());

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        "email".to_string(),
    )));
    assert!(session.drag().is_dragging());

    session.handle(DragEvent::HoverChanged(Some(edge_target("e-a-b"))));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(edge_target("e-a-b"))));

    assert_eq!(session.nodes().len(), 4);
    assert_eq!(session.edges().len(), 3);
    assert!(!session.drag().is_dragging());

    let inserted = path_ids(session.store())
        .get(2)
        .cloned()
        .expect("path has four steps");
    assert!(inserted.starts_with("actions-"));
}

#[test]
fn hovering_an_edge_previews_the_insertion_gap() {
    let mut session = CanvasSession::new(linear_graph(&["start", "a", "b"]), Catalog::builtin());
    let baseline_y = session
        .store()
        .node("a")
        .expect("a present")
        .position
        .y;

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        "sms".to_string(),
    )));
    session.handle(DragEvent::HoverChanged(Some(edge_target("e-start-a"))));

    let previewed_y = session
        .store()
        .node("a")
        .expect("a present")
        .position
        .y;
    assert_eq!(previewed_y, baseline_y + 50.0);
}

#[test]
fn cancelled_drag_leaves_the_graph_exactly_as_before() {
    let mut session = CanvasSession::new(linear_graph(&["start", "a", "b"]), Catalog::builtin());
    let before = GraphSnapshot::capture(session.store());

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        "webhook".to_string(),
    )));
    session.handle(DragEvent::HoverChanged(Some(edge_target("e-a-b"))));
    session.handle(DragEvent::Ended(DragOutcome::Cancelled));

    // The preview gap closed and nothing was mutated.
    assert_eq!(GraphSnapshot::capture(session.store()), before);
    assert!(!session.drag().is_dragging());
}

#[test]
fn unknown_sidebar_item_never_starts_a_gesture() {
    let mut session = CanvasSession::new(linear_graph(&["start", "a"]), Catalog::builtin());
    let before = GraphSnapshot::capture(session.store());

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        "not-in-catalog".to_string(),
    )));
    assert!(!session.drag().is_dragging());

    session.handle(DragEvent::Ended(DragOutcome::Dropped(edge_target(
        "e-start-a",
    ))));
    assert_eq!(GraphSnapshot::capture(session.store()), before);
}

#[test]
fn drop_on_a_vanished_edge_is_a_silent_no_op() {
    let mut session = CanvasSession::new(linear_graph(&["start", "a"]), Catalog::builtin());
    let before = GraphSnapshot::capture(session.store());

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        "email".to_string(),
    )));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(edge_target(
        "e-ghost-ghost",
    ))));

    assert_eq!(GraphSnapshot::capture(session.store()), before);
    assert!(!session.drag().is_dragging());
}

#[test]
fn canvas_node_drop_relocates_it_onto_the_edge() {
    let mut session =
        CanvasSession::new(linear_graph(&["start", "a", "b", "end"]), Catalog::builtin());

    session.handle(DragEvent::Started(DragSource::CanvasNode("a".to_string())));
    session.handle(DragEvent::HoverChanged(Some(edge_target("e-b-end"))));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(edge_target(
        "e-b-end",
    ))));

    assert_eq!(path_ids(session.store()), vec!["start", "b", "a", "end"]);
    assert_eq!(session.nodes().len(), 4);
    assert_eq!(session.edges().len(), 3);
}

#[test]
fn dropping_on_the_terminal_connector_appends_the_first_step() {
    let mut store = GraphStore::new();
    store.push_node(Node::start("start"));
    let mut session = CanvasSession::new(store, Catalog::builtin());

    let connector = session.terminal_connector().expect("start is terminal");
    assert_eq!(connector, DropTarget::Terminal("start".to_string()));

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        "email".to_string(),
    )));
    session.handle(DragEvent::HoverChanged(Some(connector.clone())));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(connector)));

    assert_eq!(session.nodes().len(), 2);
    assert_eq!(session.edges().len(), 1);
    let edge = &session.edges()[0];
    assert_eq!(edge.source, "start");
    assert!(edge.target.starts_with("actions-"));
}

#[test]
fn relocating_onto_the_terminal_connector_is_treated_as_cancelled() {
    let mut session = CanvasSession::new(linear_graph(&["start", "a", "b"]), Catalog::builtin());
    let before = GraphSnapshot::capture(session.store());

    let connector = session.terminal_connector().expect("b is terminal");
    session.handle(DragEvent::Started(DragSource::CanvasNode("a".to_string())));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(connector)));

    assert_eq!(GraphSnapshot::capture(session.store()), before);
}

#[test]
fn connect_adds_an_edge_and_relayouts() {
    let mut store = GraphStore::new();
    store.push_node(Node::start("start"));
    store.push_node(Node::new(
        "late",
        NodeKind::Action,
        NodeData {
            label: "late".to_string(),
            ..NodeData::default()
        },
    ));
    let mut session = CanvasSession::new(store, Catalog::builtin());

    session.connect("start", "late");

    assert_eq!(session.edges().len(), 1);
    let start_y = session.store().node("start").expect("start").position.y;
    let late_y = session.store().node("late").expect("late").position.y;
    assert!(late_y > start_y);
}

#[test]
fn midpoint_resolver_picks_the_nearest_edge() {
    let session = CanvasSession::new(linear_graph(&["start", "a"]), Catalog::builtin());
    let resolver = MidpointResolver::new();

    // Halfway between start's bottom anchor and a's top anchor.
    let hit = resolver.resolve(Position::new(148.0, 109.0), session.nodes(), session.edges());
    assert_eq!(hit, Some(DropTarget::Edge("e-start-a".to_string())));

    let miss = resolver.resolve(Position::new(1000.0, 1000.0), session.nodes(), session.edges());
    assert_eq!(miss, None);
}

#[test]
fn midpoint_resolver_falls_back_to_the_terminal_connector() {
    let session = CanvasSession::new(linear_graph(&["start", "a"]), Catalog::builtin());
    let resolver = MidpointResolver::new();

    // Just below the terminal node's bottom anchor.
    let hit = resolver.resolve(Position::new(150.0, 250.0), session.nodes(), session.edges());
    assert_eq!(hit, Some(DropTarget::Terminal("a".to_string())));
}
