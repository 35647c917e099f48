//! Common test utilities for building workflow graphs and catalogs.
use haichi::prelude::*;

/// Builds a linear workflow `ids[0] -> ids[1] -> ...` with default handles.
/// The first node is the start node, the rest are plain actions.
#[allow(dead_code)]
pub fn linear_graph(ids: &[&str]) -> GraphStore {
    let mut nodes = Vec::new();
    for (index, id) in ids.iter().enumerate() {
        if index == 0 {
            nodes.push(Node::start(*id));
        } else {
            nodes.push(Node::new(
                *id,
                NodeKind::Action,
                NodeData {
                    label: id.to_string(),
                    ..NodeData::default()
                },
            ));
        }
    }
    let edges = ids
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1]))
        .collect();
    GraphStore::from_parts(nodes, edges)
}

/// Looks a template up in the built-in catalog.
#[allow(dead_code)]
pub fn template(id: &str) -> NodeTemplate {
    Catalog::builtin()
        .get(id)
        .unwrap_or_else(|| panic!("template '{}' missing from builtin catalog", id))
        .clone()
}

/// The sequence of node ids along the unique path from the start node.
#[allow(dead_code)]
pub fn path_ids(store: &GraphStore) -> Vec<String> {
    let mut current = store
        .nodes()
        .iter()
        .find(|n| store.incoming(&n.id).is_none())
        .map(|n| n.id.clone());
    let mut order = Vec::new();
    while let Some(id) = current {
        current = store.outgoing(&id).map(|e| e.target.clone());
        order.push(id);
    }
    order
}
