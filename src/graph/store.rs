use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::GraphEditError;

use super::{Edge, Node};

/// Exclusive owner of the workflow's nodes and edges.
///
/// The host canvas consumes the full node and edge lists as its read model,
/// and every mutation the store performs is a full-list replacement rather
/// than an incremental patch. All edits happen synchronously on one logical
/// thread; there is no interior mutability and no shared ownership.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// The edge entering a node, if any. Workflows here stay simple paths,
    /// so the first match is the only one.
    pub fn incoming(&self, node_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target == node_id)
    }

    /// The edge leaving a node, if any.
    pub fn outgoing(&self, node_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.source == node_id)
    }

    /// The last step of the workflow: the first node with no outgoing edge.
    /// This is the anchor for the synthetic trailing connector the canvas
    /// renders after the final step.
    pub fn terminal_node(&self) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| !self.edges.iter().any(|e| e.source == n.id))
    }

    /// Replaces the entire node list (full-list replacement semantics).
    pub fn replace_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    /// Replaces the entire edge list (full-list replacement semantics).
    pub fn replace_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Adds a direct connection between two existing nodes with the default
    /// downward handles. This is the store half of the canvas's
    /// pointer-connect gesture.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<(), GraphEditError> {
        if self.node(source).is_none() {
            return Err(GraphEditError::NodeNotFound(source.to_string()));
        }
        if self.node(target).is_none() {
            return Err(GraphEditError::NodeNotFound(target.to_string()));
        }
        self.edges.push(Edge::new(source, target));
        Ok(())
    }

    /// Mints a fresh node id of the form `{category}-{unix-millis}`.
    ///
    /// The millisecond value is bumped until the id is unique within the
    /// store, so two drops landing in the same millisecond cannot collide.
    pub fn mint_node_id(&self, category: &str) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        loop {
            let id = format!("{}-{}", category, millis);
            if self.node(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}
