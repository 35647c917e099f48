//! Structural edit operations on the workflow graph.
//!
//! Each operation validates its preconditions up front and either fully
//! applies or leaves the store untouched. Handle inheritance follows the
//! canvas convention: a spliced-in node receives connections on its top
//! handle and hands them on from its bottom handle, while the outer
//! endpoints keep the handles the replaced edge used.

use crate::catalog::NodeTemplate;
use crate::error::GraphEditError;

use super::{Edge, GraphStore, Handle};

impl GraphStore {
    /// Inserts a node materialized from `template` into the middle of an
    /// existing edge.
    ///
    /// The target edge is replaced by two edges, `source -> new` and
    /// `new -> target`, and the new node enters at position (0,0) pending
    /// the next layout pass. Returns the freshly minted node id.
    pub fn insert_on_edge(
        &mut self,
        edge_id: &str,
        template: &NodeTemplate,
    ) -> Result<String, GraphEditError> {
        let edge = self
            .edge(edge_id)
            .cloned()
            .ok_or_else(|| GraphEditError::EdgeNotFound(edge_id.to_string()))?;

        let node_id = self.mint_node_id(&template.category);
        self.push_node(template.materialize(&node_id));
        self.splice_into(&edge, &node_id);
        Ok(node_id)
    }

    /// Appends a node materialized from `template` after an existing node,
    /// connected by a single downward edge.
    ///
    /// This backs drops on the synthetic trailing connector: a graph that is
    /// just `{start}` has no edge to split, so the first real step is
    /// appended rather than spliced.
    pub fn append_after(
        &mut self,
        node_id: &str,
        template: &NodeTemplate,
    ) -> Result<String, GraphEditError> {
        if self.node(node_id).is_none() {
            return Err(GraphEditError::NodeNotFound(node_id.to_string()));
        }

        let new_id = self.mint_node_id(&template.category);
        self.push_node(template.materialize(&new_id));
        let edge = Edge::new(node_id, new_id.as_str());
        let mut edges = self.edges().to_vec();
        edges.push(edge);
        self.replace_edges(edges);
        Ok(new_id)
    }

    /// Detaches a node from its current neighbors and re-inserts it into
    /// `edge_id` elsewhere in the graph, reusing the node's existing id.
    ///
    /// The node's former predecessor and successor are bridged directly,
    /// keeping the handles their old edges used. The node must have exactly
    /// one incoming and one outgoing edge; otherwise nothing changes.
    ///
    /// Relocating a node onto an edge it still participates in (or onto its
    /// own bridge edge) is not guarded against.
    pub fn relocate_onto_edge(
        &mut self,
        node_id: &str,
        edge_id: &str,
    ) -> Result<(), GraphEditError> {
        let target_edge = self
            .edge(edge_id)
            .cloned()
            .ok_or_else(|| GraphEditError::EdgeNotFound(edge_id.to_string()))?;
        if self.node(node_id).is_none() {
            return Err(GraphEditError::NodeNotFound(node_id.to_string()));
        }
        let incoming = self
            .incoming(node_id)
            .cloned()
            .ok_or(GraphEditError::DetachedNode {
                node_id: node_id.to_string(),
                side: "incoming",
            })?;
        let outgoing = self
            .outgoing(node_id)
            .cloned()
            .ok_or(GraphEditError::DetachedNode {
                node_id: node_id.to_string(),
                side: "outgoing",
            })?;

        // Bridge the former neighbors directly, preserving their outer handles.
        let bridge = Edge {
            id: Edge::derive_id(&incoming.source, &outgoing.target),
            source: incoming.source.clone(),
            target: outgoing.target.clone(),
            source_handle: incoming.source_handle,
            target_handle: outgoing.target_handle,
        };

        let mut edges = self.edges().to_vec();
        edges.retain(|e| e.id != incoming.id && e.id != outgoing.id);
        edges.push(bridge);
        self.replace_edges(edges);

        self.splice_into(&target_edge, node_id);
        Ok(())
    }

    /// Replaces `edge` with the pair `source -> node` and `node -> target`.
    /// The caller has already verified the edge and put the node in place.
    fn splice_into(&mut self, edge: &Edge, node_id: &str) {
        let mut edges = self.edges().to_vec();
        edges.retain(|e| e.id != edge.id);
        edges.push(Edge {
            id: Edge::derive_id(&edge.source, node_id),
            source: edge.source.clone(),
            target: node_id.to_string(),
            source_handle: edge.source_handle,
            target_handle: Some(Handle::Top),
        });
        edges.push(Edge {
            id: Edge::derive_id(node_id, &edge.target),
            source: node_id.to_string(),
            target: edge.target.clone(),
            source_handle: Some(Handle::Bottom),
            target_handle: edge.target_handle,
        });
        self.replace_edges(edges);
    }
}
