use ahash::AHashMap;
use std::collections::VecDeque;

use crate::graph::{Edge, Node, Position};

use super::LayoutConfig;

/// Deterministic layered top-to-bottom layout.
///
/// A layout pass is a pure function of the node list, the edge list and the
/// hover parameters: ranks are assigned by longest path from the roots,
/// each rank is centered horizontally against the widest rank, and ranks are
/// stacked with a fixed vertical gap. Identical inputs always produce
/// identical positions; no state survives between passes.
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes fresh positions for every node.
    ///
    /// When `hovered_edge_id` names an existing edge and a drag is in
    /// progress, every node laid out at or below the hovered edge's target
    /// shifts down by the hover gap, opening a visual slot for the pending
    /// drop. Edges are never repositioned, so only nodes are returned.
    pub fn layout(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        hovered_edge_id: Option<&str>,
        is_dragging: bool,
    ) -> Vec<Node> {
        if nodes.is_empty() {
            return Vec::new();
        }

        let c = &self.config;
        let ranks = self.assign_ranks(nodes, edges);

        // Group node indices by rank, preserving input order within a rank.
        let max_rank = ranks.values().copied().max().unwrap_or(0);
        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); max_rank + 1];
        for (idx, node) in nodes.iter().enumerate() {
            let rank = ranks.get(node.id.as_str()).copied().unwrap_or(0);
            rows[rank].push(idx);
        }

        let row_width = |row: &[usize]| {
            row.len() as f64 * c.node_width + row.len().saturating_sub(1) as f64 * c.node_sep
        };
        let canvas_width = rows.iter().map(|r| row_width(r)).fold(0.0_f64, f64::max);

        let mut out = nodes.to_vec();
        for (rank, row) in rows.iter().enumerate() {
            let y_center =
                c.margin_y + rank as f64 * (c.node_height + c.rank_sep) + c.node_height / 2.0;
            let start_x = c.margin_x + (canvas_width - row_width(row)) / 2.0;
            for (slot, &idx) in row.iter().enumerate() {
                let x_center =
                    start_x + slot as f64 * (c.node_width + c.node_sep) + c.node_width / 2.0;
                // Positions are top-left; convert from the rank-centered math.
                out[idx].position = Position::new(
                    x_center - c.node_width / 2.0,
                    y_center - c.node_height / 2.0,
                );
            }
        }

        if let (Some(edge_id), true) = (hovered_edge_id, is_dragging) {
            self.apply_hover_gap(&mut out, edges, edge_id);
        }

        out
    }

    /// Shifts everything at or below the hovered edge's target downward.
    /// The target node itself moves too; the gap opens above it.
    fn apply_hover_gap(&self, laid_out: &mut [Node], edges: &[Edge], hovered_edge_id: &str) {
        let Some(edge) = edges.iter().find(|e| e.id == hovered_edge_id) else {
            return;
        };
        let source_placed = laid_out.iter().any(|n| n.id == edge.source);
        let Some(target_y) = laid_out
            .iter()
            .find(|n| n.id == edge.target)
            .map(|n| n.position.y)
        else {
            return;
        };
        if !source_placed {
            return;
        }

        let gap = self.config.hover_gap();
        for node in laid_out.iter_mut() {
            if node.position.y >= target_y {
                node.position.y += gap;
            }
        }
    }

    /// Longest-path rank assignment over a Kahn traversal.
    ///
    /// Edges referencing unknown nodes are ignored. Nodes on a cycle (which
    /// the canvas never produces) keep their initial rank of zero.
    fn assign_ranks<'a>(&self, nodes: &'a [Node], edges: &[Edge]) -> AHashMap<&'a str, usize> {
        let mut indegree: AHashMap<&str, usize> =
            nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
        let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in edges {
            if !indegree.contains_key(edge.source.as_str())
                || !indegree.contains_key(edge.target.as_str())
            {
                continue;
            }
            if let Some(count) = indegree.get_mut(edge.target.as_str()) {
                *count += 1;
            }
            successors
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }

        let mut ranks: AHashMap<&str, usize> = nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
        let mut queue: VecDeque<&str> = nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| indegree.get(id) == Some(&0))
            .collect();

        while let Some(id) = queue.pop_front() {
            let rank = ranks.get(id).copied().unwrap_or(0);
            for succ in successors.get(id).cloned().unwrap_or_default() {
                if let Some(succ_rank) = ranks.get_mut(succ) {
                    *succ_rank = (*succ_rank).max(rank + 1);
                }
                if let Some(count) = indegree.get_mut(succ) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(succ);
                    }
                }
            }
        }

        ranks
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
