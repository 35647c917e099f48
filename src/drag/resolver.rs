use crate::graph::{Edge, Node, Position};
use crate::layout::LayoutConfig;

use super::DropTarget;

/// Hit-testing seam for the host drag library.
///
/// Implementations answer one question: which drop candidate, if any, lies
/// under the given pointer position? The engine itself never tracks the
/// pointer; it only consumes the answer.
pub trait DropResolver {
    fn resolve(&self, position: Position, nodes: &[Node], edges: &[Edge]) -> Option<DropTarget>;
}

/// Geometric resolver used by the CLI and tests.
///
/// Each edge is hit-tested as the straight segment from its source's
/// bottom-center anchor to its target's top-center anchor; the nearest edge
/// within the tolerance wins. When no edge is close enough, the stub of the
/// trailing connector below the terminal node is tried.
pub struct MidpointResolver {
    config: LayoutConfig,
    pub tolerance: f64,
}

impl MidpointResolver {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            tolerance: 40.0,
        }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            config: LayoutConfig::default(),
            tolerance,
        }
    }

    fn bottom_anchor(&self, node: &Node) -> (f64, f64) {
        (
            node.position.x + self.config.node_width / 2.0,
            node.position.y + self.config.node_height,
        )
    }

    fn top_anchor(&self, node: &Node) -> (f64, f64) {
        (node.position.x + self.config.node_width / 2.0, node.position.y)
    }

    fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
        let (px, py) = p;
        let (ax, ay) = a;
        let (bx, by) = b;
        let (dx, dy) = (bx - ax, by - ay);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
        };
        let (cx, cy) = (ax + t * dx, ay + t * dy);
        ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
    }
}

impl DropResolver for MidpointResolver {
    fn resolve(&self, position: Position, nodes: &[Node], edges: &[Edge]) -> Option<DropTarget> {
        let p = (position.x, position.y);

        let mut best: Option<(f64, &Edge)> = None;
        for edge in edges {
            let Some(source) = nodes.iter().find(|n| n.id == edge.source) else {
                continue;
            };
            let Some(target) = nodes.iter().find(|n| n.id == edge.target) else {
                continue;
            };
            let distance =
                Self::segment_distance(p, self.bottom_anchor(source), self.top_anchor(target));
            if distance <= self.tolerance && best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, edge));
            }
        }
        if let Some((_, edge)) = best {
            return Some(DropTarget::Edge(edge.id.clone()));
        }

        // Trailing connector: a short stub hanging below the terminal node.
        let terminal = nodes
            .iter()
            .find(|n| !edges.iter().any(|e| e.source == n.id))?;
        let (ax, ay) = self.bottom_anchor(terminal);
        let stub = (ax, ay + self.config.rank_sep);
        let distance = ((p.0 - stub.0).powi(2) + (p.1 - stub.1).powi(2)).sqrt();
        if distance <= self.tolerance {
            return Some(DropTarget::Terminal(terminal.id.clone()));
        }
        None
    }
}

impl Default for MidpointResolver {
    fn default() -> Self {
        Self::new()
    }
}
