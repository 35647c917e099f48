/// Geometry constants for a layout pass.
///
/// The defaults match the canvas's node cards (256x64) and the spacing the
/// hierarchical layout was tuned with.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal gap between nodes sharing a rank.
    pub node_sep: f64,
    /// Vertical gap between consecutive ranks.
    pub rank_sep: f64,
    /// Rank gap applied around an edge hovered mid-drag, previewing where a
    /// dropped node would land.
    pub expanded_rank_sep: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 256.0,
            node_height: 64.0,
            node_sep: 80.0,
            rank_sep: 50.0,
            expanded_rank_sep: 100.0,
            margin_x: 20.0,
            margin_y: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Extra vertical space reserved below a hovered edge during a drag.
    pub fn hover_gap(&self) -> f64 {
        self.expanded_rank_sep - self.rank_sep
    }
}
