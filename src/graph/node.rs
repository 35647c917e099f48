use serde::{Deserialize, Serialize};

/// A named attachment point on a node.
///
/// In a top-to-bottom flow, edges leave a node's bottom handle and enter the
/// next node's top handle. The wire names are the single-letter forms the
/// canvas uses ("t" / "b").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    #[serde(rename = "t")]
    Top,
    #[serde(rename = "b")]
    Bottom,
}

impl Handle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::Top => "t",
            Handle::Bottom => "b",
        }
    }
}

/// Canvas coordinates of a node's top-left corner.
///
/// Positions are authoritative only between layout passes; any mutation of
/// the graph invalidates them until the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The role a node plays in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Action,
    End,
    Control,
}

/// Display payload carried by a node. Opaque to the engine; the canvas
/// decides what to do with icon names and color classes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(default, alias = "iconName")]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A single workflow step rendered as a box on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, data: NodeData) -> Self {
        Self {
            id: id.into(),
            kind,
            data,
            position: Position::default(),
        }
    }

    /// The conventional entry node every workflow begins with.
    pub fn start(id: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Start,
            NodeData {
                label: "Start".to_string(),
                ..NodeData::default()
            },
        )
    }
}
