use crate::catalog::NodeTemplate;

/// What the pointer picked up, as reported by the host drag library.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    /// A sidebar catalog entry, identified by template id.
    SidebarItem(String),
    /// A node already on the canvas, identified by node id.
    CanvasNode(String),
}

/// The payload travelling with a drag gesture.
///
/// Resolved exactly once at drag start: a sidebar id becomes the full
/// template, a canvas id stays a node reference. An id that resolves to
/// nothing never starts a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    Template(NodeTemplate),
    ExistingNode(String),
}

/// A drop candidate under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// A connection line between two nodes.
    Edge(String),
    /// The synthetic connector trailing the named terminal node.
    Terminal(String),
}

impl DropTarget {
    /// The edge id to feed the layout engine's hover parameter, if this
    /// target is an edge. The terminal connector opens no gap.
    pub fn hovered_edge_id(&self) -> Option<&str> {
        match self {
            DropTarget::Edge(id) => Some(id),
            DropTarget::Terminal(_) => None,
        }
    }
}

/// How a drag gesture finished.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Dropped(DropTarget),
    Cancelled,
}

/// Lifecycle notifications from the host drag library, consumed in order
/// by a single-threaded dispatch loop.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Started(DragSource),
    HoverChanged(Option<DropTarget>),
    Ended(DragOutcome),
}

/// State of the one drag gesture that can be in flight.
///
/// `Idle -> Dragging(payload) -> [hover updates]* -> Idle` on either
/// outcome; a committed drop mutates the graph on the way back to idle, a
/// cancellation does not.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        payload: DragPayload,
        hover: Option<DropTarget>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The currently hovered edge id, if an edge is under the pointer.
    pub fn hovered_edge(&self) -> Option<&str> {
        match self {
            DragState::Dragging {
                hover: Some(target),
                ..
            } => target.hovered_edge_id(),
            _ => None,
        }
    }
}
