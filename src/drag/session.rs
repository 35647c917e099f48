use crate::catalog::Catalog;
use crate::error::GraphEditError;
use crate::graph::{Edge, GraphStore, Node};
use crate::layout::LayoutEngine;

use super::{DragEvent, DragOutcome, DragPayload, DragSource, DragState, DropTarget};

/// Single-threaded dispatch loop over drag lifecycle events.
///
/// The session owns the graph store, the template catalog, the layout
/// engine and the one in-flight gesture. Events are consumed in order;
/// every committed mutation is followed synchronously by a layout pass, so
/// positions are consistent before the next event arrives.
///
/// Precondition failures (a vanished edge, an unknown template) abort the
/// attempted operation silently, leaving the graph untouched. This is the
/// contract the canvas expects: a bad drop simply does nothing.
pub struct CanvasSession {
    store: GraphStore,
    catalog: Catalog,
    engine: LayoutEngine,
    drag: DragState,
}

impl CanvasSession {
    pub fn new(store: GraphStore, catalog: Catalog) -> Self {
        Self::with_engine(store, catalog, LayoutEngine::new())
    }

    pub fn with_engine(store: GraphStore, catalog: Catalog, engine: LayoutEngine) -> Self {
        let mut session = Self {
            store,
            catalog,
            engine,
            drag: DragState::Idle,
        };
        // Seeded graphs arrive without coordinates.
        session.relayout(None, false);
        session
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn nodes(&self) -> &[Node] {
        self.store.nodes()
    }

    pub fn edges(&self) -> &[Edge] {
        self.store.edges()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// The synthetic connector trailing the last workflow step, offered as
    /// a drop target when there is no edge to split.
    pub fn terminal_connector(&self) -> Option<DropTarget> {
        self.store
            .terminal_node()
            .map(|n| DropTarget::Terminal(n.id.clone()))
    }

    /// Feeds one drag lifecycle event into the session.
    pub fn handle(&mut self, event: DragEvent) {
        match event {
            DragEvent::Started(source) => self.on_started(source),
            DragEvent::HoverChanged(target) => self.on_hover(target),
            DragEvent::Ended(outcome) => self.on_ended(outcome),
        }
    }

    /// Adds a direct connection between two nodes (the canvas's
    /// pointer-connect gesture) and re-runs layout.
    pub fn connect(&mut self, source: &str, target: &str) {
        if self.store.connect(source, target).is_ok() {
            self.relayout(None, false);
        }
    }

    fn on_started(&mut self, source: DragSource) {
        // The payload is resolved exactly once, here. Unknown ids never
        // start a gesture.
        let payload = match source {
            DragSource::SidebarItem(id) => match self.catalog.get(&id) {
                Some(template) => DragPayload::Template(template.clone()),
                None => return,
            },
            DragSource::CanvasNode(id) => {
                if self.store.node(&id).is_none() {
                    return;
                }
                DragPayload::ExistingNode(id)
            }
        };
        self.drag = DragState::Dragging {
            payload,
            hover: None,
        };
    }

    fn on_hover(&mut self, target: Option<DropTarget>) {
        match &mut self.drag {
            DragState::Dragging { hover, .. } => {
                if *hover == target {
                    return;
                }
                *hover = target;
            }
            DragState::Idle => return,
        }
        let hovered = self.drag.hovered_edge().map(str::to_string);
        self.relayout(hovered.as_deref(), true);
    }

    fn on_ended(&mut self, outcome: DragOutcome) {
        let state = std::mem::take(&mut self.drag);
        let DragState::Dragging { payload, .. } = state else {
            return;
        };
        if let DragOutcome::Dropped(target) = outcome {
            // A failed precondition aborts the drop without mutating.
            let _ = self.apply_drop(payload, &target);
        }
        // Either way the preview gap closes.
        self.relayout(None, false);
    }

    fn apply_drop(
        &mut self,
        payload: DragPayload,
        target: &DropTarget,
    ) -> Result<(), GraphEditError> {
        match (payload, target) {
            (DragPayload::Template(template), DropTarget::Edge(edge_id)) => {
                self.store.insert_on_edge(edge_id, &template)?;
            }
            (DragPayload::Template(template), DropTarget::Terminal(node_id)) => {
                self.store.append_after(node_id, &template)?;
            }
            (DragPayload::ExistingNode(node_id), DropTarget::Edge(edge_id)) => {
                self.store.relocate_onto_edge(&node_id, edge_id)?;
            }
            // Relocating an existing node onto the trailing connector is
            // undefined on the canvas; treat it as a cancelled drop.
            (DragPayload::ExistingNode(_), DropTarget::Terminal(_)) => {}
        }
        Ok(())
    }

    fn relayout(&mut self, hovered_edge: Option<&str>, is_dragging: bool) {
        let laid_out = self
            .engine
            .layout(self.store.nodes(), self.store.edges(), hovered_edge, is_dragging);
        self.store.replace_nodes(laid_out);
    }
}
