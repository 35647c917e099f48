//! # Haichi - Workflow Canvas Graph Editing and Layout Engine
//!
//! **Haichi** is the graph-edit-and-layout core of a drag-and-drop workflow
//! builder. A host canvas renders nodes and connection lines and reports
//! drag gestures; Haichi owns the graph, applies the structural edits those
//! gestures mean (split an edge around a dropped node, relocate a node onto
//! another edge, append after the last step), and recomputes every node's
//! position with a deterministic layered layout after each mutation.
//!
//! ## Core Workflow
//!
//! 1.  **Seed the Graph**: Build a `GraphStore` (or restore a
//!     `GraphSnapshot`) with the workflow's current nodes and edges.
//! 2.  **Open a Session**: Wrap the store, a template `Catalog` and a
//!     `LayoutEngine` in a `CanvasSession`. The session runs an initial
//!     layout pass so every node has coordinates.
//! 3.  **Feed Drag Events**: Forward the host drag library's lifecycle
//!     (`Started`, `HoverChanged`, `Ended`) as `DragEvent`s. Hovering an
//!     edge mid-drag previews the insertion gap; a committed drop performs
//!     exactly one edit; a cancelled drag changes nothing.
//! 4.  **Render**: Read `session.nodes()` / `session.edges()` back as the
//!     canvas's full read model after every event.
//!
//! ## Quick Start
//!
//! ```rust
//! use haichi::prelude::*;
//!
//! // A minimal workflow: start -> notification.
//! let catalog = Catalog::builtin();
//! let mut store = GraphStore::new();
//! store.push_node(Node::start("start"));
//! store.push_node(catalog.get("notification").unwrap().materialize("notification"));
//! store.connect("start", "notification").unwrap();
//!
//! let mut session = CanvasSession::new(store, catalog);
//!
//! // Drag "email" off the sidebar and drop it on the only edge.
//! let edge_id = session.edges()[0].id.clone();
//! session.handle(DragEvent::Started(DragSource::SidebarItem("email".to_string())));
//! session.handle(DragEvent::HoverChanged(Some(DropTarget::Edge(edge_id.clone()))));
//! session.handle(DragEvent::Ended(DragOutcome::Dropped(DropTarget::Edge(edge_id))));
//!
//! // The edge was split around the new node and layout has re-run.
//! assert_eq!(session.nodes().len(), 3);
//! assert_eq!(session.edges().len(), 2);
//! assert!(session.nodes().iter().any(|n| n.id.starts_with("actions-")));
//! ```

pub mod catalog;
pub mod drag;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
