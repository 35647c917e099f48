//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the haichi crate so a
//! canvas host can pull in the whole surface with one `use`.
//!
//! # Example
//!
//! ```rust
//! use haichi::prelude::*;
//!
//! let mut store = GraphStore::new();
//! store.push_node(Node::start("start"));
//!
//! let session = CanvasSession::new(store, Catalog::builtin());
//! assert!(session.terminal_connector().is_some());
//! ```

// Graph model and store
pub use crate::graph::{Edge, GraphSnapshot, GraphStore, Handle, Node, NodeData, NodeKind, Position};

// Template catalog
pub use crate::catalog::{Catalog, NodeTemplate, TemplateGroup};

// Layout
pub use crate::layout::{LayoutConfig, LayoutEngine};

// Drag gesture machinery
pub use crate::drag::{
    CanvasSession, DragEvent, DragOutcome, DragPayload, DragSource, DragState, DropResolver,
    DropTarget, MidpointResolver,
};

// Error types
pub use crate::error::{CatalogError, GraphEditError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
