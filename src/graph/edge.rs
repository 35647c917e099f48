use serde::{Deserialize, Serialize};

use super::Handle;

/// A directed connection between two nodes' handles.
///
/// Edge ids are derived deterministically from the endpoint ids, so an edge
/// between the same two nodes always carries the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<Handle>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<Handle>,
}

impl Edge {
    /// Derives the canonical id for an edge between two nodes.
    pub fn derive_id(source: &str, target: &str) -> String {
        format!("e-{}-{}", source, target)
    }

    /// Creates an edge with the default downward handle pair (bottom -> top).
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Self::derive_id(&source, &target),
            source,
            target,
            source_handle: Some(Handle::Bottom),
            target_handle: Some(Handle::Top),
        }
    }

    pub fn with_handles(
        mut self,
        source_handle: Option<Handle>,
        target_handle: Option<Handle>,
    ) -> Self {
        self.source_handle = source_handle;
        self.target_handle = target_handle;
        self
    }
}
