use thiserror::Error;

/// Errors that can occur when a graph edit operation's precondition is not met.
///
/// Every edit either fully applies or returns one of these without touching
/// the store; callers driving a canvas are expected to treat them as a no-op.
#[derive(Error, Debug, Clone)]
pub enum GraphEditError {
    #[error("Edge '{0}' is not present in the current edge set")]
    EdgeNotFound(String),

    #[error("Node '{0}' is not present in the current node set")]
    NodeNotFound(String),

    #[error("Node '{node_id}' has no {side} edge, so it cannot be detached for relocation")]
    DetachedNode { node_id: String, side: &'static str },
}

/// Errors that can occur while loading a sidebar template catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParse(String),

    #[error("Failed to read catalog file '{path}': {message}")]
    FileRead { path: String, message: String },

    #[error("Template id '{0}' appears more than once in the catalog")]
    DuplicateTemplate(String),
}

/// Errors that can occur while saving or loading a graph snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Could not access snapshot file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot serialization failed: {0}")]
    Encode(String),

    #[error("Snapshot deserialization failed: {0}")]
    Decode(String),
}
