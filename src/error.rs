//! Error types for attributed graphs.

use thiserror::Error;

/// What kind of graph element an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Edge,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Node => write!(f, "node"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

/// Graph error types.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node or an edge with this id already exists.
    #[error("{kind} id already in use: {id:?}")]
    DuplicateId { kind: ElementKind, id: String },

    /// A node or an edge could not be resolved.
    ///
    /// `reference` renders whatever the caller used: an id, an index or a handle.
    #[error("{kind} not found: {reference}")]
    NotFound {
        kind: ElementKind,
        reference: String,
    },

    /// Attribute keys must not be empty.
    #[error("attribute key must not be empty")]
    InvalidKey,

    /// The attribute is absent and null attributes are errors.
    #[error("missing attribute: {0:?}")]
    MissingAttribute(String),

    /// No serializer for this file extension.
    #[error("unsupported output format: {0:?}")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
