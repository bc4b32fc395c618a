//! Error types for the hoptable library

use thiserror::Error;

/// Failures a table computation can surface.
///
/// All variants are unrecoverable for the current invocation; there is no
/// retry path inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge token did not split into exactly two non-empty vertex labels.
    #[error("invalid edge '{0}': expected 'source->destination'")]
    InvalidEdgeFormat(String),

    /// No vertices survived parsing (or the input was empty to begin with).
    #[error("edge list contains no vertices")]
    EmptyGraph,

    /// A solver was started from a vertex that is not in the graph. This is
    /// a caller bug, not a data condition.
    #[error("start vertex '{0}' is not in the graph")]
    InvalidStartVertex(String),
}

/// Convenience result type for hoptable operations
pub type Result<T> = std::result::Result<T, GraphError>;
