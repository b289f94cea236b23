//! Graph-specific error types.

use gr_core::EdgeId;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge with this id is already part of the graph.
    DuplicateEdgeId { id: EdgeId },

    /// An edge attribute is NaN or infinite.
    NonFinite {
        edge: String,
        field: &'static str,
        value: f64,
    },

    /// An explicit id or endpoint was the empty string.
    EmptyId { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::DuplicateEdgeId { id } => {
                write!(f, "Edge id {} is already used in this graph", id)
            }
            GraphError::NonFinite { edge, field, value } => {
                write!(f, "Edge {} has non-finite {}: {}", edge, field, value)
            }
            GraphError::EmptyId { what } => {
                write!(f, "{} must not be empty", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}
