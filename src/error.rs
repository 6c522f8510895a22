use thiserror::Error;

/// Errors reported by [`Digraph`](crate::Digraph) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The serialized edge-list source could not be opened, or did not
    /// contain enough well-formed integer tokens to satisfy its own
    /// declared vertex and edge counts.
    #[error("could not load graph from {path}: {reason}")]
    LoadFailure { path: String, reason: String },

    /// A vertex id outside `[0, num_vertices)` was passed to an operation.
    #[error("vertex {vertex} is not between 0 and {num_vertices} - 1")]
    OutOfRangeVertex { vertex: usize, num_vertices: usize },
}

impl GraphError {
    pub(crate) fn load(path: impl Into<String>, reason: impl Into<String>) -> GraphError {
        GraphError::LoadFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
