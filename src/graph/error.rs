use super::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures of graph mutations.
///
/// A failed call leaves the graph untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("edge {from} -> {to} not found")]
    EdgeNotFound { from: VertexId, to: VertexId },
}
