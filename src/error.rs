//! Error types for graph construction and connectivity computations

use thiserror::Error;

use crate::{Node, NumNodes};

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Precondition violations detected at the graph boundary.
///
/// Malformed files are reported by the [`io`](crate::io) layer as `std::io::Error`;
/// a `GraphError` means a graph value itself is inconsistent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a node of the graph
    #[error("Node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange {
        /// The offending endpoint
        node: Node,
        /// Number of nodes of the graph
        n: NumNodes,
    },
}

impl From<GraphError> for std::io::Error {
    fn from(err: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
