//! Error types for graph construction and shortest path queries.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced to the caller at the point of the offending call.
///
/// An unreachable destination is not an error; queries report it as `None`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An argument is outside the accepted domain, e.g. a negative weight.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex index does not name a vertex of the graph.
    #[error("Vertex {vertex} is out of range for a graph with {number_of_vertices} vertices")]
    OutOfRange {
        /// The offending index.
        vertex: i64,
        /// Number of vertices the graph was built with.
        number_of_vertices: usize,
    },

    /// A line of an edge-list file could not be parsed.
    #[error("Parse error in line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// IO error reading a graph file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
