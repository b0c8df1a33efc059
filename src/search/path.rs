use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// Represents a path in a graph.
///
/// The vertices run from the source to the target, both inclusive, and
/// `distance` is the sum of the edge weights along them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shortest path length is: {}\nPath is: {}",
            self.distance,
            self.vertices.iter().join(" ")
        )
    }
}

/// Renders the outcome of a query for diagnostic output.
pub fn render_outcome(source: Vertex, target: Vertex, path: Option<&Path>) -> String {
    match path {
        Some(path) => path.to_string(),
        None => format!("No path exists from {} to {}", source, target),
    }
}

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

impl ShortestPathRequest {
    pub fn new(source: Vertex, target: Vertex) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// distance of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}
