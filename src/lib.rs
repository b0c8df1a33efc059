use std::path::Path;

use graphs::{sample_graph, undirected_graph::UndirectedGraph};
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use error::{GraphError, Result};

/// Loads the graph stored at `path`, or the built-in sample map if no path is
/// given.
pub fn reading_graph(path: Option<&Path>) -> Result<UndirectedGraph> {
    let Some(path) = path else {
        return Ok(sample_graph());
    };

    let spinner = get_progressspinner("Reading graph");
    let graph = UndirectedGraph::from_file(path);
    spinner.finish_and_clear();
    graph
}
