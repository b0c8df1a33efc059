use path::{Path, ShortestPathRequest};

use crate::{error::Result, graphs::Distance};

pub mod collections;
pub mod dijkstra;
pub mod path;

/// Answers shortest path requests.
///
/// `Ok(None)` means the target is unreachable from the source. Errors are
/// reserved for malformed requests.
pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>>;

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Result<Option<Distance>>;

    fn number_of_vertices(&self) -> u32;
}
