use tracing::{debug, trace};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{
            DijkstraQueueElement, VertexDistanceQueue, VertexDistanceQueueBinaryHeap,
        },
    },
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{
    error::{GraphError, Result},
    graphs::{Distance, Graph, Vertex},
};

/// Settles every vertex reachable from `source`.
///
/// `data` and `queue` are cleared first, so they can be reused across
/// searches. Afterwards `data` holds the final distance and predecessor of each vertex.
/// Vertices not reachable from `source` keep `Distance::MAX` and no
/// predecessor.
pub fn dijkstra_single_source(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
) {
    dijkstra(graph, data, queue, source, None);
}

/// Like [`dijkstra_single_source`], but stops as soon as `target` is settled.
///
/// The distance and predecessor chain of `target` are final at that point;
/// entries of other vertices may still be tentative.
pub fn dijkstra_single_pair(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Vertex,
) {
    dijkstra(graph, data, queue, source, Some(target));
}

fn dijkstra(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Option<Vertex>,
) {
    data.clear();
    queue.clear();

    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(DijkstraQueueElement {
        distance: distance_tail,
        vertex: tail,
    }) = queue.pop()
    {
        // stale entry, tail was reinserted with a smaller distance
        if distance_tail != data.get_distance(tail) {
            continue;
        }
        if Some(tail) == target {
            break;
        }

        for edge in graph.edges(tail) {
            let current_distance_head = data.get_distance(edge.head());
            let alternative_distance_head = distance_tail + Distance::from(edge.weight());
            if alternative_distance_head < current_distance_head {
                trace!(
                    tail,
                    head = edge.head(),
                    distance = alternative_distance_head,
                    "relaxed edge"
                );
                data.set_distance(edge.head(), alternative_distance_head);
                data.set_predecessor(edge.head(), tail);
                queue.insert(edge.head(), alternative_distance_head);
            }
        }
    }
}

fn check_vertex(graph: &dyn Graph, vertex: Vertex) -> Result<()> {
    if vertex >= graph.number_of_vertices() {
        return Err(GraphError::OutOfRange {
            vertex: i64::from(vertex),
            number_of_vertices: graph.number_of_vertices() as usize,
        });
    }

    Ok(())
}

/// Runs a full single-source search and returns the resulting tables.
///
/// Paths to any number of targets can be reconstructed from the returned data
/// with [`DijkstraData::get_path`].
pub fn single_source(graph: &dyn Graph, source: Vertex) -> Result<DijkstraDataVec> {
    check_vertex(graph, source)?;

    let mut data = DijkstraDataVec::new(graph);
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    dijkstra_single_source(graph, &mut data, &mut queue, source);

    Ok(data)
}

/// Finds a shortest path from `source` to `target`.
///
/// Returns `Ok(None)` if `target` is not reachable from `source` and
/// `OutOfRange` if either vertex is not part of the graph.
pub fn shortest_path(graph: &dyn Graph, source: Vertex, target: Vertex) -> Result<Option<Path>> {
    check_vertex(graph, source)?;
    check_vertex(graph, target)?;

    let mut data = DijkstraDataVec::new(graph);
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    dijkstra_single_pair(graph, &mut data, &mut queue, source, target);

    let path = data.get_path(source, target);
    match &path {
        Some(path) => debug!(source, target, distance = path.distance, "found path"),
        None => debug!(source, target, "target unreachable"),
    }

    Ok(path)
}

pub fn shortest_path_distance(
    graph: &dyn Graph,
    source: Vertex,
    target: Vertex,
) -> Result<Option<Distance>> {
    Ok(shortest_path(graph, source, target)?.map(|path| path.distance))
}

/// Answers shortest path requests on a borrowed graph.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>> {
        shortest_path(self.graph, request.source, request.target)
    }

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Result<Option<Distance>> {
        shortest_path_distance(self.graph, request.source, request.target)
    }

    fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{sample_graph, undirected_graph::UndirectedGraph};

    #[test]
    fn sample_graph_distances() {
        let graph = sample_graph();
        let data = single_source(&graph, 0).unwrap();

        assert_eq!(data.distances, vec![0, 4, 12, 19, 21, 11, 9, 8, 14]);
        assert_eq!(data.get_distance(0), 0);
        assert_eq!(data.get_predecessor(0), None);
    }

    #[test]
    fn single_source_paths_match_single_pair() {
        let graph = sample_graph();
        let data = single_source(&graph, 3).unwrap();

        for target in graph.vertices() {
            let path = shortest_path(&graph, 3, target).unwrap();
            assert_eq!(data.get_path(3, target), path);
        }
    }

    #[test]
    fn reused_tables_start_from_scratch() {
        let graph = sample_graph();
        let mut data = DijkstraDataVec::new(&graph);
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        dijkstra_single_source(&graph, &mut data, &mut queue, 0);
        dijkstra_single_source(&graph, &mut data, &mut queue, 4);

        let path = data.get_path(4, 0).unwrap();
        assert_eq!(path.distance, 21);
        assert_eq!(path.vertices.first(), Some(&4));
        assert_eq!(data.get_predecessor(4), None);

        dijkstra_single_pair(&graph, &mut data, &mut queue, 8, 2);
        assert_eq!(data.get_path(8, 2).map(|path| path.distance), Some(2));
        // untouched by the early-stopping search, so nothing from before leaks
        assert_eq!(data.get_distance(0), Distance::MAX);
        assert_eq!(data.get_predecessor(0), None);
    }

    #[test]
    fn stale_entries_are_skipped() {
        // 0 -> 2 is first found via the direct edge, then improved via 1
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(0, 2, 10).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();

        let data = single_source(&graph, 0).unwrap();
        let path = data.get_path(0, 3).unwrap();

        assert_eq!(data.distances, vec![0, 1, 2, 3]);
        assert_eq!(path.vertices, vec![0, 1, 2, 3]);
        assert_eq!(path.distance, 3);
    }

    #[test]
    fn zero_weight_edges() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 1, 0).unwrap();
        graph.add_edge(1, 2, 0).unwrap();
        graph.add_edge(2, 2, 0).unwrap();

        let path = shortest_path(&graph, 0, 2).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2]);
        assert_eq!(path.distance, 0);
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(0, 1, 9).unwrap();
        graph.add_edge(1, 0, 2).unwrap();

        assert_eq!(shortest_path_distance(&graph, 0, 1).unwrap(), Some(2));
    }

    #[test]
    fn maximal_weights_do_not_overflow() {
        let mut graph = UndirectedGraph::new(4);
        let max = i64::from(u32::MAX);
        graph.add_edge(0, 1, max).unwrap();
        graph.add_edge(1, 2, max).unwrap();
        graph.add_edge(2, 3, max).unwrap();

        let distance = shortest_path_distance(&graph, 0, 3).unwrap();
        assert_eq!(distance, Some(3 * Distance::from(u32::MAX)));
    }

    #[test]
    fn ties_prefer_smaller_vertex() {
        // 0 - 1 - 3 and 0 - 2 - 3 both cost 2
        let mut graph = UndirectedGraph::new(4);
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 3, 1).unwrap();

        let path = shortest_path(&graph, 0, 3).unwrap().unwrap();
        assert_eq!(path.vertices, vec![0, 1, 3]);
    }

    #[test]
    fn out_of_range_request_is_rejected() {
        let graph = sample_graph();

        assert!(matches!(
            shortest_path(&graph, 9, 0),
            Err(GraphError::OutOfRange { vertex: 9, .. })
        ));
        assert!(matches!(
            shortest_path(&graph, 0, 42),
            Err(GraphError::OutOfRange { vertex: 42, .. })
        ));
        assert!(single_source(&graph, 9).is_err());
    }

    #[test]
    fn path_finding_trait() {
        let graph = sample_graph();
        let dijkstra = Dijkstra::new(&graph);
        let request = ShortestPathRequest::new(0, 8);

        assert_eq!(dijkstra.number_of_vertices(), 9);
        assert_eq!(dijkstra.shortest_path_distance(&request).unwrap(), Some(14));
        assert_eq!(
            dijkstra.shortest_path(&request).unwrap().unwrap().vertices,
            vec![0, 1, 2, 8]
        );
    }
}
