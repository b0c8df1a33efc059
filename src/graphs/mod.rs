use edge::WeightedEdge;
use undirected_graph::UndirectedGraph;

pub mod edge;
pub mod graph_functions;
pub mod undirected_graph;

pub type Vertex = u32;
pub type Weight = u32;
/// Sum of edge weights along a path. Wide enough that `number_of_vertices *
/// Weight::MAX` cannot wrap.
pub type Distance = u64;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// All edges leaving `tail`, in insertion order.
    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.number_of_vertices()
    }
}

/// The nine-location map used as the default graph by the binaries.
pub fn sample_graph() -> UndirectedGraph {
    let edges = [
        (0, 1, 4),
        (0, 7, 8),
        (1, 2, 8),
        (1, 7, 11),
        (2, 3, 7),
        (2, 8, 2),
        (2, 5, 4),
        (3, 4, 9),
        (3, 5, 14),
        (4, 5, 10),
        (5, 6, 2),
        (6, 7, 1),
        (6, 8, 6),
        (7, 8, 7),
    ];

    let mut graph = UndirectedGraph::new(9);
    for (tail, head, weight) in edges {
        graph.push_edge(&WeightedEdge::new(tail, head, weight));
    }

    graph
}
