use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indicatif::ProgressIterator;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    graph_functions::is_bidirectional,
    Graph, Vertex, Weight,
};
use crate::error::{GraphError, Result};

/// Weighted undirected graph stored as one adjacency list per vertex.
///
/// Every inserted edge `(u, v, w)` is stored twice, as `(v, w)` in the list of
/// `u` and as `(u, w)` in the list of `v`. Multi-edges and self-loops are kept
/// as inserted.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct UndirectedGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl UndirectedGraph {
    /// Creates a graph over `number_of_vertices` vertices without any edges.
    ///
    /// The largest vertex is `Vertex::MAX - 1`, so `Vertex::MAX` never names
    /// a vertex.
    pub fn new(number_of_vertices: Vertex) -> UndirectedGraph {
        UndirectedGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    /// Like [`UndirectedGraph::new`], but reports a failed allocation instead
    /// of aborting.
    pub fn try_new(number_of_vertices: Vertex) -> Result<UndirectedGraph> {
        let mut edges = Vec::new();
        edges
            .try_reserve_exact(number_of_vertices as usize)
            .map_err(|_| {
                GraphError::InvalidArgument(format!(
                    "unable to allocate a graph with {} vertices",
                    number_of_vertices
                ))
            })?;
        edges.resize(number_of_vertices as usize, Vec::new());

        Ok(UndirectedGraph { edges })
    }

    /// Number of undirected edges, self-loops and multi-edges included.
    pub fn number_of_edges(&self) -> usize {
        // every edge occupies two adjacency entries
        self.edges.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Inserts the undirected edge `{tail, head}` with the given weight.
    ///
    /// Fails with `OutOfRange` if an endpoint is not a vertex of the graph and
    /// with `InvalidArgument` if the weight is negative or does not fit into
    /// `Weight`. A rejected call leaves the graph unchanged.
    pub fn add_edge(&mut self, tail: Vertex, head: Vertex, weight: i64) -> Result<()> {
        let tail = self.check_vertex(i64::from(tail))?;
        let head = self.check_vertex(i64::from(head))?;
        let weight = check_weight(weight)?;

        self.push_edge(&WeightedEdge::new(tail, head, weight));
        Ok(())
    }

    /// Reads a graph from an edge-list file.
    ///
    /// Lines starting with `#` and blank lines are skipped. The first
    /// remaining line holds the number of vertices, the second the number of
    /// edges, followed by one `tail head weight` line per edge.
    pub fn from_file(path: &Path) -> Result<UndirectedGraph> {
        let reader = BufReader::new(File::open(path)?);

        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| match line {
                Ok(line) => {
                    let line = line.trim();
                    !line.is_empty() && !line.starts_with('#')
                }
                Err(_) => true,
            });

        let number_of_vertices = read_count(lines.next(), "number of vertices")?;
        let number_of_vertices = Vertex::try_from(number_of_vertices).map_err(|_| {
            GraphError::InvalidArgument(format!(
                "number of vertices must not exceed {}, got {}",
                Vertex::MAX,
                number_of_vertices
            ))
        })?;
        let number_of_edges = read_count(lines.next(), "number of edges")?;

        let mut graph = UndirectedGraph::try_new(number_of_vertices)?;
        let mut edges_read = 0;
        for (line_number, line) in lines
            .by_ref()
            .take(number_of_edges)
            .progress_count(number_of_edges as u64)
        {
            // tail head weight
            let line = line?;
            let mut values = line.split_whitespace();
            let tail = parse_value(values.next(), "tail", line_number)?;
            let head = parse_value(values.next(), "head", line_number)?;
            let weight = parse_value(values.next(), "weight", line_number)?;

            let tail = graph.check_vertex(tail)?;
            let head = graph.check_vertex(head)?;
            graph.add_edge(tail, head, weight)?;
            edges_read += 1;
        }

        if edges_read < number_of_edges {
            return Err(GraphError::InvalidArgument(format!(
                "file announces {} edges but only contains {}",
                number_of_edges, edges_read
            )));
        }
        if let Some((line_number, _)) = lines.next() {
            return Err(GraphError::Parse {
                line: line_number,
                message: format!(
                    "file announces {} edges but contains more",
                    number_of_edges
                ),
            });
        }
        debug_assert!(is_bidirectional(&graph));

        info!(
            vertices = number_of_vertices,
            edges = graph.number_of_edges(),
            "read graph from {}",
            path.display()
        );
        Ok(graph)
    }

    fn check_vertex(&self, vertex: i64) -> Result<Vertex> {
        if vertex < 0 || vertex as u64 >= self.edges.len() as u64 {
            return Err(GraphError::OutOfRange {
                vertex,
                number_of_vertices: self.edges.len(),
            });
        }

        // new/try_new bound the length by Vertex::MAX
        Ok(vertex as Vertex)
    }

    pub(super) fn push_edge(&mut self, edge: &WeightedEdge) {
        debug!(
            tail = edge.tail(),
            head = edge.head(),
            weight = edge.weight(),
            "adding edge"
        );
        self.edges[edge.tail() as usize].push(edge.tailless());
        self.edges[edge.head() as usize].push(edge.reversed().tailless());
    }
}

impl Graph for UndirectedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges: &[TaillessEdge] = self
            .edges
            .get(tail as usize)
            .map_or(&[], |edges| edges.as_slice());

        Box::new(EdgeIterator {
            edge_iter: edges.iter(),
            tail,
        })
    }
}

fn check_weight(weight: i64) -> Result<Weight> {
    if weight < 0 {
        return Err(GraphError::InvalidArgument(format!(
            "edge weight must not be negative, got {}",
            weight
        )));
    }

    Weight::try_from(weight).map_err(|_| {
        GraphError::InvalidArgument(format!(
            "edge weight {} exceeds the maximum of {}",
            weight,
            Weight::MAX
        ))
    })
}

fn read_count(line: Option<(usize, std::io::Result<String>)>, what: &str) -> Result<usize> {
    let Some((line_number, line)) = line else {
        return Err(GraphError::InvalidArgument(format!("missing {}", what)));
    };
    let line = line?;

    let count: i64 = line.trim().parse().map_err(|_| GraphError::Parse {
        line: line_number,
        message: format!("unable to parse {}", what),
    })?;
    if count < 0 {
        return Err(GraphError::InvalidArgument(format!(
            "{} must not be negative, got {}",
            what, count
        )));
    }

    usize::try_from(count).map_err(|_| {
        GraphError::InvalidArgument(format!("{} is too large, got {}", what, count))
    })
}

fn parse_value(value: Option<&str>, what: &str, line: usize) -> Result<i64> {
    let value = value.ok_or_else(|| GraphError::Parse {
        line,
        message: format!("no {} found", what),
    })?;

    value.parse().map_err(|_| GraphError::Parse {
        line,
        message: format!("unable to parse {}", what),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn adjacency(graph: &UndirectedGraph) -> Vec<Vec<WeightedEdge>> {
        graph
            .vertices()
            .map(|vertex| graph.edges(vertex).collect())
            .collect()
    }

    #[test]
    fn add_edge_is_symmetric() {
        let mut graph = UndirectedGraph::new(3);
        graph.add_edge(0, 2, 5).unwrap();

        assert_eq!(
            graph.edges(0).collect::<Vec<_>>(),
            vec![WeightedEdge::new(0, 2, 5)]
        );
        assert_eq!(
            graph.edges(2).collect::<Vec<_>>(),
            vec![WeightedEdge::new(2, 0, 5)]
        );
        assert_eq!(graph.edges(1).len(), 0);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn multi_edges_and_self_loops_are_kept() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 1, 0).unwrap();

        assert_eq!(graph.edges(0).len(), 2);
        // both halves of the self-loop land in the same list
        assert_eq!(graph.edges(1).len(), 4);
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(0, 1, 3).unwrap();
        let before = adjacency(&graph);

        let result = graph.add_edge(0, 1, -1);

        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
        assert_eq!(adjacency(&graph), before);
    }

    #[test]
    fn oversized_weight_is_rejected() {
        let mut graph = UndirectedGraph::new(2);
        let result = graph.add_edge(0, 1, i64::from(Weight::MAX) + 1);

        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let mut graph = UndirectedGraph::new(2);
        graph.add_edge(0, 1, 3).unwrap();
        let before = adjacency(&graph);

        let result = graph.add_edge(1, 2, 3);

        assert!(matches!(
            result,
            Err(GraphError::OutOfRange {
                vertex: 2,
                number_of_vertices: 2
            })
        ));
        assert_eq!(adjacency(&graph), before);
    }

    #[test]
    fn empty_graph_has_no_vertices() {
        let mut graph = UndirectedGraph::new(0);
        assert_eq!(graph.number_of_vertices(), 0);
        assert!(graph.add_edge(0, 0, 1).is_err());
    }

    #[test]
    fn try_new_matches_new() {
        let graph = UndirectedGraph::try_new(5).unwrap();
        assert_eq!(graph.number_of_vertices(), 5);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn largest_vertex_is_below_sentinel() {
        let mut graph = UndirectedGraph::new(1);
        let result = graph.add_edge(0, Vertex::MAX, 1);
        assert!(matches!(
            result,
            Err(GraphError::OutOfRange {
                vertex,
                number_of_vertices: 1
            }) if vertex == i64::from(Vertex::MAX)
        ));
    }

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_edge_list_file() {
        let file = write_file("# small map\n\n3\n2\n0 1 4\n1 2 7\n");

        let graph = UndirectedGraph::from_file(file.path()).unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(
            graph.edges(2).collect::<Vec<_>>(),
            vec![WeightedEdge::new(2, 1, 7)]
        );
    }

    #[test]
    fn file_with_too_many_vertices_is_rejected() {
        let file = write_file("5000000000\n0\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn file_with_extra_edges_reports_line() {
        let file = write_file("2\n1\n0 1 4\n1 0 2\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(result, Err(GraphError::Parse { line: 4, .. })));
    }

    #[test]
    fn file_with_negative_weight_is_rejected() {
        let file = write_file("2\n1\n0 1 -4\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn file_with_negative_vertex_count_is_rejected() {
        let file = write_file("-2\n0\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn file_with_out_of_range_vertex_is_rejected() {
        let file = write_file("2\n1\n0 -1 4\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(
            result,
            Err(GraphError::OutOfRange { vertex: -1, .. })
        ));
    }

    #[test]
    fn file_with_missing_weight_reports_line() {
        let file = write_file("# header\n2\n1\n0 1\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(result, Err(GraphError::Parse { line: 4, .. })));
    }

    #[test]
    fn file_with_too_few_edges_is_rejected() {
        let file = write_file("2\n2\n0 1 4\n");
        let result = UndirectedGraph::from_file(file.path());
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }
}
