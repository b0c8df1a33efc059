use itertools::Itertools;
use rand::Rng;

use super::{edge::WeightedEdge, Distance, Graph, Vertex};
use crate::search::path::{Path, ShortestPathRequest, ShortestPathTestCase};

/// Check if a path is correct for a given test case.
pub fn validate_path(
    graph: &dyn Graph,
    validation: &ShortestPathTestCase,
    path: &Option<Path>,
) -> Result<(), String> {
    let Some(path) = path else {
        if validation.distance.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(distance) = validation.distance else {
        return Err("a path was found where there should be none".to_string());
    };

    if path.distance != distance {
        return Err("wrong path distance".to_string());
    }

    // Ensure first and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&validation.request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let Some(true_distance) = path_distance(graph, &path.vertices) else {
        return Err("path uses an edge that is not part of the graph".to_string());
    };
    if true_distance != path.distance {
        return Err(format!(
            "path claims distance {} but its edges sum up to {}",
            path.distance, true_distance
        ));
    }

    Ok(())
}

/// Sum of the cheapest edge between each pair of consecutive vertices, or
/// `None` if some pair is not connected by an edge.
pub fn path_distance(graph: &dyn Graph, vertices: &[Vertex]) -> Option<Distance> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| {
            graph
                .edges(tail)
                .filter(|edge| edge.head() == head)
                .map(|edge| Distance::from(edge.weight()))
                .min()
        })
        .sum()
}

pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph
        .vertices()
        .flat_map(|vertex| graph.edges(vertex))
        .collect()
}

/// Checks that every edge `(u, v, w)` has a matching `(v, u, w)`, counting
/// multi-edges.
pub fn is_bidirectional(graph: &dyn Graph) -> bool {
    let edges = all_edges(graph).into_iter().sorted().collect_vec();
    let reversed = all_edges(graph)
        .iter()
        .map(WeightedEdge::reversed)
        .sorted()
        .collect_vec();

    edges == reversed
}

pub fn random_request<R: Rng>(graph: &dyn Graph, rng: &mut R) -> Option<ShortestPathRequest> {
    if graph.number_of_vertices() == 0 {
        return None;
    }

    let source = rng.gen_range(0..graph.number_of_vertices());
    let target = rng.gen_range(0..graph.number_of_vertices());

    Some(ShortestPathRequest::new(source, target))
}
