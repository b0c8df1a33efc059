use crate::{
    graphs::{Distance, Graph, Vertex},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the best known distance to a given vertex. Unreached
    /// vertices report `Distance::MAX`.
    fn get_distance(&self, vertex: Vertex) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Constructs the path from `source` to `target`, if reachable.
    ///
    /// Walks the predecessor links backwards from `target` until a vertex
    /// without predecessor is hit. Returns `None` if that vertex is not
    /// `source`, i.e. `target` was never reached.
    fn get_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }

        if current != source {
            return None;
        }

        // Reverse the path to start from the source vertex.
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Distance and predecessor tables stored as one vector each.
pub struct DijkstraDataVec {
    pub predecessors: Vec<Vertex>,
    pub distances: Vec<Distance>,
}

impl DijkstraDataVec {
    /// Constructs a new `DijkstraDataVec` for a given graph.
    pub fn new(graph: &dyn Graph) -> Self {
        DijkstraDataVec {
            // Vertex::MAX marks a missing predecessor.
            predecessors: vec![Vertex::MAX; graph.number_of_vertices() as usize],
            distances: vec![Distance::MAX; graph.number_of_vertices() as usize],
        }
    }

    /// Vertices whose distance is finite.
    pub fn reached_vertices(&self) -> Vec<Vertex> {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, &distance)| distance != Distance::MAX)
            .map(|(vertex, _)| vertex as Vertex)
            .collect()
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(Vertex::MAX);
        self.distances.fill(Distance::MAX);
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[vertex as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance
    }
}
