use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Distance, Vertex};

/// Frontier entry of a Dijkstra search.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub distance: Distance,
    pub vertex: Vertex,
}

impl DijkstraQueueElement {
    pub fn new(distance: Distance, vertex: Vertex) -> DijkstraQueueElement {
        DijkstraQueueElement { distance, vertex }
    }
}

// `BinaryHeap` is a max-heap, so both keys are flipped to pop the smallest
// distance first and, among equal distances, the smallest vertex.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue that manages vertices and their tentative distances.
///
/// Implementations do not support decrease-key. Inserting a vertex again with
/// a smaller distance leaves the older entry in the queue; callers have to
/// detect such stale entries when they are popped.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the entry with the smallest distance, or none if
    /// the queue is empty.
    fn pop(&mut self) -> Option<DijkstraQueueElement>;
}

/// A priority queue implementation using a Binary Heap.
#[derive(Clone, Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<DijkstraQueueElement>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(DijkstraQueueElement::new(distance, vertex));
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.heap.pop()
    }
}
