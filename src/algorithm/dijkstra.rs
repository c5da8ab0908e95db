use log::{debug, trace};

use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::data_structures::BoundedMinHeap;
use crate::graph::Graph;
use crate::{Error, Result, Vertex, INFINITY};

/// Dijkstra's algorithm over a bounded min-heap with lazy deletion.
///
/// A vertex may sit in the queue several times; every entry popped after the
/// vertex has been settled is discarded. The start vertex is never used as a
/// relaxation target, so its distance stays zero.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Fixed queue capacity, `None` sizes the queue to `edge_count + 1`
    queue_capacity: Option<usize>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            queue_capacity: None,
        }
    }

    /// Set a fixed queue capacity instead of deriving it from the edge count.
    ///
    /// A capacity smaller than the number of simultaneously queued entries makes
    /// the computation fail with [`Error::CapacityExceeded`].
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Each settled vertex relaxes each of its edges once, so at most one entry
    /// per edge plus the seed is ever queued.
    fn capacity_for<G: Graph>(&self, graph: &G) -> usize {
        self.queue_capacity.unwrap_or(graph.edge_count() + 1)
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G: Graph>(&self, graph: &G, source: Vertex) -> Result<ShortestPath> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let capacity = self.capacity_for(graph);
        debug!(
            "Dijkstra from {}: {} vertices, {} edges, queue capacity {}",
            source,
            n,
            graph.edge_count(),
            capacity
        );

        let mut distances = vec![INFINITY; n];
        let mut predecessors: Vec<Option<Vertex>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[source] = 0;

        let mut queue = BoundedMinHeap::new(capacity)?;
        queue.put(source, 0)?;

        let mut settled = 0usize;
        while !queue.is_empty() {
            let vertex = queue.remove_min()?;
            if visited[vertex] {
                trace!("Discarding stale entry for vertex {}", vertex);
                continue;
            }
            visited[vertex] = true;
            settled += 1;

            for edge in graph.outgoing_edges(vertex) {
                let to = edge.to;
                if to == source {
                    continue;
                }
                if to >= n {
                    return Err(Error::InvalidVertex(to));
                }
                if edge.weight < 0 {
                    return Err(Error::NegativeWeight(edge.weight));
                }

                // Overflowing paths saturate at INFINITY and never relax
                let candidate = distances[vertex].saturating_add(edge.weight);
                if candidate < distances[to] {
                    distances[to] = candidate;
                    predecessors[to] = Some(vertex);
                    if !visited[to] {
                        queue.put(to, candidate)?;
                    }
                }
            }
        }

        debug!("Dijkstra from {} settled {} of {} vertices", source, settled, n);

        Ok(ShortestPath::new(source, distances, predecessors))
    }
}
