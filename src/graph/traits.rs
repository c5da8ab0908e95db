use std::fmt::Debug;

use crate::algorithm::{dijkstra::Dijkstra, ShortestPath, ShortestPathAlgorithm};
use crate::graph::Edge;
use crate::{Result, Vertex, Weight};

/// Trait representing an immutable weighted adjacency structure
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex, empty for unknown vertices
    fn outgoing_edges(&self, vertex: Vertex) -> &[Edge];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: Vertex) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: Vertex, to: Vertex) -> Option<Weight> {
        self.outgoing_edges(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    /// Runs the default engine from `start`
    fn shortest_path_from(&self, start: Vertex) -> Result<ShortestPath>
    where
        Self: Sized,
    {
        Dijkstra::new().compute_shortest_paths(self, start)
    }
}
