use crate::algorithm::ShortestPath;
use crate::graph::Graph;
use crate::{Result, Vertex};

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<G: Graph>(&self, graph: &G, source: Vertex) -> Result<ShortestPath>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
