use rayon::prelude::*;

use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::{Result, Vertex};

/// Runs `algorithm` once per source in parallel.
///
/// Every run owns its own arrays and queue and only reads the shared graph.
/// Results come back in the order of `sources`; the first failing source aborts the batch.
pub fn shortest_paths_with<A, G>(algorithm: &A, graph: &G, sources: &[Vertex]) -> Result<Vec<ShortestPath>>
where
    A: ShortestPathAlgorithm + Sync,
    G: Graph + Sync,
{
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}

/// Runs the default Dijkstra engine once per source in parallel
pub fn shortest_paths_from_many<G>(graph: &G, sources: &[Vertex]) -> Result<Vec<ShortestPath>>
where
    G: Graph + Sync,
{
    shortest_paths_with(&crate::Dijkstra::new(), graph, sources)
}
