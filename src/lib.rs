//! Lazy Dijkstra - Single-Source Shortest Paths over integer-weighted graphs
//!
//! This library computes single-source shortest paths on directed or undirected
//! graphs with non-negative 32-bit integer edge weights, and reconstructs the
//! concrete vertex sequence of any computed path.
//!
//! The search is Dijkstra's algorithm driven by a fixed-capacity binary min-heap
//! that tolerates duplicate entries: stale entries are discarded when popped
//! instead of being removed on every relaxation.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPath, ShortestPathAlgorithm};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Direction, Edge, Graph, GraphBuilder};

use graph::text::ParseError;

/// Dense, zero-based vertex identifier
pub type Vertex = usize;

/// Edge weight. Must be non-negative.
pub type Weight = i32;

/// Total path weight from the start vertex
pub type Distance = i32;

/// Distance of every vertex that cannot be reached from the start vertex
pub const INFINITY: Distance = i32::MAX;

/// Computes shortest paths from `start` over `graph` with the default engine settings
pub fn compute_shortest_paths<G: Graph>(graph: &G, start: Vertex) -> Result<ShortestPath> {
    Dijkstra::new().compute_shortest_paths(graph, start)
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Illegal capacity: {0}")]
    InvalidCapacity(usize),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Priority queue capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(Vertex),

    #[error("Vertex {0} is unreachable from the start vertex")]
    Unreachable(Vertex),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(Vertex),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(Vertex, Vertex),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(Weight),

    #[error("Duplicate edge: from {0} to {1}")]
    DuplicateEdge(Vertex, Vertex),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
