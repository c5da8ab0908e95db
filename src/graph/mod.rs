pub mod adjacency;
pub mod generators;
pub mod text;
pub mod traits;

pub use adjacency::{AdjacencyList, Direction, Edge, GraphBuilder};
pub use traits::Graph;
