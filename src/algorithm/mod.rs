pub mod traits;
pub mod batch;
pub mod dijkstra;
pub mod shortest_path;

pub use shortest_path::ShortestPath;
pub use traits::ShortestPathAlgorithm;
