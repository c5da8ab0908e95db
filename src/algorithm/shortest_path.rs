use serde::Serialize;

use crate::{Distance, Error, Result, Vertex, INFINITY};

/// Distances and predecessor links from a single start vertex.
///
/// Fully computed on construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    start: Vertex,

    /// Minimum total weight from the start, [`INFINITY`] when unreachable
    distances: Vec<Distance>,

    /// Vertex preceding each vertex on a shortest path, `None` for the start
    /// and for unreachable vertices
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPath {
    pub(crate) fn new(
        start: Vertex,
        distances: Vec<Distance>,
        predecessors: Vec<Option<Vertex>>,
    ) -> Self {
        ShortestPath {
            start,
            distances,
            predecessors,
        }
    }

    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distances indexed by vertex
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Predecessors indexed by vertex
    pub fn predecessors(&self) -> &[Option<Vertex>] {
        &self.predecessors
    }

    pub fn distance(&self, vertex: Vertex) -> Result<Distance> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    pub fn predecessor(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        self.predecessors
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distances.get(vertex).is_some_and(|&d| d != INFINITY)
    }

    /// Returns the vertices of a shortest path from the start to `target`, both included.
    ///
    /// The path to the start itself is just `[start]`.
    pub fn path_to(&self, target: Vertex) -> Result<Vec<Vertex>> {
        if target >= self.distances.len() {
            return Err(Error::InvalidVertex(target));
        }
        if target == self.start {
            return Ok(vec![self.start]);
        }
        if self.distances[target] == INFINITY {
            return Err(Error::Unreachable(target));
        }

        let mut path = vec![target];
        let mut current = target;
        loop {
            // Reachable vertices always chain back to the start
            let pred = self.predecessors[current].ok_or(Error::Unreachable(target))?;
            if pred == self.start {
                break;
            }
            // A simple path never revisits a vertex
            if path.len() >= self.distances.len() {
                return Err(Error::Unreachable(target));
            }
            path.push(pred);
            current = pred;
        }
        path.push(self.start);
        path.reverse();

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predecessor_cycle_is_unreachable() {
        let paths = ShortestPath::new(0, vec![0, -3, 2], vec![None, Some(2), Some(1)]);
        assert!(matches!(paths.path_to(2), Err(Error::Unreachable(2))));
        assert!(matches!(paths.path_to(1), Err(Error::Unreachable(1))));
    }
}
