use std::collections::HashSet;
use std::fmt;

use crate::graph::traits::Graph;
use crate::{Error, Result, Vertex, Weight};

/// An outgoing edge: target vertex and non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: Vertex, weight: Weight) -> Self {
        Edge { to, weight }
    }
}

/// Whether added edges are one-way or mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

/// An immutable graph stored as one contiguous edge slice per vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    /// Outgoing edges for each vertex, sorted by target vertex
    adjacency: Vec<Box<[Edge]>>,

    edge_count: usize,
}

impl AdjacencyList {
    /// Builds an adjacency list from raw per-vertex edge lists.
    ///
    /// No validation is performed; use [`GraphBuilder`] for untrusted input.
    /// Edge targets outside `[0, N)` make later searches fail with
    /// [`Error::InvalidVertex`].
    pub fn from_edge_lists(lists: Vec<Vec<Edge>>) -> Self {
        let edge_count = lists.iter().map(Vec::len).sum();
        AdjacencyList {
            adjacency: lists.into_iter().map(Vec::into_boxed_slice).collect(),
            edge_count,
        }
    }

    /// Iterates over every vertex together with its outgoing edges
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &[Edge])> + '_ {
        self.adjacency.iter().enumerate().map(|(v, edges)| (v, &edges[..]))
    }
}

impl Graph for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: Vertex) -> &[Edge] {
        self.adjacency.get(vertex).map(|edges| &edges[..]).unwrap_or(&[])
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (v, edges) in self.iter() {
            if v > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:[", v)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}:{}", edge.to, edge.weight)?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

/// Validating builder for [`AdjacencyList`].
///
/// Rejects out-of-range endpoints, negative weights and a second edge between
/// the same ordered pair of vertices. In undirected mode every edge is also
/// added in reverse, and a clash in either direction is a duplicate.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    direction: Direction,
    edges: Vec<Vec<Edge>>,
    seen: HashSet<(Vertex, Vertex)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with the given number of vertices
    pub fn new(vertices: usize, direction: Direction) -> Self {
        GraphBuilder {
            direction,
            edges: vec![Vec::new(); vertices],
            seen: HashSet::new(),
        }
    }

    pub fn directed(vertices: usize) -> Self {
        Self::new(vertices, Direction::Directed)
    }

    pub fn undirected(vertices: usize) -> Self {
        Self::new(vertices, Direction::Undirected)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds an edge, mirrored when the builder is undirected
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: Weight) -> Result<&mut Self> {
        let n = self.edges.len();
        if from >= n || to >= n {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < 0 {
            return Err(Error::NegativeWeight(weight));
        }

        let mirrored = self.direction == Direction::Undirected && from != to;
        if self.seen.contains(&(from, to)) || (mirrored && self.seen.contains(&(to, from))) {
            return Err(Error::DuplicateEdge(from, to));
        }

        self.seen.insert((from, to));
        self.edges[from].push(Edge::new(to, weight));
        if mirrored {
            self.seen.insert((to, from));
            self.edges[to].push(Edge::new(from, weight));
        }
        Ok(self)
    }

    /// Finishes the graph. Edge lists are ordered by target vertex.
    pub fn build(self) -> AdjacencyList {
        let mut lists = self.edges;
        for edges in &mut lists {
            edges.sort_unstable_by_key(|edge| edge.to);
        }
        AdjacencyList::from_edge_lists(lists)
    }
}
