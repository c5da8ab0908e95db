//! Plain-text graph format.
//!
//! Line `i` (1-based) lists the outgoing edges of vertex `i - 1` as
//! whitespace-separated `target weight` pairs, with 1-based targets. Empty
//! lines are vertices without outgoing edges. In a full graph file the final
//! line is the mode keyword: `directed` for a directed graph, anything else
//! for an undirected one, optionally followed by a single line terminator.
//! A square with unit weights:
//!
//! ```text
//! 2 1
//! 3 1
//! 4 1
//! 1 1
//! undirected
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::{AdjacencyList, Direction, Graph, GraphBuilder};
use crate::{Error, Result, Weight};

/// Syntax and consistency errors of the text format. Line numbers are 1-based.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Graph file contains no vertices")]
    NoVertices,

    #[error("Vertex on line {line} is malformed, make sure all values are valid ints")]
    Malformed { line: usize },

    #[error("Vertex on line {line} has an edge without a weight: {vertex}")]
    MissingWeight { line: usize, vertex: i64 },

    #[error("Vertex on line {line} connected to non-existent vertex: {vertex}")]
    NonexistentVertex { line: usize, vertex: i64 },

    #[error("Vertex on line {line} has a negative edge weight: {weight}")]
    NegativeWeight { line: usize, weight: Weight },

    #[error("Invalid graph, vertex on line {line} is defined twice")]
    DuplicateEdge { line: usize },
}

/// Splits on `\r\n`, `\n` or `\r`, keeping empty lines (including a trailing one).
/// Empty input has no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);
    lines
}

/// Builds a graph from edge lines only, one line per vertex
pub fn from_lines<S: AsRef<str>>(lines: &[S], direction: Direction) -> Result<AdjacencyList> {
    let n = lines.len();
    let mut builder = GraphBuilder::new(n, direction);

    for (from, text) in lines.iter().enumerate() {
        let line = from + 1;
        let mut tokens = text.as_ref().split_whitespace();

        while let Some(token) = tokens.next() {
            let target: i64 = token.parse().map_err(|_| ParseError::Malformed { line })?;
            let weight: Weight = match tokens.next() {
                None => return Err(ParseError::MissingWeight { line, vertex: target }.into()),
                Some(token) => token.parse().map_err(|_| ParseError::Malformed { line })?,
            };

            if target < 1 || target > n as i64 {
                return Err(ParseError::NonexistentVertex { line, vertex: target }.into());
            }
            if weight < 0 {
                return Err(ParseError::NegativeWeight { line, weight }.into());
            }

            builder
                .add_edge(from, (target - 1) as usize, weight)
                .map_err(|err| match err {
                    Error::DuplicateEdge(..) => Error::Parse(ParseError::DuplicateEdge { line }),
                    other => other,
                })?;
        }
    }

    Ok(builder.build())
}

/// Parses a full graph description whose last line is the mode keyword
pub fn parse_graph(text: &str) -> Result<AdjacencyList> {
    let mut lines = split_lines(text);
    // A line terminator after the mode keyword does not start another vertex
    if lines.len() > 1 && lines.last() == Some(&"") {
        lines.pop();
    }
    let Some((mode, edge_lines)) = lines.split_last() else {
        return Err(ParseError::NoVertices.into());
    };
    if edge_lines.is_empty() {
        return Err(ParseError::NoVertices.into());
    }

    let direction = if mode.trim().eq_ignore_ascii_case("directed") {
        Direction::Directed
    } else {
        Direction::Undirected
    };
    from_lines(edge_lines, direction)
}

/// Reads and parses a graph file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyList> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    debug!(
        "Loaded graph from {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
