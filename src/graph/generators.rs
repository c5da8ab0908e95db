use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::{AdjacencyList, Direction, GraphBuilder};
use crate::{Error, Result, Vertex, Weight};

/// Generates a random graph with roughly `edge_factor * n` edges and weights in `0..=max_weight`.
///
/// The same seed always yields the same graph. Self-loops and repeated pairs are skipped.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    max_weight: Weight,
    direction: Direction,
    seed: u64,
) -> Result<AdjacencyList> {
    if max_weight < 0 {
        return Err(Error::NegativeWeight(max_weight));
    }
    let mut builder = GraphBuilder::new(n, direction);
    if n < 2 {
        return Ok(builder.build());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight);
            // Duplicates are simply dropped
            add_unless_duplicate(&mut builder, u, v, weight)?;
        }
    }

    Ok(builder.build())
}

fn add_unless_duplicate(builder: &mut GraphBuilder, from: Vertex, to: Vertex, weight: Weight) -> Result<()> {
    match builder.add_edge(from, to, weight) {
        Ok(_) | Err(Error::DuplicateEdge(..)) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Generates an undirected `width` x `height` grid with unit weights between 4-neighbours
pub fn generate_grid(width: usize, height: usize) -> Result<AdjacencyList> {
    let mut builder = GraphBuilder::undirected(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                builder.add_edge(vertex, vertex + 1, 1)?;
            }
            if y + 1 < height {
                builder.add_edge(vertex, vertex + width, 1)?;
            }
        }
    }

    Ok(builder.build())
}
