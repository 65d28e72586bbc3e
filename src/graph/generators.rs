use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::graph::{MutableGraph, Weight};
use crate::Result;

/// Generates a random directed graph with `vertex_count` vertices.
///
/// `edge_attempts` random `(tail, head)` pairs are drawn; self-loops are
/// skipped and repeated pairs overwrite the earlier weight, so the final edge
/// count may be lower. Weights are uniform in `1..=max_weight`.
pub fn generate_random_graph<G, W, R>(
    vertex_count: usize,
    edge_attempts: usize,
    max_weight: W,
    rng: &mut R,
) -> Result<G>
where
    G: MutableGraph<W>,
    W: Weight + SampleUniform,
    R: Rng + ?Sized,
{
    let mut graph = G::with_vertices(vertex_count)?;
    let max_weight = max_weight.max(W::one());

    for _ in 0..edge_attempts {
        let tail = rng.gen_range(1..=vertex_count);
        let head = rng.gen_range(1..=vertex_count);
        // Avoid self-loops
        if tail != head {
            let weight = rng.gen_range(W::one()..=max_weight);
            graph.add_edge(tail, head, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid where every cell is linked to its
/// 4-connected neighbors in both directions with the given weight.
///
/// Cell `(x, y)` has vertex id `y * width + x + 1`.
pub fn generate_grid<G, W>(width: usize, height: usize, weight: W) -> Result<G>
where
    G: MutableGraph<W>,
    W: Weight,
{
    let mut graph = G::with_vertices(width * height)?;
    let id = |x: usize, y: usize| y * width + x + 1;

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(id(x, y), id(x + 1, y), weight)?;
                graph.add_edge(id(x + 1, y), id(x, y), weight)?;
            }
            if y + 1 < height {
                graph.add_edge(id(x, y), id(x, y + 1), weight)?;
                graph.add_edge(id(x, y + 1), id(x, y), weight)?;
            }
        }
    }

    Ok(graph)
}
