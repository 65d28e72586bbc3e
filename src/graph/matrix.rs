use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph stored as a dense adjacency matrix.
///
/// Edge lookup is O(1) and neighbor enumeration is O(V) per vertex, at the
/// cost of O(V²) memory. Suited to small or dense graphs; [`DirectedGraph`]
/// is the sparse alternative.
///
/// [`DirectedGraph`]: crate::graph::DirectedGraph
#[derive(Debug, Clone)]
pub struct WeightedDigraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of distinct edges, kept for diagnostics
    edge_count: usize,

    /// Row-major `V x V` table; cell `(t-1) * V + (h-1)` holds `w(t, h)` or zero
    weights: Vec<W>,
}

impl<W> WeightedDigraph<W>
where
    W: Weight,
{
    /// Creates a graph over vertex ids `1..=vertex_count` with no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 {
            return Err(Error::InvalidVertexCount(vertex_count));
        }
        let cells = vertex_count
            .checked_mul(vertex_count)
            .ok_or(Error::InvalidVertexCount(vertex_count))?;

        Ok(WeightedDigraph {
            vertex_count,
            edge_count: 0,
            weights: vec![W::zero(); cells],
        })
    }

    fn cell(&self, tail: usize, head: usize) -> Option<usize> {
        if self.has_vertex(tail) && self.has_vertex(head) {
            Some((tail - 1) * self.vertex_count + (head - 1))
        } else {
            None
        }
    }

    fn row(&self, tail: usize) -> &[W] {
        let start = (tail - 1) * self.vertex_count;
        &self.weights[start..start + self.vertex_count]
    }
}

impl<W> Graph<W> for WeightedDigraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.row(vertex)
                .iter()
                .enumerate()
                .filter(|(_, weight)| !weight.is_zero())
                .map(|(column, _)| column + 1),
        )
    }

    fn edge_weight(&self, tail: usize, head: usize) -> W {
        self.cell(tail, head)
            .map_or_else(W::zero, |cell| self.weights[cell])
    }
}

impl<W> MutableGraph<W> for WeightedDigraph<W>
where
    W: Weight,
{
    fn with_vertices(vertex_count: usize) -> Result<Self> {
        Self::new(vertex_count)
    }

    fn add_edge(&mut self, tail: usize, head: usize, weight: W) -> Result<()> {
        if weight.is_zero() {
            return Err(Error::ZeroWeight { tail, head });
        }
        let cell = match self.cell(tail, head) {
            Some(cell) => cell,
            None if self.has_vertex(tail) => return Err(Error::InvalidVertex(head)),
            None => return Err(Error::InvalidVertex(tail)),
        };

        if self.weights[cell].is_zero() {
            self.edge_count += 1;
        }
        self.weights[cell] = weight;
        Ok(())
    }
}
