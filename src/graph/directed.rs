use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Each list is kept sorted by head id, so neighbors come out in ascending
/// order just like the matrix representation.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: slot `v - 1` -> [(head, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Number of distinct edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph over vertex ids `1..=vertex_count` with no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 {
            return Err(Error::InvalidVertexCount(vertex_count));
        }

        Ok(DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Out-degree of a vertex, zero for unknown ids
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.edges_of(vertex).map_or(0, |edges| edges.len())
    }

    fn edges_of(&self, vertex: usize) -> Option<&Vec<(usize, W)>> {
        if self.has_vertex(vertex) {
            self.outgoing_edges.get(vertex - 1)
        } else {
            None
        }
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.edges_of(vertex) {
            Some(edges) => Box::new(edges.iter().map(|&(head, _)| head)),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, tail: usize, head: usize) -> W {
        self.edges_of(tail)
            .and_then(|edges| {
                edges
                    .binary_search_by_key(&head, |&(h, _)| h)
                    .ok()
                    .map(|idx| edges[idx].1)
            })
            .unwrap_or_else(W::zero)
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.edges_of(vertex) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
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
        if !self.has_vertex(tail) {
            return Err(Error::InvalidVertex(tail));
        }
        if !self.has_vertex(head) {
            return Err(Error::InvalidVertex(head));
        }

        let edges = &mut self.outgoing_edges[tail - 1];
        match edges.binary_search_by_key(&head, |&(h, _)| h) {
            // Edge already exists, update it
            Ok(idx) => edges[idx].1 = weight,
            Err(idx) => {
                edges.insert(idx, (head, weight));
                self.edge_count += 1;
            }
        }
        Ok(())
    }
}
