use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Edge weight types accepted by the graphs in this crate.
///
/// Weights are unsigned integers, so negative edges cannot be expressed.
/// The value zero is reserved to mean "no edge".
pub trait Weight: PrimInt + Unsigned + Debug + Display + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display + Send + Sync {}

/// Trait representing a weighted directed graph over vertex ids `1..=V`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of distinct edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the heads of all edges leaving `vertex`, in ascending id order.
    ///
    /// The iterator is empty for ids outside `1..=V`.
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns the weight of edge `(tail, head)`, or zero if there is none
    fn edge_weight(&self, tail: usize, head: usize) -> W;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, tail: usize, head: usize) -> bool {
        !self.edge_weight(tail, head).is_zero()
    }

    /// Returns an iterator over the outgoing `(head, weight)` pairs of a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(
            self.neighbors(vertex)
                .map(move |head| (head, self.edge_weight(vertex, head))),
        )
    }
}

/// Trait for graphs that can be populated edge by edge
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Creates an edgeless graph over vertex ids `1..=vertex_count`.
    ///
    /// Fails if `vertex_count` is zero.
    fn with_vertices(vertex_count: usize) -> Result<Self>
    where
        Self: Sized;

    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Adding an edge that already exists replaces its weight.
    fn add_edge(&mut self, tail: usize, head: usize, weight: W) -> Result<()>;
}
