use std::fmt;

use crate::graph::{Graph, Weight};
use crate::Result;

/// A concrete route from a source to a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    /// Vertex ids from source to destination, both inclusive
    pub vertices: Vec<usize>,

    /// Sum of the edge weights along the route
    pub cost: W,
}

impl<W> Route<W> {
    pub fn source(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    pub fn destination(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Number of edges on the route
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Renders the route as `v1->v2->...->vk`
impl<W> fmt::Display for Route<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

/// Outcome of a point-to-point query.
///
/// An unreachable destination is `NoPath`, never a route of cost zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<W> {
    Found(Route<W>),
    NoPath,
}

impl<W> PathOutcome<W> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&Route<W>> {
        match self {
            PathOutcome::Found(route) => Some(route),
            PathOutcome::NoPath => None,
        }
    }

    pub fn cost(&self) -> Option<&W> {
        self.route().map(|route| &route.cost)
    }
}

/// Shortest path tree produced by a single-source search
#[derive(Debug, Clone)]
pub struct SearchTree<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, slot `v` for vertex `v` (slot 0 unused)
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> SearchTree<W>
where
    W: Weight,
{
    /// Best known distance to `vertex`, `None` if it was never reached
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Reconstructs the route to `target` by walking predecessor links back
    /// to the source.
    pub fn path_to(&self, target: usize) -> PathOutcome<W> {
        let cost = match self.distance(target) {
            Some(cost) => cost,
            None => return PathOutcome::NoPath,
        };

        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors[current] {
                Some(pred) => {
                    vertices.push(pred);
                    current = pred;
                }
                None => {
                    log::warn!("Vertex {} has a distance but no predecessor", current);
                    return PathOutcome::NoPath;
                }
            }
            // A predecessor chain longer than the graph means a cycle
            if vertices.len() > self.predecessors.len() {
                log::warn!("Cycle detected in path reconstruction at vertex {}", current);
                return PathOutcome::NoPath;
            }
        }
        vertices.reverse();

        PathOutcome::Found(Route { vertices, cost })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn shortest_path_tree(&self, graph: &G, source: usize) -> Result<SearchTree<W>>;

    /// Compute the minimum-weight route between two vertices
    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<PathOutcome<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
