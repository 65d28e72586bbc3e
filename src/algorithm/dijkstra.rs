use log::{debug, trace};
use rayon::prelude::*;

use crate::algorithm::{PathOutcome, SearchTree, ShortestPathAlgorithm};
use crate::data_structures::{IndexedMinPriorityQueue, PriorityEntry};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Lifecycle of a vertex during one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    /// No tentative distance known yet
    Unvisited,
    /// Tentative distance known, entry live in the queue
    Frontier,
    /// Extracted from the queue; the distance is optimal
    Finalized,
}

/// Classic Dijkstra search over graphs with positive edge weights
#[derive(Debug, Clone)]
pub struct ShortestPathFinder {
    /// Stop as soon as the destination is finalized
    early_exit: bool,
}

impl Default for ShortestPathFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call search state. Never shared between searches.
struct SearchState<W>
where
    W: Weight,
{
    distance_to: Vec<Option<W>>,
    predecessor: Vec<Option<usize>>,
    state: Vec<VertexState>,
    queue: IndexedMinPriorityQueue<W>,
}

impl<W> SearchState<W>
where
    W: Weight,
{
    fn new(vertex_count: usize, source: usize) -> Result<Self> {
        let mut search = SearchState {
            distance_to: vec![None; vertex_count + 1],
            predecessor: vec![None; vertex_count + 1],
            state: vec![VertexState::Unvisited; vertex_count + 1],
            queue: IndexedMinPriorityQueue::with_capacity(vertex_count),
        };

        search.distance_to[source] = Some(W::zero());
        search.state[source] = VertexState::Frontier;
        search.queue.insert(source, W::zero())?;
        Ok(search)
    }

    /// Records `candidate` as the distance to `head` via `tail` if it beats the
    /// current one. This is the only place distances change.
    fn relax(&mut self, tail: usize, head: usize, candidate: W) -> Result<bool> {
        let improves = match self.distance_to[head] {
            None => true,
            Some(current) => candidate < current,
        };
        if !improves {
            return Ok(false);
        }

        self.distance_to[head] = Some(candidate);
        self.predecessor[head] = Some(tail);
        self.state[head] = VertexState::Frontier;
        self.queue.decrease_key(head, candidate)?;
        Ok(true)
    }

    fn into_tree(self, source: usize) -> SearchTree<W> {
        SearchTree {
            distances: self.distance_to,
            predecessors: self.predecessor,
            source,
        }
    }
}

impl ShortestPathFinder {
    /// Creates a finder that stops once the destination is finalized
    pub fn new() -> Self {
        ShortestPathFinder { early_exit: true }
    }

    /// Enable or disable stopping at the destination.
    ///
    /// With early exit off, every reachable vertex is finalized before the
    /// route is reconstructed. Results are identical either way.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    fn search<W, G>(&self, graph: &G, source: usize, stop_at: Option<usize>) -> Result<SearchTree<W>>
    where
        W: Weight,
        G: Graph<W> + ?Sized,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let mut search: SearchState<W> = SearchState::new(graph.vertex_count(), source)?;
        let mut finalized = 0usize;

        while !search.queue.is_empty() {
            let PriorityEntry { vertex: tail, priority: distance } = search.queue.extract_min()?;
            search.state[tail] = VertexState::Finalized;
            finalized += 1;
            trace!("Finalized vertex {} at distance {}", tail, distance);

            if stop_at == Some(tail) {
                break;
            }

            for (head, weight) in graph.outgoing_edges(tail) {
                if search.state[head] == VertexState::Finalized {
                    continue;
                }
                // Costs past W::max_value() are not representable and never improve a distance
                match distance.checked_add(&weight) {
                    Some(candidate) => {
                        search.relax(tail, head, candidate)?;
                    }
                    None => trace!("Skipping edge {} -> {}: cost exceeds {}", tail, head, W::max_value()),
                }
            }
        }

        debug!(
            "Search from {} finalized {} of {} vertices",
            source,
            finalized,
            graph.vertex_count()
        );
        Ok(search.into_tree(source))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ShortestPathFinder
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree(&self, graph: &G, source: usize) -> Result<SearchTree<W>> {
        self.search(graph, source, None)
    }

    fn find_path(&self, graph: &G, source: usize, destination: usize) -> Result<PathOutcome<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }

        let stop_at = if self.early_exit { Some(destination) } else { None };
        let tree = self.search(graph, source, stop_at)?;
        let outcome = tree.path_to(destination);

        match &outcome {
            PathOutcome::Found(route) => debug!(
                "Route {} -> {}: {} hops, cost {}",
                source,
                destination,
                route.hops(),
                route.cost
            ),
            PathOutcome::NoPath => debug!("No path from {} to {}", source, destination),
        }
        Ok(outcome)
    }
}

/// Finds the minimum-weight route from `source` to `destination`
pub fn find_path<W, G>(graph: &G, source: usize, destination: usize) -> Result<PathOutcome<W>>
where
    W: Weight,
    G: Graph<W>,
{
    ShortestPathFinder::new().find_path(graph, source, destination)
}

/// Answers independent `(source, destination)` queries over one shared graph
/// in parallel. Each query runs with its own search state; results come back
/// in query order.
pub fn find_paths<W, G>(graph: &G, queries: &[(usize, usize)]) -> Vec<Result<PathOutcome<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
{
    let finder = ShortestPathFinder::new();
    queries
        .par_iter()
        .map(|&(source, destination)| finder.find_path(graph, source, destination))
        .collect()
}
