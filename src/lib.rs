//! GPS Route - minimum-weight paths on weighted directed graphs
//!
//! The core of this library is a classic Dijkstra search driven by an indexed
//! binary min-heap with decrease-key support. Graphs use vertex ids `1..=V`
//! and strictly positive integer edge weights.
//!
//! Around the core sit a loader for the `p sp` / `a` line format and a small
//! interactive shell used by the `gps_route` binary.

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod loader;

pub use algorithm::{
    dijkstra::{find_path, find_paths, ShortestPathFinder},
    PathOutcome, Route, SearchTree, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{directed::DirectedGraph, matrix::WeightedDigraph};
pub use data_structures::IndexedMinPriorityQueue;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex count: {0} (a graph needs at least one vertex)")]
    InvalidVertexCount(usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Zero weight on edge from {tail} to {head} (zero means \"no edge\")")]
    ZeroWeight { tail: usize, head: usize },

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Vertex {0} already has an entry in the priority queue")]
    DuplicateEntry(usize),

    #[error("Decrease-key would raise the priority of vertex {0}")]
    PriorityIncrease(usize),

    #[error("Graph file has no `p sp <V> <E>` header line")]
    MissingHeader,

    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
