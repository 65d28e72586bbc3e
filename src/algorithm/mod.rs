pub mod traits;
pub mod dijkstra;

pub use traits::{PathOutcome, Route, SearchTree, ShortestPathAlgorithm};
