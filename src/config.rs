use std::path::PathBuf;

/// Storage used for the loaded graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Representation {
    /// Dense adjacency matrix, O(1) edge lookup
    Matrix,
    /// Sorted adjacency lists, for sparse graphs
    List,
}

/// Configuration for the route finder shell
#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub graph_path: PathBuf,
    pub representation: Representation,
    pub early_exit: bool,
    /// Decimal places used when printing the search time in seconds
    pub time_precision: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("graph.gr"),
            representation: Representation::Matrix,
            early_exit: true,
            time_precision: 3,
        }
    }
}
