//! GPS Route CLI — interactive shortest routes over a graph file.
//!
//! Usage:
//!   gps_route <graph-file> [--representation matrix|list] [--no-early-exit]

use clap::Parser;
use gps_route::cli::Shell;
use gps_route::config::{Representation, RouteConfig};
use gps_route::graph::{Graph, MutableGraph};
use gps_route::loader::load_graph_file;
use gps_route::{DirectedGraph, ShortestPathFinder, WeightedDigraph};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gps_route",
    version,
    about = "Find minimum-weight routes in a weighted directed graph"
)]
struct Cli {
    /// Graph file with a `p sp <V> <E>` header and `a <tail> <head> <weight>` lines
    graph: PathBuf,

    /// How the graph is stored in memory
    #[arg(long, value_enum, default_value_t = RouteConfig::default().representation)]
    representation: Representation,

    /// Finalize every reachable vertex instead of stopping at the destination
    #[arg(long)]
    no_early_exit: bool,

    /// Decimal places for the reported search time
    #[arg(long, default_value_t = RouteConfig::default().time_precision)]
    precision: usize,
}

impl From<Cli> for RouteConfig {
    fn from(cli: Cli) -> Self {
        RouteConfig {
            graph_path: cli.graph,
            representation: cli.representation,
            early_exit: !cli.no_early_exit,
            time_precision: cli.precision,
        }
    }
}

fn run_shell<G>(config: &RouteConfig) -> gps_route::Result<()>
where
    G: MutableGraph<u64>,
{
    let graph = load_graph_file::<G, u64, _>(&config.graph_path)?;
    log::info!(
        "Graph ready with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let finder = ShortestPathFinder::new().with_early_exit(config.early_exit);
    let mut shell = Shell::<u64, G, _, _>::new(&graph, io::stdin().lock(), io::stdout().lock())
        .with_finder(finder)
        .with_time_precision(config.time_precision);
    shell.run()
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = RouteConfig::from(Cli::parse());
    let result = match config.representation {
        Representation::Matrix => run_shell::<WeightedDigraph<u64>>(&config),
        Representation::List => run_shell::<DirectedGraph<u64>>(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
