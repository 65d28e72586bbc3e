use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use gps_route::algorithm::ShortestPathAlgorithm;
use gps_route::graph::generators::generate_random_graph;
use gps_route::graph::{DirectedGraph, Graph, MutableGraph, WeightedDigraph};
use gps_route::{find_paths, PathOutcome, ShortestPathFinder};

// Function to benchmark the finder on one graph representation
fn benchmark_representation<G>(name: &str, graph: &G, queries: &[(usize, usize)]) -> Duration
where
    G: Graph<u32>,
{
    println!("Running {} queries on {} ({} vertices, {} edges)...",
             queries.len(), name, graph.vertex_count(), graph.edge_count());

    let finder = ShortestPathFinder::new();
    let start = Instant::now();
    let mut found = 0;
    for &(source, destination) in queries {
        let outcome: PathOutcome<u32> = finder.find_path(graph, source, destination).unwrap();
        if outcome.is_found() {
            found += 1;
        }
    }
    let duration = start.elapsed();

    println!("  - {} of {} destinations reachable, {:?}", found, queries.len(), duration);
    duration
}

fn main() {
    env_logger::init();

    // Dense matrices grow quadratically, keep sizes moderate
    let graph_sizes = vec![100, 500, 1_000, 2_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;
    let query_count = 50;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("=====================================================");
    println!("Benchmark: adjacency matrix vs adjacency lists");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let list: DirectedGraph<u32> =
            generate_random_graph(size, size * edge_factor, 100u32, &mut rng).unwrap();

        // Same edges in matrix form
        let mut matrix: WeightedDigraph<u32> = WeightedDigraph::new(size).unwrap();
        for tail in 1..=size {
            for (head, weight) in list.outgoing_edges(tail) {
                matrix.add_edge(tail, head, weight).unwrap();
            }
        }

        let queries: Vec<(usize, usize)> = (0..query_count)
            .map(|_| (rng.gen_range(1..=size), rng.gen_range(1..=size)))
            .collect();

        let matrix_time = benchmark_representation("matrix", &matrix, &queries);
        let list_time = benchmark_representation("lists", &list, &queries);

        let start = Instant::now();
        let batch = find_paths(&list, &queries);
        let batch_time = start.elapsed();
        assert_eq!(batch.len(), queries.len());
        println!("  - parallel batch on lists: {:?}", batch_time);

        results.push((size, matrix_time, list_time, batch_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<12} | {:<10}",
             "Vertices", "Matrix (ms)", "Lists (ms)", "Batch (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, matrix_time, list_time, batch_time) in &results {
        let speedup = matrix_time.as_secs_f64() / list_time.as_secs_f64();
        println!("{:<10} | {:<12} | {:<12} | {:<12} | {:<10.2}",
                 size,
                 matrix_time.as_millis(),
                 list_time.as_millis(),
                 batch_time.as_millis(),
                 speedup);
    }
}
