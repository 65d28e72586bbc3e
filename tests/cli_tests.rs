use gps_route::cli::{format_outcome, Shell};
use gps_route::config::{Representation, RouteConfig};
use gps_route::graph::{MutableGraph, WeightedDigraph};
use gps_route::{PathOutcome, Route, ShortestPathFinder};
use std::time::Duration;

fn sample_graph() -> WeightedDigraph<u32> {
    let mut graph = WeightedDigraph::new(4).unwrap();
    graph.add_edge(1, 2, 4).unwrap();
    graph.add_edge(1, 3, 1).unwrap();
    graph.add_edge(3, 2, 1).unwrap();
    graph
}

// Drives one whole session and returns everything it printed
fn transcript(graph: &WeightedDigraph<u32>, input: &str) -> String {
    let mut output = Vec::new();
    Shell::new(graph, input.as_bytes(), &mut output).run().unwrap();
    String::from_utf8(output).unwrap()
}

const MENU: &str = "The current graph has vertices from 1 to 4.\nWould you like to:\n1. Find a new route\n2. Exit\n";

#[test]
fn test_route_query_prints_path_and_cost() {
    let out = transcript(&sample_graph(), "1\n1\n2\n2\n");

    assert!(out.starts_with(MENU));
    assert!(out.contains("Source: Destination: "));
    assert!(out.contains("\nResults -- Shortest path from 1 to 2\nPath: 1->3->2\n\nTotal cost: 2\n"));
    assert!(out.contains("\nTotal time: 0."));
    assert!(out.ends_with("\nExited.\n"));
    assert_eq!(out.matches(MENU).count(), 2);
}

#[test]
fn test_unreachable_destination_is_reported() {
    let out = transcript(&sample_graph(), "1\n2\n4\n2\n");
    assert!(out.contains("No path exists from 2 to 4."));
    assert!(!out.contains("Total cost"));
}

#[test]
fn test_invalid_vertex_is_reprompted() {
    let out = transcript(&sample_graph(), "1\n0\nfive\n1\n9\n3\n2\n");

    assert_eq!(out.matches("Invalid entry.").count(), 3);
    assert_eq!(out.matches("Source: ").count(), 3);
    assert_eq!(out.matches("Destination: ").count(), 2);
    assert!(out.contains("Path: 1->3\n"));
}

#[test]
fn test_invalid_menu_choice() {
    let out = transcript(&sample_graph(), "7\n2\n");
    assert!(out.contains("Invalid entry.\n\n"));
    assert_eq!(out.matches(MENU).count(), 2);
}

#[test]
fn test_end_of_input_exits_cleanly() {
    assert!(transcript(&sample_graph(), "").ends_with("\nExited.\n"));
    assert!(transcript(&sample_graph(), "1\n3\n").ends_with("Destination: \nExited.\n"));
}

#[test]
fn test_custom_finder_and_precision() {
    let graph = sample_graph();
    let mut output = Vec::new();
    Shell::new(&graph, "1\n1\n2\n2\n".as_bytes(), &mut output)
        .with_finder(ShortestPathFinder::new().with_early_exit(false))
        .with_time_precision(5)
        .run()
        .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Total cost: 2"));
    let time_line = out.lines().find(|l| l.starts_with("Total time: ")).unwrap();
    let digits = time_line.trim_start_matches("Total time: ").trim_end_matches(" sec");
    assert_eq!(digits.split('.').nth(1).unwrap().len(), 5);
}

#[test]
fn test_shell_uses_configured_defaults() {
    let config = RouteConfig::default();
    assert_eq!(config.representation, Representation::Matrix);
    assert!(config.early_exit);
    assert_eq!(config.time_precision, 3);

    let out = transcript(&sample_graph(), "1\n1\n2\n2\n");
    let time_line = out.lines().find(|l| l.starts_with("Total time: ")).unwrap();
    let digits = time_line.trim_start_matches("Total time: ").trim_end_matches(" sec");
    assert_eq!(digits.split('.').nth(1).unwrap().len(), config.time_precision);
}

#[test]
fn test_format_outcome() {
    let found = PathOutcome::Found(Route { vertices: vec![5, 1, 9], cost: 12u32 });
    assert_eq!(
        format_outcome(5, 9, &found, Duration::from_millis(1234), 3),
        "\nResults -- Shortest path from 5 to 9\nPath: 5->1->9\n\nTotal cost: 12\n\nTotal time: 1.234 sec\n\n"
    );

    let missing: PathOutcome<u32> = PathOutcome::NoPath;
    assert_eq!(
        format_outcome(2, 3, &missing, Duration::from_millis(5), 3),
        "\nNo path exists from 2 to 3.\n\nTotal time: 0.005 sec\n\n"
    );
}
