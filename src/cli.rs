//! Interactive route-finding shell.
//!
//! The shell owns the console side of the program: the menu loop, prompting
//! and validating endpoints, timing each search and printing the result. It is
//! generic over its input and output so whole sessions can be driven from
//! memory in tests.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use log::debug;

use crate::algorithm::{PathOutcome, ShortestPathAlgorithm};
use crate::algorithm::dijkstra::ShortestPathFinder;
use crate::config::RouteConfig;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Menu loop over one loaded graph
pub struct Shell<'g, W, G, R, O>
where
    W: Weight,
    G: Graph<W>,
    R: BufRead,
    O: Write,
{
    graph: &'g G,
    finder: ShortestPathFinder,
    input: R,
    output: O,
    time_precision: usize,
    _weight: PhantomData<W>,
}

impl<'g, W, G, R, O> Shell<'g, W, G, R, O>
where
    W: Weight,
    G: Graph<W>,
    R: BufRead,
    O: Write,
{
    pub fn new(graph: &'g G, input: R, output: O) -> Self {
        Shell {
            graph,
            finder: ShortestPathFinder::new(),
            input,
            output,
            time_precision: RouteConfig::default().time_precision,
            _weight: PhantomData,
        }
    }

    pub fn with_finder(mut self, finder: ShortestPathFinder) -> Self {
        self.finder = finder;
        self
    }

    pub fn with_time_precision(mut self, digits: usize) -> Self {
        self.time_precision = digits;
        self
    }

    /// Runs the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(
                self.output,
                "The current graph has vertices from 1 to {}.\nWould you like to:\n1. Find a new route\n2. Exit\n",
                self.graph.vertex_count()
            )?;
            self.output.flush()?;

            let choice = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            match choice.as_str() {
                "1" => {
                    if !self.route_query()? {
                        break;
                    }
                }
                "2" => break,
                _ => writeln!(self.output, "Invalid entry.\n")?,
            }
        }

        writeln!(self.output, "\nExited.")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts for both endpoints and prints the result. Returns false if
    /// input ended mid-query.
    fn route_query(&mut self) -> Result<bool> {
        let source = match self.prompt_vertex("Source")? {
            Some(v) => v,
            None => return Ok(false),
        };
        let destination = match self.prompt_vertex("Destination")? {
            Some(v) => v,
            None => return Ok(false),
        };

        let start = Instant::now();
        let outcome: PathOutcome<W> = self.finder.find_path(self.graph, source, destination)?;
        let elapsed = start.elapsed();
        debug!("Query {} -> {} took {:?}", source, destination, elapsed);

        let report = format_outcome(source, destination, &outcome, elapsed, self.time_precision);
        self.output.write_all(report.as_bytes())?;
        Ok(true)
    }

    /// Asks for a vertex id until a value in `1..=V` is entered
    fn prompt_vertex(&mut self, label: &str) -> Result<Option<usize>> {
        loop {
            write!(self.output, "{}: ", label)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.parse::<usize>() {
                Ok(vertex) if self.graph.has_vertex(vertex) => return Ok(Some(vertex)),
                _ => writeln!(self.output, "Invalid entry.")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Formats the outcome of one query the way the shell prints it
pub fn format_outcome<W>(
    source: usize,
    destination: usize,
    outcome: &PathOutcome<W>,
    elapsed: Duration,
    time_precision: usize,
) -> String
where
    W: Weight,
{
    let mut out = String::new();
    match outcome {
        PathOutcome::Found(route) => {
            let _ = write!(
                out,
                "\nResults -- Shortest path from {} to {}\nPath: {}\n\nTotal cost: {}\n\nTotal time: {:.*} sec\n\n",
                source,
                destination,
                route,
                route.cost,
                time_precision,
                elapsed.as_secs_f64()
            );
        }
        PathOutcome::NoPath => {
            let _ = write!(
                out,
                "\nNo path exists from {} to {}.\n\nTotal time: {:.*} sec\n\n",
                source,
                destination,
                time_precision,
                elapsed.as_secs_f64()
            );
        }
    }
    out
}
