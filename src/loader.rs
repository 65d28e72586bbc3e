//! Reading graphs in the `p sp` / `a` line format.
//!
//! 1. lines before the header whose first token is not `p` are skipped
//! 2. the header has the form `p sp <V> <E>`, where `<V>` is the number of
//!    vertices and `<E>` the number of edges (informational only)
//! 3. after the header, lines whose first token is `a` are edges
//!    `a <tail> <head> <weight>` with `1 <= tail, head <= V` and a positive
//!    weight; every other line is ignored

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use log::{debug, info, warn};

use crate::graph::{MutableGraph, Weight};
use crate::{Error, Result};

/// Reads a graph from any byte source
pub fn read_graph<G, W, R>(reader: R) -> Result<G>
where
    G: MutableGraph<W>,
    W: Weight + FromStr,
    R: Read,
{
    let mut lines = BufReader::new(reader).lines();
    let mut line_number = 0;

    // Skip everything up to the header
    let (vertex_count, declared_edges) = loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(Error::MissingHeader),
        };
        line_number += 1;

        let mut tokens = line.split_whitespace();
        if tokens.next() == Some("p") {
            break parse_header(tokens, line_number)?;
        }
    };

    let mut graph = G::with_vertices(vertex_count).map_err(|e| Error::Format {
        line: line_number,
        msg: e.to_string(),
    })?;

    for line in lines {
        let line = line?;
        line_number += 1;

        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("a") {
            continue;
        }
        let tail: usize = parse_token(&mut tokens, "tail", line_number)?;
        let head: usize = parse_token(&mut tokens, "head", line_number)?;
        let weight: W = parse_token(&mut tokens, "weight", line_number)?;

        graph
            .add_edge(tail, head, weight)
            .map_err(|e| Error::Format {
                line: line_number,
                msg: e.to_string(),
            })?;
    }

    if let Some(declared) = declared_edges {
        if declared != graph.edge_count() {
            warn!(
                "Header declares {} edges but {} distinct edges were read",
                declared,
                graph.edge_count()
            );
        }
    }
    debug!("Read {} lines", line_number);

    Ok(graph)
}

/// Opens and reads a graph file
pub fn load_graph_file<G, W, P>(path: P) -> Result<G>
where
    G: MutableGraph<W>,
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_graph::<G, W, _>(file)?;
    info!(
        "Loaded {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses the tokens following `p`; the edge count may be absent
fn parse_header(mut tokens: SplitWhitespace<'_>, line: usize) -> Result<(usize, Option<usize>)> {
    match tokens.next() {
        Some("sp") => {}
        Some(other) => {
            return Err(Error::Format {
                line,
                msg: format!("expected problem type `sp`, got `{}`", other),
            })
        }
        None => {
            return Err(Error::Format {
                line,
                msg: "missing problem type".to_string(),
            })
        }
    }

    let vertex_count = parse_token(&mut tokens, "vertex count", line)?;
    let declared_edges = match tokens.next() {
        Some(tok) => Some(tok.parse().map_err(|_| Error::Format {
            line,
            msg: format!("invalid edge count `{}`", tok),
        })?),
        None => None,
    };

    Ok((vertex_count, declared_edges))
}

fn parse_token<T: FromStr>(tokens: &mut SplitWhitespace<'_>, what: &str, line: usize) -> Result<T> {
    let tok = tokens.next().ok_or_else(|| Error::Format {
        line,
        msg: format!("missing {}", what),
    })?;
    tok.parse().map_err(|_| Error::Format {
        line,
        msg: format!("invalid {} `{}`", what, tok),
    })
}
