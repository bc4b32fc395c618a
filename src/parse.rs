//! Edge-list parsing
//!
//! Input grammar: `EDGE (',' EDGE)*` where `EDGE := VERTEX '->' VERTEX`.
//! Labels are taken verbatim (no trimming) and may not contain `,` or `->`.
//! Every edge carries weight 1 in this format.

use log::debug;

use crate::error::{GraphError, Result};
use crate::graph::CityGraph;

/// Weight assigned to every edge of the textual format.
const UNIT_WEIGHT: u32 = 1;

/// Parse a delimited edge list into a graph.
///
/// A token that does not split into exactly two non-empty labels fails with
/// [`GraphError::InvalidEdgeFormat`] carrying the offending token. The input
/// is assumed non-empty; callers reject empty input before getting here.
pub fn parse_edge_list(input: &str) -> Result<CityGraph> {
    let mut graph = CityGraph::new();

    for token in input.split(',') {
        let (source, destination) = split_edge(token)?;
        graph.add_edge(source, destination, UNIT_WEIGHT);
    }

    debug!(
        "parsed {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn split_edge(token: &str) -> Result<(&str, &str)> {
    let mut parts = token.split("->");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(destination), None)
            if !source.is_empty() && !destination.is_empty() =>
        {
            Ok((source, destination))
        }
        _ => Err(GraphError::InvalidEdgeFormat(token.to_string())),
    }
}
