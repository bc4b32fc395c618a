//! All-pairs distance table assembly
//!
//! Runs one single-source solve per vertex and collects the results into an
//! ordered sequence of (source, destination, distance) records. The solves
//! are read-only over the shared graph and mutually independent, so they fan
//! out across threads; collection stays in canonical vertex order regardless
//! of completion order.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::CityGraph;
use crate::parse::parse_edge_list;
use crate::solve::{shortest_distances, INFINITY};

/// Output sentinel for an ordered pair with no directed path.
pub const UNREACHABLE: i64 = -1;

/// One ordered pair of distinct vertices and its shortest distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub source: String,
    pub destination: String,
    /// Non-negative shortest distance, or [`UNREACHABLE`].
    pub distance: i64,
}

/// Compute the full pairwise distance table of a graph.
///
/// Records are grouped by source in canonical vertex order, destinations in
/// the same order within each group; self-pairs are dropped. The result
/// holds exactly |V|·(|V|-1) records.
pub fn build_distance_table(graph: &CityGraph) -> Result<Vec<DistanceRecord>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    // One solve per start vertex, in parallel. The indexed collect keeps
    // per-source results in canonical order whatever the completion order.
    let per_source: Vec<Vec<u32>> = graph
        .vertices()
        .par_iter()
        .map(|start| shortest_distances(graph, start))
        .collect::<Result<_>>()?;

    let n = graph.vertex_count();
    let mut records = Vec::with_capacity(n * n.saturating_sub(1));

    for (s, distances) in per_source.iter().enumerate() {
        for (d, &distance) in distances.iter().enumerate() {
            if s == d {
                continue;
            }
            records.push(DistanceRecord {
                source: graph.vertices()[s].clone(),
                destination: graph.vertices()[d].clone(),
                distance: if distance == INFINITY {
                    UNREACHABLE
                } else {
                    i64::from(distance)
                },
            });
        }
    }

    debug!("assembled {} distance records", records.len());

    Ok(records)
}

/// Parse an edge list and compute its distance table in one step.
///
/// Empty input is rejected with [`GraphError::EmptyGraph`] before the parser
/// runs.
pub fn distance_table_from_text(input: &str) -> Result<Vec<DistanceRecord>> {
    if input.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let graph = parse_edge_list(input)?;
    build_distance_table(&graph)
}
