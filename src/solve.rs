//! Single-source shortest-path solver
//!
//! Classic Dijkstra relaxation over non-negative integer weights. The
//! non-negativity precondition is carried by the `u32` weight type; the
//! solver does not (and cannot) see negative edges.

use crate::error::{GraphError, Result};
use crate::frontier::PriorityFrontier;
use crate::graph::CityGraph;

/// In-solver distance sentinel for "not reached".
pub const INFINITY: u32 = u32::MAX;

/// Compute shortest distances from `start` to every vertex of the graph.
///
/// Returns one distance per vertex in canonical vertex order; vertices with
/// no directed path from `start` keep [`INFINITY`]. Disconnected graphs are
/// not an error. A `start` label absent from the vertex set fails fast with
/// [`GraphError::InvalidStartVertex`].
pub fn shortest_distances(graph: &CityGraph, start: &str) -> Result<Vec<u32>> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| GraphError::InvalidStartVertex(start.to_string()))?;

    let n = graph.vertex_count();
    let mut dist = vec![INFINITY; n];
    dist[source as usize] = 0;

    // Seed the whole vertex set up front; unreached vertices sit at INFINITY
    // until a relaxation lowers them. Each vertex is inserted exactly once.
    let mut frontier = PriorityFrontier::with_capacity(n);
    for vertex in 0..n as u32 {
        frontier.insert(vertex, dist[vertex as usize]);
    }

    while let Some((current, current_dist)) = frontier.extract_min() {
        // Relaxing from an INFINITY vertex saturates back to INFINITY and
        // never improves anything, so no reachability guard is needed.
        for (neighbor, weight) in graph.neighbors(current) {
            let candidate = current_dist.saturating_add(weight);
            if candidate < dist[neighbor as usize] {
                dist[neighbor as usize] = candidate;
                frontier.decrease_key(neighbor, candidate);
            }
        }
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_edge_list;

    fn dist_by_label(graph: &CityGraph, dist: &[u32], label: &str) -> u32 {
        dist[graph.index_of(label).unwrap() as usize]
    }

    #[test]
    fn chain_distances_are_hop_counts() {
        let graph = parse_edge_list("A->B,B->C").unwrap();
        let dist = shortest_distances(&graph, "A").unwrap();

        assert_eq!(dist_by_label(&graph, &dist, "A"), 0);
        assert_eq!(dist_by_label(&graph, &dist, "B"), 1);
        assert_eq!(dist_by_label(&graph, &dist, "C"), 2);
    }

    #[test]
    fn edges_are_one_directional() {
        let graph = parse_edge_list("A->B").unwrap();
        let dist = shortest_distances(&graph, "B").unwrap();

        assert_eq!(dist_by_label(&graph, &dist, "B"), 0);
        assert_eq!(dist_by_label(&graph, &dist, "A"), INFINITY);
    }

    #[test]
    fn weighted_graph_prefers_cheaper_detour() {
        // Direct A->C costs 10; A->B->C costs 3.
        let mut graph = CityGraph::new();
        graph.add_edge("A", "C", 10);
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);

        let dist = shortest_distances(&graph, "A").unwrap();
        assert_eq!(dist_by_label(&graph, &dist, "C"), 3);
    }

    #[test]
    fn zero_weight_edges_are_free() {
        let mut graph = CityGraph::new();
        graph.add_edge("A", "B", 0);
        graph.add_edge("B", "C", 4);

        let dist = shortest_distances(&graph, "A").unwrap();
        assert_eq!(dist_by_label(&graph, &dist, "B"), 0);
        assert_eq!(dist_by_label(&graph, &dist, "C"), 4);
    }

    #[test]
    fn unknown_start_fails_fast() {
        let graph = parse_edge_list("A->B").unwrap();
        let err = shortest_distances(&graph, "Z").unwrap_err();
        assert_eq!(err, GraphError::InvalidStartVertex("Z".to_string()));
    }
}
