//! Directed weighted graph over interned city labels
//!
//! Vertices are string labels interned to dense `u32` ids in first-seen
//! order; that order is the canonical vertex order for one run and drives
//! the ordering of every downstream result.

use std::collections::HashMap;

/// Adjacency structure plus vertex set, built once per request and read-only
/// during the solve phase.
#[derive(Debug, Default, Clone)]
pub struct CityGraph {
    /// Vertex labels in first-seen order; index in this vec is the vertex id.
    labels: Vec<String>,
    /// Label → vertex id.
    index: HashMap<String, u32>,
    /// Per-source map from neighbor id to edge weight.
    adjacency: Vec<HashMap<u32, u32>>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len() as u32;
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.adjacency.push(HashMap::new());
        id
    }

    /// Register a directed edge. Both endpoints join the vertex set; a
    /// repeated (source, destination) pair overwrites the earlier weight.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: u32) {
        let s = self.intern(source);
        let d = self.intern(destination);
        self.adjacency[s as usize].insert(d, weight);
    }

    /// Vertex labels in canonical (first-seen) order.
    pub fn vertices(&self) -> &[String] {
        &self.labels
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum()
    }

    pub fn index_of(&self, label: &str) -> Option<u32> {
        self.index.get(label).copied()
    }

    pub fn label(&self, vertex: u32) -> &str {
        &self.labels[vertex as usize]
    }

    /// Outgoing (neighbor, weight) pairs of a vertex.
    pub fn neighbors(&self, vertex: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency[vertex as usize]
            .iter()
            .map(|(&n, &w)| (n, w))
    }
}
