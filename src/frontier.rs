//! Priority frontier for the shortest-path solver
//!
//! A min-ordered worklist of (vertex, tentative distance) pairs. Built on
//! `priority_queue` with `Reverse` priorities; the fixed hasher keeps
//! extraction order among equal distances stable across runs.

use std::cmp::Reverse;

use priority_queue::PriorityQueue;
use rustc_hash::FxBuildHasher;

/// Worklist of not-yet-finalized vertices ordered by tentative distance.
///
/// Holds each vertex at most once, so a settled vertex can never be
/// re-extracted.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<u32, Reverse<u32>, FxBuildHasher>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::with_default_hasher(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: PriorityQueue::with_capacity_and_default_hasher(capacity),
        }
    }

    /// Add a vertex at the given tentative distance.
    pub fn insert(&mut self, vertex: u32, distance: u32) {
        self.queue.push(vertex, Reverse(distance));
    }

    /// Remove and return the vertex with the smallest tentative distance.
    pub fn extract_min(&mut self) -> Option<(u32, u32)> {
        self.queue.pop().map(|(vertex, Reverse(distance))| (vertex, distance))
    }

    /// Lower the tentative distance of a pending vertex. A vertex that is no
    /// longer in the frontier is ignored; late relaxations after a vertex
    /// settled must not error.
    pub fn decrease_key(&mut self, vertex: u32, distance: u32) {
        self.queue.change_priority(&vertex, Reverse(distance));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}
