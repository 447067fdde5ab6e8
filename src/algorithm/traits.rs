use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// Counters collected while running a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Values taken out of the queue, stale ones included
    pub extractions: usize,

    /// Extracted values skipped because their vertex was already closed
    pub stale_skips: usize,

    /// Fresh entries added to the queue
    pub insertions: usize,

    /// In-place key updates (adaptable queues only)
    pub updates: usize,

    /// Largest number of entries held by the queue at once
    pub peak_queue_len: usize,
}

/// Result of a shortest path search: the closed set
///
/// Maps every finalized vertex to its shortest distance from the source and its
/// predecessor on a shortest path. Vertices are kept in the order they were
/// finalized, which is nondecreasing in distance.
#[derive(Debug, Clone)]
pub struct ClosedSet<V, W>
where
    V: Copy + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex of the search
    source: V,

    /// (distance, predecessor) for each closed vertex
    entries: HashMap<V, (W, Option<V>)>,

    /// Closed vertices in finalization order
    order: Vec<V>,

    stats: SearchStats,
}

impl<V, W> ClosedSet<V, W>
where
    V: Copy + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(source: V) -> Self {
        ClosedSet {
            source,
            entries: HashMap::new(),
            order: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Records a finalized vertex, returning false if it was already closed
    pub(crate) fn close(&mut self, vertex: V, distance: W, predecessor: Option<V>) -> bool {
        if self.entries.contains_key(&vertex) {
            return false;
        }
        self.entries.insert(vertex, (distance, predecessor));
        self.order.push(vertex);
        true
    }

    pub(crate) fn set_stats(&mut self, stats: SearchStats) {
        self.stats = stats;
    }

    pub fn source(&self) -> V {
        self.source
    }

    /// Returns true if the vertex has been finalized
    pub fn contains(&self, vertex: V) -> bool {
        self.entries.contains_key(&vertex)
    }

    /// Returns the (distance, predecessor) pair of a closed vertex
    pub fn get(&self, vertex: V) -> Option<(W, Option<V>)> {
        self.entries.get(&vertex).copied()
    }

    /// Shortest distance to a vertex; infinity if it was never closed
    pub fn distance(&self, vertex: V) -> W {
        self.entries
            .get(&vertex)
            .map_or_else(W::infinity, |(distance, _)| *distance)
    }

    /// Predecessor of a vertex on its shortest path
    pub fn predecessor(&self, vertex: V) -> Option<V> {
        self.entries.get(&vertex).and_then(|(_, predecessor)| *predecessor)
    }

    /// Number of closed vertices
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Closed vertices in the order they were finalized
    pub fn finalization_order(&self) -> &[V] {
        &self.order
    }

    /// Iterates over (vertex, distance, predecessor) in finalization order
    pub fn iter(&self) -> impl Iterator<Item = (V, W, Option<V>)> + '_ {
        self.order.iter().map(move |v| {
            let (distance, predecessor) = self.entries[v];
            (*v, distance, predecessor)
        })
    }

    /// Distance table of the closed vertices
    pub fn distances(&self) -> HashMap<V, W> {
        self.entries.iter().map(|(v, (d, _))| (*v, *d)).collect()
    }

    /// Predecessor table of the closed vertices
    pub fn predecessors(&self) -> HashMap<V, Option<V>> {
        self.entries.iter().map(|(v, (_, p))| (*v, *p)).collect()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Reconstructs the shortest path from the source to `target`
    ///
    /// Returns `None` if the target was not reached or the predecessor chain
    /// does not lead back to the source.
    pub fn path_to(&self, target: V) -> Option<Vec<V>> {
        let (distance, _) = self.get(target)?;
        if distance.is_infinite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                return None;
            }
            path.push(current);
            current = self.predecessor(current)?;
        }

        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Computes shortest paths from `source`; `target` is consulted by algorithms that can stop early
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: G::Vertex,
        target: G::Vertex,
    ) -> Result<ClosedSet<G::Vertex, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ClosedSet<G::Vertex, W>, target: G::Vertex) -> Option<Vec<G::Vertex>> {
        result.path_to(target)
    }
}
