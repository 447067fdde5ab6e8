//! Engine-side adapters binding a queue's capability to a relaxation strategy
//!
//! The engine only talks to a [`Frontier`]. Which one it gets is decided when
//! the queue is chosen: adaptable queues are wrapped in [`AdaptableFrontier`],
//! which keeps a vertex-to-handle table and updates entries in place; plain
//! queues are wrapped in [`DuplicatingFrontier`], which inserts a new entry on
//! every improvement and leaves stale ones for the engine to skip.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::SearchStats;
use crate::data_structures::{AdaptablePriorityQueue, Handle, PriorityQueue};
use crate::Result;

/// The set of discovered but not yet finalized vertices, keyed by tentative distance
pub trait Frontier<V, W> {
    /// Offers a vertex at an improved tentative distance
    fn offer(&mut self, vertex: V, distance: W) -> Result<()>;

    /// Takes the vertex with the smallest tentative distance
    fn take_min(&mut self) -> Option<V>;

    /// Number of entries currently queued
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue activity so far
    fn stats(&self) -> SearchStats;
}

/// Frontier over an adaptable queue: one live entry per vertex, updated in place
#[derive(Debug)]
pub struct AdaptableFrontier<Q, V> {
    queue: Q,
    handles: HashMap<V, Handle>,
    stats: SearchStats,
}

impl<Q, V> AdaptableFrontier<Q, V>
where
    V: Eq + Hash,
{
    pub fn new(queue: Q) -> Self {
        AdaptableFrontier {
            queue,
            handles: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn into_inner(self) -> Q {
        self.queue
    }
}

impl<Q, V, W> Frontier<V, W> for AdaptableFrontier<Q, V>
where
    Q: AdaptablePriorityQueue<W, V>,
    V: Copy + Eq + Hash + Debug,
{
    fn offer(&mut self, vertex: V, distance: W) -> Result<()> {
        match self.handles.get(&vertex) {
            Some(&handle) if self.queue.contains(handle) => {
                self.queue.update_key(handle, distance)?;
                self.stats.updates += 1;
            }
            _ => {
                let handle = self.queue.insert_with_handle(distance, vertex);
                self.handles.insert(vertex, handle);
                self.stats.insertions += 1;
                self.stats.peak_queue_len = self.stats.peak_queue_len.max(self.queue.len());
            }
        }
        Ok(())
    }

    fn take_min(&mut self) -> Option<V> {
        self.queue.extract_min()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Frontier over a plain queue: every improvement becomes a new entry
#[derive(Debug)]
pub struct DuplicatingFrontier<Q> {
    queue: Q,
    stats: SearchStats,
}

impl<Q> DuplicatingFrontier<Q> {
    pub fn new(queue: Q) -> Self {
        DuplicatingFrontier {
            queue,
            stats: SearchStats::default(),
        }
    }

    pub fn into_inner(self) -> Q {
        self.queue
    }
}

impl<Q, V, W> Frontier<V, W> for DuplicatingFrontier<Q>
where
    Q: PriorityQueue<W, V>,
{
    fn offer(&mut self, vertex: V, distance: W) -> Result<()> {
        self.queue.insert(distance, vertex);
        self.stats.insertions += 1;
        self.stats.peak_queue_len = self.stats.peak_queue_len.max(self.queue.len());
        Ok(())
    }

    fn take_min(&mut self) -> Option<V> {
        self.queue.extract_min()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
