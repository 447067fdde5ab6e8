//! Queue capabilities shared by every priority queue in the crate
//!
//! - [`PriorityQueue`]: the base capability (insert, peek-min, extract-min, size)
//! - [`AdaptablePriorityQueue`]: the extended capability adding handle-based
//!   key updates and removal
//!
//! All queues are min-queues: the entry with the smallest key comes out first.

use crate::data_structures::Handle;
use crate::Result;

/// Base capability of a min-priority queue
pub trait PriorityQueue<K, V> {
    /// Inserts `value` with priority `key`
    fn insert(&mut self, key: K, value: V);

    /// Returns the value with the minimum key, or `None` if the queue is empty
    fn peek_min(&self) -> Option<&V>;

    /// Removes and returns the value with the minimum key, or `None` if the queue is empty
    fn extract_min(&mut self) -> Option<V>;

    /// Returns the number of entries in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue has no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extended capability for queues whose entries can be addressed after insertion
///
/// `insert_with_handle` returns a [`Handle`] that stays valid until the entry
/// leaves the queue, whichever way the backing store is reordered in between.
pub trait AdaptablePriorityQueue<K, V>: PriorityQueue<K, V> {
    /// Inserts `value` with priority `key` and returns a handle to the new entry
    fn insert_with_handle(&mut self, key: K, value: V) -> Handle;

    /// Replaces the key of the entry behind `handle`, restoring queue order
    ///
    /// # Errors
    /// Returns `Error::StaleHandle` if the entry has already left the queue.
    fn update_key(&mut self, handle: Handle, key: K) -> Result<()>;

    /// Returns the current key of the entry behind `handle`
    fn get_key(&self, handle: Handle) -> Result<&K>;

    /// Removes the entry behind `handle` and returns its key and value
    fn remove(&mut self, handle: Handle) -> Result<(K, V)>;

    /// Returns true if `handle` still refers to an entry in the queue
    fn contains(&self, handle: Handle) -> bool;
}
