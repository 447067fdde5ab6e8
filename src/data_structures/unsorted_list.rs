//! Adaptable priority queue over an unsorted list
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(1)       |
//! | `peek_min`    | O(n)       |
//! | `extract_min` | O(n)       |
//! | `update_key`  | O(1)       |
//! | `remove`      | O(1)       |

use crate::data_structures::element::ElementStore;
use crate::data_structures::{AdaptablePriorityQueue, Handle, PriorityQueue};
use crate::{Error, Result};

/// Adaptable priority queue that keeps its entries in insertion order
///
/// There is no ordering invariant beyond containment, so key updates are plain
/// overwrites and every minimum query scans the whole list.
#[derive(Debug)]
pub struct UnsortedListApq<K, V> {
    store: ElementStore<K, V>,
}

impl<K, V> UnsortedListApq<K, V>
where
    K: PartialOrd,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        UnsortedListApq {
            store: ElementStore::new(),
        }
    }

    /// Creates a new empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        UnsortedListApq {
            store: ElementStore::with_capacity(capacity),
        }
    }

    /// Removes every entry, invalidating all outstanding handles
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns true if every live handle's recorded position is its true index
    pub fn is_position_coherent(&self) -> bool {
        self.store.is_position_coherent()
    }

    /// Returns the position of a handle's entry in the backing list
    pub fn position(&self, handle: Handle) -> Result<usize> {
        self.store.position_of(handle)
    }

    fn min_position(&self) -> Option<usize> {
        if self.store.len() == 0 {
            return None;
        }
        let mut min = 0;
        for i in 1..self.store.len() {
            if self.store.key_at(i) < self.store.key_at(min) {
                min = i;
            }
        }
        Some(min)
    }
}

impl<K, V> Default for UnsortedListApq<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PriorityQueue<K, V> for UnsortedListApq<K, V>
where
    K: PartialOrd,
{
    fn insert(&mut self, key: K, value: V) {
        self.store.push(key, value);
    }

    fn peek_min(&self) -> Option<&V> {
        self.min_position().map(|i| self.store.value_at(i))
    }

    fn extract_min(&mut self) -> Option<V> {
        let min = self.min_position()?;
        let last = self.store.len() - 1;
        self.store.swap(min, last);
        self.store.pop().map(|element| element.into_value())
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl<K, V> AdaptablePriorityQueue<K, V> for UnsortedListApq<K, V>
where
    K: PartialOrd,
{
    fn insert_with_handle(&mut self, key: K, value: V) -> Handle {
        self.store.push(key, value)
    }

    fn update_key(&mut self, handle: Handle, key: K) -> Result<()> {
        self.store.replace_key(handle, key).map(|_| ())
    }

    fn get_key(&self, handle: Handle) -> Result<&K> {
        self.store.get(handle).map(|element| element.key())
    }

    fn remove(&mut self, handle: Handle) -> Result<(K, V)> {
        let position = self.store.position_of(handle)?;
        let last = self.store.len() - 1;
        self.store.swap(position, last);
        let element = self.store.pop().ok_or(Error::StaleHandle)?;
        Ok(element.into_parts())
    }

    fn contains(&self, handle: Handle) -> bool {
        self.store.contains(handle)
    }
}
