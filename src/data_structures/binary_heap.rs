//! Adaptable binary min-heap
//!
//! The heap is a complete binary tree stored densely in an array: the children
//! of position `i` sit at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//! Every element records its own position, so a [`Handle`] can reach it in O(1)
//! and repair the heap from there.
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `peek_min`    | O(1)       |
//! | `extract_min` | O(log n)   |
//! | `update_key`  | O(log n)   |
//! | `remove`      | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use apq_dijkstra::{AdaptablePriorityQueue, BinaryHeapApq, PriorityQueue};
//!
//! let mut heap = BinaryHeapApq::new();
//! let ant = heap.insert_with_handle(25, "ant");
//! heap.insert_with_handle(4, "bed");
//! heap.update_key(ant, 1).unwrap();
//!
//! assert_eq!(heap.extract_min(), Some("ant"));
//! assert_eq!(heap.extract_min(), Some("bed"));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::data_structures::element::ElementStore;
use crate::data_structures::{AdaptablePriorityQueue, Handle, PriorityQueue};
use crate::{Error, Result};

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

/// Adaptable priority queue backed by an array binary heap
#[derive(Debug)]
pub struct BinaryHeapApq<K, V> {
    store: ElementStore<K, V>,
}

impl<K, V> BinaryHeapApq<K, V>
where
    K: PartialOrd,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        BinaryHeapApq {
            store: ElementStore::new(),
        }
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapApq {
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

    /// Returns true if no element's key is greater than either of its children's
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.store.len()).all(|i| !(self.store.key_at(i) < self.store.key_at(parent(i))))
    }

    /// Returns the position of a handle's entry in the heap array
    pub fn position(&self, handle: Handle) -> Result<usize> {
        self.store.position_of(handle)
    }

    /// Moves the element at `index` towards the root while its parent's key is greater
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.store.key_at(index) < self.store.key_at(up) {
                self.store.swap(index, up);
                index = up;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` towards the leaves while a child's key is smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.store.len();
        loop {
            let mut smallest = index;
            let l = left(index);
            let r = right(index);

            if l < len && self.store.key_at(l) < self.store.key_at(smallest) {
                smallest = l;
            }
            if r < len && self.store.key_at(r) < self.store.key_at(smallest) {
                smallest = r;
            }
            if smallest == index {
                break;
            }

            self.store.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<K, V> Default for BinaryHeapApq<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PriorityQueue<K, V> for BinaryHeapApq<K, V>
where
    K: PartialOrd,
{
    fn insert(&mut self, key: K, value: V) {
        self.insert_with_handle(key, value);
    }

    fn peek_min(&self) -> Option<&V> {
        if self.store.len() == 0 {
            return None;
        }
        Some(self.store.value_at(0))
    }

    fn extract_min(&mut self) -> Option<V> {
        if self.store.len() == 0 {
            return None;
        }
        let last = self.store.len() - 1;
        self.store.swap(0, last);
        let min = self.store.pop();
        if self.store.len() > 0 {
            self.sift_down(0);
        }
        min.map(|element| element.into_value())
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl<K, V> AdaptablePriorityQueue<K, V> for BinaryHeapApq<K, V>
where
    K: PartialOrd,
{
    fn insert_with_handle(&mut self, key: K, value: V) -> Handle {
        let handle = self.store.push(key, value);
        self.sift_up(self.store.len() - 1);
        handle
    }

    fn update_key(&mut self, handle: Handle, key: K) -> Result<()> {
        let position = self.store.position_of(handle)?;
        let decreased = {
            let old = self.store.get(handle)?.key();
            key < *old
        };
        self.store.replace_key(handle, key)?;
        if decreased {
            self.sift_up(position);
        } else {
            self.sift_down(position);
        }
        Ok(())
    }

    fn get_key(&self, handle: Handle) -> Result<&K> {
        self.store.get(handle).map(|element| element.key())
    }

    fn remove(&mut self, handle: Handle) -> Result<(K, V)> {
        let position = self.store.position_of(handle)?;
        let last = self.store.len() - 1;
        self.store.swap(position, last);
        let element = self.store.pop().ok_or(Error::StaleHandle)?;

        // The former tail now sits at `position` and may violate order either way.
        if position < self.store.len() {
            self.sift_up(position);
            self.sift_down(position);
        }
        Ok(element.into_parts())
    }

    fn contains(&self, handle: Handle) -> bool {
        self.store.contains(handle)
    }
}
