use crate::data_structures::PriorityQueue;

/// A plain min-priority queue without handle support
///
/// Entries cannot be addressed after insertion, so a caller that wants to lower
/// a value's priority has to insert it again. Superseded entries stay in the
/// queue and come back out of `extract_min` later; skipping them is the
/// caller's job.
///
/// Entries are kept unsorted: `insert` is O(1) while `peek_min` and
/// `extract_min` scan the whole list.
#[derive(Debug, Clone)]
pub struct PlainQueue<K, V> {
    /// Unordered (priority, value) pairs
    entries: Vec<(K, V)>,
}

impl<K, V> PlainQueue<K, V>
where
    K: PartialOrd,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PlainQueue {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PlainQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn min_index(&self) -> Option<usize> {
        let mut entries = self.entries.iter().enumerate();
        let (mut min, mut min_key) = entries.next().map(|(i, (key, _))| (i, key))?;
        for (i, (key, _)) in entries {
            if key < min_key {
                min = i;
                min_key = key;
            }
        }
        Some(min)
    }
}

impl<K, V> Default for PlainQueue<K, V>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PriorityQueue<K, V> for PlainQueue<K, V>
where
    K: PartialOrd,
{
    fn insert(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    fn peek_min(&self) -> Option<&V> {
        self.min_index().map(|i| &self.entries[i].1)
    }

    fn extract_min(&mut self) -> Option<V> {
        let min = self.min_index()?;
        Some(self.entries.swap_remove(min).1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
