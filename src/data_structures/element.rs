use crate::{Error, Result};

/// An opaque reference to a live entry of an adaptable priority queue
///
/// Handles stay valid while the queue reorders its backing store. Once the entry
/// is extracted or removed, its handle goes stale: every queue operation given a
/// stale handle fails with [`Error::StaleHandle`] and leaves the queue untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    generation: u32,
}

/// A key, value and position
///
/// `position` is the element's current index in the queue's backing store.
#[derive(Debug, Clone)]
pub struct Element<K, V> {
    key: K,
    value: V,
    position: usize,
}

impl<K, V> Element<K, V> {
    /// The element's priority
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Index of the element in the backing store
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

#[derive(Debug)]
struct Slot<K, V> {
    generation: u32,
    element: Option<Element<K, V>>,
}

/// Array-backed element storage shared by the adaptable queues
///
/// Elements live in generation-checked arena slots so handles keep pointing at
/// the same element. `order` is the backing store the queues reason about: it
/// lists slot ids by position, and every move through [`ElementStore::swap`]
/// rewrites the moved elements' `position` fields.
#[derive(Debug)]
pub(crate) struct ElementStore<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    order: Vec<usize>,
}

impl<K, V> ElementStore<K, V> {
    pub(crate) fn new() -> Self {
        ElementStore {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        ElementStore {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            order: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Appends a new element at the end of the backing store
    pub(crate) fn push(&mut self, key: K, value: V) -> Handle {
        let position = self.order.len();
        let element = Element {
            key,
            value,
            position,
        };

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot].element = Some(element);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element: Some(element),
                });
                self.slots.len() - 1
            }
        };

        self.order.push(slot);
        Handle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Removes the last element of the backing store and retires its handle
    pub(crate) fn pop(&mut self) -> Option<Element<K, V>> {
        let slot = self.order.pop()?;
        let entry = &mut self.slots[slot];
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
        entry.element.take()
    }

    /// Swaps the elements at positions `i` and `j`, keeping both positions current
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        debug_assert!(
            self.at(i).position == i && self.at(j).position == j,
            "positions out of sync before swapping {} and {}",
            i,
            j
        );
        self.order.swap(i, j);
        self.at_mut(i).position = i;
        self.at_mut(j).position = j;
    }

    pub(crate) fn key_at(&self, position: usize) -> &K {
        &self.at(position).key
    }

    pub(crate) fn value_at(&self, position: usize) -> &V {
        &self.at(position).value
    }

    pub(crate) fn get(&self, handle: Handle) -> Result<&Element<K, V>> {
        self.slots
            .get(handle.slot)
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.element.as_ref())
            .ok_or(Error::StaleHandle)
    }

    pub(crate) fn position_of(&self, handle: Handle) -> Result<usize> {
        self.get(handle).map(Element::position)
    }

    /// Overwrites the key of a live element, returning the previous key
    pub(crate) fn replace_key(&mut self, handle: Handle, key: K) -> Result<K> {
        let element = self
            .slots
            .get_mut(handle.slot)
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.element.as_mut())
            .ok_or(Error::StaleHandle)?;
        Ok(std::mem::replace(&mut element.key, key))
    }

    pub(crate) fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_ok()
    }

    pub(crate) fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Checks that every element's recorded position matches its index
    pub(crate) fn is_position_coherent(&self) -> bool {
        let live = self.slots.iter().filter(|s| s.element.is_some()).count();
        live == self.order.len()
            && self.order.iter().enumerate().all(|(i, &slot)| {
                matches!(&self.slots[slot].element, Some(element) if element.position == i)
            })
    }

    fn at(&self, position: usize) -> &Element<K, V> {
        self.slots[self.order[position]]
            .element
            .as_ref()
            .expect("backing store references a vacant slot")
    }

    fn at_mut(&mut self, position: usize) -> &mut Element<K, V> {
        self.slots[self.order[position]]
            .element
            .as_mut()
            .expect("backing store references a vacant slot")
    }
}

impl<K, V> Default for ElementStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
