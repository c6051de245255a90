//! Indexed binary min-heap.
//!
//! The tree builder needs a priority queue that hands back the two lightest
//! subtrees on every merge step. `std::collections::BinaryHeap` would do for
//! that alone, but it cannot change the priority of an element that is already
//! queued. [`PriorityQueue`] can: every [`PriorityItem`] records its current
//! slot in the backing array, and the queue keeps a handle → slot table so that
//! [`PriorityQueue::reprioritize`] can find an item and restore the heap order
//! in O(log n).
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//!
//! invariant: key(parent(i)) <= key(i)      key = (priority, insertion order)
//! ```
//!
//! Equal priorities leave the queue in insertion order, so a given sequence of
//! operations always yields the same sequence of items.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Opaque reference to an item inside a [`PriorityQueue`].
///
/// Handles are issued by [`PriorityQueue::insert`] in increasing order and are
/// never reused by the queue that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemHandle(usize);

/// A value together with its priority and heap bookkeeping.
#[derive(Debug, Clone)]
pub struct PriorityItem<T> {
    value: T,
    priority: u64,
    index: Option<usize>,
    handle: ItemHandle,
}

impl<T> PriorityItem<T> {
    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The ordering key. Lower priorities are extracted first.
    pub fn priority(&self) -> u64 {
        self.priority
    }

    /// Current slot in the queue's backing array.
    ///
    /// `None` once the item has been extracted. The slot of a queued item
    /// changes whenever the queue rebalances, so callers should not hold on to
    /// it across operations.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The handle issued when this item was inserted.
    pub fn handle(&self) -> ItemHandle {
        self.handle
    }

    /// Take ownership of the wrapped value.
    pub fn into_value(self) -> T {
        self.value
    }

    fn key(&self) -> (u64, ItemHandle) {
        (self.priority, self.handle)
    }
}

/// Min-priority queue over an array-backed binary heap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: Vec<PriorityItem<T>>,
    // handle -> current slot in `items`, queued items only
    slots: HashMap<ItemHandle, usize>,
    next_handle: usize,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            slots: HashMap::new(),
            next_handle: 0,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            next_handle: 0,
        }
    }

    /// Number of items currently queued.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The lowest-priority item, without removing it.
    pub fn peek(&self) -> Option<&PriorityItem<T>> {
        self.items.first()
    }

    /// Look up a queued item by handle.
    pub fn get(&self, handle: ItemHandle) -> Option<&PriorityItem<T>> {
        let index = self.slot(handle)?;
        self.items.get(index)
    }

    /// Add `value` with the given priority and return its handle.
    pub fn insert(&mut self, value: T, priority: u64) -> ItemHandle {
        let handle = ItemHandle(self.next_handle);
        self.next_handle += 1;
        let index = self.items.len();

        self.slots.insert(handle, index);
        self.items.push(PriorityItem {
            value,
            priority,
            index: Some(index),
            handle,
        });
        self.sift_up(index);
        handle
    }

    /// Remove and return the lowest-priority item.
    ///
    /// Among equal priorities the earliest inserted item comes out first.
    ///
    /// # Errors
    /// Returns `Error::EmptyStructure` if the queue is empty.
    pub fn extract_min(&mut self) -> Result<PriorityItem<T>> {
        if self.items.is_empty() {
            return Err(Error::EmptyStructure);
        }

        let last = self.items.len() - 1;
        self.swap(0, last);
        let mut item = self.items.pop().ok_or(Error::EmptyStructure)?;
        item.index = None;
        self.slots.remove(&item.handle);

        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Replace the value and priority of a queued item, then restore the heap
    /// order from the item's current slot.
    ///
    /// The item keeps its original insertion order for tie-breaking.
    ///
    /// # Errors
    /// Returns `Error::UnknownItem` if `handle` was not issued by this queue or
    /// its item has already been extracted.
    pub fn reprioritize(&mut self, handle: ItemHandle, value: T, priority: u64) -> Result<()> {
        let index = self.slot(handle).ok_or(Error::UnknownItem(handle))?;

        let item = &mut self.items[index];
        item.value = value;
        item.priority = priority;

        let index = self.sift_up(index);
        self.sift_down(index);
        Ok(())
    }

    fn slot(&self, handle: ItemHandle) -> Option<usize> {
        self.slots.get(&handle).copied()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.items[i].key() < self.items[j].key()
    }

    /// Swap two slots and record the new positions of both items.
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        for k in [i, j] {
            let item = &mut self.items[k];
            item.index = Some(k);
            self.slots.insert(item.handle, k);
        }
    }

    /// Sift the item at `index` towards the root. Returns its final slot.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
