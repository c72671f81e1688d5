//! `AdaptablePriorityQueue` - a binary min-heap with live locators.
//!
//! Every inserted entry hands back a [`Locator`]. The locator stays valid while
//! the entry is in the queue, no matter how often the entry moves, and lets the
//! caller remove the entry or change its key from any position in O(log n).
//!
//! The backing array stores each entry together with its locator; a side arena
//! maps the locator to the entry's current slot. Every swap rewrites both
//! slots' positions as part of the swap itself, so a locator can always be
//! resolved in O(1) and checked against the array (a stale or foreign locator
//! never resolves to an entry whose recorded locator is itself).
//!
//! Ordering is supplied by a [`KeyOrder`]. The minimum under that ordering sits
//! at the root; use [`ReverseOrder`] for a max-queue.

use crate::collections::arena::{Arena, ArenaKey};
use crate::error::{Error, Result};
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A comparison over priority-queue keys.
///
/// `None` means the two keys cannot be compared. Operations that would need such
/// a comparison fail with [`Error::IncomparableKey`] and leave the queue as it was.
pub trait KeyOrder<K> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;
}

/// Orders keys by their `PartialOrd` implementation (min-queue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: PartialOrd> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Reverses `PartialOrd` (max-queue).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: PartialOrd> KeyOrder<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        b.partial_cmp(a)
    }
}

/// Adapts a closure into a [`KeyOrder`].
#[derive(Clone, Copy)]
pub struct CompareFn<F>(pub F);

impl<K, F> KeyOrder<K> for CompareFn<F>
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (self.0)(a, b)
    }
}

/// A live handle to an entry of an [`AdaptablePriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator(ArenaKey);

struct HeapEntry<K, V> {
    key: K,
    value: V,
    locator: ArenaKey,
}

/// A priority queue implemented with an array-based binary heap and locators.
pub struct AdaptablePriorityQueue<K, V, O = NaturalOrder> {
    heap: Vec<HeapEntry<K, V>>,
    /// Current heap slot of every live locator.
    positions: Arena<usize>,
    order: O,
}

impl<K, V, O: KeyOrder<K> + Default> AdaptablePriorityQueue<K, V, O> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: Arena::with_capacity(capacity),
            order: O::default(),
        }
    }

    /// Builds a queue from `(key, value)` pairs with bottom-up heap construction.
    ///
    /// Runs in O(n). Locators for these entries are not returned.
    ///
    /// # Errors
    /// Returns [`Error::IncomparableKey`] if any key cannot be compared with itself.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_entries_with_order(entries, O::default())
    }
}

impl<K, V, O: KeyOrder<K> + Default> Default for AdaptablePriorityQueue<K, V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, O: KeyOrder<K>> AdaptablePriorityQueue<K, V, O> {
    /// Creates an empty queue ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self {
            heap: Vec::new(),
            positions: Arena::new(),
            order,
        }
    }

    /// Builds a queue ordered by `order` from `(key, value)` pairs in O(n).
    ///
    /// # Errors
    /// Returns [`Error::IncomparableKey`] if two keys met while heapifying, or a
    /// key and itself, cannot be compared.
    pub fn from_entries_with_order<I>(entries: I, order: O) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        let mut queue = Self {
            heap: Vec::with_capacity(entries.size_hint().0),
            positions: Arena::with_capacity(entries.size_hint().0),
            order,
        };
        for (key, value) in entries {
            queue.check_key(&key)?;
            let index = queue.heap.len();
            let locator = queue.positions.insert(index);
            queue.heap.push(HeapEntry { key, value, locator });
        }
        queue.heapify()?;
        Ok(queue)
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the minimum entry without removing it.
    pub fn min(&self) -> Option<(&K, &V)> {
        self.heap.first().map(|e| (&e.key, &e.value))
    }

    /// Inserts a key-value pair and returns a locator for it.
    ///
    /// # Errors
    /// Returns [`Error::IncomparableKey`] if `key` cannot be compared with itself
    /// or with a key it meets while sifting up. The queue is unchanged on error.
    ///
    /// # Panics
    /// Panics if the queue would need more than `u32::MAX` locator slots.
    pub fn insert(&mut self, key: K, value: V) -> Result<Locator> {
        self.check_key(&key)?;
        let index = self.heap.len();
        let target = self.up_target(index, &key)?;
        let locator = self.positions.insert(index);
        self.heap.push(HeapEntry { key, value, locator });
        self.relocate(index, target);
        Ok(Locator(locator))
    }

    /// Removes and returns the minimum entry.
    ///
    /// Keys already in the queue were compared on their way in. Should the
    /// order still fail on a pair met while sifting down (an order that is not
    /// transitive), the moved entry stays at the root.
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let last = self.heap.len().checked_sub(1)?;
        let target = self
            .down_target(0, &self.heap[last].key, last)
            .unwrap_or(0);
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(entry.locator);
        self.relocate(0, target);
        Some((entry.key, entry.value))
    }

    /// Removes the entry behind `locator` from anywhere in the heap.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] if the locator is foreign or its entry
    /// was already removed, and [`Error::IncomparableKey`] if the entry moved
    /// into the vacated slot cannot be ordered against its new neighbours. The
    /// queue is unchanged on error.
    pub fn remove(&mut self, locator: Locator) -> Result<(K, V)> {
        let j = self.validate(locator)?;
        let last = self.heap.len() - 1;
        let target = if j == last {
            j
        } else {
            self.bubble_target(j, &self.heap[last].key, last)?
        };
        self.swap(j, last);
        let entry = self.heap.pop().ok_or(Error::InvalidLocator)?;
        self.positions.remove(locator.0);
        if j < last {
            self.relocate(j, target);
        }
        Ok((entry.key, entry.value))
    }

    /// Replaces the key of the entry behind `locator`, returning the old key.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] for a foreign or stale locator and
    /// [`Error::IncomparableKey`] if `key` cannot be compared with itself or with
    /// a key it meets while moving. The queue is unchanged on error.
    pub fn replace_key(&mut self, locator: Locator, key: K) -> Result<K> {
        let j = self.validate(locator)?;
        self.check_key(&key)?;
        let target = self.bubble_target(j, &key, self.heap.len())?;
        let old = core::mem::replace(&mut self.heap[j].key, key);
        self.relocate(j, target);
        Ok(old)
    }

    /// Replaces the value of the entry behind `locator`, returning the old value.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] for a foreign or stale locator.
    pub fn replace_value(&mut self, locator: Locator, value: V) -> Result<V> {
        let j = self.validate(locator)?;
        Ok(core::mem::replace(&mut self.heap[j].value, value))
    }

    /// Returns the entry behind `locator`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocator`] for a foreign or stale locator.
    pub fn get(&self, locator: Locator) -> Result<(&K, &V)> {
        let j = self.validate(locator)?;
        let entry = &self.heap[j];
        Ok((&entry.key, &entry.value))
    }

    /// Returns `true` if `locator` refers to an entry still in this queue.
    pub fn contains(&self, locator: Locator) -> bool {
        self.validate(locator).is_ok()
    }

    fn validate(&self, locator: Locator) -> Result<usize> {
        let j = *self.positions.get(locator.0).ok_or(Error::InvalidLocator)?;
        match self.heap.get(j) {
            Some(entry) if entry.locator == locator.0 => Ok(j),
            _ => Err(Error::InvalidLocator),
        }
    }

    fn check_key(&self, key: &K) -> Result<()> {
        match self.order.compare(key, key) {
            Some(Ordering::Equal) => Ok(()),
            _ => Err(Error::IncomparableKey),
        }
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> Result<bool> {
        self.order
            .compare(a, b)
            .map(|ord| ord == Ordering::Less)
            .ok_or(Error::IncomparableKey)
    }

    /// Exchanges two slots and records both entries' new positions.
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.set_position(i);
        self.set_position(j);
    }

    fn set_position(&mut self, i: usize) {
        let locator = self.heap[i].locator;
        if let Some(slot) = self.positions.get_mut(locator) {
            *slot = i;
        }
    }

    // The sifts are split in two. The `*_target` half only compares: it finds
    // where `key` would come to rest if placed in the `hole` slot, reading every
    // other slot as it is. `relocate` then performs the swaps. A failed
    // comparison therefore never leaves a half-sifted heap.

    /// Slot `key` reaches by upheap from `hole`.
    fn up_target(&self, hole: usize, key: &K) -> Result<usize> {
        let mut node = hole;
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(key, &self.heap[parent].key)? {
                node = parent;
            } else {
                break;
            }
        }
        Ok(node)
    }

    /// Slot `key` reaches by downheap from `hole` within the first `len` slots.
    fn down_target(&self, hole: usize, key: &K, len: usize) -> Result<usize> {
        let mut node = hole;
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(&self.heap[right].key, &self.heap[left].key)? {
                smaller = right;
            }

            if self.less(&self.heap[smaller].key, key)? {
                node = smaller;
            } else {
                break;
            }
        }
        Ok(node)
    }

    /// Sifts up if `key` beats the parent of `hole`, down otherwise.
    fn bubble_target(&self, hole: usize, key: &K, len: usize) -> Result<usize> {
        let up = self.up_target(hole, key)?;
        if up == hole {
            self.down_target(hole, key, len)
        } else {
            Ok(up)
        }
    }

    /// Moves the entry at `from` to `to` along the tree path between them, one
    /// swap per level. `to` is an ancestor or a descendant of `from`.
    fn relocate(&mut self, from: usize, to: usize) {
        let mut node = from;
        if to < from {
            while node > to {
                let parent = (node - 1) / 2;
                self.swap(node, parent);
                node = parent;
            }
        } else if to > from {
            let levels = (to + 1).ilog2() - (from + 1).ilog2();
            for k in (0..levels).rev() {
                let next = ((to + 1) >> k) - 1;
                self.swap(node, next);
                node = next;
            }
        }
    }

    fn heapify(&mut self) -> Result<()> {
        let len = self.heap.len();
        if len < 2 {
            return Ok(());
        }
        for j in (0..=(len - 2) / 2).rev() {
            let target = self.down_target(j, &self.heap[j].key, len)?;
            self.relocate(j, target);
        }
        Ok(())
    }
}

impl<K, V, O> fmt::Debug for AdaptablePriorityQueue<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptablePriorityQueue")
            .field("len", &self.heap.len())
            .finish()
    }
}
