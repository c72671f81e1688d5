//! `Arena` - a generational arena whose live entries form an insertion-ordered list.
//!
//! Keys carry the arena's owner id, a slot index and a generation counter. A key
//! is live only while the slot it names is occupied at the same generation, so
//! a key kept after removal (or presented to a different arena) is rejected
//! instead of aliasing whatever now lives in the slot.
//!
//! Implementation details:
//! - Free slots are chained into a free list and reused on insert.
//! - Occupied slots carry `prev`/`next` links, giving O(1) unlink and
//!   iteration in insertion order regardless of slot reuse.
//! - The generation is bumped every time a slot is freed.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};
use serde::{Deserialize, Serialize};

static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

/// Draws a process-unique owner id for a new structure.
pub(crate) fn next_owner_id() -> u32 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// A handle into an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArenaKey {
    owner: u32,
    index: u32,
    generation: u32,
}

impl ArenaKey {
    /// Slot index of this key.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Generation the slot had when this key was issued.
    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }

    /// Id of the arena that issued this key.
    #[inline]
    pub fn owner(self) -> u32 {
        self.owner
    }
}

enum SlotState<T> {
    Occupied {
        value: T,
        prev: Option<u32>,
        next: Option<u32>,
    },
    Free {
        next_free: Option<u32>,
    },
}

struct Slot<T> {
    generation: u32,
    state: SlotState<T>,
}

/// A generational arena with insertion-ordered iteration.
pub struct Arena<T> {
    owner: u32,
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    /// Creates an empty arena with a fresh owner id.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: next_owner_id(),
            slots: Vec::with_capacity(capacity),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Id stamped into every key this arena issues.
    #[inline]
    pub fn owner(&self) -> u32 {
        self.owner
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value at the end of the insertion order and returns its key.
    ///
    /// # Panics
    /// Panics if the arena would need more than `u32::MAX` slots.
    pub fn insert(&mut self, value: T) -> ArenaKey {
        let old_tail = self.tail;
        let state = SlotState::Occupied {
            value,
            prev: old_tail,
            next: None,
        };

        let index = match self.free_head {
            Some(free_idx) => {
                let slot = &mut self.slots[free_idx as usize];
                self.free_head = match slot.state {
                    SlotState::Free { next_free } => next_free,
                    SlotState::Occupied { .. } => unreachable!("free list points to an occupied slot"),
                };
                slot.state = state;
                free_idx
            }
            None => {
                let idx = u32::try_from(self.slots.len()).expect("arena exceeds u32::MAX slots");
                self.slots.push(Slot { generation: 0, state });
                idx
            }
        };

        match old_tail {
            Some(tail_idx) => self.set_next(tail_idx, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        ArenaKey {
            owner: self.owner,
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// Returns `true` if `key` was issued by this arena and its entry is still live.
    pub fn contains(&self, key: ArenaKey) -> bool {
        self.live_slot(key).is_some()
    }

    /// Returns the value for a live key.
    pub fn get(&self, key: ArenaKey) -> Option<&T> {
        match &self.live_slot(key)?.state {
            SlotState::Occupied { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    /// Returns the value for a live key, mutably.
    pub fn get_mut(&mut self, key: ArenaKey) -> Option<&mut T> {
        if !self.contains(key) {
            return None;
        }
        match &mut self.slots[key.index()].state {
            SlotState::Occupied { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    /// Removes a live entry, unlinking it from the insertion order.
    ///
    /// The key (and every copy of it) is invalid afterwards.
    pub fn remove(&mut self, key: ArenaKey) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        let slot = &mut self.slots[key.index()];
        let old = core::mem::replace(
            &mut slot.state,
            SlotState::Free {
                next_free: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(key.index);
        self.len -= 1;

        match old {
            SlotState::Occupied { value, prev, next } => {
                match prev {
                    Some(p) => self.set_next(p, next),
                    None => self.head = next,
                }
                match next {
                    Some(n) => self.set_prev(n, prev),
                    None => self.tail = prev,
                }
                Some(value)
            }
            SlotState::Free { .. } => None,
        }
    }

    /// Iterates live entries in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Iterates live keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = ArenaKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    fn live_slot(&self, key: ArenaKey) -> Option<&Slot<T>> {
        if key.owner != self.owner {
            return None;
        }
        let slot = self.slots.get(key.index())?;
        match slot.state {
            SlotState::Occupied { .. } if slot.generation == key.generation => Some(slot),
            _ => None,
        }
    }

    fn set_next(&mut self, idx: u32, link: Option<u32>) {
        if let SlotState::Occupied { next, .. } = &mut self.slots[idx as usize].state {
            *next = link;
        }
    }

    fn set_prev(&mut self, idx: u32, link: Option<u32>) {
        if let SlotState::Occupied { prev, .. } = &mut self.slots[idx as usize].state {
            *prev = link;
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("owner", &self.owner)
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Insertion-ordered iterator over an [`Arena`].
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (ArenaKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let arena = self.arena;
        let slot = &arena.slots[idx as usize];
        match &slot.state {
            SlotState::Occupied { value, next, .. } => {
                self.current = *next;
                self.remaining -= 1;
                let key = ArenaKey {
                    owner: arena.owner,
                    index: idx,
                    generation: slot.generation,
                };
                Some((key, value))
            }
            SlotState::Free { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
