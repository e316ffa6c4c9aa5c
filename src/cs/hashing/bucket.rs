//! # Bucket Store
//!
//! Fixed-capacity slot array backing a [`ChainedTable`](super::ChainedTable).
//! Each slot is either empty or holds the head entry of a singly-linked
//! collision chain. The head lives inline in the slot; only entries beyond
//! the head are boxed.

use log::error;

use crate::cs::error::{Error, Result};

/// Owning link to the next entry of a chain.
pub(crate) type Link = Option<Box<Entry>>;

/// A single `(key, value)` pair in a chain.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: i32,
    pub(crate) value: i32,
    pub(crate) next: Link,
}

impl Entry {
    pub(crate) fn new(key: i32, value: i32) -> Self {
        Self {
            key,
            value,
            next: None,
        }
    }
}

/// One position in the backing array.
#[derive(Debug, Default)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
}

/// Maps a key onto a slot index.
///
/// Uses the Euclidean remainder, so negative keys land in `0..capacity`
/// as well: `slot_index(-1, 10) == 9`.
pub fn slot_index(key: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    // capacity beyond i64::MAX cannot be allocated anyway
    let capacity = i64::try_from(capacity).unwrap_or(i64::MAX);
    i64::from(key).rem_euclid(capacity) as usize
}

/// Fixed-size array of slots.
#[derive(Debug)]
pub(crate) struct BucketStore {
    slots: Vec<Slot>,
    occupied: usize,
    len: usize,
}

impl BucketStore {
    /// Allocates `capacity` empty slots, reporting allocation failure instead of aborting.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_input("capacity must be positive"));
        }
        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            error!("failed to allocate a slot array of {} slots", capacity);
            return Err(Error::AllocationFailed { capacity });
        }
        slots.resize_with(capacity, Slot::default);
        Ok(Self {
            slots,
            occupied: 0,
            len: 0,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding at least one entry.
    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }

    /// Total number of entries, chained ones included.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Places `(key, value)` at the slot `key` hashes to.
    ///
    /// An empty slot takes the entry inline. An occupied slot gets a new node
    /// at the tail of its chain; existing keys are not checked. Returns `true`
    /// when the entry was chained rather than placed as a head.
    pub(crate) fn place(&mut self, key: i32, value: i32) -> bool {
        let index = slot_index(key, self.capacity());
        self.len += 1;
        let slot = &mut self.slots[index];
        match slot {
            Slot::Empty => {
                *slot = Slot::Occupied(Entry::new(key, value));
                self.occupied += 1;
                false
            }
            Slot::Occupied(head) => {
                let mut link = &mut head.next;
                while let Some(node) = link {
                    link = &mut node.next;
                }
                *link = Some(Box::new(Entry::new(key, value)));
                true
            }
        }
    }

    /// Entries at `index`, head first. Out-of-range indices yield nothing.
    pub(crate) fn chain_at(&self, index: usize) -> Chain<'_> {
        let next = match self.slots.get(index) {
            Some(Slot::Occupied(head)) => Some(head),
            _ => None,
        };
        Chain { next }
    }

    /// Every entry in slot order, each chain head to tail.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &Entry)> + '_ {
        (0..self.capacity()).flat_map(move |index| self.chain_at(index).map(move |e| (index, e)))
    }

    /// Releases every chained node one at a time, capturing the successor
    /// before each node is dropped. Heads are released with the slot array.
    ///
    /// Returns the number of entries that were held (heads and chained nodes).
    pub(crate) fn release(&mut self) -> usize {
        let mut released = 0;
        for slot in self.slots.iter_mut() {
            if let Slot::Occupied(head) = slot {
                released += 1;
                let mut link = head.next.take();
                while let Some(mut node) = link {
                    link = node.next.take();
                    released += 1;
                }
            }
            *slot = Slot::Empty;
        }
        self.occupied = 0;
        self.len = 0;
        released
    }
}

impl Drop for BucketStore {
    fn drop(&mut self) {
        // Iterative release keeps long chains from recursing through Box drops.
        self.release();
    }
}

/// Iterator over one slot's chain.
#[derive(Debug, Clone)]
pub(crate) struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}
