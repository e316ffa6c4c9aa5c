//! # Separate Chaining Integer Table
//!
//! This module implements an `i32 -> i32` table using **separate chaining**:
//! - Keys are placed by `key mod capacity` (Euclidean, so negative keys are fine).
//! - Colliding entries are appended to the tail of a singly-linked chain.
//! - Before every insertion the [`GrowthPolicy`] is consulted; once the ratio of
//!   occupied slots to capacity reaches the threshold the whole store is rebuilt
//!   at a larger capacity by replaying every entry through ordinary insertion.
//!
//! Insertion never checks for an existing key. Inserting a key twice keeps both
//! entries, and [`ChainedTable::get`] returns the one inserted first:
//!
//! ```
//! use chaintable::ChainedTable;
//!
//! let mut table = ChainedTable::new().unwrap();
//! table.insert(7, 1).unwrap();
//! table.insert(7, 2).unwrap();
//! assert_eq!(table.get(7), Some(1));
//! assert_eq!(table.len(), 2);
//! ```
//!
//! There is no removal operation.

use std::fmt;

use log::{debug, trace};

use super::bucket::{slot_index, BucketStore};
use super::diagnostics::{Diagnostics, NoDiagnostics};
use super::growth::{
    GrowthEvent, GrowthPolicy, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_THRESHOLD,
};
use crate::cs::error::{Error, Result};

/// A builder for the `ChainedTable`.
/// Typically you'll call `.with_capacity(...)`, `.with_load_threshold(...)`, etc., then `.build()`.
#[derive(Debug)]
pub struct TableBuilder<D> {
    capacity: usize,
    load_threshold: f64,
    growth_factor: usize,
    diagnostics: D,
}

impl Default for TableBuilder<NoDiagnostics> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INITIAL_CAPACITY,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            diagnostics: NoDiagnostics,
        }
    }
}

impl TableBuilder<NoDiagnostics> {
    /// Creates a builder with the default capacity, threshold and growth factor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Diagnostics> TableBuilder<D> {
    /// Sets the initial number of slots. Zero is rejected by `build`.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the occupied-slot ratio that triggers growth.
    pub fn with_load_threshold(mut self, threshold: f64) -> Self {
        self.load_threshold = threshold;
        self
    }

    /// Sets the capacity multiplier applied on growth.
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Sets the sink growth events are reported to.
    pub fn with_diagnostics<T: Diagnostics>(self, diagnostics: T) -> TableBuilder<T> {
        TableBuilder {
            capacity: self.capacity,
            load_threshold: self.load_threshold,
            growth_factor: self.growth_factor,
            diagnostics,
        }
    }

    /// Build the final `ChainedTable`.
    pub fn build(self) -> Result<ChainedTable<D>> {
        if self.capacity == 0 {
            return Err(Error::invalid_input("capacity must be positive"));
        }
        let policy = GrowthPolicy::new(self.load_threshold, self.growth_factor)?;
        Ok(ChainedTable {
            store: BucketStore::try_with_capacity(self.capacity)?,
            policy,
            diagnostics: self.diagnostics,
        })
    }
}

/// A separate-chaining `i32 -> i32` table.
#[derive(Debug)]
pub struct ChainedTable<D = NoDiagnostics> {
    store: BucketStore,
    policy: GrowthPolicy,
    diagnostics: D,
}

impl ChainedTable {
    /// Creates an empty table with the default capacity of 10 slots.
    pub fn new() -> Result<Self> {
        TableBuilder::new().build()
    }

    /// Creates an empty table with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        TableBuilder::new().with_capacity(capacity).build()
    }
}

impl<D: Diagnostics> ChainedTable<D> {
    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Number of slots holding at least one entry.
    pub fn occupied_slots(&self) -> usize {
        self.store.occupied()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Occupied slots divided by capacity.
    pub fn load_ratio(&self) -> f64 {
        self.store.occupied() as f64 / self.store.capacity() as f64
    }

    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    /// Inserts `(key, value)`, growing the table first if the policy says so.
    ///
    /// The key is not checked against existing entries; a repeated key is
    /// appended to its chain and stays shadowed by the earlier entry.
    /// If growth fails the table is left as it was and the entry is not inserted.
    pub fn insert(&mut self, key: i32, value: i32) -> Result<()> {
        Self::insert_into(
            &mut self.store,
            &self.policy,
            &mut self.diagnostics,
            key,
            value,
        )
    }

    /// Returns the value of the first entry stored under `key`.
    pub fn get(&self, key: i32) -> Option<i32> {
        self.store
            .chain_at(slot_index(key, self.store.capacity()))
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    /// Rebuilds the table at the next capacity regardless of load.
    pub fn grow(&mut self) -> Result<()> {
        let grown = Self::grow_store(&self.store, &self.policy, &mut self.diagnostics)?;
        self.store = grown;
        Ok(())
    }

    /// `(key, value)` pairs stored at slot `index`, head first.
    pub fn chain_at(&self, index: usize) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.store
            .chain_at(index)
            .map(|entry| (entry.key, entry.value))
    }

    /// Length of the chain at slot `index`.
    pub fn chain_len(&self, index: usize) -> usize {
        self.store.chain_at(index).count()
    }

    /// All `(key, value)` pairs in slot order, each chain head first.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.store
            .entries()
            .map(|(_, entry)| (entry.key, entry.value))
    }

    /// Walks every entry in slot order and hands it to `sink`.
    pub fn report_to<S: Diagnostics>(&self, mut sink: S) {
        for (slot, entry) in self.store.entries() {
            sink.on_entry(slot, entry.key, entry.value);
        }
    }

    /// Walks every entry into the table's own diagnostics sink.
    pub fn report(&mut self) {
        for (slot, entry) in self.store.entries() {
            self.diagnostics.on_entry(slot, entry.key, entry.value);
        }
    }

    /// Releases every entry and the slot array.
    ///
    /// Returns the number of entries that were released.
    pub fn destroy(mut self) -> usize {
        let released = self.store.release();
        debug!("Destroyed table, released {} entries", released);
        released
    }

    fn insert_into(
        store: &mut BucketStore,
        policy: &GrowthPolicy,
        diagnostics: &mut D,
        key: i32,
        value: i32,
    ) -> Result<()> {
        if policy.should_grow(store.occupied(), store.capacity()) {
            let grown = Self::grow_store(store, policy, diagnostics)?;
            // the old store and its chains are released here
            *store = grown;
        }
        if store.place(key, value) {
            trace!(
                "Chained key {} at slot {}",
                key,
                slot_index(key, store.capacity())
            );
        }
        Ok(())
    }

    /// Builds a larger store and replays every entry of `store` into it.
    /// `store` itself is left untouched.
    fn grow_store(
        store: &BucketStore,
        policy: &GrowthPolicy,
        diagnostics: &mut D,
    ) -> Result<BucketStore> {
        let event = GrowthEvent {
            old_capacity: store.capacity(),
            new_capacity: policy.next_capacity(store.capacity())?,
            occupied_at_trigger: store.occupied(),
        };
        let mut grown = BucketStore::try_with_capacity(event.new_capacity)?;
        debug!(
            "Expanding table from {} to {} at {} occupied slots",
            event.old_capacity, event.new_capacity, event.occupied_at_trigger
        );
        diagnostics.on_grow(&event);

        for (_, entry) in store.entries() {
            Self::insert_into(&mut grown, policy, diagnostics, entry.key, entry.value)?;
        }
        Ok(grown)
    }
}

impl<D: Diagnostics> fmt::Display for ChainedTable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, entry) in self.store.entries() {
            writeln!(f, "#{}\tKey: {}, Value: {}", slot, entry.key, entry.value)?;
        }
        Ok(())
    }
}
