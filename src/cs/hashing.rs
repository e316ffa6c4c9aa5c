//! Hash table implementations.
//!
//! This module provides a separate-chaining table over `i32` keys and values:
//! - Slot placement by `key mod capacity`
//! - Collision chains with owned links, released iteratively
//! - Load-factor driven growth by full replay of every entry
//! - Pluggable diagnostics for growth events and entry dumps
//!
//! # Examples
//!
//! ```rust
//! use chaintable::cs::hashing::ChainedTable;
//!
//! let mut table = ChainedTable::new().unwrap();
//! for i in 0..100 {
//!     table.insert(i, i * 2).unwrap();
//! }
//! assert_eq!(table.capacity(), 160);
//! assert_eq!(table.get(42), Some(84));
//! assert_eq!(table.get(1000), None);
//! ```

pub use crate::cs::error::Result;

mod bucket;
pub mod diagnostics;
pub mod growth;
pub mod separate;

pub use bucket::slot_index;
pub use diagnostics::{Diagnostics, LogDiagnostics, NoDiagnostics, RecordingDiagnostics};
pub use growth::{
    GrowthEvent, GrowthPolicy, DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_THRESHOLD,
};
pub use separate::{ChainedTable, TableBuilder};
