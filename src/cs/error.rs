//! Error types shared by the table implementations.

use thiserror::Error;

/// Errors raised while building or growing a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration value was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The allocator could not provide a slot array of the requested size.
    #[error("Failed to allocate {capacity} slots")]
    AllocationFailed { capacity: usize },

    /// Growing would overflow `usize`.
    #[error("Capacity overflow: {capacity} * {factor} does not fit in usize")]
    CapacityOverflow { capacity: usize, factor: usize },
}

impl Error {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
