//! Load-factor driven growth.
//!
//! A table grows when the ratio of occupied slots to capacity reaches the
//! threshold. Occupied slots, not entries, drive the ratio, so entries that
//! pile up in existing chains never trigger growth on their own.

use crate::cs::error::{Error, Result};

/// Default number of slots for a new table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Default occupied-slot ratio at which the table grows.
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.75;

/// Default capacity multiplier applied on growth.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// When to grow and by how much.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    load_threshold: f64,
    growth_factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Creates a policy, rejecting thresholds outside `(0, 1]` and factors below 2.
    pub fn new(load_threshold: f64, growth_factor: usize) -> Result<Self> {
        if !load_threshold.is_finite() || load_threshold <= 0.0 || load_threshold > 1.0 {
            return Err(Error::invalid_input(format!(
                "load threshold must be in (0, 1], got {}",
                load_threshold
            )));
        }
        if growth_factor < 2 {
            return Err(Error::invalid_input(format!(
                "growth factor must be at least 2, got {}",
                growth_factor
            )));
        }
        Ok(Self {
            load_threshold,
            growth_factor,
        })
    }

    pub fn load_threshold(&self) -> f64 {
        self.load_threshold
    }

    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// True when `occupied / capacity` has reached the threshold.
    pub fn should_grow(&self, occupied: usize, capacity: usize) -> bool {
        occupied as f64 / capacity as f64 >= self.load_threshold
    }

    /// Capacity of the store that replaces one of `capacity` slots.
    pub fn next_capacity(&self, capacity: usize) -> Result<usize> {
        capacity
            .checked_mul(self.growth_factor)
            .ok_or(Error::CapacityOverflow {
                capacity,
                factor: self.growth_factor,
            })
    }
}

/// A single growth event, as reported to diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthEvent {
    pub old_capacity: usize,
    pub new_capacity: usize,
    /// Occupied slots in the old store when growth was triggered.
    pub occupied_at_trigger: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.load_threshold(), 0.75);
        assert_eq!(policy.growth_factor(), 2);
    }

    #[test]
    fn test_should_grow_at_threshold() {
        let policy = GrowthPolicy::default();
        assert!(!policy.should_grow(7, 10));
        assert!(policy.should_grow(8, 10));
        assert!(!policy.should_grow(14, 20));
        assert!(policy.should_grow(15, 20));
        assert!(!policy.should_grow(0, 1));
        assert!(policy.should_grow(1, 1));
    }

    #[test]
    fn test_next_capacity() {
        let policy = GrowthPolicy::new(0.5, 3).unwrap();
        assert_eq!(policy.next_capacity(10).unwrap(), 30);
        assert_eq!(
            policy.next_capacity(usize::MAX),
            Err(Error::CapacityOverflow {
                capacity: usize::MAX,
                factor: 3
            })
        );
    }

    #[test]
    fn test_invalid_policies() {
        assert!(GrowthPolicy::new(0.0, 2).is_err());
        assert!(GrowthPolicy::new(-0.5, 2).is_err());
        assert!(GrowthPolicy::new(1.5, 2).is_err());
        assert!(GrowthPolicy::new(f64::NAN, 2).is_err());
        assert!(GrowthPolicy::new(0.75, 1).is_err());
        assert!(GrowthPolicy::new(0.75, 0).is_err());
        assert!(GrowthPolicy::new(1.0, 2).is_ok());
    }
}
