//! Recurrence relation definition.
//!
//! ## Purpose
//!
//! This module defines [`RecurrenceDefinition`], the pair of offset and
//! coefficient lists describing a linear relation
//!
//! ```text
//! value[n] = Σ coefficients[i] * value[n + offsets[i]]
//! ```
//!
//! Offsets are paired with coefficients positionally, so `offsets = [-1, -2]`
//! with `coefficients = [1, 1]` is the classic two-term addition rule.
//!
//! ## Invariants
//!
//! * `offsets.len() == coefficients.len()` (enforced at construction by the
//!   engine validator, not by this type).
//! * All offsets are strictly negative once validated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// A linear recurrence relation: relative offsets and their coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceDefinition<T> {
    /// Relative indices of the referenced prior terms (negative).
    pub offsets: Vec<i64>,

    /// Weight applied to each referenced term, paired positionally.
    pub coefficients: Vec<T>,
}

impl<T: Float> RecurrenceDefinition<T> {
    /// Create a definition from offset and coefficient lists.
    pub fn new(offsets: Vec<i64>, coefficients: Vec<T>) -> Self {
        Self {
            offsets,
            coefficients,
        }
    }

    /// Number of prior terms the relation references.
    pub fn order(&self) -> usize {
        self.offsets.len()
    }

    /// The deepest lookback of the relation (largest `|offset|`).
    ///
    /// A seed of at least this length guarantees every index is reachable.
    pub fn max_lookback(&self) -> usize {
        self.offsets
            .iter()
            .map(|offset| offset.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
    }
}
