//! High-level API for recurrence evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a recurrence relation and seed, plus the
//! pre-configured two-term (Fibonacci) factory.
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent builder; the three parameters are all that is
//!   needed, so there are no defaults to guess.
//! * **Validated**: parameters are validated when `.build()` is called,
//!   fail-fast and in declaration order.
//! * **Composition over inheritance**: the Fibonacci variant is the same
//!   generic engine with fixed construction parameters, not a subtype.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RecurrenceBuilder`] via [`Recurrence::builder`].
//! 2. Chain `.offsets()`, `.coefficients()`, `.seed()`.
//! 3. Call `.build()` to validate and obtain the engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::table::MemoTable;

// Publicly re-exported types
pub use crate::engine::evaluator::Recurrence;
pub use crate::primitives::definition::RecurrenceDefinition;
pub use crate::primitives::errors::RecurrenceError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Recurrence`] engine.
#[derive(Debug, Clone)]
pub struct RecurrenceBuilder<T: Float> {
    /// Relative indices of the referenced prior terms.
    pub offsets: Option<Vec<i64>>,

    /// Weights paired positionally with the offsets.
    pub coefficients: Option<Vec<T>>,

    /// Initial terms from index 0.
    pub seed: Option<Vec<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RecurrenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RecurrenceBuilder<T> {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self {
            offsets: None,
            coefficients: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the relative offsets of the referenced prior terms.
    pub fn offsets(mut self, offsets: &[i64]) -> Self {
        if self.offsets.is_some() {
            self.duplicate_param = Some("offsets");
        }
        self.offsets = Some(offsets.to_vec());
        self
    }

    /// Set the coefficients paired positionally with the offsets.
    pub fn coefficients(mut self, coefficients: &[T]) -> Self {
        if self.coefficients.is_some() {
            self.duplicate_param = Some("coefficients");
        }
        self.coefficients = Some(coefficients.to_vec());
        self
    }

    /// Set the seed sequence (initial terms from index 0).
    pub fn seed(mut self, seed: &[T]) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed.to_vec());
        self
    }

    /// Validate the configuration and build the engine.
    ///
    /// # Errors
    ///
    /// * [`RecurrenceError::DuplicateParameter`] if a setter was called
    ///   more than once.
    /// * [`RecurrenceError::EmptyDefinition`] if no offsets were supplied.
    /// * [`RecurrenceError::MismatchedDefinition`] if offsets and
    ///   coefficients differ in length.
    /// * [`RecurrenceError::InvalidOffset`] if an offset is not negative.
    /// * [`RecurrenceError::EmptySeed`] if no seed was supplied.
    /// * [`RecurrenceError::InvalidNumericValue`] if a coefficient or seed
    ///   value is not finite.
    pub fn build(self) -> Result<Recurrence<T>, RecurrenceError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let offsets = self.offsets.unwrap_or_default();
        let coefficients = self.coefficients.unwrap_or_default();
        let seed = self.seed.unwrap_or_default();

        Validator::validate_definition(&offsets, &coefficients)?;
        Validator::validate_seed(&seed)?;

        Ok(Recurrence::from_parts(
            RecurrenceDefinition::new(offsets, coefficients),
            MemoTable::from_seed(&seed),
        ))
    }
}

// ============================================================================
// Factories
// ============================================================================

impl<T: Float> Recurrence<T> {
    /// Create a builder for a custom recurrence relation.
    pub fn builder() -> RecurrenceBuilder<T> {
        RecurrenceBuilder::new()
    }

    /// The classic two-term relation `value[n] = value[n-1] + value[n-2]`
    /// with seed `[1, 1]`.
    ///
    /// Same engine, same contract; only the construction parameters are
    /// fixed. The seed can still be swapped with
    /// [`reseed`](Recurrence::reseed).
    pub fn fibonacci() -> Self {
        let one = T::one();
        Recurrence::from_parts(
            RecurrenceDefinition::new(vec![-1, -2], vec![one, one]),
            MemoTable::from_seed(&[one, one]),
        )
    }
}
