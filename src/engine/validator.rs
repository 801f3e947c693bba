//! Input validation for recurrence definitions and requests.
//!
//! ## Purpose
//!
//! This module provides validation functions for recurrence construction
//! parameters and evaluation requests. It checks requirements such as
//! matching definition lengths, offset signs, finite values, and index
//! bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Definition shape**: offsets and coefficients must pair positionally
//!   and offsets must be strictly negative.
//! * **Finite checks**: coefficients and seed values must be finite
//!   (no NaN/Inf).
//! * **Index bounds**: evaluation indices must be non-negative.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check seed depth against the deepest lookback;
//!   a short seed surfaces as a missing dependency during evaluation.
//! * This module does not transform or repair invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RecurrenceError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for recurrence configuration and requests.
///
/// Provides static methods returning `Result<(), RecurrenceError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Definition Validation
    // ========================================================================

    /// Validate a recurrence definition (offsets and coefficients).
    pub fn validate_definition<T: Float>(
        offsets: &[i64],
        coefficients: &[T],
    ) -> Result<(), RecurrenceError> {
        // Check 1: Non-empty relation
        if offsets.is_empty() {
            return Err(RecurrenceError::EmptyDefinition);
        }

        // Check 2: Positional pairing
        if offsets.len() != coefficients.len() {
            return Err(RecurrenceError::MismatchedDefinition {
                offsets: offsets.len(),
                coefficients: coefficients.len(),
            });
        }

        // Check 3: Offsets must point strictly backwards
        for &offset in offsets {
            if offset >= 0 {
                return Err(RecurrenceError::InvalidOffset(offset));
            }
        }

        // Check 4: All coefficients finite
        for (i, &val) in coefficients.iter().enumerate() {
            if !val.is_finite() {
                return Err(RecurrenceError::InvalidNumericValue(format!(
                    "coefficients[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a seed sequence (construction or reseed).
    pub fn validate_seed<T: Float>(seed: &[T]) -> Result<(), RecurrenceError> {
        if seed.is_empty() {
            return Err(RecurrenceError::EmptySeed);
        }

        for (i, &val) in seed.iter().enumerate() {
            if !val.is_finite() {
                return Err(RecurrenceError::InvalidNumericValue(format!(
                    "seed[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Request Validation
    // ========================================================================

    /// Validate an evaluation index.
    pub fn validate_index(index: i64) -> Result<(), RecurrenceError> {
        if index < 0 {
            return Err(RecurrenceError::NegativeIndex(index));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RecurrenceError> {
        if let Some(parameter) = duplicate_param {
            return Err(RecurrenceError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
