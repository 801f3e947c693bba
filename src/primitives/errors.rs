//! Error types for recurrence construction and evaluation.
//!
//! ## Purpose
//!
//! This module defines [`RecurrenceError`], the single error type used across
//! the crate. Construction problems (malformed definitions, bad seeds,
//! builder misuse) and evaluation problems (negative indices, dependencies
//! that precede the seed) are all distinguishable variants, so callers can
//! match on the exact failure and tests can assert on it.
//!
//! ## Design notes
//!
//! * **Structured**: every diagnostic is a value, not a log line; the data
//!   needed to understand the failure travels in the variant fields.
//! * **no_std**: implements `core::fmt::Display`; `std::error::Error` is
//!   provided only when the `std` feature is enabled.
//!
//! ## Non-goals
//!
//! * This module does not attempt error recovery or retries; a failed
//!   operation leaves the engine unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

/// Errors reported by recurrence construction and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum RecurrenceError {
    /// The definition has no offsets (and therefore no relation to apply).
    EmptyDefinition,

    /// The seed sequence is empty.
    EmptySeed,

    /// Offsets and coefficients have different lengths.
    MismatchedDefinition {
        /// Number of offsets supplied.
        offsets: usize,
        /// Number of coefficients supplied.
        coefficients: usize,
    },

    /// An offset is not strictly negative, so the relation can never
    /// reduce to the seeded range.
    InvalidOffset(i64),

    /// A value at a negative index was requested.
    NegativeIndex(i64),

    /// Computing `index` requires a term that precedes the seed.
    MissingDependency {
        /// Index whose term could not be computed.
        index: usize,
        /// The out-of-range index the relation referenced.
        dependency: i64,
    },

    /// A coefficient or seed value is not finite (NaN or infinite).
    InvalidNumericValue(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for RecurrenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDefinition => {
                write!(f, "Recurrence definition is empty (no offsets)")
            }
            Self::EmptySeed => write!(f, "Seed sequence is empty"),
            Self::MismatchedDefinition {
                offsets,
                coefficients,
            } => write!(
                f,
                "Length mismatch: {} offsets, {} coefficients",
                offsets, coefficients
            ),
            Self::InvalidOffset(offset) => write!(
                f,
                "Invalid offset: {} (offsets must be negative)",
                offset
            ),
            Self::NegativeIndex(index) => write!(
                f,
                "Invalid index: {} (must be non-negative)",
                index
            ),
            Self::MissingDependency { index, dependency } => write!(
                f,
                "Missing dependency: index {} requires index {}, which lies before the seed",
                index, dependency
            ),
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecurrenceError {}
