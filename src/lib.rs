//! # recur-rs — Memoized Linear Recurrence Evaluation
//!
//! A small, no_std-capable library for evaluating user-defined linear
//! recurrence relations of arbitrary fixed order, with memoization of every
//! term computed so far.
//!
//! ## What is a linear recurrence?
//!
//! A linear recurrence defines a sequence's value at index `n` as a weighted
//! sum of values at earlier indices:
//!
//! ```text
//! value[n] = coefficients[0] * value[n + offsets[0]]
//!          + coefficients[1] * value[n + offsets[1]]
//!          + ...
//! ```
//!
//! Offsets are negative relative indices; `offsets = [-1, -2]` with
//! `coefficients = [1, 1]` is the two-term addition rule that produces the
//! Fibonacci numbers from seed `[1, 1]`. The seed supplies the initial
//! terms (indices `0..seed.len()`); everything past the seed is derived.
//!
//! **Key properties:**
//! - Every computed term is cached; re-requesting an index is O(1)
//! - Evaluation is iterative (bottom-up), so deep indices cannot overflow
//!   the call stack
//! - Failed requests leave the cache untouched
//! - The cache can be replaced wholesale with a new seed at any time
//!
//! ## Quick Start
//!
//! ### The two-term specialization
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! let mut fib = Recurrence::<f64>::fibonacci();
//!
//! assert_eq!(fib.evaluate(10)?, 89.0);
//! // Indices 0..=10 are now cached.
//! assert_eq!(fib.count(), 11);
//! # Result::<(), RecurrenceError>::Ok(())
//! ```
//!
//! ### A custom relation
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! // value[n] = value[n-1] - 2 * value[n-3]
//! let mut engine = Recurrence::builder()
//!     .offsets(&[-1, -3])
//!     .coefficients(&[1.0, -2.0])
//!     .seed(&[1.0, 1.0, 1.0])
//!     .build()?;
//!
//! assert_eq!(engine.evaluate(3)?, -1.0);
//! assert_eq!(engine.evaluate(4)?, -3.0);
//! # Result::<(), RecurrenceError>::Ok(())
//! ```
//!
//! ### Reseeding
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! let mut fib = Recurrence::<f64>::fibonacci();
//! fib.evaluate(20)?;
//!
//! // Same relation, different starting terms; the cache is fully reset.
//! fib.reseed(&[1.0, 3.0, 4.0, 7.0, 13.0, 20.0])?;
//! assert_eq!(fib.count(), 6);
//! assert_eq!(fib.evaluate(10)?, 225.0);
//! # Result::<(), RecurrenceError>::Ok(())
//! ```
//!
//! ### Ratio diagnostics
//!
//! Consecutive-term ratios of the two-term relation converge to the golden
//! ratio:
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! let mut fib = Recurrence::<f64>::fibonacci();
//! let phi: f64 = golden_ratio();
//!
//! let r = ratio(&mut fib, 30)?;
//! assert!((r - phi).abs() < 1e-10);
//!
//! // Rounded for display, like `1.61803`.
//! assert_eq!(ratio_rounded(&mut fib, 30, 5)?, round_to(phi, 5));
//! # Result::<(), RecurrenceError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter        | Type       | Constraints                            |
//! |------------------|------------|----------------------------------------|
//! | **offsets**      | `&[i64]`   | non-empty, strictly negative           |
//! | **coefficients** | `&[T]`     | same length as offsets, finite         |
//! | **seed**         | `&[T]`     | non-empty, finite                      |
//!
//! The seed should be at least `max(|offset|)` terms long; a shorter seed
//! is accepted at construction but an `evaluate` call that needs a term
//! before index 0 fails with [`RecurrenceError::MissingDependency`].
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, RecurrenceError>`. The `?`
//! operator is idiomatic, but you can also match explicitly:
//!
//! ```rust
//! use recur_rs::prelude::*;
//!
//! let mut fib = Recurrence::<f64>::fibonacci();
//!
//! match fib.evaluate(-1) {
//!     Ok(value) => println!("term: {}", value),
//!     Err(RecurrenceError::NegativeIndex(index)) => {
//!         eprintln!("rejected index {}", index);
//!     }
//!     Err(e) => eprintln!("evaluation failed: {}", e),
//! }
//! ```
//!
//! A failed call has no side effects: nothing is cached, and the engine
//! remains usable.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library dependency
//! (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! recur-rs = { version = "0.1", default-features = false }
//! ```
//!
//! `f32` engines work throughout for smaller footprints, though two-term
//! growth exhausts `f32` precision near index 35.
//!
//! ## Numeric Semantics
//!
//! Terms are plain sums of products in the chosen float type. Nothing is
//! rounded internally (`round_to` is available for display), and overflow
//! saturates to ±inf per IEEE-754. For the two-term relation,
//! `f64` represents terms exactly up to index 77.
//!
//! ## Concurrency
//!
//! An engine is a single-threaded value: `evaluate` takes `&mut self`, so
//! sharing one instance across threads requires external synchronization.
//! Independent instances are fully independent; nothing is shared.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and errors.
//
// Contains the error type, the recurrence definition, and the memo table.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains fixed-decimal rounding and the golden-ratio constant.
mod math;

// Layer 3: Engine - validation and evaluation.
//
// Contains fail-fast input validation and the memoized bottom-up evaluator.
mod engine;

// Layer 4: Evaluation - derived quantities.
//
// Contains consecutive-term ratio diagnostics.
mod evaluation;

// High-level fluent API.
//
// Provides the `RecurrenceBuilder` and the pre-configured two-term factory.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use recur_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Recurrence, RecurrenceBuilder, RecurrenceDefinition, RecurrenceError};
    pub use crate::evaluation::ratios::{ratio, ratio_rounded, ratio_trace};
    pub use crate::math::golden::golden_ratio;
    pub use crate::math::round::round_to;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal evaluation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal derived-quantity helpers.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
