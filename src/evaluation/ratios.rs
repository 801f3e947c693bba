//! Consecutive-term ratio diagnostics.
//!
//! ## Purpose
//!
//! This module derives the ratio of adjacent sequence terms,
//! `value[n+1] / value[n]`. For the two-term addition relation this ratio
//! converges to the golden ratio, which makes it a convenient convergence
//! diagnostic for seeded engines.
//!
//! ## Design notes
//!
//! * **Engine-driven**: ratios evaluate through the engine, so any terms
//!   they touch are computed and cached as usual.
//! * **No zero guard**: a zero term in the denominator yields an infinite
//!   or NaN ratio per float semantics; callers pick the indices they ask
//!   about.
//!
//! ## Non-goals
//!
//! * This module does not detect or accelerate convergence; it only reports
//!   the raw (or rounded) ratios.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::evaluator::Recurrence;
use crate::math::round::round_to;
use crate::primitives::errors::RecurrenceError;

/// Ratio of the term at `index + 1` to the term at `index`.
pub fn ratio<T: Float>(engine: &mut Recurrence<T>, index: i64) -> Result<T, RecurrenceError> {
    let denominator = engine.evaluate(index)?;
    let numerator = engine.evaluate(index + 1)?;
    Ok(numerator / denominator)
}

/// Ratio of adjacent terms, rounded to `digits` decimal places for display.
pub fn ratio_rounded<T: Float>(
    engine: &mut Recurrence<T>,
    index: i64,
    digits: i32,
) -> Result<T, RecurrenceError> {
    Ok(round_to(ratio(engine, index)?, digits))
}

/// The first `len` consecutive ratios, starting at index 0.
pub fn ratio_trace<T: Float>(
    engine: &mut Recurrence<T>,
    len: usize,
) -> Result<Vec<T>, RecurrenceError> {
    let mut trace = Vec::with_capacity(len);
    for index in 0..len {
        trace.push(ratio(engine, index as i64)?);
    }
    Ok(trace)
}
