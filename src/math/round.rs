//! Fixed-decimal rounding.
//!
//! ## Purpose
//!
//! This module provides half-away-from-zero rounding to a fixed number of
//! decimal digits. The engine never rounds internally; this is for callers
//! presenting derived quantities such as consecutive-term ratios.
//!
//! ## Invariants
//!
//! * `round_to(x, 0)` equals `x.round()`.
//! * The result carries the usual binary-representation caveat: the nearest
//!   representable float to the rounded decimal is returned.

// External dependencies
use num_traits::Float;

/// Round `value` to `digits` decimal places.
#[inline]
pub fn round_to<T: Float>(value: T, digits: i32) -> T {
    let scale = T::from(10.0).unwrap().powi(digits);
    (value * scale).round() / scale
}
