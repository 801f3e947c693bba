//! Tests for consecutive-term ratio diagnostics.
//!
//! The two-term addition relation is the reference case: its consecutive
//! ratios converge to the golden ratio, alternating around it with strictly
//! shrinking error.

use approx::assert_relative_eq;
use recur_rs::prelude::*;

// ============================================================================
// Ratio Values
// ============================================================================

/// Early ratios of the two-term relation take their textbook values.
#[test]
fn test_ratio_initial_values() {
    let mut fib = Recurrence::<f64>::fibonacci();

    assert_eq!(ratio(&mut fib, 0).expect("ratio ok"), 1.0);
    assert_eq!(ratio(&mut fib, 1).expect("ratio ok"), 2.0);
    assert_eq!(ratio(&mut fib, 2).expect("ratio ok"), 1.5);
    assert_relative_eq!(
        ratio(&mut fib, 3).expect("ratio ok"),
        5.0 / 3.0,
        max_relative = 1e-15
    );
}

/// A ratio request evaluates (and caches) both terms it touches.
#[test]
fn test_ratio_populates_cache() {
    let mut fib = Recurrence::<f64>::fibonacci();
    ratio(&mut fib, 9).expect("ratio ok");
    assert_eq!(fib.count(), 11);
}

/// Ratios against a negative denominator index are rejected like any request.
#[test]
fn test_ratio_rejects_negative_index() {
    let mut fib = Recurrence::<f64>::fibonacci();
    assert_eq!(
        ratio(&mut fib, -1),
        Err(RecurrenceError::NegativeIndex(-1))
    );
}

// ============================================================================
// Convergence
// ============================================================================

/// The absolute gap to the golden ratio shrinks strictly over early indices.
#[test]
fn test_ratio_converges_to_golden_ratio() {
    let mut fib = Recurrence::<f64>::fibonacci();
    let phi: f64 = golden_ratio();

    let trace = ratio_trace(&mut fib, 14).expect("trace ok");
    let gaps: Vec<f64> = trace.iter().map(|r| (r - phi).abs()).collect();

    for n in 0..gaps.len() - 1 {
        assert!(
            gaps[n + 1] < gaps[n],
            "gap did not shrink at n={}: {} -> {}",
            n,
            gaps[n],
            gaps[n + 1]
        );
    }
}

/// Far out in the sequence the ratio matches the constant to high precision.
#[test]
fn test_ratio_deep_index_matches_phi() {
    let mut fib = Recurrence::<f64>::fibonacci();
    let phi: f64 = golden_ratio();

    let r = ratio(&mut fib, 50).expect("ratio ok");
    assert_relative_eq!(r, phi, max_relative = 1e-12);
}

// ============================================================================
// Presentation
// ============================================================================

/// Rounded ratios match the display convention (five decimals).
#[test]
fn test_ratio_rounded_for_display() {
    let mut fib = Recurrence::<f64>::fibonacci();

    assert_eq!(ratio_rounded(&mut fib, 50, 5).expect("ratio ok"), 1.61803);
    assert_eq!(ratio_rounded(&mut fib, 2, 5).expect("ratio ok"), 1.5);
}

/// The trace has the requested length and starts at index 0.
#[test]
fn test_ratio_trace_shape() {
    let mut fib = Recurrence::<f64>::fibonacci();
    let trace = ratio_trace(&mut fib, 20).expect("trace ok");

    assert_eq!(trace.len(), 20);
    assert_eq!(trace[0], 1.0);
    assert_eq!(trace[1], 2.0);
}
