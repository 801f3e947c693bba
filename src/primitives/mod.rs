//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by the rest of
//! the crate:
//! - The crate-wide error type
//! - The recurrence definition (offsets and coefficients)
//! - The memo table holding seeded and computed terms
//!
//! These are plain data carriers with no evaluation logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for recurrence construction and evaluation.
pub mod errors;

/// Recurrence relation definition (offsets and coefficients).
pub mod definition;

/// Memo table storing seeded and computed sequence terms.
pub mod table;
