//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer contains the core evaluation machinery:
//! - Fail-fast validation of definitions, seeds, and requests
//! - The memoized, iteratively-filling recurrence evaluator
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for definitions, seeds, and evaluation requests.
pub mod validator;

/// The memoized recurrence evaluation engine.
pub mod evaluator;
