//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives quantities from engine output:
//! - Consecutive-term ratios and their rounded presentation
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Consecutive-term ratio diagnostics.
pub mod ratios;
