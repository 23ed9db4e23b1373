//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the fitting and search algorithms built on top of
//! the math layer:
//! - Spline linear-system construction (quadratic and natural cubic)
//! - Piecewise-polynomial evaluation with binary segment lookup
//! - Golden-section search over unimodal functions
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Spline linear-system construction.
pub mod system;

/// Piecewise-polynomial evaluation.
pub mod evaluate;

/// Golden-section search.
pub mod golden;
