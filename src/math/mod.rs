//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical routines the fitting pipeline is
//! assembled from:
//! - Dense Gaussian elimination with partial pivoting
//! - Gauss–Seidel iteration for diagonally dominant systems
//! - Closed-form parabola fitting through three samples
//!
//! These are reusable mathematical building blocks with no knowledge of
//! splines or focus sweeps.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Gaussian elimination with partial pivoting.
pub mod gaussian;

/// Gauss–Seidel iteration, restricted to diagonally dominant systems.
pub mod gauss_seidel;

/// Parabola fitting and apex location.
pub mod parabola;
