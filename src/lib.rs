//! # focuspeak — Best-Focus Estimation from Focus Sweeps
//!
//! A small, dependency-light numeric library that estimates the best focus
//! distance of a lens from a focus sweep: a sequence of images taken at
//! increasing focus distances, each reduced (by an external collaborator)
//! to a single sharpness score.
//!
//! ## How it works
//!
//! Given strictly increasing `(distance, sharpness)` samples, the pipeline:
//!
//! 1. Builds the linear system of a piecewise-polynomial interpolant
//!    (quadratic or natural cubic spline) through the samples.
//! 2. Solves it with Gaussian elimination under partial pivoting — the
//!    spline systems carry exact zeros on the diagonal, so pivoting is a
//!    correctness requirement, not a refinement.
//! 3. Wraps the solved coefficients in an evaluable curve with O(log N)
//!    segment lookup.
//! 4. Runs a golden-section search over the curve to locate the sharpness
//!    peak.
//!
//! Image decoding, sharpness scoring, and plotting are out of scope: the
//! library consumes plain numeric slices and hands back plain numbers.
//!
//! ## Quick Start
//!
//! ```rust
//! use focuspeak::prelude::*;
//!
//! // One sharpness score per focus distance, distances strictly increasing.
//! let distance = vec![200.0, 400.0, 600.0, 800.0, 1000.0];
//! let sharpness = vec![12.5, 44.0, 90.1, 61.7, 33.2];
//!
//! let model = Sweep::new().degree(Cubic).build()?;
//! let fit = model.fit(&distance, &sharpness)?;
//!
//! let (best_distance, peak_sharpness) = fit.optimum().expect("peak search enabled");
//! assert!(best_distance > 400.0 && best_distance < 800.0);
//! assert!(peak_sharpness >= 90.0);
//! # Result::<(), FocusError>::Ok(())
//! ```
//!
//! ## Evaluating the fitted curve
//!
//! The fit interpolates every sample exactly and refuses to extrapolate:
//!
//! ```rust
//! use focuspeak::prelude::*;
//!
//! let distance: Vec<f64> = vec![0.0, 1.0, 2.0, 4.0];
//! let sharpness: Vec<f64> = vec![0.0, 3.0, 1.0, 5.0];
//!
//! let model = Sweep::new().degree(Quadratic).locate_peak(false).build()?;
//! let fit = model.fit(&distance, &sharpness)?;
//!
//! assert!((fit.evaluate(1.0)? - 3.0).abs() < 1e-6);
//! assert!(fit.evaluate(5.0).is_err());
//! # Result::<(), FocusError>::Ok(())
//! ```
//!
//! ## Using the optimizer directly
//!
//! The golden-section search works on any fallible unimodal function:
//!
//! ```rust
//! use focuspeak::prelude::*;
//!
//! let (x, y) = find_extremum(-5.0, 5.0, &SearchSettings::default(), |q: f64| {
//!     Ok(-q.powi(3) + 5.0 * q + 6.0)
//! })?;
//!
//! // Analytic maximum at sqrt(5/3).
//! assert!((x - (5.0f64 / 3.0).sqrt()).abs() < 0.05);
//! assert!((y - 10.3033).abs() < 0.01);
//! # Result::<(), FocusError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default    | Description                                  |
//! |--------------------|------------|----------------------------------------------|
//! | **degree**         | `Cubic`    | Spline degree (`Quadratic` or `Cubic`)       |
//! | **tolerance**      | 0.01       | Bracket-width tolerance of the peak search   |
//! | **max_iterations** | 100        | Safety cap on search iterations              |
//! | **direction**      | `Maximize` | Peak (`Maximize`) or valley (`Minimize`)     |
//! | **search_range**   | full domain| Sub-range of the domain to search            |
//! | **locate_peak**    | true       | Skip the search and return only the fit      |
//!
//! ## Error handling
//!
//! Every fallible operation returns `Result<_, FocusError>`; nothing is
//! silently swallowed and no partially-valid number is ever returned in
//! place of an error. There is no retry policy — the pipeline is
//! deterministic, so the only recovery is different inputs: more samples, a
//! relaxed tolerance, or a widened search bracket.
//!
//! ```rust
//! use focuspeak::prelude::*;
//!
//! let model = Sweep::new().build()?;
//! match model.fit(&[1.0], &[2.0]) {
//!     Err(FocusError::TooFewSamples { got, min }) => assert!((got, min) == (1, 2)),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Result::<(), FocusError>::Ok(())
//! ```
//!
//! ## no_std
//!
//! The crate supports `no_std` environments (e.g. on-camera firmware):
//!
//! ```toml
//! [dependencies]
//! focuspeak = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the crate-wide error type.
mod primitives;

// Layer 2: Math - pure numerical routines.
//
// Gaussian elimination with partial pivoting, Gauss–Seidel iteration for
// diagonally dominant systems, and parabola fitting.
mod math;

// Layer 3: Algorithms - fitting and search.
//
// Spline linear-system construction, piecewise-polynomial evaluation, and
// golden-section search.
mod algorithms;

// Layer 4: Engine - orchestration.
//
// Input validation, pipeline execution, and result assembly.
mod engine;

// High-level fluent API for focus estimation.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard focuspeak prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use focuspeak::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        build_spline_system, find_extremum, parabola_roots, parabola_through, parabola_vertex,
        solve_dense, FocusError, FocusFit, FocusModel, LinearSystem, PiecewisePolynomial,
        SearchDirection::{self, Maximize, Minimize},
        SearchSettings,
        SplineDegree::{self, Cubic, Quadratic},
        SweepBuilder as Sweep,
    };
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
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math routines.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal fitting and search algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
