//! Error types for focus estimation.
//!
//! ## Purpose
//!
//! This module defines [`FocusError`], the single error enum returned by
//! every fallible operation in the crate: input validation, spline system
//! construction, linear solving, curve evaluation, and peak search.
//!
//! ## Design notes
//!
//! * **Recoverable values**: Every failure is a distinct, matchable variant.
//!   No operation panics on bad numeric input or returns a partially-valid
//!   result in place of an error.
//! * **Deterministic**: The pipeline has no retry policy; a repeated call
//!   with the same input fails identically. Recovery is caller-supplied
//!   (different samples, a relaxed tolerance, a widened search bracket).
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is
//!   gated on the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not log or aggregate errors.
//! * This module does not classify errors by severity.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// FocusError
// ============================================================================

/// Errors produced by focus-curve fitting and peak search.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusError {
    /// Input slices are empty.
    EmptyInput,

    /// Distance and sharpness slices have different lengths.
    MismatchedInputs {
        /// Length of the distance slice.
        x_len: usize,
        /// Length of the sharpness slice.
        y_len: usize,
    },

    /// Too few samples to form even one spline segment.
    TooFewSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Focus distances are not strictly increasing.
    NonIncreasingDistances {
        /// Index of the first sample that does not increase.
        index: usize,
    },

    /// A non-finite (NaN or infinite) value was encountered.
    InvalidNumericValue(String),

    /// Convergence tolerance is not a positive finite number.
    InvalidTolerance(f64),

    /// Iteration cap is outside the accepted range.
    InvalidIterations(usize),

    /// Search range is empty, reversed, or outside the fitted domain.
    InvalidSearchRange {
        /// Lower bound of the rejected range.
        low: f64,
        /// Upper bound of the rejected range.
        high: f64,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// Elimination found no usable pivot; the system is singular.
    SingularSystem {
        /// Pivot column at which elimination stalled.
        column: usize,
    },

    /// Evaluation was requested outside the fitted domain.
    OutOfBounds {
        /// The rejected query point.
        got: f64,
        /// Lower end of the fitted domain.
        min: f64,
        /// Upper end of the fitted domain.
        max: f64,
    },

    /// The iteration cap was exhausted before the tolerance test passed.
    NoConvergence {
        /// Number of iterations performed.
        iterations: usize,
    },

    /// The matrix is not strictly diagonally dominant.
    NotDiagonallyDominant {
        /// First row violating dominance.
        row: usize,
    },
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusError::EmptyInput => write!(f, "Input arrays are empty"),
            FocusError::MismatchedInputs { x_len, y_len } => write!(
                f,
                "Length mismatch: distances has {} points, sharpness has {}",
                x_len, y_len
            ),
            FocusError::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {}, need at least {}", got, min)
            }
            FocusError::NonIncreasingDistances { index } => write!(
                f,
                "Focus distances must be strictly increasing: violated at index {}",
                index
            ),
            FocusError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            FocusError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            FocusError::InvalidIterations(n) => {
                write!(f, "Invalid iteration cap: {} (must be in [1, 10000])", n)
            }
            FocusError::InvalidSearchRange { low, high } => write!(
                f,
                "Invalid search range: [{}, {}] (must be ordered and inside the fitted domain)",
                low, high
            ),
            FocusError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            FocusError::SingularSystem { column } => write!(
                f,
                "Singular system: no nonzero pivot in column {}",
                column
            ),
            FocusError::OutOfBounds { got, min, max } => write!(
                f,
                "Evaluation point {} is outside the fitted domain [{}, {}]",
                got, min, max
            ),
            FocusError::NoConvergence { iterations } => write!(
                f,
                "No convergence after {} iterations (is the function unimodal on the bracket?)",
                iterations
            ),
            FocusError::NotDiagonallyDominant { row } => write!(
                f,
                "Matrix is not strictly diagonally dominant: row {} fails",
                row
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FocusError {}
