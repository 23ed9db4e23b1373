//! Input validation for focus-sweep configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions guarding the fitting
//! pipeline: sample requirements (length, finiteness, strictly increasing
//! distances) and configuration bounds (tolerance, iteration cap, search
//! range).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform fitting or search itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FocusError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for focus-sweep configuration and input data.
///
/// Provides static methods returning `Result<(), FocusError>`; each fails
/// fast on the first violation it finds.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate a focus sweep: parallel distance and sharpness slices.
    pub fn validate_samples<T: Float>(x: &[T], y: &[T]) -> Result<(), FocusError> {
        // Check 1: Non-empty slices
        if x.is_empty() || y.is_empty() {
            return Err(FocusError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(FocusError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: At least one spline segment
        if x.len() < 2 {
            return Err(FocusError::TooFewSamples {
                got: x.len(),
                min: 2,
            });
        }

        // Check 4: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(FocusError::InvalidNumericValue(format!(
                    "distance[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(FocusError::InvalidNumericValue(format!(
                    "sharpness[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 5: Strictly increasing distances
        for i in 1..x.len() {
            if x[i] <= x[i - 1] {
                return Err(FocusError::NonIncreasingDistances { index: i });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the search tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), FocusError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(FocusError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the search iteration cap.
    ///
    /// # Notes
    ///
    /// * A cap of zero would make every search fail trivially.
    /// * Caps above 10000 buy nothing: the bracket shrinks geometrically,
    ///   so any reasonable tolerance is reached far earlier.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), FocusError> {
        const MAX_ITERATIONS: usize = 10_000;
        if max_iterations == 0 || max_iterations > MAX_ITERATIONS {
            return Err(FocusError::InvalidIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate a user-supplied search range against the fitted domain.
    pub fn validate_search_range<T: Float>(
        low: T,
        high: T,
        domain: (T, T),
    ) -> Result<(), FocusError> {
        if !low.is_finite() || !high.is_finite() || low >= high || low < domain.0 || high > domain.1
        {
            return Err(FocusError::InvalidSearchRange {
                low: low.to_f64().unwrap_or(f64::NAN),
                high: high.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FocusError> {
        if let Some(parameter) = duplicate_param {
            return Err(FocusError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
