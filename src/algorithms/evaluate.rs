//! Piecewise-polynomial evaluation over fitted coefficients.
//!
//! ## Purpose
//!
//! This module turns a solved coefficient vector and its breakpoints into an
//! evaluable curve: [`PiecewisePolynomial`]. Evaluation maps a query point
//! to its governing segment with a bounded binary search over the
//! breakpoints and applies the segment's polynomial.
//!
//! ## Design notes
//!
//! * **Binary search, not a scan**: The optimizer evaluates the curve dozens
//!   of times per search; segment lookup is O(log N).
//! * **Search policy**: `left = 0`, `right = N−1`,
//!   `mid = ceil((left+right)/2)`; the query is compared against
//!   `breakpoints[mid]` and `breakpoints[mid−1]` and the search terminates
//!   when it lands in `[breakpoints[mid−1], breakpoints[mid]]`, selecting
//!   coefficient block `mid−1`.
//! * **Domain policy**: Queries outside `[breakpoints[0],
//!   breakpoints[N−1]]` are rejected with [`FocusError::OutOfBounds`]
//!   before the search runs; they are never extrapolated.
//! * **Degree-uniform**: Block evaluation is a Horner fold over the block
//!   slice, so quadratic and cubic blocks share one code path.
//!
//! ## Invariants
//!
//! * Breakpoints are strictly increasing (enforced upstream).
//! * `coefficients.len() == block_size · (breakpoints.len() − 1)`.
//!
//! ## Non-goals
//!
//! * This module does not construct or solve the spline system.
//! * This module does not extrapolate beyond the fitted domain.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::system::{build_spline_system, SplineDegree};
use crate::primitives::errors::FocusError;

// ============================================================================
// PiecewisePolynomial
// ============================================================================

/// A fitted piecewise-polynomial curve.
///
/// Coefficients are stored segment-major in descending powers, the layout
/// produced by the spline system builder.
#[derive(Debug, Clone)]
pub struct PiecewisePolynomial<T: Float> {
    breakpoints: Vec<T>,
    coefficients: Vec<T>,
    degree: SplineDegree,
}

impl<T: Float> PiecewisePolynomial<T> {
    /// Fit a spline of the given degree through the samples.
    ///
    /// Builds the interpolation system and solves it with pivoted Gaussian
    /// elimination.
    ///
    /// # Errors
    ///
    /// * [`FocusError::TooFewSamples`] / [`FocusError::MismatchedInputs`]
    ///   from system construction.
    /// * [`FocusError::SingularSystem`] from the solver.
    pub fn fit(x: &[T], y: &[T], degree: SplineDegree) -> Result<Self, FocusError> {
        let coefficients = build_spline_system(x, y, degree)?.solve()?;
        Ok(Self {
            breakpoints: x.to_vec(),
            coefficients,
            degree,
        })
    }

    /// Assemble a curve from already-solved parts.
    ///
    /// # Errors
    ///
    /// [`FocusError::MismatchedInputs`] if the coefficient length is not
    /// `block_size · (breakpoints − 1)`, or fewer than two breakpoints are
    /// given.
    pub fn from_parts(
        breakpoints: Vec<T>,
        coefficients: Vec<T>,
        degree: SplineDegree,
    ) -> Result<Self, FocusError> {
        if breakpoints.len() < 2 {
            return Err(FocusError::TooFewSamples {
                got: breakpoints.len(),
                min: 2,
            });
        }
        let expected = degree.block_size() * (breakpoints.len() - 1);
        if coefficients.len() != expected {
            return Err(FocusError::MismatchedInputs {
                x_len: breakpoints.len(),
                y_len: coefficients.len(),
            });
        }
        Ok(Self {
            breakpoints,
            coefficients,
            degree,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Degree of the fit.
    #[inline]
    pub fn degree(&self) -> SplineDegree {
        self.degree
    }

    /// The breakpoints of the fit (the original sample distances).
    #[inline]
    pub fn breakpoints(&self) -> &[T] {
        &self.breakpoints
    }

    /// The full coefficient vector, segment-major, descending powers.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Number of polynomial segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.breakpoints.len() - 1
    }

    /// Coefficient block of segment `i`, descending powers.
    #[inline]
    pub fn segment_coefficients(&self, segment: usize) -> &[T] {
        let block = self.degree.block_size();
        &self.coefficients[block * segment..block * (segment + 1)]
    }

    /// The fitted domain `(first breakpoint, last breakpoint)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (
            self.breakpoints[0],
            self.breakpoints[self.breakpoints.len() - 1],
        )
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the curve at `query`.
    ///
    /// # Errors
    ///
    /// [`FocusError::OutOfBounds`] if `query` lies outside the fitted
    /// domain.
    pub fn evaluate(&self, query: T) -> Result<T, FocusError> {
        let segment = self.locate_segment(query)?;
        Ok(horner(self.segment_coefficients(segment), query))
    }

    /// First derivative of the curve at `query`.
    ///
    /// # Errors
    ///
    /// [`FocusError::OutOfBounds`] if `query` lies outside the fitted
    /// domain.
    pub fn derivative(&self, query: T) -> Result<T, FocusError> {
        let segment = self.locate_segment(query)?;
        Ok(horner_derivative(self.segment_coefficients(segment), query))
    }

    /// Second derivative of the curve at `query`.
    ///
    /// # Errors
    ///
    /// [`FocusError::OutOfBounds`] if `query` lies outside the fitted
    /// domain.
    pub fn second_derivative(&self, query: T) -> Result<T, FocusError> {
        let segment = self.locate_segment(query)?;
        Ok(horner_second_derivative(
            self.segment_coefficients(segment),
            query,
        ))
    }

    /// Map a query point to the index of its governing segment.
    fn locate_segment(&self, query: T) -> Result<usize, FocusError> {
        let points = &self.breakpoints;
        let last = points.len() - 1;

        if query < points[0] || query > points[last] {
            return Err(FocusError::OutOfBounds {
                got: query.to_f64().unwrap_or(f64::NAN),
                min: points[0].to_f64().unwrap_or(f64::NAN),
                max: points[last].to_f64().unwrap_or(f64::NAN),
            });
        }

        let mut left = 0usize;
        let mut right = last;
        loop {
            let mid = (left + right + 1) / 2;
            if query > points[mid] {
                left = mid;
            } else if query < points[mid - 1] {
                right = mid - 1;
            } else {
                return Ok(mid - 1);
            }
        }
    }
}

// ============================================================================
// Block Evaluation
// ============================================================================

/// Horner evaluation of a descending-power coefficient block.
#[inline]
fn horner<T: Float>(block: &[T], at: T) -> T {
    block
        .iter()
        .fold(T::zero(), |acc, &coefficient| acc * at + coefficient)
}

/// First derivative by the power rule, folded in Horner form.
#[inline]
fn horner_derivative<T: Float>(block: &[T], at: T) -> T {
    let top = block.len() - 1;
    block[..top].iter().enumerate().fold(T::zero(), |acc, (i, &coefficient)| {
        let power = T::from(top - i).unwrap();
        acc * at + power * coefficient
    })
}

/// Second derivative by the power rule, folded in Horner form.
#[inline]
fn horner_second_derivative<T: Float>(block: &[T], at: T) -> T {
    if block.len() < 3 {
        return T::zero();
    }
    let top = block.len() - 1;
    block[..top - 1]
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, &coefficient)| {
            let power = top - i;
            let scale = T::from(power * (power - 1)).unwrap();
            acc * at + scale * coefficient
        })
}
