//! Result assembly for completed fits.
//!
//! ## Purpose
//!
//! This module defines [`FocusFit`], the object a completed pipeline run
//! hands back: the fitted curve plus the located optimum. Display sinks
//! read the coefficient vector, the breakpoints, and the optimum from here;
//! callers keep the fit around to evaluate the curve at arbitrary
//! distances.
//!
//! ## Non-goals
//!
//! * This module does not plot or serialize; it only exposes the numbers
//!   and a plain-text summary.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::evaluate::PiecewisePolynomial;
use crate::algorithms::system::SplineDegree;
use crate::primitives::errors::FocusError;

// ============================================================================
// FocusFit
// ============================================================================

/// The result of a focus-sweep fit.
#[derive(Debug, Clone)]
pub struct FocusFit<T: Float> {
    spline: PiecewisePolynomial<T>,
    optimum: Option<(T, T)>,
}

impl<T: Float> FocusFit<T> {
    /// Assemble a result from a fitted curve and an optional optimum.
    pub(crate) fn new(spline: PiecewisePolynomial<T>, optimum: Option<(T, T)>) -> Self {
        Self { spline, optimum }
    }

    /// The fitted piecewise-polynomial curve.
    #[inline]
    pub fn curve(&self) -> &PiecewisePolynomial<T> {
        &self.spline
    }

    /// The located `(distance, sharpness)` optimum, if the peak search ran.
    #[inline]
    pub fn optimum(&self) -> Option<(T, T)> {
        self.optimum
    }

    /// Degree of the fit.
    #[inline]
    pub fn degree(&self) -> SplineDegree {
        self.spline.degree()
    }

    /// The breakpoints of the fit (the sample distances).
    #[inline]
    pub fn breakpoints(&self) -> &[T] {
        self.spline.breakpoints()
    }

    /// The coefficient vector, segment-major, descending powers.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        self.spline.coefficients()
    }

    /// Evaluate the fitted curve at `distance`.
    ///
    /// # Errors
    ///
    /// [`FocusError::OutOfBounds`] outside the fitted domain.
    #[inline]
    pub fn evaluate(&self, distance: T) -> Result<T, FocusError> {
        self.spline.evaluate(distance)
    }
}

impl<T: Float> fmt::Display for FocusFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.spline.domain();
        writeln!(f, "Focus sweep fit:")?;
        writeln!(f, "  Samples: {}", self.spline.breakpoints().len())?;
        writeln!(f, "  Degree: {}", self.spline.degree().name())?;
        writeln!(
            f,
            "  Domain: [{:.2}, {:.2}]",
            min.to_f64().unwrap_or(f64::NAN),
            max.to_f64().unwrap_or(f64::NAN)
        )?;
        match self.optimum {
            Some((x, y)) => writeln!(
                f,
                "  Optimum: distance = {:.4}, sharpness = {:.4}",
                x.to_f64().unwrap_or(f64::NAN),
                y.to_f64().unwrap_or(f64::NAN)
            ),
            None => writeln!(f, "  Optimum: not requested"),
        }
    }
}
