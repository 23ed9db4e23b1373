//! High-level API for focus estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a focus-sweep fit, and the model object that
//! runs fits against sample data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; only deviations need to be spelled out.
//! * **Validated**: Parameters are validated once, when `.build()` is
//!   called; sample data is validated per `.fit()` call.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SweepBuilder`] via `Sweep::new()`.
//! 2. Chain configuration methods (`.degree()`, `.tolerance()`, …).
//! 3. Call `.build()` to obtain a validated [`FocusModel`].
//! 4. Call `.fit(&distances, &sharpness)` to run the pipeline.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{run_fit, FitConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::evaluate::PiecewisePolynomial;
pub use crate::algorithms::golden::{find_extremum, SearchDirection, SearchSettings};
pub use crate::algorithms::system::{build_spline_system, LinearSystem, SplineDegree};
pub use crate::engine::output::FocusFit;
pub use crate::math::gaussian::solve as solve_dense;
pub use crate::math::parabola::{parabola_roots, parabola_through, parabola_vertex};
pub use crate::primitives::errors::FocusError;

// ============================================================================
// SweepBuilder
// ============================================================================

/// Fluent builder for configuring a focus-sweep fit.
#[derive(Debug, Clone)]
pub struct SweepBuilder<T: Float + Debug> {
    /// Spline degree (default: cubic).
    pub degree: Option<SplineDegree>,

    /// Peak-search tolerance (default: 0.01).
    pub tolerance: Option<T>,

    /// Peak-search iteration cap (default: 100).
    pub max_iterations: Option<usize>,

    /// Search direction (default: maximize).
    pub direction: Option<SearchDirection>,

    /// Search bracket (default: the full fitted domain).
    pub search_range: Option<(T, T)>,

    /// Whether to locate the peak at all (default: true).
    pub locate_peak: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for SweepBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> SweepBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            tolerance: None,
            max_iterations: None,
            direction: None,
            search_range: None,
            locate_peak: None,
            duplicate_param: None,
        }
    }

    /// Set the spline degree.
    pub fn degree(mut self, degree: SplineDegree) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the peak-search tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the peak-search iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the search direction.
    pub fn direction(mut self, direction: SearchDirection) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    /// Restrict the peak search to a sub-range of the fitted domain.
    pub fn search_range(mut self, low: T, high: T) -> Self {
        if self.search_range.is_some() {
            self.duplicate_param = Some("search_range");
        }
        self.search_range = Some((low, high));
        self
    }

    /// Enable or disable the peak search.
    pub fn locate_peak(mut self, locate: bool) -> Self {
        if self.locate_peak.is_some() {
            self.duplicate_param = Some("locate_peak");
        }
        self.locate_peak = Some(locate);
        self
    }

    /// Validate the configuration and build a [`FocusModel`].
    ///
    /// # Errors
    ///
    /// * [`FocusError::DuplicateParameter`] if any parameter was set twice.
    /// * [`FocusError::InvalidTolerance`] /
    ///   [`FocusError::InvalidIterations`] for unusable settings.
    pub fn build(self) -> Result<FocusModel<T>, FocusError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = self
            .tolerance
            .unwrap_or_else(|| T::from(0.01).unwrap());
        Validator::validate_tolerance(tolerance)?;

        let max_iterations = self.max_iterations.unwrap_or(100);
        Validator::validate_max_iterations(max_iterations)?;

        // A user-supplied range is checked against the fitted domain at fit
        // time; only its internal ordering can be checked here.
        if let Some((low, high)) = self.search_range {
            if !low.is_finite() || !high.is_finite() || low >= high {
                return Err(FocusError::InvalidSearchRange {
                    low: low.to_f64().unwrap_or(f64::NAN),
                    high: high.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(FocusModel {
            config: FitConfig {
                degree: self.degree.unwrap_or(SplineDegree::Cubic),
                search: SearchSettings {
                    tolerance,
                    max_iterations,
                    direction: self.direction.unwrap_or(SearchDirection::Maximize),
                },
                search_range: self.search_range,
                locate_peak: self.locate_peak.unwrap_or(true),
            },
        })
    }
}

// ============================================================================
// FocusModel
// ============================================================================

/// A validated, reusable focus-estimation configuration.
#[derive(Debug, Clone, Copy)]
pub struct FocusModel<T: Float> {
    config: FitConfig<T>,
}

impl<T: Float> FocusModel<T> {
    /// Fit the configured spline through the sweep and locate the peak.
    ///
    /// `distances` must be strictly increasing and parallel to `sharpness`.
    ///
    /// # Errors
    ///
    /// Any validation, solver, or search error from the pipeline.
    pub fn fit(&self, distances: &[T], sharpness: &[T]) -> Result<FocusFit<T>, FocusError> {
        run_fit(&self.config, distances, sharpness)
    }
}
