//! Execution of the focus-estimation pipeline.
//!
//! ## Purpose
//!
//! This module runs the full pipeline on validated configuration: sample
//! validation → spline fit → golden-section peak search → result assembly.
//! It is the single place where the layers below are wired together.
//!
//! ## Design notes
//!
//! * **Pure orchestration**: All numeric work lives in the math and
//!   algorithms layers; the executor only sequences it and maps
//!   configuration onto algorithm inputs.
//! * **Search range**: Defaults to the full fitted domain; a user-supplied
//!   range must lie inside the domain so the objective can never be asked
//!   to extrapolate.
//! * **No retained state**: Each call owns its data; independent fits can
//!   run in parallel from the caller's side without any locking.
//!
//! ## Non-goals
//!
//! * This module does not validate builder parameters (done at `build()`).
//! * This module does not format results for display (see `output`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::evaluate::PiecewisePolynomial;
use crate::algorithms::golden::{find_extremum, SearchSettings};
use crate::algorithms::system::SplineDegree;
use crate::engine::output::FocusFit;
use crate::engine::validator::Validator;
use crate::primitives::errors::FocusError;

// ============================================================================
// FitConfig
// ============================================================================

/// Fully-resolved configuration for one fit, produced by the builder.
#[derive(Debug, Clone, Copy)]
pub struct FitConfig<T: Float> {
    /// Spline degree of the fit.
    pub degree: SplineDegree,
    /// Golden-section settings for the peak search.
    pub search: SearchSettings<T>,
    /// Search bracket; `None` means the full fitted domain.
    pub search_range: Option<(T, T)>,
    /// Whether to run the peak search at all.
    pub locate_peak: bool,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run the pipeline: validate, fit, and (optionally) locate the peak.
///
/// # Errors
///
/// Any validation, construction, solver, evaluation, or search error from
/// the layers below, unchanged.
pub fn run_fit<T: Float>(
    config: &FitConfig<T>,
    x: &[T],
    y: &[T],
) -> Result<FocusFit<T>, FocusError> {
    Validator::validate_samples(x, y)?;

    let spline = PiecewisePolynomial::fit(x, y, config.degree)?;

    let optimum = if config.locate_peak {
        let domain = spline.domain();
        let (low, high) = match config.search_range {
            Some(range) => {
                Validator::validate_search_range(range.0, range.1, domain)?;
                range
            }
            None => domain,
        };
        Some(find_extremum(low, high, &config.search, |query| {
            spline.evaluate(query)
        })?)
    } else {
        None
    };

    Ok(FocusFit::new(spline, optimum))
}
