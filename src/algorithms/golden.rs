//! Golden-section search for unimodal scalar functions.
//!
//! ## Purpose
//!
//! This module locates the extremum of a unimodal function over a bounded
//! bracket without derivatives, by shrinking the bracket at the fixed
//! golden ratio `φ = (√5 − 1)/2`. The fitted sharpness curve plugs in
//! directly as the objective, but any fallible scalar function works.
//!
//! ## Design notes
//!
//! * **Maximize by default**: A focus sweep looks for the sharpness peak;
//!   [`SearchDirection::Minimize`] flips the branch comparison.
//! * **Tie-breaking**: `y1 == y2` takes the `x1` branch, by construction of
//!   the `>=` comparison.
//! * **Bounded**: The loop is capped at `max_iterations`; exhausting the cap
//!   raises [`FocusError::NoConvergence`] instead of spinning forever on a
//!   non-unimodal or malformed objective.
//! * **Fallible objective**: The objective returns `Result`, so evaluation
//!   failures (e.g. an out-of-domain query) surface unchanged.
//!
//! ## Invariants
//!
//! * The bracket quintuple `(xlow, xup, x1, x2, d)` is owned by one search
//!   invocation and discarded on return.
//! * `d` shrinks by a factor of `φ` every iteration, so for any positive
//!   tolerance the convergence test eventually passes within the cap.
//!
//! ## Non-goals
//!
//! * This module does not handle multivariate or multi-modal optimization.
//! * This module does not verify unimodality; a violated assumption shows
//!   up as a wrong (but bracketed) answer or as `NoConvergence`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FocusError;

// ============================================================================
// Settings
// ============================================================================

/// Which kind of extremum the search is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Seek the maximum (the default for sharpness peaks).
    Maximize,
    /// Seek the minimum.
    Minimize,
}

/// Configuration for a golden-section search.
#[derive(Debug, Clone, Copy)]
pub struct SearchSettings<T: Float> {
    /// Bracket-width tolerance terminating the search.
    pub tolerance: T,
    /// Safety cap on iterations.
    pub max_iterations: usize,
    /// Extremum kind.
    pub direction: SearchDirection,
}

impl<T: Float> Default for SearchSettings<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(0.01).unwrap(),
            max_iterations: 100,
            direction: SearchDirection::Maximize,
        }
    }
}

// ============================================================================
// Bracket
// ============================================================================

/// The golden ratio `(√5 − 1)/2 ≈ 0.618`.
#[inline]
fn golden_ratio<T: Float>() -> T {
    (T::from(5.0).unwrap().sqrt() - T::one()) / T::from(2.0).unwrap()
}

/// Working state of one search: outer bounds, interior points, and the
/// current golden distance.
#[derive(Debug, Clone, Copy)]
struct Bracket<T: Float> {
    xlow: T,
    xup: T,
    x1: T,
    x2: T,
    d: T,
}

impl<T: Float> Bracket<T> {
    fn new(xlow: T, xup: T) -> Self {
        let d = golden_ratio::<T>() * (xup - xlow).abs();
        Self {
            xlow,
            xup,
            x1: xlow + d,
            x2: xup - d,
            d,
        }
    }

    /// Shrink the golden distance for the next iteration.
    #[inline]
    fn shrink(&mut self) {
        self.d = golden_ratio::<T>() * self.d;
    }

    /// Discard the region below `x2` and reposition the interior points.
    #[inline]
    fn narrow_low(&mut self) {
        self.xlow = self.x2;
        self.reposition();
    }

    /// Discard the region above `x1` and reposition the interior points.
    #[inline]
    fn narrow_high(&mut self) {
        self.xup = self.x1;
        self.reposition();
    }

    #[inline]
    fn reposition(&mut self) {
        self.x1 = self.xlow + self.d;
        self.x2 = self.xup - self.d;
    }
}

// ============================================================================
// Search
// ============================================================================

/// Locate the extremum of `f` over `[xlow, xup]`.
///
/// Returns the extremum as `(x, f(x))`.
///
/// # Errors
///
/// * [`FocusError::InvalidSearchRange`] if the bracket is non-finite,
///   empty, or reversed.
/// * [`FocusError::InvalidTolerance`] / [`FocusError::InvalidIterations`]
///   for unusable settings.
/// * [`FocusError::NoConvergence`] if the iteration cap is exhausted.
/// * Any error returned by the objective itself.
pub fn find_extremum<T, F>(
    xlow: T,
    xup: T,
    settings: &SearchSettings<T>,
    mut f: F,
) -> Result<(T, T), FocusError>
where
    T: Float,
    F: FnMut(T) -> Result<T, FocusError>,
{
    if !xlow.is_finite() || !xup.is_finite() || xlow >= xup {
        return Err(FocusError::InvalidSearchRange {
            low: xlow.to_f64().unwrap_or(f64::NAN),
            high: xup.to_f64().unwrap_or(f64::NAN),
        });
    }
    if !settings.tolerance.is_finite() || settings.tolerance <= T::zero() {
        return Err(FocusError::InvalidTolerance(
            settings.tolerance.to_f64().unwrap_or(f64::NAN),
        ));
    }
    if settings.max_iterations == 0 {
        return Err(FocusError::InvalidIterations(0));
    }

    let mut bracket = Bracket::new(xlow, xup);

    for _ in 0..settings.max_iterations {
        bracket.shrink();

        let y1 = f(bracket.x1)?;
        let y2 = f(bracket.x2)?;

        let keep_x1 = match settings.direction {
            SearchDirection::Maximize => y1 >= y2,
            SearchDirection::Minimize => y1 <= y2,
        };

        if keep_x1 {
            let spread = (bracket.xup - bracket.x1)
                .abs()
                .max((bracket.x1 - bracket.x2).abs());
            if spread < settings.tolerance {
                return Ok((bracket.x1, y1));
            }
            bracket.narrow_low();
        } else {
            let spread = (bracket.x1 - bracket.x2)
                .abs()
                .max((bracket.x2 - bracket.xlow).abs());
            if spread < settings.tolerance {
                return Ok((bracket.x2, y2));
            }
            bracket.narrow_high();
        }
    }

    Err(FocusError::NoConvergence {
        iterations: settings.max_iterations,
    })
}
