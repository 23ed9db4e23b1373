//! Iterative linear solving via Gauss–Seidel sweeps.
//!
//! ## Purpose
//!
//! This module provides an iterative alternative to direct elimination for
//! systems whose matrix is strictly diagonally dominant. It is kept isolated
//! from the spline pipeline on purpose: spline systems carry exact zeros on
//! the diagonal, so a Gauss–Seidel sweep over them divides by zero. The
//! dominance check here rejects such matrices up front instead.
//!
//! ## Design notes
//!
//! * **Restricted applicability**: Strict row dominance is required, not
//!   merely recommended; it is the standard sufficient condition for
//!   convergence of the sweep.
//! * **In-place sweeps**: Each sweep updates components left to right,
//!   consuming already-updated values within the same sweep.
//! * **Convergence test**: Relative change `‖x_new − x_old‖ / ‖x_old‖`
//!   against the configured tolerance (absolute change when the previous
//!   iterate has zero norm).
//! * **Bounded**: The sweep loop is capped; exhausting the cap is an error,
//!   not a hang.
//!
//! ## Non-goals
//!
//! * This module is not used by, and must not be wired into, the spline
//!   fitting pipeline.
//! * This module does not implement relaxation (SOR) or preconditioning.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FocusError;

// ============================================================================
// Settings
// ============================================================================

/// Convergence settings for the Gauss–Seidel sweep loop.
#[derive(Debug, Clone, Copy)]
pub struct SweepSettings<T: Float> {
    /// Relative-change tolerance terminating the sweeps.
    pub tolerance: T,
    /// Maximum number of sweeps before giving up.
    pub max_sweeps: usize,
}

impl<T: Float> Default for SweepSettings<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(0.1).unwrap(),
            max_sweeps: 500,
        }
    }
}

// ============================================================================
// Dominance Check
// ============================================================================

/// Verify strict row diagonal dominance: `|a[i][i]| > Σ_{j≠i} |a[i][j]|`.
fn check_dominance<T: Float>(a: &[T], m: usize) -> Result<(), FocusError> {
    for row in 0..m {
        let diag = a[row * m + row].abs();
        let mut off = T::zero();
        for col in 0..m {
            if col != row {
                off = off + a[row * m + col].abs();
            }
        }
        if diag <= off {
            return Err(FocusError::NotDiagonallyDominant { row });
        }
    }
    Ok(())
}

#[inline]
fn norm<T: Float>(v: &[T]) -> T {
    v.iter()
        .fold(T::zero(), |acc, &component| acc + component * component)
        .sqrt()
}

// ============================================================================
// Solve
// ============================================================================

/// Solve `A·x = b` by Gauss–Seidel iteration from the guess `initial`.
///
/// # Errors
///
/// * [`FocusError::MismatchedInputs`] on inconsistent buffer sizes.
/// * [`FocusError::NotDiagonallyDominant`] if any row fails the strict
///   dominance test.
/// * [`FocusError::NoConvergence`] if `max_sweeps` is exhausted before the
///   relative change drops below the tolerance.
pub fn solve<T: Float>(
    a: &[T],
    b: &[T],
    m: usize,
    initial: &[T],
    settings: &SweepSettings<T>,
) -> Result<Vec<T>, FocusError> {
    if a.len() != m * m || b.len() != m || initial.len() != m {
        return Err(FocusError::MismatchedInputs {
            x_len: a.len(),
            y_len: b.len(),
        });
    }
    if m == 0 {
        return Err(FocusError::EmptyInput);
    }
    check_dominance(a, m)?;

    let mut previous: Vec<T> = initial.to_vec();
    let mut current: Vec<T> = initial.to_vec();
    let mut delta = vec![T::zero(); m];

    for _ in 0..settings.max_sweeps {
        for row in 0..m {
            let mut acc = b[row];
            for col in 0..m {
                if col != row {
                    acc = acc - a[row * m + col] * current[col];
                }
            }
            current[row] = acc / a[row * m + row];
        }

        for component in 0..m {
            delta[component] = current[component] - previous[component];
        }

        let denominator = norm(&previous);
        let change = if denominator > T::zero() {
            norm(&delta) / denominator
        } else {
            norm(&delta)
        };

        if change <= settings.tolerance {
            return Ok(current);
        }
        previous.copy_from_slice(&current);
    }

    Err(FocusError::NoConvergence {
        iterations: settings.max_sweeps,
    })
}
