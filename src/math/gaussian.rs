//! Dense linear solving via Gaussian elimination with partial pivoting.
//!
//! ## Purpose
//!
//! This module solves square dense systems `A·x = b`. It is the solver the
//! spline pipeline runs on: the systems produced by the spline builder are
//! neither symmetric nor diagonally dominant (several diagonal entries are
//! exactly zero), so row pivoting is required for correctness, not just for
//! conditioning.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: For each column the largest-magnitude candidate
//!   pivot at or below the diagonal is swapped onto the diagonal before
//!   elimination.
//! * **In-place**: Factorization overwrites the caller's buffers; only the
//!   returned solution vector is meaningful afterwards.
//! * **Fail-fast**: A pivot below the degeneracy threshold aborts with
//!   [`FocusError::SingularSystem`]; no value derived from a zero pivot is
//!   ever returned.
//! * **Complexity**: O(m³). The systems here are small (m = 3·(N−1) or
//!   4·(N−1) for N focus samples), so a dense direct method is the right
//!   tool.
//!
//! ## Invariants
//!
//! * `a.len() == m * m` and `b.len() == m` (checked).
//! * Row-major storage: entry `(r, c)` lives at `a[r * m + c]`.
//!
//! ## Non-goals
//!
//! * This module does not exploit sparsity or bandedness.
//! * This module does not compute determinants, inverses, or condition
//!   numbers.

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
// Pivot Selection
// ============================================================================

/// Degeneracy threshold for pivots, scaled from the type's epsilon.
#[inline]
fn pivot_floor<T: Float>() -> T {
    T::epsilon() * T::from(100.0).unwrap()
}

/// Find the row index `r >= col` maximizing `|a[r][col]|`.
#[inline]
fn select_pivot_row<T: Float>(a: &[T], m: usize, col: usize) -> usize {
    let mut best_row = col;
    let mut best_mag = a[col * m + col].abs();
    for row in (col + 1)..m {
        let mag = a[row * m + col].abs();
        if mag > best_mag {
            best_mag = mag;
            best_row = row;
        }
    }
    best_row
}

/// Swap rows `r1` and `r2` of the matrix and the right-hand side.
#[inline]
fn swap_rows<T: Float>(a: &mut [T], b: &mut [T], m: usize, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for col in 0..m {
        a.swap(r1 * m + col, r2 * m + col);
    }
    b.swap(r1, r2);
}

// ============================================================================
// Solve
// ============================================================================

/// Solve `A·x = b` for a square row-major matrix, in place.
///
/// The contents of `a` and `b` are unspecified after the call; the solution
/// is the returned vector.
///
/// # Errors
///
/// * [`FocusError::MismatchedInputs`] if `a.len() != m * m` or
///   `b.len() != m`.
/// * [`FocusError::SingularSystem`] if no usable pivot exists in some
///   column, i.e. the system is (numerically) rank-deficient.
pub fn solve<T: Float>(a: &mut [T], b: &mut [T], m: usize) -> Result<Vec<T>, FocusError> {
    if a.len() != m * m || b.len() != m {
        return Err(FocusError::MismatchedInputs {
            x_len: a.len(),
            y_len: b.len(),
        });
    }
    if m == 0 {
        return Err(FocusError::EmptyInput);
    }

    let floor = pivot_floor::<T>();

    // Elimination stage: reduce to upper-triangular form.
    for col in 0..m {
        let pivot_row = select_pivot_row(a, m, col);
        swap_rows(a, b, m, col, pivot_row);

        let pivot = a[col * m + col];
        if pivot.abs() <= floor {
            return Err(FocusError::SingularSystem { column: col });
        }

        for row in (col + 1)..m {
            let factor = a[row * m + col] / pivot;
            if factor == T::zero() {
                continue;
            }
            // Update the row tail from the pivot column onward; the entry
            // below the pivot becomes exactly zero by construction.
            a[row * m + col] = T::zero();
            for tail in (col + 1)..m {
                let delta = factor * a[col * m + tail];
                a[row * m + tail] = a[row * m + tail] - delta;
            }
            b[row] = b[row] - factor * b[col];
        }
    }

    // Back substitution: x[i] = (b[i] - Σ_{j>i} a[i][j]·x[j]) / a[i][i].
    let mut x = vec![T::zero(); m];
    for row in (0..m).rev() {
        let mut acc = b[row];
        for col in (row + 1)..m {
            acc = acc - a[row * m + col] * x[col];
        }
        x[row] = acc / a[row * m + row];
    }

    Ok(x)
}
