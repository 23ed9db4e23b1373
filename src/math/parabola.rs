//! Parabola fitting through three samples.
//!
//! ## Purpose
//!
//! This module fits the unique parabola through three `(x, y)` samples and
//! locates its apex. It is the cheap closed-form alternative to the full
//! spline pipeline: with exactly three focus measurements around the peak,
//! the apex of the interpolating parabola is already a usable best-focus
//! estimate.
//!
//! ## Design notes
//!
//! * **Newton form**: Coefficients come from divided differences expanded
//!   back to the power basis, so no linear system is solved.
//! * **Coefficient order**: Ascending powers `[c, b, a]` for
//!   `a·x² + b·x + c`, the natural order the divided-difference expansion
//!   produces.
//!
//! ## Non-goals
//!
//! * This module does not fit in the least-squares sense; three samples
//!   determine the parabola exactly.
//! * This module does not decide whether the apex is a maximum or a
//!   minimum; callers inspect the sign of the leading coefficient.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FocusError;

// ============================================================================
// Fitting
// ============================================================================

/// Coefficients `[c, b, a]` of the parabola `a·x² + b·x + c` through three
/// samples.
///
/// # Errors
///
/// [`FocusError::InvalidNumericValue`] if any two abscissae coincide.
pub fn parabola_through<T: Float>(
    p0: (T, T),
    p1: (T, T),
    p2: (T, T),
) -> Result<[T; 3], FocusError> {
    let (x0, y0) = p0;
    let (x1, y1) = p1;
    let (x2, y2) = p2;

    if x1 == x0 || x2 == x1 || x2 == x0 {
        return Err(FocusError::InvalidNumericValue(format!(
            "duplicate abscissa among {}, {}, {}",
            x0.to_f64().unwrap_or(f64::NAN),
            x1.to_f64().unwrap_or(f64::NAN),
            x2.to_f64().unwrap_or(f64::NAN)
        )));
    }

    // Divided differences of the Newton form.
    let b0 = y0;
    let b1 = (y1 - y0) / (x1 - x0);
    let b2 = ((y2 - y1) / (x2 - x1) - b1) / (x2 - x0);

    // Expand b0 + b1·(x − x0) + b2·(x − x0)(x − x1) to the power basis.
    let c = b0 - b1 * x0 + b2 * x0 * x1;
    let b = b1 - b2 * x0 - b2 * x1;
    let a = b2;

    Ok([c, b, a])
}

// ============================================================================
// Roots and Apex
// ============================================================================

/// Real roots of the parabola, larger-root first.
///
/// # Errors
///
/// [`FocusError::InvalidNumericValue`] if the leading coefficient is zero
/// (degenerate parabola) or the discriminant is negative (no real roots).
pub fn parabola_roots<T: Float>(coefficients: &[T; 3]) -> Result<(T, T), FocusError> {
    let [c, b, a] = *coefficients;

    if a == T::zero() {
        return Err(FocusError::InvalidNumericValue(
            "zero leading coefficient: not a parabola".into(),
        ));
    }

    let four = T::from(4.0).unwrap();
    let two = T::from(2.0).unwrap();
    let discriminant = b * b - four * a * c;
    if discriminant < T::zero() {
        return Err(FocusError::InvalidNumericValue(format!(
            "negative discriminant {}: no real roots",
            discriminant.to_f64().unwrap_or(f64::NAN)
        )));
    }

    let sqrt_d = discriminant.sqrt();
    Ok(((-b + sqrt_d) / (two * a), (-b - sqrt_d) / (two * a)))
}

/// Apex `(x, y)` of the parabola.
///
/// The apex abscissa is the midpoint of the roots, which reduces to
/// `−b / 2a` and needs no real roots to exist.
///
/// # Errors
///
/// [`FocusError::InvalidNumericValue`] if the leading coefficient is zero.
pub fn parabola_vertex<T: Float>(coefficients: &[T; 3]) -> Result<(T, T), FocusError> {
    let [c, b, a] = *coefficients;

    if a == T::zero() {
        return Err(FocusError::InvalidNumericValue(
            "zero leading coefficient: no apex".into(),
        ));
    }

    let two = T::from(2.0).unwrap();
    let x = -b / (two * a);
    let y = (a * x + b) * x + c;
    Ok((x, y))
}
