//! Linear-system construction for spline fitting.
//!
//! ## Purpose
//!
//! This module builds the square system `A·x = b` whose solution is the
//! coefficient vector of a piecewise-polynomial interpolant through the
//! focus samples. Two variants are supported: a quadratic spline (3
//! coefficients per segment) and a natural cubic spline (4 per segment).
//!
//! ## Design notes
//!
//! * **Explicit block enumeration**: Rows are emitted by iterating over
//!   `(segment, equation-kind)` pairs with named block offsets. No row or
//!   column index is ever derived by integer-division tricks; the block
//!   arithmetic is spelled out once in the per-kind base offsets and emit
//!   functions.
//! * **Row layout** (the contract the evaluator's coefficient blocks depend
//!   on): endpoint-interpolation rows first (two per segment), then
//!   first-derivative continuity at interior breakpoints, then (cubic
//!   only) second-derivative continuity, then the closing rows (quadratic:
//!   `a_0 = 0`; cubic: natural boundaries `S'' = 0` at both ends).
//! * **Column layout**: segment-major, descending powers within a block:
//!   `[a_0, b_0, c_0(, d_0), a_1, …]`.
//!
//! ## Invariants
//!
//! * `size == block_size · segments` and the matrix is square.
//! * Sample abscissae are assumed strictly increasing; the engine validator
//!   enforces this before construction.
//!
//! ## Non-goals
//!
//! * This module does not solve the system (see `math::gaussian`).
//! * This module does not evaluate the fitted curve (see
//!   `algorithms::evaluate`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::gaussian;
use crate::primitives::errors::FocusError;

// ============================================================================
// SplineDegree
// ============================================================================

/// Degree of the piecewise-polynomial fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineDegree {
    /// `a·x² + b·x + c` per segment; closed by `a_0 = 0`.
    Quadratic,
    /// `a·x³ + b·x² + c·x + d` per segment; closed by natural boundaries.
    Cubic,
}

impl SplineDegree {
    /// Number of coefficients per segment block.
    #[inline]
    pub fn block_size(&self) -> usize {
        match self {
            SplineDegree::Quadratic => 3,
            SplineDegree::Cubic => 4,
        }
    }

    /// Lowercase name for display purposes.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SplineDegree::Quadratic => "quadratic",
            SplineDegree::Cubic => "cubic",
        }
    }
}

// ============================================================================
// LinearSystem
// ============================================================================

/// A dense square system `A·x = b`, built once per fit.
#[derive(Debug, Clone)]
pub struct LinearSystem<T: Float> {
    /// Row-major `size × size` matrix.
    pub matrix: Vec<T>,
    /// Right-hand side of length `size`.
    pub rhs: Vec<T>,
    /// Number of rows (and columns, and unknowns).
    pub size: usize,
}

impl<T: Float> LinearSystem<T> {
    /// Create a zeroed system of the given size.
    fn zeroed(size: usize) -> Self {
        Self {
            matrix: vec![T::zero(); size * size],
            rhs: vec![T::zero(); size],
            size,
        }
    }

    /// Mutable access to entry `(row, col)`.
    #[inline]
    fn entry_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.matrix[row * self.size + col]
    }

    /// Read entry `(row, col)`.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> T {
        self.matrix[row * self.size + col]
    }

    /// Solve the system, consuming it.
    ///
    /// # Errors
    ///
    /// [`FocusError::SingularSystem`] if elimination finds no usable pivot.
    pub fn solve(mut self) -> Result<Vec<T>, FocusError> {
        gaussian::solve(&mut self.matrix, &mut self.rhs, self.size)
    }
}

// ============================================================================
// System Construction
// ============================================================================

/// Build the spline system for samples `(x, y)` at the requested degree.
///
/// # Errors
///
/// * [`FocusError::TooFewSamples`] for fewer than two samples.
/// * [`FocusError::MismatchedInputs`] if the slices differ in length.
pub fn build_spline_system<T: Float>(
    x: &[T],
    y: &[T],
    degree: SplineDegree,
) -> Result<LinearSystem<T>, FocusError> {
    if x.len() != y.len() {
        return Err(FocusError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(FocusError::TooFewSamples {
            got: x.len(),
            min: 2,
        });
    }

    let segments = x.len() - 1;
    let block = degree.block_size();
    let mut system = LinearSystem::zeroed(block * segments);

    // Named row-block offsets; every equation kind appends after the
    // previous block.
    let interpolation_base = 0;
    let slope_base = interpolation_base + 2 * segments;
    let curvature_base = slope_base + (segments - 1);

    emit_interpolation_rows(&mut system, x, y, degree, interpolation_base);
    emit_slope_rows(&mut system, x, degree, slope_base);
    match degree {
        SplineDegree::Quadratic => {
            // One closing condition: the first segment starts non-curving.
            *system.entry_mut(curvature_base, 0) = T::one();
        }
        SplineDegree::Cubic => {
            emit_curvature_rows(&mut system, x, curvature_base);
            emit_natural_boundary_rows(&mut system, x, curvature_base + (segments - 1));
        }
    }

    Ok(system)
}

/// Two rows per segment pinning the polynomial to both segment endpoints.
fn emit_interpolation_rows<T: Float>(
    system: &mut LinearSystem<T>,
    x: &[T],
    y: &[T],
    degree: SplineDegree,
    base: usize,
) {
    let block = degree.block_size();
    for segment in 0..(x.len() - 1) {
        for (side, sample) in [segment, segment + 1].into_iter().enumerate() {
            let row = base + 2 * segment + side;
            let col = block * segment;
            let at = x[sample];
            if degree == SplineDegree::Cubic {
                *system.entry_mut(row, col) = at * at * at;
                *system.entry_mut(row, col + 1) = at * at;
                *system.entry_mut(row, col + 2) = at;
                *system.entry_mut(row, col + 3) = T::one();
            } else {
                *system.entry_mut(row, col) = at * at;
                *system.entry_mut(row, col + 1) = at;
                *system.entry_mut(row, col + 2) = T::one();
            }
            system.rhs[row] = y[sample];
        }
    }
}

/// One row per interior breakpoint equating first derivatives of the
/// adjoining segments. The right-hand side stays zero.
fn emit_slope_rows<T: Float>(system: &mut LinearSystem<T>, x: &[T], degree: SplineDegree, base: usize) {
    let block = degree.block_size();
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    for interior in 1..(x.len() - 1) {
        let row = base + (interior - 1);
        let left = block * (interior - 1);
        let right = block * interior;
        let at = x[interior];
        if degree == SplineDegree::Cubic {
            // 3a·x² + 2b·x + c, left minus right.
            *system.entry_mut(row, left) = three * at * at;
            *system.entry_mut(row, left + 1) = two * at;
            *system.entry_mut(row, left + 2) = T::one();
            *system.entry_mut(row, right) = -(three * at * at);
            *system.entry_mut(row, right + 1) = -(two * at);
            *system.entry_mut(row, right + 2) = -T::one();
        } else {
            // 2a·x + b, left minus right.
            *system.entry_mut(row, left) = two * at;
            *system.entry_mut(row, left + 1) = T::one();
            *system.entry_mut(row, right) = -(two * at);
            *system.entry_mut(row, right + 1) = -T::one();
        }
    }
}

/// One row per interior breakpoint equating second derivatives (cubic only).
fn emit_curvature_rows<T: Float>(system: &mut LinearSystem<T>, x: &[T], base: usize) {
    let block = SplineDegree::Cubic.block_size();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();
    for interior in 1..(x.len() - 1) {
        let row = base + (interior - 1);
        let left = block * (interior - 1);
        let right = block * interior;
        let at = x[interior];
        // 6a·x + 2b, left minus right.
        *system.entry_mut(row, left) = six * at;
        *system.entry_mut(row, left + 1) = two;
        *system.entry_mut(row, right) = -(six * at);
        *system.entry_mut(row, right + 1) = -two;
    }
}

/// Two natural-boundary rows forcing `S'' = 0` at the first and last
/// breakpoints (cubic only).
fn emit_natural_boundary_rows<T: Float>(system: &mut LinearSystem<T>, x: &[T], base: usize) {
    let block = SplineDegree::Cubic.block_size();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();
    let last_segment = x.len() - 2;

    *system.entry_mut(base, 0) = six * x[0];
    *system.entry_mut(base, 1) = two;

    let col = block * last_segment;
    *system.entry_mut(base + 1, col) = six * x[x.len() - 1];
    *system.entry_mut(base + 1, col + 1) = two;
}
