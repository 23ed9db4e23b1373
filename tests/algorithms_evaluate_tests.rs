use approx::assert_relative_eq;
use focuspeak::prelude::*;

const X: [f64; 4] = [0.0, 1.0, 2.0, 4.0];
const Y: [f64; 4] = [0.0, 3.0, 1.0, 5.0];

// ============================================================================
// Interpolation Property
// ============================================================================

#[test]
fn test_quadratic_fit_reproduces_samples() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Quadratic).unwrap();
    for (&x, &y) in X.iter().zip(Y.iter()) {
        assert_relative_eq!(curve.evaluate(x).unwrap(), y, epsilon = 1e-6);
    }
}

#[test]
fn test_cubic_fit_reproduces_samples() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    for (&x, &y) in X.iter().zip(Y.iter()) {
        assert_relative_eq!(curve.evaluate(x).unwrap(), y, epsilon = 1e-6);
    }
}

#[test]
fn test_cubic_fit_at_interior_sample() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    assert_relative_eq!(curve.evaluate(1.0).unwrap(), 3.0, epsilon = 1e-6);
}

#[test]
fn test_quadratic_first_segment_is_linear() {
    // The a_0 = 0 closure makes segment 0 the line y = 3x for these
    // samples, so the midpoint value is exact.
    let curve = PiecewisePolynomial::fit(&X, &Y, Quadratic).unwrap();
    assert_relative_eq!(curve.evaluate(0.5).unwrap(), 1.5, epsilon = 1e-9);
}

// ============================================================================
// Continuity Properties (cubic)
// ============================================================================

#[test]
fn test_cubic_first_derivative_is_continuous() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    for (interior, &at) in X.iter().enumerate().skip(1).take(X.len() - 2) {
        let left = segment_derivative(curve.segment_coefficients(interior - 1), at);
        let right = segment_derivative(curve.segment_coefficients(interior), at);
        assert_relative_eq!(left, right, epsilon = 1e-9);
    }
}

#[test]
fn test_cubic_second_derivative_is_continuous() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    for (interior, &at) in X.iter().enumerate().skip(1).take(X.len() - 2) {
        let left = segment_curvature(curve.segment_coefficients(interior - 1), at);
        let right = segment_curvature(curve.segment_coefficients(interior), at);
        assert_relative_eq!(left, right, epsilon = 1e-9);
    }
}

#[test]
fn test_cubic_natural_boundaries() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    assert_relative_eq!(curve.second_derivative(0.0).unwrap(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(curve.second_derivative(4.0).unwrap(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_derivative_methods_match_segment_coefficients() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    let at = 2.5;
    // Segment 2 governs [2, 4].
    let block = curve.segment_coefficients(2);
    assert_relative_eq!(
        curve.derivative(at).unwrap(),
        segment_derivative(block, at),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        curve.second_derivative(at).unwrap(),
        segment_curvature(block, at),
        epsilon = 1e-12
    );
}

/// First derivative of a cubic block [a, b, c, d] at `x`.
fn segment_derivative(block: &[f64], x: f64) -> f64 {
    3.0 * block[0] * x * x + 2.0 * block[1] * x + block[2]
}

/// Second derivative of a cubic block [a, b, c, d] at `x`.
fn segment_curvature(block: &[f64], x: f64) -> f64 {
    6.0 * block[0] * x + 2.0 * block[1]
}

// ============================================================================
// Boundary Rejection
// ============================================================================

#[test]
fn test_evaluate_below_domain_is_rejected() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    match curve.evaluate(-0.5) {
        Err(FocusError::OutOfBounds { got, min, max }) => {
            assert_relative_eq!(got, -0.5);
            assert_relative_eq!(min, 0.0);
            assert_relative_eq!(max, 4.0);
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_evaluate_above_domain_is_rejected() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Quadratic).unwrap();
    assert!(matches!(
        curve.evaluate(4.000001),
        Err(FocusError::OutOfBounds { .. })
    ));
}

#[test]
fn test_evaluate_at_domain_endpoints_succeeds() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    assert_relative_eq!(curve.evaluate(0.0).unwrap(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(curve.evaluate(4.0).unwrap(), 5.0, epsilon = 1e-9);
}

// ============================================================================
// Assembly and Accessors
// ============================================================================

#[test]
fn test_accessors() {
    let curve = PiecewisePolynomial::fit(&X, &Y, Cubic).unwrap();
    assert_eq!(curve.degree(), Cubic);
    assert_eq!(curve.breakpoints(), &X[..]);
    assert_eq!(curve.segment_count(), 3);
    assert_eq!(curve.coefficients().len(), 12);
    assert_eq!(curve.segment_coefficients(1).len(), 4);
    assert_eq!(curve.domain(), (0.0, 4.0));
}

#[test]
fn test_from_parts_accepts_consistent_input() {
    // Two segments of the quadratic y = x^2 over [0, 1, 2].
    let curve = PiecewisePolynomial::from_parts(
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        Quadratic,
    )
    .unwrap();
    assert_relative_eq!(curve.evaluate(1.5).unwrap(), 2.25, epsilon = 1e-12);
}

#[test]
fn test_from_parts_rejects_wrong_coefficient_count() {
    assert!(matches!(
        PiecewisePolynomial::from_parts(vec![0.0, 1.0, 2.0], vec![1.0; 5], Quadratic),
        Err(FocusError::MismatchedInputs { .. })
    ));
}

#[test]
fn test_from_parts_rejects_single_breakpoint() {
    assert!(matches!(
        PiecewisePolynomial::from_parts(vec![0.0], vec![1.0; 3], Quadratic),
        Err(FocusError::TooFewSamples { .. })
    ));
}
