use approx::assert_relative_eq;
use focuspeak::prelude::*;

/// Cubic with an interior maximum at sqrt(5/3) on [-5, 5].
fn hill(x: f64) -> Result<f64, FocusError> {
    Ok(-x.powi(3) + 5.0 * x + 6.0)
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_maximize_converges_to_analytic_maximum() {
    let settings = SearchSettings::default();
    let (x, y) = find_extremum(-5.0, 5.0, &settings, hill).unwrap();

    let analytic_x = (5.0f64 / 3.0).sqrt();
    let analytic_y = -analytic_x.powi(3) + 5.0 * analytic_x + 6.0;
    assert!((x - analytic_x).abs() < settings.tolerance);
    // Near a stationary point the value error is quadratic in the
    // position error, so it is far tighter than the tolerance.
    assert_relative_eq!(y, analytic_y, epsilon = 1e-3);
}

#[test]
fn test_minimize_converges_to_valley() {
    let settings = SearchSettings {
        direction: Minimize,
        ..SearchSettings::default()
    };
    let (x, y) = find_extremum(0.0, 5.0, &settings, |q: f64| Ok((q - 2.0).powi(2))).unwrap();
    assert!((x - 2.0).abs() < 0.01);
    assert!(y < 1e-4);
}

#[test]
fn test_tighter_tolerance_gets_closer() {
    let loose = SearchSettings {
        tolerance: 0.5,
        ..SearchSettings::default()
    };
    let tight = SearchSettings {
        tolerance: 1e-6,
        ..SearchSettings::default()
    };
    let analytic_x = (5.0f64 / 3.0).sqrt();

    let (x_loose, _) = find_extremum(-5.0, 5.0, &loose, hill).unwrap();
    let (x_tight, _) = find_extremum(-5.0, 5.0, &tight, hill).unwrap();
    assert!((x_loose - analytic_x).abs() < 0.5);
    assert!((x_tight - analytic_x).abs() < 1e-6);
}

#[test]
fn test_f32_search() {
    let settings = SearchSettings::<f32> {
        tolerance: 0.05,
        ..SearchSettings::default()
    };
    let (x, _) = find_extremum(0.0f32, 4.0, &settings, |q| Ok(-(q - 1.5) * (q - 1.5))).unwrap();
    assert!((x - 1.5).abs() < 0.05);
}

// ============================================================================
// Tie and Branch Behavior
// ============================================================================

#[test]
fn test_constant_function_ties_take_the_x1_branch() {
    // y1 == y2 everywhere; the >= comparison keeps the x1 candidate, so
    // the search narrows from below and still terminates.
    let (x, y) = find_extremum(0.0, 10.0, &SearchSettings::default(), |_q: f64| Ok(7.0)).unwrap();
    assert_relative_eq!(y, 7.0);
    assert!((0.0..=10.0).contains(&x));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_iteration_cap_exhaustion_is_reported() {
    let settings = SearchSettings {
        tolerance: 1e-12,
        max_iterations: 10,
        ..SearchSettings::default()
    };
    match find_extremum(-5.0, 5.0, &settings, hill) {
        Err(FocusError::NoConvergence { iterations }) => assert_eq!(iterations, 10),
        other => panic!("expected NoConvergence, got {:?}", other),
    }
}

#[test]
fn test_reversed_bracket_is_rejected() {
    assert!(matches!(
        find_extremum(5.0, -5.0, &SearchSettings::default(), hill),
        Err(FocusError::InvalidSearchRange { .. })
    ));
}

#[test]
fn test_empty_bracket_is_rejected() {
    assert!(matches!(
        find_extremum(2.0, 2.0, &SearchSettings::default(), hill),
        Err(FocusError::InvalidSearchRange { .. })
    ));
}

#[test]
fn test_non_finite_bracket_is_rejected() {
    assert!(matches!(
        find_extremum(f64::NAN, 5.0, &SearchSettings::default(), hill),
        Err(FocusError::InvalidSearchRange { .. })
    ));
}

#[test]
fn test_invalid_tolerance_is_rejected() {
    let settings = SearchSettings {
        tolerance: 0.0,
        ..SearchSettings::default()
    };
    assert!(matches!(
        find_extremum(-5.0, 5.0, &settings, hill),
        Err(FocusError::InvalidTolerance(_))
    ));
}

#[test]
fn test_zero_iteration_cap_is_rejected() {
    let settings = SearchSettings {
        max_iterations: 0,
        ..SearchSettings::default()
    };
    assert!(matches!(
        find_extremum(-5.0, 5.0, &settings, hill),
        Err(FocusError::InvalidIterations(0))
    ));
}

#[test]
fn test_objective_errors_propagate() {
    let result = find_extremum(-5.0, 5.0, &SearchSettings::default(), |_q: f64| {
        Err(FocusError::OutOfBounds {
            got: 0.0,
            min: 1.0,
            max: 2.0,
        })
    });
    assert!(matches!(result, Err(FocusError::OutOfBounds { .. })));
}
