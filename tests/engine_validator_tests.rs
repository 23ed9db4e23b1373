#![cfg(feature = "dev")]

use focuspeak::internals::engine::validator::Validator;
use focuspeak::prelude::FocusError;

// ============================================================================
// Sample Validation
// ============================================================================

#[test]
fn test_valid_samples_pass() {
    assert!(Validator::validate_samples(&[1.0, 2.0, 4.0], &[5.0, 6.0, 2.0]).is_ok());
}

#[test]
fn test_two_samples_suffice() {
    assert!(Validator::validate_samples(&[1.0, 2.0], &[0.0, 0.0]).is_ok());
}

#[test]
fn test_checks_are_ordered_cheap_to_expensive() {
    // Mismatched lengths are reported before the per-element scans run.
    let err = Validator::validate_samples(&[1.0, f64::NAN], &[1.0]).unwrap_err();
    assert!(matches!(err, FocusError::MismatchedInputs { .. }));
}

#[test]
fn test_non_finite_reported_with_position() {
    let err = Validator::validate_samples(&[1.0, 2.0], &[1.0, f64::NAN]).unwrap_err();
    match err {
        FocusError::InvalidNumericValue(detail) => assert!(detail.contains("sharpness[1]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

// ============================================================================
// Parameter Validation
// ============================================================================

#[test]
fn test_tolerance_bounds() {
    assert!(Validator::validate_tolerance(0.01).is_ok());
    assert!(Validator::validate_tolerance(0.0).is_err());
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
}

#[test]
fn test_iteration_cap_bounds() {
    assert!(Validator::validate_max_iterations(1).is_ok());
    assert!(Validator::validate_max_iterations(10_000).is_ok());
    assert!(Validator::validate_max_iterations(0).is_err());
    assert!(Validator::validate_max_iterations(10_001).is_err());
}

#[test]
fn test_search_range_must_sit_inside_domain() {
    let domain = (0.0, 4.0);
    assert!(Validator::validate_search_range(1.0, 3.0, domain).is_ok());
    assert!(Validator::validate_search_range(0.0, 4.0, domain).is_ok());
    assert!(Validator::validate_search_range(-1.0, 3.0, domain).is_err());
    assert!(Validator::validate_search_range(1.0, 5.0, domain).is_err());
    assert!(Validator::validate_search_range(3.0, 1.0, domain).is_err());
}

#[test]
fn test_duplicate_parameter_reporting() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert!(matches!(
        Validator::validate_no_duplicates(Some("tolerance")),
        Err(FocusError::DuplicateParameter {
            parameter: "tolerance"
        })
    ));
}
