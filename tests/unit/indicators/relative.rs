//! Unit tests for percent deviation and ratio

use macro_pulse::indicators::{percent_deviation, ratio, IndicatorError};

#[test]
fn test_percent_deviation_above_and_below() {
    assert_eq!(percent_deviation(110.0, 100.0), Ok(10.0));
    assert_eq!(percent_deviation(90.0, 100.0), Ok(-10.0));
    assert_eq!(percent_deviation(100.0, 100.0), Ok(0.0));
}

#[test]
fn test_percent_deviation_invalid_reference() {
    assert_eq!(
        percent_deviation(5.0, 0.0),
        Err(IndicatorError::InvalidReference(0.0))
    );
    assert_eq!(
        percent_deviation(5.0, -1.0),
        Err(IndicatorError::InvalidReference(-1.0))
    );
    assert!(percent_deviation(5.0, f64::NAN).is_err());
}

#[test]
fn test_ratio() {
    assert_eq!(ratio(10.0, 4.0), Ok(2.5));
    assert_eq!(ratio(0.0, 4.0), Ok(0.0));
}

#[test]
fn test_ratio_division_by_zero() {
    assert_eq!(ratio(1.0, 0.0), Err(IndicatorError::DivisionByZero));
}
