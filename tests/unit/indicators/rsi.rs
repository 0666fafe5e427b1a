//! Unit tests for RSI indicator

use macro_pulse::indicators::{
    relative_strength_index, relative_strength_index_default, IndicatorError, DEFAULT_RSI_WINDOW,
};

use crate::support::{choppy, falling, points, rising};

#[test]
fn test_rsi_all_gains_is_100() {
    let series = rising("UP", 20, 100.0, 1.0);
    assert_eq!(relative_strength_index(series.points(), 14), Ok(100.0));
}

#[test]
fn test_rsi_all_losses_is_0() {
    let series = falling("DOWN", 20, 100.0, 1.0);
    assert_eq!(relative_strength_index(series.points(), 14), Ok(0.0));
}

#[test]
fn test_rsi_flat_series_has_no_losses() {
    let pts = points(&[50.0; 16]);
    assert_eq!(relative_strength_index(&pts, 14), Ok(100.0));
}

#[test]
fn test_rsi_known_value() {
    // Window 2 over changes [+2, -1]: avg gain 1.0, avg loss 0.5, RS 2.
    let pts = points(&[10.0, 12.0, 11.0]);
    let rsi = relative_strength_index(&pts, 2).unwrap();
    assert!((rsi - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn test_rsi_only_trailing_window_counts() {
    // The early crash is outside the window of the last 2 changes.
    let pts = points(&[100.0, 50.0, 51.0, 52.0]);
    assert_eq!(relative_strength_index(&pts, 2), Ok(100.0));
}

#[test]
fn test_rsi_needs_window_plus_one_points() {
    let pts = points(&[1.0; 14]);
    assert_eq!(
        relative_strength_index(&pts, 14),
        Err(IndicatorError::InsufficientData {
            required: 15,
            available: 14
        })
    );
    let pts = points(&[1.0; 15]);
    assert!(relative_strength_index(&pts, 14).is_ok());
}

#[test]
fn test_rsi_zero_window() {
    let pts = points(&[1.0, 2.0]);
    assert_eq!(
        relative_strength_index(&pts, 0),
        Err(IndicatorError::InvalidWindow)
    );
}

#[test]
fn test_rsi_stays_in_range() {
    for count in 15..60 {
        let series = choppy("CHOP", count, 100.0);
        for window in [2, 5, 14] {
            let rsi = relative_strength_index(series.points(), window).unwrap();
            assert!((0.0..=100.0).contains(&rsi), "rsi {} out of range", rsi);
        }
    }
}

#[test]
fn test_rsi_default_window() {
    assert_eq!(DEFAULT_RSI_WINDOW, 14);
    let series = choppy("CHOP", 30, 100.0);
    assert_eq!(
        relative_strength_index_default(series.points()),
        relative_strength_index(series.points(), 14)
    );
}

#[test]
fn test_rsi_is_deterministic() {
    let series = choppy("CHOP", 40, 100.0);
    let first = relative_strength_index(series.points(), 14).unwrap();
    let second = relative_strength_index(series.points(), 14).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_rsi_huge_window_is_insufficient_data() {
    assert_eq!(
        relative_strength_index(&points(&[1.0, 2.0, 3.0]), usize::MAX),
        Err(IndicatorError::InsufficientData {
            required: usize::MAX,
            available: 3
        })
    );
}
