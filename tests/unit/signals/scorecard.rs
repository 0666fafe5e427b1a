//! Unit tests for scorecard ratings

use macro_pulse::engine::snapshot_from_series;
use macro_pulse::models::{Momentum, Oscillator, Rating, RegimeClassification, SymbolSnapshot};
use macro_pulse::signals::rate_snapshot;

use crate::support::{choppy, start};

fn snapshot(momentum: Momentum, oscillator: Oscillator) -> SymbolSnapshot {
    SymbolSnapshot {
        symbol: "TEST".to_string(),
        as_of: start(),
        price: 100.0,
        sma: 100.0,
        sma_window: 20,
        rsi: 50.0,
        rsi_window: 14,
        deviation_pct: 0.0,
        momentum: RegimeClassification::new(momentum, 100.0),
        oscillator: RegimeClassification::new(oscillator, 50.0),
    }
}

#[test]
fn test_bullish_trend_not_overbought() {
    assert_eq!(
        rate_snapshot(&snapshot(Momentum::Bullish, Oscillator::Neutral)),
        Rating::Bullish
    );
}

#[test]
fn test_overbought_rates_bearish() {
    assert_eq!(
        rate_snapshot(&snapshot(Momentum::Bullish, Oscillator::Overbought)),
        Rating::Bearish
    );
}

#[test]
fn test_bearish_trend_rates_bearish() {
    assert_eq!(
        rate_snapshot(&snapshot(Momentum::Bearish, Oscillator::Neutral)),
        Rating::Bearish
    );
}

#[test]
fn test_oversold_bearish_trend_rates_bullish() {
    assert_eq!(
        rate_snapshot(&snapshot(Momentum::Bearish, Oscillator::Oversold)),
        Rating::Bullish
    );
}

#[test]
fn test_rating_from_computed_snapshot() {
    let snap = snapshot_from_series(&choppy("CHOP", 40, 100.0), 20, 14).unwrap();
    let rating = rate_snapshot(&snap);
    assert!(matches!(
        rating,
        Rating::Bullish | Rating::Bearish | Rating::Neutral
    ));
}
