//! Unit tests for regime classification

use std::cell::Cell;

use macro_pulse::models::{Momentum, Oscillator, Rating, Sentiment};
use macro_pulse::signals::{
    classify_momentum, classify_oscillator, classify_rating, classify_sentiment,
};

#[test]
fn test_momentum_strict_inequality() {
    assert_eq!(classify_momentum(105.0, 100.0).label, Momentum::Bullish);
    assert_eq!(classify_momentum(95.0, 100.0).label, Momentum::Bearish);
    assert_eq!(classify_momentum(100.0, 100.0).label, Momentum::Bearish);
}

#[test]
fn test_momentum_keeps_input() {
    assert_eq!(classify_momentum(105.0, 100.0).input, 105.0);
}

#[test]
fn test_oscillator_bands() {
    assert_eq!(classify_oscillator(75.0).label, Oscillator::Overbought);
    assert_eq!(classify_oscillator(25.0).label, Oscillator::Oversold);
    assert_eq!(classify_oscillator(50.0).label, Oscillator::Neutral);
}

#[test]
fn test_oscillator_boundaries_are_neutral() {
    assert_eq!(classify_oscillator(70.0).label, Oscillator::Neutral);
    assert_eq!(classify_oscillator(30.0).label, Oscillator::Neutral);
    assert_eq!(classify_oscillator(70.0).input, 70.0);
}

#[test]
fn test_rating_bullish_takes_precedence() {
    assert_eq!(classify_rating(|| true, || true), Rating::Bullish);
    assert_eq!(classify_rating(|| true, || false), Rating::Bullish);
    assert_eq!(classify_rating(|| false, || true), Rating::Bearish);
    assert_eq!(classify_rating(|| false, || false), Rating::Neutral);
}

#[test]
fn test_rating_skips_bearish_when_bullish_holds() {
    let bearish_checked = Cell::new(false);
    let rating = classify_rating(
        || true,
        || {
            bearish_checked.set(true);
            true
        },
    );
    assert_eq!(rating, Rating::Bullish);
    assert!(!bearish_checked.get());
}

#[test]
fn test_sentiment_gauge() {
    assert_eq!(classify_sentiment(30.0).label, Sentiment::ExtremeFear);
    assert_eq!(classify_sentiment(25.0).label, Sentiment::Fear);
    assert_eq!(classify_sentiment(22.0).label, Sentiment::Fear);
    assert_eq!(classify_sentiment(20.0).label, Sentiment::Neutral);
    assert_eq!(classify_sentiment(15.0).label, Sentiment::Neutral);
    assert_eq!(classify_sentiment(12.0).label, Sentiment::Greed);
}
