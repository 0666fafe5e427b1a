//! Threshold tables mapping indicator values to regime labels

use crate::models::regime::{Momentum, Oscillator, Rating, RegimeClassification, Sentiment};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

pub const VIX_EXTREME_FEAR: f64 = 25.0;
pub const VIX_FEAR: f64 = 20.0;
pub const VIX_GREED: f64 = 15.0;

/// Bullish only when price is strictly above its SMA
pub fn classify_momentum(current: f64, sma: f64) -> RegimeClassification<Momentum> {
    let label = if current > sma {
        Momentum::Bullish
    } else {
        Momentum::Bearish
    };
    RegimeClassification::new(label, current)
}

pub fn classify_oscillator(rsi: f64) -> RegimeClassification<Oscillator> {
    let label = if rsi > RSI_OVERBOUGHT {
        Oscillator::Overbought
    } else if rsi < RSI_OVERSOLD {
        Oscillator::Oversold
    } else {
        Oscillator::Neutral
    };
    RegimeClassification::new(label, rsi)
}

/// Three-way rating from two caller-supplied predicates.
///
/// The bullish predicate is evaluated first and wins when both hold; the
/// bearish predicate is only evaluated when the bullish one is false.
pub fn classify_rating<B, S>(bullish: B, bearish: S) -> Rating
where
    B: FnOnce() -> bool,
    S: FnOnce() -> bool,
{
    if bullish() {
        Rating::Bullish
    } else if bearish() {
        Rating::Bearish
    } else {
        Rating::Neutral
    }
}

/// Fear/greed gauge from the VIX level
pub fn classify_sentiment(vix: f64) -> RegimeClassification<Sentiment> {
    let label = if vix > VIX_EXTREME_FEAR {
        Sentiment::ExtremeFear
    } else if vix > VIX_FEAR {
        Sentiment::Fear
    } else if vix < VIX_GREED {
        Sentiment::Greed
    } else {
        Sentiment::Neutral
    };
    RegimeClassification::new(label, vix)
}
