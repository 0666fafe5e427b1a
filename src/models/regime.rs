//! Regime labels produced by thresholding indicators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price relative to its moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Momentum {
    Bullish,
    Bearish,
}

/// RSI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Oscillator {
    Overbought,
    Neutral,
    Oversold,
}

/// Three-way scorecard rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Bullish,
    Bearish,
    Neutral,
}

/// Market-wide fear/greed reading derived from the VIX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
}

/// A label together with the number that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeClassification<L> {
    pub label: L,
    pub input: f64,
}

impl<L> RegimeClassification<L> {
    pub fn new(label: L, input: f64) -> Self {
        Self { label, input }
    }
}

impl fmt::Display for Momentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Momentum::Bullish => "Bullish",
            Momentum::Bearish => "Bearish",
        })
    }
}

impl fmt::Display for Oscillator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Oscillator::Overbought => "Overbought",
            Oscillator::Neutral => "Neutral",
            Oscillator::Oversold => "Oversold",
        })
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rating::Bullish => "Bullish",
            Rating::Bearish => "Bearish",
            Rating::Neutral => "Neutral",
        })
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sentiment::ExtremeFear => "EXTREME FEAR",
            Sentiment::Fear => "FEAR",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Greed => "GREED",
        })
    }
}
