use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::regime::{Momentum, Oscillator, RegimeClassification};

/// One computed indicator value and what produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorResult {
    CurrentPrice {
        symbol: String,
        value: f64,
    },
    SimpleMovingAverage {
        symbol: String,
        window: usize,
        value: f64,
    },
    RelativeStrengthIndex {
        symbol: String,
        window: usize,
        value: f64,
    },
    /// Percent distance of the latest close from its `window` SMA
    PercentDeviation {
        symbol: String,
        window: usize,
        value: f64,
    },
    Ratio {
        numerator: String,
        denominator: String,
        value: f64,
    },
}

impl IndicatorResult {
    pub fn value(&self) -> f64 {
        match self {
            IndicatorResult::CurrentPrice { value, .. }
            | IndicatorResult::SimpleMovingAverage { value, .. }
            | IndicatorResult::RelativeStrengthIndex { value, .. }
            | IndicatorResult::PercentDeviation { value, .. }
            | IndicatorResult::Ratio { value, .. } => *value,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorResult::CurrentPrice { .. } => "current_price",
            IndicatorResult::SimpleMovingAverage { .. } => "simple_moving_average",
            IndicatorResult::RelativeStrengthIndex { .. } => "relative_strength_index",
            IndicatorResult::PercentDeviation { .. } => "percent_deviation",
            IndicatorResult::Ratio { .. } => "ratio",
        }
    }
}

/// Every indicator and regime for one symbol at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSnapshot {
    pub symbol: String,
    pub as_of: DateTime<Utc>,
    pub price: f64,
    pub sma: f64,
    pub sma_window: usize,
    pub rsi: f64,
    pub rsi_window: usize,
    pub deviation_pct: f64,
    pub momentum: RegimeClassification<Momentum>,
    pub oscillator: RegimeClassification<Oscillator>,
}

impl SymbolSnapshot {
    /// The snapshot flattened into individual results
    pub fn indicators(&self) -> Vec<IndicatorResult> {
        vec![
            IndicatorResult::CurrentPrice {
                symbol: self.symbol.clone(),
                value: self.price,
            },
            IndicatorResult::SimpleMovingAverage {
                symbol: self.symbol.clone(),
                window: self.sma_window,
                value: self.sma,
            },
            IndicatorResult::RelativeStrengthIndex {
                symbol: self.symbol.clone(),
                window: self.rsi_window,
                value: self.rsi,
            },
            IndicatorResult::PercentDeviation {
                symbol: self.symbol.clone(),
                window: self.sma_window,
                value: self.deviation_pct,
            },
        ]
    }
}
