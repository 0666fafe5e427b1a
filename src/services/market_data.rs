//! Price history provider interface and request types.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::price::PriceSeries;

/// How far back a history request reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lookback {
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl Lookback {
    /// Range token understood by the chart API (`5d`, `1mo`, ...)
    pub fn as_range(&self) -> &'static str {
        match self {
            Lookback::FiveDays => "5d",
            Lookback::OneMonth => "1mo",
            Lookback::ThreeMonths => "3mo",
            Lookback::SixMonths => "6mo",
            Lookback::OneYear => "1y",
            Lookback::TwoYears => "2y",
            Lookback::FiveYears => "5y",
        }
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5d" => Ok(Lookback::FiveDays),
            "1mo" => Ok(Lookback::OneMonth),
            "3mo" => Ok(Lookback::ThreeMonths),
            "6mo" => Ok(Lookback::SixMonths),
            "1y" => Ok(Lookback::OneYear),
            "2y" => Ok(Lookback::TwoYears),
            "5y" => Ok(Lookback::FiveYears),
            other => Err(format!("unknown lookback '{}'", other)),
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_range())
    }
}

/// Sampling interval of the returned series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "1wk")]
    Weekly,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
        }
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" | "daily" => Ok(Interval::Daily),
            "1wk" | "weekly" => Ok(Interval::Weekly),
            other => Err(format!("unknown interval '{}'", other)),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one history fetch. Also the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryRequest {
    pub symbol: String,
    pub lookback: Lookback,
    pub interval: Interval,
}

impl HistoryRequest {
    pub fn new(symbol: impl Into<String>, lookback: Lookback) -> Self {
        Self {
            symbol: symbol.into(),
            lookback,
            interval: Interval::Daily,
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Same parameters for another symbol
    pub fn for_symbol(&self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketDataError {
    #[error("data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },
}

impl MarketDataError {
    pub fn unavailable(symbol: impl Into<String>, reason: impl fmt::Display) -> Self {
        MarketDataError::DataUnavailable {
            symbol: symbol.into(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch the closing price history described by `request`
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<PriceSeries, MarketDataError>;
}

/// Provider backed by fixed in-memory series.
///
/// Ignores lookback and interval; unknown symbols are unavailable.
#[derive(Default)]
pub struct StaticPriceHistoryProvider {
    series: HashMap<String, PriceSeries>,
    fetches: AtomicUsize,
}

impl StaticPriceHistoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.series.insert(series.symbol().to_string(), series);
        self
    }

    /// Number of `fetch_history` calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceHistoryProvider for StaticPriceHistoryProvider {
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<PriceSeries, MarketDataError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.series
            .get(&request.symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::unavailable(&request.symbol, "no series configured"))
    }
}
