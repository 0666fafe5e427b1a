//! Market metrics engine.
//!
//! Fetches a series through the injected provider and runs the pure
//! indicator and classification functions over it. Holds no state besides
//! its settings; any caching lives in the provider.

pub mod error;

pub use error::EngineError;

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::debug;

use crate::indicators::{
    latest_close, percent_deviation, ratio, relative_strength_index, simple_moving_average,
    IndicatorError, DEFAULT_RSI_WINDOW,
};
use crate::models::indicators::{IndicatorResult, SymbolSnapshot};
use crate::models::price::PriceSeries;
use crate::services::market_data::{HistoryRequest, Interval, Lookback, PriceHistoryProvider};
use crate::signals::{classify_momentum, classify_oscillator};

pub const DEFAULT_SMA_WINDOW: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub lookback: Lookback,
    pub interval: Interval,
    pub sma_window: usize,
    pub rsi_window: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lookback: Lookback::ThreeMonths,
            interval: Interval::Daily,
            sma_window: DEFAULT_SMA_WINDOW,
            rsi_window: DEFAULT_RSI_WINDOW,
        }
    }
}

pub struct MarketMetricsEngine {
    provider: Arc<dyn PriceHistoryProvider>,
    settings: EngineSettings,
}

impl MarketMetricsEngine {
    pub fn new(provider: Arc<dyn PriceHistoryProvider>, settings: EngineSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn request(&self, symbol: &str) -> HistoryRequest {
        HistoryRequest::new(symbol, self.settings.lookback).with_interval(self.settings.interval)
    }

    pub async fn fetch(&self, symbol: &str) -> Result<PriceSeries, EngineError> {
        Ok(self.provider.fetch_history(&self.request(symbol)).await?)
    }

    pub async fn current_price(&self, symbol: &str) -> Result<IndicatorResult, EngineError> {
        let series = self.fetch(symbol).await?;
        Ok(IndicatorResult::CurrentPrice {
            symbol: symbol.to_string(),
            value: latest_close(series.points())?,
        })
    }

    pub async fn simple_moving_average(
        &self,
        symbol: &str,
        window: usize,
    ) -> Result<IndicatorResult, EngineError> {
        let series = self.fetch(symbol).await?;
        Ok(IndicatorResult::SimpleMovingAverage {
            symbol: symbol.to_string(),
            window,
            value: simple_moving_average(series.points(), window)?,
        })
    }

    pub async fn relative_strength_index(
        &self,
        symbol: &str,
        window: usize,
    ) -> Result<IndicatorResult, EngineError> {
        let series = self.fetch(symbol).await?;
        Ok(IndicatorResult::RelativeStrengthIndex {
            symbol: symbol.to_string(),
            window,
            value: relative_strength_index(series.points(), window)?,
        })
    }

    /// Percent distance of the latest close from its `window` SMA
    pub async fn percent_deviation(
        &self,
        symbol: &str,
        window: usize,
    ) -> Result<IndicatorResult, EngineError> {
        let series = self.fetch(symbol).await?;
        let price = latest_close(series.points())?;
        let sma = simple_moving_average(series.points(), window)?;
        Ok(IndicatorResult::PercentDeviation {
            symbol: symbol.to_string(),
            window,
            value: percent_deviation(price, sma)?,
        })
    }

    /// Ratio of the latest closes of two symbols
    pub async fn ratio(
        &self,
        numerator: &str,
        denominator: &str,
    ) -> Result<IndicatorResult, EngineError> {
        let (num, den) = futures_util::try_join!(self.fetch(numerator), self.fetch(denominator))?;
        Ok(ratio_from_series(&num, &den)?)
    }

    /// Fetch every distinct symbol once, concurrently
    pub async fn fetch_unique<'a, I>(
        &self,
        symbols: I,
    ) -> HashMap<String, Result<PriceSeries, EngineError>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut unique: Vec<&str> = Vec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }

        let results = join_all(unique.iter().map(|symbol| self.fetch(symbol))).await;
        unique
            .into_iter()
            .map(str::to_string)
            .zip(results)
            .collect()
    }

    /// Every indicator and regime for one symbol from a single fetch
    pub async fn snapshot(&self, symbol: &str) -> Result<SymbolSnapshot, EngineError> {
        let series = self.fetch(symbol).await?;
        let snapshot =
            snapshot_from_series(&series, self.settings.sma_window, self.settings.rsi_window)?;
        debug!(
            symbol = %symbol,
            price = snapshot.price,
            rsi = snapshot.rsi,
            "snapshot computed"
        );
        Ok(snapshot)
    }

    /// Snapshots for many symbols, fetched concurrently.
    ///
    /// Results come back in input order and each symbol fails on its own.
    pub async fn snapshots(
        &self,
        symbols: &[String],
    ) -> Vec<(String, Result<SymbolSnapshot, EngineError>)> {
        let results = join_all(symbols.iter().map(|symbol| self.snapshot(symbol))).await;
        symbols.iter().cloned().zip(results).collect()
    }
}

/// Ratio of the latest closes of two already fetched series
pub fn ratio_from_series(
    numerator: &PriceSeries,
    denominator: &PriceSeries,
) -> Result<IndicatorResult, IndicatorError> {
    let value = ratio(
        latest_close(numerator.points())?,
        latest_close(denominator.points())?,
    )?;
    Ok(IndicatorResult::Ratio {
        numerator: numerator.symbol().to_string(),
        denominator: denominator.symbol().to_string(),
        value,
    })
}

/// Compute a snapshot from an already fetched series
pub fn snapshot_from_series(
    series: &PriceSeries,
    sma_window: usize,
    rsi_window: usize,
) -> Result<SymbolSnapshot, IndicatorError> {
    let points = series.points();
    let price = latest_close(points)?;
    let sma = simple_moving_average(points, sma_window)?;
    let rsi = relative_strength_index(points, rsi_window)?;

    Ok(SymbolSnapshot {
        symbol: series.symbol().to_string(),
        as_of: series.last().timestamp,
        price,
        sma,
        sma_window,
        rsi,
        rsi_window,
        deviation_pct: percent_deviation(price, sma)?,
        momentum: classify_momentum(price, sma),
        oscillator: classify_oscillator(rsi),
    })
}
