//! Dashboard report assembly

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::watchlist::{Instrument, RatioPair, Watchlist};

use crate::engine::{ratio_from_series, snapshot_from_series, EngineError, MarketMetricsEngine};
use crate::indicators::latest_close;
use crate::models::indicators::SymbolSnapshot;
use crate::models::price::PriceSeries;
use crate::models::regime::{Rating, RegimeClassification, Sentiment};
use crate::services::market_data::{Interval, Lookback, MarketDataError};
use crate::signals::{classify_sentiment, rank_by_rsi, rate_snapshot, LeaderboardEntry};

/// Outcome of one dashboard value.
///
/// `Pending` means the provider had no data, `Failed` means data arrived but
/// the indicator could not be computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reading<T> {
    Ready { value: T },
    Pending { reason: String },
    Failed { reason: String },
}

impl<T> Reading<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Reading::Ready { value } => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, EngineError>> for Reading<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(value) => Reading::Ready { value },
            Err(e) if e.is_data_unavailable() => Reading::Pending {
                reason: e.to_string(),
            },
            Err(e) => Reading::Failed {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayRow {
    pub instrument: Instrument,
    pub reading: Reading<SymbolSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioRow {
    pub pair: RatioPair,
    pub reading: Reading<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnrankedSymbol {
    pub symbol: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unranked: Vec<UnrankedSymbol>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub lookback: Lookback,
    pub interval: Interval,
    pub sentiment: Reading<RegimeClassification<Sentiment>>,
    pub overlay: Vec<OverlayRow>,
    pub ratios: Vec<RatioRow>,
    pub leaderboard: Leaderboard,
}

impl DashboardReport {
    pub fn overlay_row(&self, symbol: &str) -> Option<&OverlayRow> {
        self.overlay.iter().find(|row| row.instrument.symbol == symbol)
    }
}

/// Build a full report.
///
/// Every symbol named anywhere in the watchlist is fetched once, concurrently,
/// and each section is computed from those series. Every value fails on its own.
pub async fn build_report(engine: &MarketMetricsEngine, watchlist: &Watchlist) -> DashboardReport {
    let settings = *engine.settings();

    let symbols = std::iter::once(watchlist.sentiment_symbol.as_str())
        .chain(watchlist.overlay.iter().map(|i| i.symbol.as_str()))
        .chain(watchlist.sectors.iter().map(String::as_str))
        .chain(
            watchlist
                .ratios
                .iter()
                .flat_map(|pair| [pair.numerator.as_str(), pair.denominator.as_str()]),
        );
    let fetched = engine.fetch_unique(symbols).await;
    debug!(symbols = fetched.len(), "dashboard series fetched");

    let snapshot = |symbol: &str| -> Result<SymbolSnapshot, EngineError> {
        Ok(snapshot_from_series(
            lookup(&fetched, symbol)?,
            settings.sma_window,
            settings.rsi_window,
        )?)
    };

    let sentiment = lookup(&fetched, &watchlist.sentiment_symbol)
        .and_then(|s| Ok(latest_close(s.points())?))
        .map(classify_sentiment)
        .into();

    let overlay = watchlist
        .overlay
        .iter()
        .map(|instrument| {
            let result = snapshot(instrument.symbol.as_str());
            let rating = result.as_ref().ok().map(rate_snapshot);
            OverlayRow {
                instrument: instrument.clone(),
                reading: result.into(),
                rating,
            }
        })
        .collect();

    let ratios = watchlist
        .ratios
        .iter()
        .map(|pair| {
            let result = lookup(&fetched, &pair.numerator).and_then(|num| {
                let den = lookup(&fetched, &pair.denominator)?;
                Ok(ratio_from_series(num, den)?)
            });
            RatioRow {
                pair: pair.clone(),
                reading: result.map(|r| r.value()).into(),
            }
        })
        .collect();

    let mut ranked = Vec::new();
    let mut unranked = Vec::new();
    for symbol in &watchlist.sectors {
        match snapshot(symbol.as_str()) {
            Ok(snapshot) => ranked.push(snapshot),
            Err(e) => unranked.push(UnrankedSymbol {
                symbol: symbol.clone(),
                reason: e.to_string(),
            }),
        }
    }

    DashboardReport {
        generated_at: Utc::now(),
        lookback: settings.lookback,
        interval: settings.interval,
        sentiment,
        overlay,
        ratios,
        leaderboard: Leaderboard {
            entries: rank_by_rsi(&ranked),
            unranked,
        },
    }
}

fn lookup<'a>(
    fetched: &'a HashMap<String, Result<PriceSeries, EngineError>>,
    symbol: &str,
) -> Result<&'a PriceSeries, EngineError> {
    match fetched.get(symbol) {
        Some(Ok(series)) => Ok(series),
        Some(Err(e)) => Err(e.clone()),
        None => Err(MarketDataError::unavailable(symbol, "not fetched").into()),
    }
}
