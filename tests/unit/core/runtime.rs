//! Unit tests for the refresh runtime

use std::sync::Arc;
use std::time::Duration;

use macro_pulse::core::{detect_regime_changes, AppState, DashboardRuntime, RegimeChange, RuntimeConfig};
use macro_pulse::dashboard::{build_report, DashboardReport, Instrument, Watchlist};
use macro_pulse::engine::{EngineSettings, MarketMetricsEngine};
use macro_pulse::metrics::Metrics;
use macro_pulse::models::{Momentum, Oscillator};
use macro_pulse::models::PriceSeries;
use macro_pulse::services::StaticPriceHistoryProvider;

use crate::support::{falling, rising};

fn watchlist() -> Watchlist {
    Watchlist {
        overlay: vec![
            Instrument::new("QQQ", "Nasdaq (QQQ)"),
            Instrument::new("GONE", "Delisted"),
        ],
        sectors: vec!["QQQ".to_string()],
        ratios: vec![],
        sentiment_symbol: "^VIX".to_string(),
    }
}

fn engine(qqq: PriceSeries) -> MarketMetricsEngine {
    let provider = StaticPriceHistoryProvider::new().with_series(qqq);
    MarketMetricsEngine::new(Arc::new(provider), EngineSettings::default())
}

async fn report(qqq: PriceSeries) -> DashboardReport {
    build_report(&engine(qqq), &watchlist()).await
}

#[test]
fn test_default_refresh_interval() {
    assert_eq!(RuntimeConfig::default().refresh_interval_seconds, 300);
}

#[tokio::test]
async fn test_no_changes_between_identical_reports() {
    let a = report(rising("QQQ", 40, 400.0, 1.0)).await;
    let b = report(rising("QQQ", 40, 400.0, 1.0)).await;
    assert!(detect_regime_changes(&a, &b).is_empty());
}

#[tokio::test]
async fn test_flip_reports_momentum_and_oscillator() {
    let before = report(rising("QQQ", 40, 400.0, 1.0)).await;
    let after = report(falling("QQQ", 40, 400.0, 1.0)).await;

    let changes = detect_regime_changes(&before, &after);
    assert_eq!(
        changes,
        vec![
            RegimeChange::Momentum {
                symbol: "QQQ".to_string(),
                from: Momentum::Bullish,
                to: Momentum::Bearish,
            },
            RegimeChange::Oscillator {
                symbol: "QQQ".to_string(),
                from: Oscillator::Overbought,
                to: Oscillator::Oversold,
            },
        ]
    );
}

#[tokio::test]
async fn test_pending_rows_are_skipped() {
    let before = build_report(
        &MarketMetricsEngine::new(
            Arc::new(StaticPriceHistoryProvider::new()),
            EngineSettings::default(),
        ),
        &watchlist(),
    )
    .await;
    let after = report(falling("QQQ", 40, 400.0, 1.0)).await;

    assert!(detect_regime_changes(&before, &after).is_empty());
    assert!(detect_regime_changes(&after, &before).is_empty());
}

#[tokio::test]
async fn test_runtime_refreshes_immediately() {
    let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
    let state = AppState::new(
        Arc::new(engine(rising("QQQ", 40, 400.0, 1.0))),
        Arc::new(watchlist()),
        metrics.clone(),
    );

    let handle = DashboardRuntime::new(RuntimeConfig::default(), state.clone()).start();

    let mut refreshed = false;
    for _ in 0..100 {
        if state.latest_report.read().await.is_some() {
            refreshed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    handle.abort();

    assert!(refreshed);
    assert_eq!(metrics.dashboard_refreshes_total.get(), 1);
    let report = state.latest_report.read().await.clone().unwrap();
    assert!(report.overlay_row("QQQ").unwrap().reading.value().is_some());
}
