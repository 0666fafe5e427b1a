//! Wiring of the provider stack and engine from configuration

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::engine::MarketMetricsEngine;
use crate::metrics::Metrics;
use crate::services::cache::CachedPriceHistoryProvider;
use crate::services::market_data::PriceHistoryProvider;
use crate::services::yahoo::{ChartError, YahooChartClient, YahooPriceHistoryProvider};

/// Yahoo provider, wrapped in the TTL cache unless the TTL is zero
pub fn build_provider(
    config: &AppConfig,
    metrics: Arc<Metrics>,
) -> Result<Arc<dyn PriceHistoryProvider>, ChartError> {
    let client = YahooChartClient::new(&config.yahoo_base_url)?;
    let yahoo = YahooPriceHistoryProvider::new(client)
        .with_retries(config.fetch_retries)
        .with_metrics(metrics.clone());

    if config.cache_ttl.is_zero() {
        info!(base_url = %config.yahoo_base_url, "price cache disabled");
        return Ok(Arc::new(yahoo));
    }

    info!(
        base_url = %config.yahoo_base_url,
        ttl_seconds = config.cache_ttl.as_secs(),
        "price cache enabled"
    );
    Ok(Arc::new(
        CachedPriceHistoryProvider::new(Arc::new(yahoo), config.cache_ttl).with_metrics(metrics),
    ))
}

pub fn build_engine(
    config: &AppConfig,
    metrics: Arc<Metrics>,
) -> Result<MarketMetricsEngine, ChartError> {
    let provider = build_provider(config, metrics)?;
    Ok(MarketMetricsEngine::new(provider, config.engine))
}
