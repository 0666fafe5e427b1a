//! Yahoo Finance backed price history provider

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::{debug, warn};

use super::client::{ChartError, YahooChartClient};
use crate::metrics::Metrics;
use crate::models::price::PriceSeries;
use crate::services::market_data::{HistoryRequest, MarketDataError, PriceHistoryProvider};

const DEFAULT_RETRIES: usize = 3;
const MIN_RETRY_DELAY: Duration = Duration::from_millis(250);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct YahooPriceHistoryProvider {
    client: YahooChartClient,
    retries: usize,
    metrics: Option<Arc<Metrics>>,
}

impl YahooPriceHistoryProvider {
    pub fn new(client: YahooChartClient) -> Self {
        Self {
            client,
            retries: DEFAULT_RETRIES,
            metrics: None,
        }
    }

    /// Extra attempts after a retryable failure (0 disables retrying)
    pub fn with_retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn client(&self) -> &YahooChartClient {
        &self.client
    }
}

#[async_trait]
impl PriceHistoryProvider for YahooPriceHistoryProvider {
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<PriceSeries, MarketDataError> {
        if let Some(metrics) = &self.metrics {
            metrics.provider_fetches_total.inc();
        }

        let backoff = ExponentialBuilder::default()
            .with_min_delay(MIN_RETRY_DELAY)
            .with_max_delay(MAX_RETRY_DELAY)
            .with_max_times(self.retries);

        let result = (|| async { self.client.fetch_chart(request).await })
            .retry(backoff)
            .when(ChartError::is_retryable)
            .notify(|err: &ChartError, delay: Duration| {
                warn!(
                    symbol = %request.symbol,
                    error = %err,
                    delay_ms = delay.as_millis() as u64,
                    "chart fetch failed, retrying"
                );
            })
            .await;

        match result {
            Ok(series) => {
                debug!(symbol = %request.symbol, points = series.len(), "chart fetched");
                Ok(series)
            }
            Err(e) => {
                warn!(symbol = %request.symbol, error = %e, "chart fetch gave no data");
                if let Some(metrics) = &self.metrics {
                    metrics.provider_fetch_errors_total.inc();
                }
                Err(MarketDataError::unavailable(&request.symbol, e))
            }
        }
    }
}
