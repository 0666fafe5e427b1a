//! TTL cache in front of a price history provider

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::metrics::Metrics;
use crate::models::price::PriceSeries;
use crate::services::market_data::{HistoryRequest, MarketDataError, PriceHistoryProvider};

struct CacheEntry {
    series: PriceSeries,
    fetched_at: Instant,
}

/// Serves repeated requests for the same symbol and parameters from memory
/// until the entry is older than the TTL. Failed fetches are not cached.
pub struct CachedPriceHistoryProvider {
    inner: Arc<dyn PriceHistoryProvider>,
    ttl: Duration,
    entries: RwLock<HashMap<HistoryRequest, CacheEntry>>,
    metrics: Option<Arc<Metrics>>,
}

impl CachedPriceHistoryProvider {
    pub fn new(inner: Arc<dyn PriceHistoryProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries currently held, expired ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry older than the TTL
    pub async fn purge_expired(&self) {
        let ttl = self.ttl;
        self.entries
            .write()
            .await
            .retain(|_, entry| entry.fetched_at.elapsed() < ttl);
    }

    pub async fn invalidate(&self, request: &HistoryRequest) {
        self.entries.write().await.remove(request);
    }

    async fn cached(&self, request: &HistoryRequest) -> Option<PriceSeries> {
        let entries = self.entries.read().await;
        entries
            .get(request)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.series.clone())
    }
}

#[async_trait]
impl PriceHistoryProvider for CachedPriceHistoryProvider {
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<PriceSeries, MarketDataError> {
        if let Some(series) = self.cached(request).await {
            debug!(symbol = %request.symbol, "cache hit");
            if let Some(metrics) = &self.metrics {
                metrics.cache_hits_total.inc();
            }
            return Ok(series);
        }

        debug!(symbol = %request.symbol, "cache miss");
        if let Some(metrics) = &self.metrics {
            metrics.cache_misses_total.inc();
        }

        let series = self.inner.fetch_history(request).await?;

        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
        entries.insert(
            request.clone(),
            CacheEntry {
                series: series.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(series)
    }
}
