//! Prometheus metrics registry

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Opts, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub provider_fetches_total: IntCounter,
    pub provider_fetch_errors_total: IntCounter,
    pub cache_hits_total: IntCounter,
    pub cache_misses_total: IntCounter,
    pub dashboard_refreshes_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::with_opts(Opts::new("http_requests_total", "Total HTTP requests"))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        ))?;
        let provider_fetches_total = IntCounter::with_opts(Opts::new(
            "provider_fetches_total",
            "Price history fetches sent to the upstream provider",
        ))?;
        let provider_fetch_errors_total = IntCounter::with_opts(Opts::new(
            "provider_fetch_errors_total",
            "Price history fetches that ended without data",
        ))?;
        let cache_hits_total = IntCounter::with_opts(Opts::new(
            "cache_hits_total",
            "Price history requests served from cache",
        ))?;
        let cache_misses_total = IntCounter::with_opts(Opts::new(
            "cache_misses_total",
            "Price history requests that missed the cache",
        ))?;
        let dashboard_refreshes_total = IntCounter::with_opts(Opts::new(
            "dashboard_refreshes_total",
            "Dashboard reports built",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(provider_fetches_total.clone()))?;
        registry.register(Box::new(provider_fetch_errors_total.clone()))?;
        registry.register(Box::new(cache_hits_total.clone()))?;
        registry.register(Box::new(cache_misses_total.clone()))?;
        registry.register(Box::new(dashboard_refreshes_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            provider_fetches_total,
            provider_fetch_errors_total,
            cache_hits_total,
            cache_misses_total,
            dashboard_refreshes_total,
        })
    }

    /// Render every registered metric in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
