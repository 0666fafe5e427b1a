//! Environment-driven configuration

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::dashboard::watchlist::{Instrument, RatioPair, Watchlist};
use crate::engine::EngineSettings;
use crate::services::yahoo::DEFAULT_BASE_URL;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 300;
pub const DEFAULT_FETCH_RETRIES: usize = 3;

/// Deployment environment (`ENVIRONMENT`), `sandbox` when unset
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub yahoo_base_url: String,
    pub engine: EngineSettings,
    /// Zero disables the provider cache
    pub cache_ttl: Duration,
    /// Zero disables the background refresh loop
    pub refresh_interval: Duration,
    pub fetch_retries: usize,
    pub watchlist: Watchlist,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            yahoo_base_url: DEFAULT_BASE_URL.to_string(),
            engine: EngineSettings::default(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECONDS),
            fetch_retries: DEFAULT_FETCH_RETRIES,
            watchlist: Watchlist::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let engine = EngineSettings {
            lookback: parse_or(&lookup, "LOOKBACK", defaults.engine.lookback),
            interval: parse_or(&lookup, "INTERVAL", defaults.engine.interval),
            sma_window: positive_or(&lookup, "SMA_WINDOW", defaults.engine.sma_window),
            rsi_window: positive_or(&lookup, "RSI_WINDOW", defaults.engine.rsi_window),
        };

        let mut watchlist = defaults.watchlist;
        if let Some(symbols) = lookup("SYMBOLS").map(|s| split_list(&s)) {
            if !symbols.is_empty() {
                watchlist.overlay = symbols
                    .into_iter()
                    .map(|s| Instrument::new(s.clone(), s))
                    .collect();
            }
        }
        if let Some(sectors) = lookup("SECTORS").map(|s| split_list(&s)) {
            if !sectors.is_empty() {
                watchlist.sectors = sectors;
            }
        }
        if let Some(raw) = lookup("RATIOS") {
            watchlist.ratios = split_list(&raw)
                .iter()
                .filter_map(|pair| {
                    let parsed = RatioPair::parse(pair);
                    if parsed.is_none() {
                        warn!(value = %pair, "ignoring malformed ratio, expected NUM/DEN");
                    }
                    parsed
                })
                .collect();
        }
        if let Some(symbol) = lookup("SENTIMENT_SYMBOL").filter(|s| !s.trim().is_empty()) {
            watchlist.sentiment_symbol = symbol.trim().to_string();
        }

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            yahoo_base_url: lookup("YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            engine,
            cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "CACHE_TTL_SECONDS",
                DEFAULT_CACHE_TTL_SECONDS,
            )),
            refresh_interval: Duration::from_secs(parse_or(
                &lookup,
                "REFRESH_INTERVAL_SECONDS",
                DEFAULT_REFRESH_INTERVAL_SECONDS,
            )),
            fetch_retries: parse_or(&lookup, "FETCH_RETRIES", defaults.fetch_retries),
            watchlist,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!(key = key, value = %raw, error = %e, "invalid setting, using default");
            default
        }),
    }
}

fn positive_or<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default) {
        0 => {
            warn!(key = key, "window must be positive, using default");
            default
        }
        n => n,
    }
}
