//! Yahoo Finance chart API integration

pub mod client;
pub mod provider;

pub use client::{ChartError, YahooChartClient, DEFAULT_BASE_URL};
pub use provider::YahooPriceHistoryProvider;
