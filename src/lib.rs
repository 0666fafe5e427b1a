//! macro-pulse: cross-asset market metrics.
//!
//! The [`engine::MarketMetricsEngine`] turns price histories fetched through a
//! [`services::market_data::PriceHistoryProvider`] into indicators (latest close,
//! SMA, RSI, percent deviation, ratios) and regime labels. The [`dashboard`]
//! module builds a report on top of it for the CLI and HTTP surfaces.

pub mod common;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod engine;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
