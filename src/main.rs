//! macro-pulse CLI report
//!
//! Fetches the configured watchlist once and prints the dashboard as text,
//! or as JSON when `--json` is passed.

use dotenvy::dotenv;
use macro_pulse::config::AppConfig;
use macro_pulse::core::bootstrap::build_engine;
use macro_pulse::dashboard::{build_report, render_text};
use macro_pulse::logging;
use macro_pulse::metrics::Metrics;
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let as_json = env::args().skip(1).any(|arg| arg == "--json");

    let config = AppConfig::from_env();
    info!(
        lookback = %config.engine.lookback,
        interval = %config.engine.interval,
        overlay = config.watchlist.overlay.len(),
        sectors = config.watchlist.sectors.len(),
        "Building dashboard report"
    );

    let metrics = Arc::new(Metrics::new()?);
    let engine = build_engine(&config, metrics)?;
    let report = build_report(&engine, &config.watchlist).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
