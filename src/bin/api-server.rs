//! macro-pulse API Server
//!
//! HTTP API serving the dashboard report, per-symbol indicators and
//! Prometheus metrics, with a background loop keeping the report fresh.

use dotenvy::dotenv;
use macro_pulse::config::{self, AppConfig};
use macro_pulse::core::bootstrap::build_engine;
use macro_pulse::core::http::{start_server, AppState};
use macro_pulse::core::runtime::{DashboardRuntime, RuntimeConfig};
use macro_pulse::logging;
use macro_pulse::metrics::Metrics;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env();
    let env = config::get_environment();
    info!("Starting macro-pulse API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let metrics = Arc::new(Metrics::new()?);
    let engine = Arc::new(build_engine(&config, metrics.clone())?);
    let state = AppState::new(engine, Arc::new(config.watchlist.clone()), metrics);

    let refresh_handle = if config.refresh_interval.is_zero() {
        info!("Dashboard refresh disabled, reports are built on request");
        None
    } else {
        let runtime = DashboardRuntime::new(
            RuntimeConfig {
                refresh_interval_seconds: config.refresh_interval.as_secs(),
            },
            state.clone(),
        );
        Some(runtime.start())
    };

    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(state, port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            if let Some(handle) = refresh_handle {
                handle.abort();
            }
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
