//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::dashboard::{build_report, render_text, DashboardReport, Watchlist};
use crate::engine::{EngineError, MarketMetricsEngine};
use crate::indicators::IndicatorError;
use crate::metrics::Metrics;
use crate::signals::rate_snapshot;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: Arc<MarketMetricsEngine>,
    pub watchlist: Arc<Watchlist>,
    pub latest_report: Arc<RwLock<Option<DashboardReport>>>,
}

impl AppState {
    pub fn new(
        engine: Arc<MarketMetricsEngine>,
        watchlist: Arc<Watchlist>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            engine,
            watchlist,
            latest_report: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a fresh report and make it the latest one
    pub async fn refresh_report(&self) -> DashboardReport {
        let report = build_report(&self.engine, &self.watchlist).await;
        self.metrics.dashboard_refreshes_total.inc();
        *self.latest_report.write().await = Some(report.clone());
        report
    }

    /// Latest report, building one if none exists yet
    pub async fn current_report(&self) -> DashboardReport {
        if let Some(report) = self.latest_report.read().await.clone() {
            return report;
        }
        self.refresh_report().await
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Engine failure rendered as a JSON error body
pub struct ApiError(EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EngineError::MarketData(_) => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::Indicator(IndicatorError::InvalidWindow) => StatusCode::BAD_REQUEST,
            EngineError::Indicator(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        if status == StatusCode::SERVICE_UNAVAILABLE {
            warn!(error = %self.0, "no data for request");
        }
        (
            status,
            Json(json!({
                "error": self.0.to_string(),
                "data_unavailable": self.0.is_data_unavailable(),
            })),
        )
            .into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "macro-pulse"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardReport> {
    Json(state.current_report().await)
}

async fn get_dashboard_text(State(state): State<AppState>) -> String {
    render_text(&state.current_report().await)
}

/// Snapshot, flattened indicators and rating for one symbol
async fn get_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let snapshot = state.engine.snapshot(&symbol).await?;
    let rating = rate_snapshot(&snapshot);
    Ok(Json(json!({
        "indicators": snapshot.indicators(),
        "rating": rating,
        "snapshot": snapshot,
    })))
}

async fn get_ratio(
    State(state): State<AppState>,
    Path((numerator, denominator)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let result = state.engine.ratio(&numerator, &denominator).await?;
    Ok(Json(json!(result)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/dashboard/text", get(get_dashboard_text))
        .route("/api/symbols/{symbol}", get(get_symbol))
        .route("/api/ratios/{numerator}/{denominator}", get(get_ratio))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
