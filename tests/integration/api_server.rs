//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics and dashboard payloads.


use serde_json::Value;

use test_utils::TestApiServer;

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "macro-pulse");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    for name in [
        "http_requests_total",
        "http_request_duration_seconds",
        "http_requests_in_flight",
        "dashboard_refreshes_total",
    ] {
        assert!(body.contains(name), "Expected {} metric", name);
    }
    assert!(app.metrics.http_requests_total.get() >= 1);
}

#[tokio::test]
async fn symbol_endpoint_returns_snapshot_and_rating() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/symbols/TLT").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["snapshot"]["symbol"], "TLT");
    assert_eq!(body["snapshot"]["price"], 80.5);
    assert_eq!(body["snapshot"]["momentum"]["label"], "bearish");
    assert_eq!(body["snapshot"]["oscillator"]["label"], "oversold");
    assert_eq!(body["rating"], "bullish");

    let indicators = body["indicators"].as_array().expect("indicator list");
    assert_eq!(indicators.len(), 4);
    assert_eq!(indicators[0]["kind"], "current_price");
}

#[tokio::test]
async fn symbol_endpoint_without_data_is_unavailable() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/symbols/GONE").await;
    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["data_unavailable"], true);
    assert!(body["error"].as_str().unwrap().contains("GONE"));
}

#[tokio::test]
async fn symbol_endpoint_with_short_history_is_unprocessable() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/symbols/SHORT").await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert_eq!(body["data_unavailable"], false);
}

#[tokio::test]
async fn ratio_endpoint_divides_latest_closes() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/ratios/QQQ/TLT").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["kind"], "ratio");
    assert_eq!(body["numerator"], "QQQ");
    assert_eq!(body["denominator"], "TLT");
    assert_eq!(body["value"], 439.0 / 80.5);

    let missing = app.server.get("/api/ratios/QQQ/GONE").await;
    assert_eq!(missing.status_code(), 503);
}

#[tokio::test]
async fn dashboard_endpoint_builds_and_caches_report() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/dashboard").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["sentiment"]["status"], "ready");
    assert_eq!(body["sentiment"]["value"]["label"], "greed");
    assert_eq!(body["overlay"].as_array().unwrap().len(), 3);
    assert_eq!(body["overlay"][2]["reading"]["status"], "pending");
    assert_eq!(body["leaderboard"]["entries"][0]["symbol"], "XLK");
    assert_eq!(body["ratios"][0]["reading"]["status"], "ready");

    let fetches = app.provider.fetch_count();
    let _ = app.server.get("/api/dashboard").await;
    assert_eq!(app.provider.fetch_count(), fetches);
    assert_eq!(app.metrics.dashboard_refreshes_total.get(), 1);
}

#[tokio::test]
async fn dashboard_text_marks_missing_values() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/dashboard/text").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("Market Sentiment: GREED"));
    assert!(body.contains("Data Pending"));
    assert!(body.contains("$439.00"));
}

#[tokio::test]
async fn refreshed_report_replaces_cached_one() {
    let app = TestApiServer::new().await;
    let first = app.state.refresh_report().await;
    let _ = app.server.get("/api/dashboard").await;
    let second = app.state.refresh_report().await;

    assert!(second.generated_at >= first.generated_at);
    assert_eq!(app.metrics.dashboard_refreshes_total.get(), 2);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/unknown").await;
    assert_eq!(response.status_code(), 404);
}
