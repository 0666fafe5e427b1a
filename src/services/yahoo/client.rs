//! Yahoo Finance chart API client

use std::time::Duration;

use chrono::DateTime;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::price::{PricePoint, PriceSeries, SeriesError};
use crate::services::market_data::HistoryRequest;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str = "macro-pulse/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("base url {0} cannot carry a path")]
    CannotBeABase(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chart API returned status {0}")]
    Status(StatusCode),
    #[error("chart API error {code}: {description}")]
    Api { code: String, description: String },
    #[error("chart response carried no result")]
    EmptyResult,
    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl ChartError {
    /// Transport failures, throttling and server errors are worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            ChartError::Request(_) => true,
            ChartError::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

pub struct YahooChartClient {
    base_url: Url,
    http: reqwest::Client,
}

impl YahooChartClient {
    pub fn new(base_url: &str) -> Result<Self, ChartError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Self::with_client(base_url, http)
    }

    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, ChartError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ChartError::CannotBeABase(base_url.to_string()));
        }
        Ok(Self { base_url, http })
    }

    /// `{base}/v8/finance/chart/{symbol}?range=..&interval=..`
    pub fn chart_url(&self, request: &HistoryRequest) -> Result<Url, ChartError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ChartError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", request.symbol.as_str()]);
        url.query_pairs_mut()
            .append_pair("range", request.lookback.as_range())
            .append_pair("interval", request.interval.as_str())
            .append_pair("includePrePost", "false");
        Ok(url)
    }

    pub async fn fetch_chart(&self, request: &HistoryRequest) -> Result<PriceSeries, ChartError> {
        let url = self.chart_url(request)?;
        debug!(symbol = %request.symbol, url = %url, "fetching chart");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Status(status));
        }

        let envelope: ChartEnvelope = response.json().await?;
        parse_chart(&request.symbol, envelope)
    }
}

fn parse_chart(symbol: &str, envelope: ChartEnvelope) -> Result<PriceSeries, ChartError> {
    if let Some(err) = envelope.chart.error {
        return Err(ChartError::Api {
            code: err.code,
            description: err.description,
        });
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or(ChartError::EmptyResult)?;
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|quote| quote.close)
        .unwrap_or_default();

    let mut points: Vec<PricePoint> = Vec::with_capacity(closes.len());
    for (&secs, close) in result.timestamp.iter().zip(closes) {
        // Missing closes are holidays or halted sessions.
        let (Some(close), Some(timestamp)) = (close, DateTime::from_timestamp(secs, 0)) else {
            continue;
        };
        let point = PricePoint::new(timestamp, close);
        match points.last_mut() {
            // The live bar can repeat the last session; keep the newest value.
            Some(last) if last.timestamp == timestamp => *last = point,
            Some(last) if last.timestamp > timestamp => {
                debug!(symbol = %symbol, timestamp = %timestamp, "skipping out-of-order bar");
            }
            _ => points.push(point),
        }
    }

    Ok(PriceSeries::new(symbol, points)?)
}
