//! Fixed series shared by the unit tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use macro_pulse::models::{PriceSeries, PricePoint};

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
}

pub fn series(symbol: &str, closes: &[f64]) -> PriceSeries {
    PriceSeries::daily(symbol, start(), closes).expect("valid series")
}

pub fn points(closes: &[f64]) -> Vec<PricePoint> {
    series("TEST", closes).points().to_vec()
}

/// `count` closes rising by `step` from `base`
pub fn rising(symbol: &str, count: usize, base: f64, step: f64) -> PriceSeries {
    let closes: Vec<f64> = (0..count).map(|i| base + i as f64 * step).collect();
    series(symbol, &closes)
}

/// `count` closes falling by `step` from `base`
pub fn falling(symbol: &str, count: usize, base: f64, step: f64) -> PriceSeries {
    let closes: Vec<f64> = (0..count).map(|i| base - i as f64 * step).collect();
    series(symbol, &closes)
}

/// Closes alternating up and down around `base`
pub fn choppy(symbol: &str, count: usize, base: f64) -> PriceSeries {
    let closes: Vec<f64> = (0..count)
        .map(|i| base + if i % 2 == 0 { 1.0 } else { -1.0 } + (i % 5) as f64 * 0.3)
        .collect();
    series(symbol, &closes)
}
