//! Instruments shown on the dashboard

use serde::{Deserialize, Serialize};

/// A symbol with its display label and value decoration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub label: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioPair {
    pub numerator: String,
    pub denominator: String,
}

impl RatioPair {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Parse `NUM/DEN`
    pub fn parse(s: &str) -> Option<Self> {
        let (numerator, denominator) = s.trim().split_once('/')?;
        let (numerator, denominator) = (numerator.trim(), denominator.trim());
        if numerator.is_empty() || denominator.is_empty() {
            return None;
        }
        Some(Self::new(numerator, denominator))
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    /// Cross-asset overlay, also rated on the scorecard
    pub overlay: Vec<Instrument>,
    /// Sector ETFs ranked on the leaderboard
    pub sectors: Vec<String>,
    pub ratios: Vec<RatioPair>,
    /// Volatility index feeding the sentiment gauge
    pub sentiment_symbol: String,
}

pub fn default_overlay() -> Vec<Instrument> {
    vec![
        Instrument::new("^GSPC", "S&P 500"),
        Instrument::new("BTC-USD", "Bitcoin").with_prefix("$"),
        Instrument::new("GC=F", "Gold").with_prefix("$"),
        Instrument::new("UUP", "USD (DXY)"),
        Instrument::new("QQQ", "Nasdaq (QQQ)"),
        Instrument::new("VXUS", "International"),
        Instrument::new("^VIX", "VIX"),
        Instrument::new("^TNX", "10Y Yield").with_suffix("%"),
    ]
}

pub fn default_sectors() -> Vec<String> {
    [
        "XLK", "XLF", "XLE", "XLV", "XLY", "XLP", "XLI", "XLB", "XLU", "XLRE", "XLC",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_ratios() -> Vec<RatioPair> {
    vec![RatioPair::new("QQQ", "^TNX"), RatioPair::new("GC=F", "BTC-USD")]
}

impl Default for Watchlist {
    fn default() -> Self {
        Self {
            overlay: default_overlay(),
            sectors: default_sectors(),
            ratios: default_ratios(),
            sentiment_symbol: "^VIX".to_string(),
        }
    }
}
