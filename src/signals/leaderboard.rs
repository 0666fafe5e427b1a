//! Sector leaderboard ranked by RSI

use serde::{Deserialize, Serialize};

use crate::models::indicators::SymbolSnapshot;
use crate::models::regime::Oscillator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub symbol: String,
    pub rsi: f64,
    pub deviation_pct: f64,
    pub oscillator: Oscillator,
}

/// Rank snapshots by RSI, strongest first. Equal RSI values fall back to symbol order.
pub fn rank_by_rsi(snapshots: &[SymbolSnapshot]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&SymbolSnapshot> = snapshots.iter().collect();
    ordered.sort_by(|a, b| b.rsi.total_cmp(&a.rsi).then_with(|| a.symbol.cmp(&b.symbol)));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, s)| LeaderboardEntry {
            rank: i + 1,
            symbol: s.symbol.clone(),
            rsi: s.rsi,
            deviation_pct: s.deviation_pct,
            oscillator: s.oscillator.label,
        })
        .collect()
}
