//! Unit tests for the sector leaderboard

use macro_pulse::engine::snapshot_from_series;
use macro_pulse::models::SymbolSnapshot;
use macro_pulse::signals::rank_by_rsi;

use crate::support::{choppy, falling, rising};

fn snapshot_with_rsi(symbol: &str, rsi: f64) -> SymbolSnapshot {
    let mut snap = snapshot_from_series(&choppy(symbol, 30, 100.0), 20, 14).unwrap();
    snap.rsi = rsi;
    snap
}

#[test]
fn test_ranks_by_rsi_descending() {
    let snapshots = vec![
        snapshot_from_series(&falling("XLE", 30, 100.0, 1.0), 20, 14).unwrap(),
        snapshot_from_series(&rising("XLK", 30, 100.0, 1.0), 20, 14).unwrap(),
        snapshot_from_series(&choppy("XLF", 30, 100.0), 20, 14).unwrap(),
    ];

    let board = rank_by_rsi(&snapshots);
    let order: Vec<&str> = board.iter().map(|e| e.symbol.as_str()).collect();
    assert_eq!(order, vec!["XLK", "XLF", "XLE"]);
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[2].rank, 3);
    assert_eq!(board[0].rsi, 100.0);
}

#[test]
fn test_ties_break_by_symbol() {
    let snapshots = vec![snapshot_with_rsi("XLV", 55.0), snapshot_with_rsi("XLB", 55.0)];
    let board = rank_by_rsi(&snapshots);
    assert_eq!(board[0].symbol, "XLB");
    assert_eq!(board[1].symbol, "XLV");
}

#[test]
fn test_empty_board() {
    assert!(rank_by_rsi(&[]).is_empty());
}
