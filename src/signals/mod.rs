//! Regime classification, scorecard and leaderboard.

pub mod classification;
pub mod leaderboard;
pub mod scorecard;

pub use classification::*;
pub use leaderboard::*;
pub use scorecard::*;
