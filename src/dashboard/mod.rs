//! Dashboard presentation over the metrics engine.

pub mod render;
pub mod report;
pub mod watchlist;

pub use render::{format_amount, render_text, write_report, DATA_PENDING};
pub use report::{
    build_report, DashboardReport, Leaderboard, OverlayRow, RatioRow, Reading, UnrankedSymbol,
};
pub use watchlist::{Instrument, RatioPair, Watchlist};
