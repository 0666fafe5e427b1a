//! Trend indicators: latest close, SMA

pub mod sma;

pub use sma::*;
