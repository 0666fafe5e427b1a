//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod regime;

pub use indicators::{IndicatorResult, SymbolSnapshot};
pub use price::{PricePoint, PriceSeries, SeriesError};
pub use regime::{Momentum, Oscillator, Rating, RegimeClassification, Sentiment};
