//! Price history providers.

pub mod cache;
pub mod market_data;
pub mod yahoo;

pub use cache::CachedPriceHistoryProvider;
pub use market_data::{
    HistoryRequest, Interval, Lookback, MarketDataError, PriceHistoryProvider,
    StaticPriceHistoryProvider,
};
pub use yahoo::{YahooChartClient, YahooPriceHistoryProvider};
