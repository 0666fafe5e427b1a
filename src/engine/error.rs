use thiserror::Error;

use crate::indicators::IndicatorError;
use crate::services::market_data::MarketDataError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl EngineError {
    /// True when the provider had nothing to compute on
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, EngineError::MarketData(MarketDataError::DataUnavailable { .. }))
    }
}
