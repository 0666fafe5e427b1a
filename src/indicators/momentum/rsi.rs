//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::IndicatorError;
use crate::models::price::PricePoint;

pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Calculate RSI over the trailing `window` price changes
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are simple means of the last `window` gains and losses, so
/// `window + 1` points are required. With no losses in the window RSI is 100.
pub fn relative_strength_index(points: &[PricePoint], window: usize) -> Result<f64, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::InvalidWindow);
    }
    let insufficient = IndicatorError::InsufficientData {
        required: window.saturating_add(1),
        available: points.len(),
    };
    if points.len() <= window {
        return Err(insufficient);
    }

    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
    let changes = math::differences(&closes);

    let gains: Vec<f64> = changes.iter().map(|c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|c| (-c).max(0.0)).collect();

    let avg_gain = math::sma(&gains, window).ok_or_else(|| insufficient.clone())?;
    let avg_loss = math::sma(&losses, window).ok_or(insufficient)?;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default window (14)
pub fn relative_strength_index_default(points: &[PricePoint]) -> Result<f64, IndicatorError> {
    relative_strength_index(points, DEFAULT_RSI_WINDOW)
}
