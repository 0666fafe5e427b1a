//! SMA (Simple Moving Average) and latest close

use crate::common::math;
use crate::indicators::IndicatorError;
use crate::models::price::PricePoint;

/// Close of the most recent point
pub fn latest_close(points: &[PricePoint]) -> Result<f64, IndicatorError> {
    points
        .last()
        .map(|p| p.close)
        .ok_or(IndicatorError::EmptySeries)
}

/// Unweighted mean of the last `window` closes
pub fn simple_moving_average(points: &[PricePoint], window: usize) -> Result<f64, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::InvalidWindow);
    }

    let closes: Vec<f64> = points.iter().map(|p| p.close).collect();
    math::sma(&closes, window).ok_or(IndicatorError::InsufficientData {
        required: window,
        available: points.len(),
    })
}
