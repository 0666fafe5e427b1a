//! Relative measures between two values

use crate::indicators::IndicatorError;

/// Percent change of `current` against `reference`: `(current / reference - 1) * 100`
pub fn percent_deviation(current: f64, reference: f64) -> Result<f64, IndicatorError> {
    if reference.is_nan() || reference <= 0.0 {
        return Err(IndicatorError::InvalidReference(reference));
    }
    Ok((current - reference) * 100.0 / reference)
}

pub fn ratio(numerator: f64, denominator: f64) -> Result<f64, IndicatorError> {
    if denominator == 0.0 {
        return Err(IndicatorError::DivisionByZero);
    }
    Ok(numerator / denominator)
}
