use thiserror::Error;

/// Failures raised by the indicator functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("price series is empty")]
    EmptySeries,
    #[error("insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },
    #[error("window must be a positive number of points")]
    InvalidWindow,
    #[error("reference value must be positive, got {0}")]
    InvalidReference(f64),
    #[error("division by zero")]
    DivisionByZero,
}
