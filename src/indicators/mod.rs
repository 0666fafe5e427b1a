//! Pure indicator functions over price slices.
//!
//! Points must be in ascending chronological order (oldest first), which
//! [`PriceSeries`](crate::models::PriceSeries) guarantees.

pub mod error;
pub mod relative;

pub mod momentum;
pub mod trend;

pub use error::IndicatorError;
pub use momentum::*;
pub use relative::*;
pub use trend::*;
