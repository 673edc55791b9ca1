//! Forecasting models.

mod algorithm;
mod traits;

pub mod baseline;
pub mod exponential;
pub mod regression;

pub use algorithm::Algorithm;
pub use traits::{BoxedForecaster, Forecaster};
