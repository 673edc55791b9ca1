//! Forecaster trait defining the common interface for all models.

use crate::core::{Forecast, TimeSeries};
use crate::error::Result;

/// Common interface for all forecasting models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the time series data.
    fn fit(&mut self, series: &TimeSeries) -> Result<()>;

    /// Generate predictions for the specified horizon.
    fn predict(&self, horizon: usize) -> Result<Forecast>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use sales_forecast::models::{BoxedForecaster, Forecaster};
/// use sales_forecast::models::baseline::SimpleAverage;
///
/// let model: BoxedForecaster = Box::new(SimpleAverage::new());
/// assert_eq!(model.name(), "SimpleAverage");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster + Send>;
