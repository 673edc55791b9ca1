//! Least-squares trend extrapolation.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::features::trend::{linear_trend, LinearTrendResult};
use crate::models::Forecaster;

/// Linear regression forecaster.
///
/// Fits a straight line through the history against month index and extends
/// it past the last observation. Projections below zero are reported as zero.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    trend: Option<LinearTrendResult>,
    n: usize,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slope of the fitted line (units per month).
    pub fn slope(&self) -> Option<f64> {
        self.trend.map(|t| t.slope)
    }

    /// Intercept of the fitted line at month index 0.
    pub fn intercept(&self) -> Option<f64> {
        self.trend.map(|t| t.intercept)
    }

    pub fn r_squared(&self) -> Option<f64> {
        self.trend.map(|t| t.r_squared)
    }
}

impl Forecaster for LinearRegression {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.trend = Some(linear_trend(series.values())?);
        self.n = series.len();
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let trend = self.trend.ok_or(ForecastError::FitRequired)?;

        let predictions = (0..horizon)
            .map(|i| trend.value_at((self.n + i) as f64).max(0.0))
            .collect();

        Ok(Forecast::from_values(predictions))
    }

    fn name(&self) -> &str {
        "LinearRegression"
    }

    fn is_fitted(&self) -> bool {
        self.trend.is_some()
    }
}
