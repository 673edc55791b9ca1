//! Average-based forecasting models.
//!
//! This module provides:
//! - `MovingAverage`: Forecasts using the mean of the last `window` observations
//! - `SimpleAverage`: Forecasts using the mean of ALL historical values
//!
//! Both produce a flat projection: every forecast period repeats one value.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;

/// Default number of trailing months averaged by [`MovingAverage`].
pub const DEFAULT_WINDOW: usize = 3;

/// Span of history to average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    Trailing(usize),
    Full,
}

/// Moving Average forecaster.
///
/// Predicts future values as the mean of the last `window` observations.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: Window,
    last_mean: Option<f64>,
}

impl MovingAverage {
    /// Create a new moving average over the last `window` months.
    ///
    /// A zero window, or one longer than the history, is rejected when the
    /// model is fitted.
    pub fn new(window: usize) -> Self {
        Self {
            window: Window::Trailing(window),
            last_mean: None,
        }
    }

    fn full_history() -> Self {
        Self {
            window: Window::Full,
            last_mean: None,
        }
    }

    /// Get the window size, or `None` when the full history is averaged.
    pub fn window(&self) -> Option<usize> {
        match self.window {
            Window::Trailing(w) => Some(w),
            Window::Full => None,
        }
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Forecaster for MovingAverage {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let values = series.values();
        let n = values.len();
        let actual_window = match self.window {
            Window::Full => n,
            Window::Trailing(0) => {
                return Err(ForecastError::InvalidParameter(
                    "moving average window must be at least 1".to_string(),
                ))
            }
            Window::Trailing(w) if w > n => {
                return Err(ForecastError::InvalidParameter(format!(
                    "window {} exceeds history length {}",
                    w, n
                )))
            }
            Window::Trailing(w) => w,
        };

        self.last_mean =
            Some(values[n - actual_window..].iter().sum::<f64>() / actual_window as f64);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let mean = self.last_mean.ok_or(ForecastError::FitRequired)?;

        if horizon == 0 {
            return Ok(Forecast::new());
        }

        Ok(Forecast::from_values(vec![mean; horizon]))
    }

    fn name(&self) -> &str {
        "MovingAverage"
    }

    fn is_fitted(&self) -> bool {
        self.last_mean.is_some()
    }
}

// ============================================================================
// SimpleAverage - Wrapper for full-history mean
// ============================================================================

/// SimpleAverage forecaster.
///
/// Predicts future values as the mean of ALL historical observations.
///
/// # Example
/// ```
/// use sales_forecast::models::baseline::SimpleAverage;
/// use sales_forecast::models::Forecaster;
/// use sales_forecast::core::TimeSeries;
///
/// let ts = TimeSeries::monthly((1..=12).map(|i| i as f64).collect()).unwrap();
///
/// let mut model = SimpleAverage::new();
/// model.fit(&ts).unwrap();
/// let forecast = model.predict(3).unwrap();
/// // All predictions will be 6.5 (mean of 1..12)
/// assert_eq!(forecast.values(), &[6.5, 6.5, 6.5]);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleAverage {
    inner: MovingAverage,
}

impl SimpleAverage {
    /// Create a new SimpleAverage forecaster.
    pub fn new() -> Self {
        Self {
            inner: MovingAverage::full_history(),
        }
    }
}

impl Default for SimpleAverage {
    fn default() -> Self {
        Self::new()
    }
}

impl Forecaster for SimpleAverage {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.inner.fit(series)
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        self.inner.predict(horizon)
    }

    fn name(&self) -> &str {
        "SimpleAverage"
    }

    fn is_fitted(&self) -> bool {
        self.inner.is_fitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_series(values: Vec<f64>) -> TimeSeries {
        TimeSeries::monthly(values).unwrap()
    }

    fn ramp() -> TimeSeries {
        make_series((1..=12).map(|i| i as f64).collect())
    }

    #[test]
    fn moving_average_forecasts_repeating_averages() {
        let mut model = MovingAverage::new(3);
        model.fit(&ramp()).unwrap();

        let forecast = model.predict(3).unwrap();
        let preds = forecast.values();

        // Mean of last 3 values: (10 + 11 + 12) / 3 = 11
        for pred in preds {
            assert_relative_eq!(*pred, 11.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn moving_average_default_window_is_three() {
        let model = MovingAverage::default();
        assert_eq!(model.window(), Some(3));
    }

    #[test]
    fn moving_average_window_equal_to_history() {
        let mut model = MovingAverage::new(12);
        model.fit(&ramp()).unwrap();

        let forecast = model.predict(1).unwrap();
        assert_relative_eq!(forecast.values()[0], 6.5, epsilon = 1e-10);
    }

    #[test]
    fn moving_average_window_longer_than_history() {
        let mut model = MovingAverage::new(13);
        assert_eq!(
            model.fit(&ramp()),
            Err(ForecastError::InvalidParameter(
                "window 13 exceeds history length 12".to_string()
            ))
        );

        // Unfitted model can't predict
        assert!(matches!(model.predict(5), Err(ForecastError::FitRequired)));
    }

    #[test]
    fn moving_average_rejects_zero_window() {
        let mut model = MovingAverage::new(0);
        assert!(matches!(
            model.fit(&ramp()),
            Err(ForecastError::InvalidParameter(_))
        ));
        assert!(!model.is_fitted());
    }

    #[test]
    fn moving_average_handles_zero_horizon() {
        let mut model = MovingAverage::new(3);
        model.fit(&ramp()).unwrap();

        let forecast = model.predict(0).unwrap();
        assert!(forecast.is_empty());
        assert_eq!(forecast.horizon(), 0);
    }

    #[test]
    fn moving_average_name_is_correct() {
        let model = MovingAverage::new(5);
        assert_eq!(model.name(), "MovingAverage");
    }

    #[test]
    fn simple_average_uses_full_history() {
        let mut model = SimpleAverage::new();
        model.fit(&ramp()).unwrap();

        let forecast = model.predict(4).unwrap();
        for pred in forecast.values() {
            assert_relative_eq!(*pred, 6.5, epsilon = 1e-10);
        }
    }

    #[test]
    fn simple_average_of_constant_series() {
        let mut model = SimpleAverage::default();
        model.fit(&make_series(vec![50.0; 12])).unwrap();

        let forecast = model.predict(6).unwrap();
        assert_eq!(forecast.values(), &[50.0; 6]);
    }

    #[test]
    fn simple_average_matches_full_window_moving_average() {
        let ts = make_series(vec![
            4.0, 8.0, 15.0, 16.0, 23.0, 42.0, 4.0, 8.0, 15.0, 16.0, 23.0, 42.0,
        ]);

        let mut simple = SimpleAverage::new();
        let mut full = MovingAverage::new(12);
        simple.fit(&ts).unwrap();
        full.fit(&ts).unwrap();

        assert_relative_eq!(
            simple.predict(1).unwrap().values()[0],
            full.predict(1).unwrap().values()[0],
            epsilon = 1e-10
        );
    }

    #[test]
    fn simple_average_name_and_window() {
        let model = SimpleAverage::new();
        assert_eq!(model.name(), "SimpleAverage");
        assert_eq!(model.inner.window(), None);
    }
}
