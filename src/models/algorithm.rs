//! Selectable forecasting algorithms.
//!
//! [`Algorithm`] is the single dispatch point between a caller's choice and a
//! concrete [`Forecaster`](crate::models::Forecaster). Each variant carries its own parameters, and a
//! fresh model is built for every forecast.

use crate::core::{Forecast, TimeSeries, MAX_HORIZON, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::models::baseline::{MovingAverage, SimpleAverage, DEFAULT_WINDOW};
use crate::models::exponential::{HoltWinters, SmoothingParams};
use crate::models::regression::LinearRegression;
use crate::models::BoxedForecaster;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn check_horizon(horizon: usize) -> Result<()> {
    if horizon > MAX_HORIZON {
        return Err(ForecastError::InvalidParameter(format!(
            "horizon {} exceeds the maximum of {} months",
            horizon, MAX_HORIZON
        )));
    }
    Ok(())
}

/// Forecasting algorithm together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// Additive triple exponential smoothing over a twelve-month season.
    HoltWinters(SmoothingParams),
    /// Mean of the last `window` months, repeated.
    MovingAverage {
        #[serde(default = "default_window")]
        window: usize,
    },
    /// Mean of the whole history, repeated.
    SimpleAverage,
    /// Least-squares line extended into the future.
    LinearRegression,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::HoltWinters(SmoothingParams::default())
    }
}

impl Algorithm {
    /// Moving average with the default three-month window.
    pub fn moving_average() -> Self {
        Algorithm::MovingAverage {
            window: DEFAULT_WINDOW,
        }
    }

    /// Every algorithm with default parameters, in the order offered to users.
    pub fn choices() -> [Algorithm; 4] {
        [
            Algorithm::default(),
            Algorithm::moving_average(),
            Algorithm::SimpleAverage,
            Algorithm::LinearRegression,
        ]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HoltWinters(_) => "Holt-Winters",
            Algorithm::MovingAverage { .. } => "Moving Average",
            Algorithm::SimpleAverage => "Simple Average",
            Algorithm::LinearRegression => "Linear Regression",
        }
    }

    /// One-sentence guidance on when the algorithm fits the data.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::HoltWinters(_) => {
                "Triple exponential smoothing that captures level, trend, and seasonality. \
                 Best for data with clear seasonal patterns."
            }
            Algorithm::MovingAverage { .. } => {
                "Averages a fixed number of recent periods to smooth out fluctuations. \
                 Good for stable data with minimal seasonality."
            }
            Algorithm::SimpleAverage => {
                "Takes the mean of all historical data points. \
                 Best for very stable data with no clear trends or seasonality."
            }
            Algorithm::LinearRegression => {
                "Uses linear regression to find the best-fit line through historical data points \
                 and extrapolate future values. Best for data with clear linear trends."
            }
        }
    }

    /// Build an unfitted model for this algorithm.
    pub fn build(&self) -> Result<BoxedForecaster> {
        let model: BoxedForecaster = match *self {
            Algorithm::HoltWinters(params) => {
                params.validate()?;
                Box::new(HoltWinters::with_params(params, MONTHS_PER_YEAR))
            }
            Algorithm::MovingAverage { window } => {
                if window == 0 {
                    return Err(ForecastError::InvalidParameter(
                        "moving average window must be at least 1".to_string(),
                    ));
                }
                Box::new(MovingAverage::new(window))
            }
            Algorithm::SimpleAverage => Box::new(SimpleAverage::new()),
            Algorithm::LinearRegression => Box::new(LinearRegression::new()),
        };
        Ok(model)
    }

    /// Forecast `horizon` months past the end of `series`.
    ///
    /// The result always has exactly `horizon` finite, non-negative values.
    ///
    /// # Errors
    /// `InvalidParameter` when `horizon` exceeds [`MAX_HORIZON`] or the
    /// algorithm's parameters are unusable.
    pub fn forecast(&self, series: &TimeSeries, horizon: usize) -> Result<Forecast> {
        check_horizon(horizon)?;
        let mut model = self.build()?;
        model.fit(series)?;
        let forecast = model.predict(horizon)?;

        if forecast.horizon() != horizon {
            return Err(ForecastError::DimensionMismatch {
                expected: horizon,
                got: forecast.horizon(),
            });
        }
        if !forecast.is_finite() {
            return Err(ForecastError::ComputationError(format!(
                "{} produced a non-finite forecast",
                model.name()
            )));
        }

        Ok(forecast.clamp_non_negative())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ForecastError;

    /// Parse a display name, ignoring case, spaces and punctuation.
    ///
    /// "Linear Programming" is accepted as an older label for linear regression.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "holtwinters" => Ok(Algorithm::default()),
            "movingaverage" => Ok(Algorithm::moving_average()),
            "simpleaverage" => Ok(Algorithm::SimpleAverage),
            "linearregression" | "linearprogramming" => Ok(Algorithm::LinearRegression),
            _ => Err(ForecastError::UnknownAlgorithm(s.to_string())),
        }
    }
}
