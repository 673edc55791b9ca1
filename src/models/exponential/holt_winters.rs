//! Holt-Winters forecasting model.
//!
//! Also known as triple exponential smoothing, this model handles
//! data with both trend and seasonality. Seasonality is additive: unit counts
//! are smoothed directly rather than as ratios.

use crate::core::{Forecast, TimeSeries, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::features::trend::linear_trend;
use crate::models::Forecaster;
use crate::utils::stats::mean;
use serde::{Deserialize, Serialize};

/// Smoothing constants for level, trend and season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingParams {
    /// Level smoothing parameter.
    pub alpha: f64,
    /// Trend smoothing parameter.
    pub beta: f64,
    /// Seasonal smoothing parameter.
    pub gamma: f64,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            beta: 0.1,
            gamma: 0.3,
        }
    }
}

impl SmoothingParams {
    /// Check that every constant is a finite number in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ForecastError::InvalidParameter(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Holt-Winters forecaster with additive seasonality.
///
/// The model equations:
/// - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
/// - Seasonal: `s_t = γ(y_t - l_t) + (1-γ)s_{t-m}`
/// - Forecast: `ŷ_{t+h} = l_t + h*b_t + s_{t+h-m}`
///
/// State is initialized from the first season and then updated over every
/// observation, so a single year of history is enough to fit.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    params: SmoothingParams,
    /// Seasonal period.
    seasonal_period: usize,
    /// Current level state.
    level: Option<f64>,
    /// Current trend state.
    trend: Option<f64>,
    /// Seasonal indices.
    seasonals: Option<Vec<f64>>,
    /// One-step-ahead fitted values.
    fitted: Option<Vec<f64>>,
    /// Original series length.
    n: usize,
}

impl HoltWinters {
    /// Create a new Holt-Winters model with fixed parameters.
    pub fn new(alpha: f64, beta: f64, gamma: f64, seasonal_period: usize) -> Self {
        Self::with_params(SmoothingParams { alpha, beta, gamma }, seasonal_period)
    }

    /// Create a model from a parameter set.
    pub fn with_params(params: SmoothingParams, seasonal_period: usize) -> Self {
        Self {
            params,
            seasonal_period,
            level: None,
            trend: None,
            seasonals: None,
            fitted: None,
            n: 0,
        }
    }

    /// Get the smoothing parameters.
    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    /// Get the seasonal period.
    pub fn seasonal_period(&self) -> usize {
        self.seasonal_period
    }

    /// Get the current level.
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Get the current trend.
    pub fn trend(&self) -> Option<f64> {
        self.trend
    }

    /// Get the seasonal indices.
    pub fn seasonals(&self) -> Option<&[f64]> {
        self.seasonals.as_deref()
    }

    /// One-step-ahead in-sample predictions.
    pub fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    /// Initialize level, trend and seasonal indices from the first season(s).
    ///
    /// The returned level sits one step before the first observation so the
    /// first update lands on index 0.
    fn initialize_state(values: &[f64], period: usize) -> Result<(f64, f64, Vec<f64>)> {
        let first_season = &values[..period];

        // With two seasons, trend is the average seasonal difference. Twelve
        // months only hold two seasons for a period of six or less, so the
        // default period always takes the least-squares line.
        let (trend, intercept) = if values.len() >= 2 * period {
            let sum: f64 = (0..period)
                .map(|i| (values[period + i] - values[i]) / period as f64)
                .sum();
            let trend = sum / period as f64;
            (trend, mean(first_season) - trend * (period - 1) as f64 / 2.0)
        } else {
            let line = linear_trend(first_season)?;
            (line.slope, line.intercept)
        };

        let mut seasonals: Vec<f64> = first_season
            .iter()
            .enumerate()
            .map(|(i, y)| y - (intercept + trend * i as f64))
            .collect();

        Self::normalize_seasonals(&mut seasonals);

        Ok((intercept - trend, trend, seasonals))
    }

    /// Shift seasonal components so they sum to 0.
    fn normalize_seasonals(seasonals: &mut [f64]) {
        let period = seasonals.len();
        if period == 0 {
            return;
        }

        let adjustment = seasonals.iter().sum::<f64>() / period as f64;
        for s in seasonals.iter_mut() {
            *s -= adjustment;
        }
    }
}

impl Default for HoltWinters {
    fn default() -> Self {
        Self::with_params(SmoothingParams::default(), MONTHS_PER_YEAR)
    }
}

impl Forecaster for HoltWinters {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.params.validate()?;

        let period = self.seasonal_period;
        if period < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "seasonal period must be at least 2, got {}",
                period
            )));
        }

        let values = series.values();
        if values.len() < period {
            return Err(ForecastError::InvalidParameter(format!(
                "seasonal period {} exceeds history length {}",
                period,
                values.len()
            )));
        }

        let SmoothingParams { alpha, beta, gamma } = self.params;
        let (mut level, mut trend, mut seasonals) = Self::initialize_state(values, period)?;

        let mut fitted = Vec::with_capacity(values.len());

        for (t, &y) in values.iter().enumerate() {
            let season_idx = t % period;
            let s = seasonals[season_idx];

            fitted.push(level + trend + s);

            let level_prev = level;
            level = alpha * (y - s) + (1.0 - alpha) * (level_prev + trend);
            trend = beta * (level - level_prev) + (1.0 - beta) * trend;
            seasonals[season_idx] = gamma * (y - level) + (1.0 - gamma) * s;
        }

        self.n = values.len();
        self.level = Some(level);
        self.trend = Some(trend);
        self.seasonals = Some(seasonals);
        self.fitted = Some(fitted);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let level = self.level.ok_or(ForecastError::FitRequired)?;
        let trend = self.trend.ok_or(ForecastError::FitRequired)?;
        let seasonals = self.seasonals.as_ref().ok_or(ForecastError::FitRequired)?;
        let period = self.seasonal_period;

        let predictions: Vec<f64> = (1..=horizon)
            .map(|h| {
                let s = seasonals[(self.n + h - 1) % period];
                (level + (h as f64) * trend + s).max(0.0)
            })
            .collect();

        Ok(Forecast::from_values(predictions))
    }

    fn name(&self) -> &str {
        "HoltWinters(additive)"
    }

    fn is_fitted(&self) -> bool {
        self.level.is_some()
    }
}
