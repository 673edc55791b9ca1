//! End-to-end forecast requests.
//!
//! [`ForecastService::run`] validates a history, runs the chosen algorithm,
//! scores the forecast against the most recent months and classifies the
//! trend. Accuracy and trend problems never fail a request; they degrade to
//! "unavailable" and a neutral outlook respectively.

use crate::core::{month_after, TimeSeries, MAX_HORIZON};
use crate::error::{ForecastError, Result};
use crate::features::outlook::{analyze_trend, Recommendation, TrendAnalysis, TrendThresholds};
use crate::models::Algorithm;
use crate::utils::metrics::accuracy;
use crate::validation::validate_series;
use chrono::Month;
use serde::{Deserialize, Serialize};

/// Months forecast when a request does not name a horizon.
pub const DEFAULT_HORIZON: usize = 6;

/// Service-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Horizon used when a request leaves it unset.
    pub default_horizon: usize,
    pub trend: TrendThresholds,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon: DEFAULT_HORIZON,
            trend: TrendThresholds::default(),
        }
    }
}

impl ForecastConfig {
    /// Check the horizon and trend bands.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HORIZON).contains(&self.default_horizon) {
            return Err(ForecastError::InvalidParameter(format!(
                "default horizon must be between 1 and {}, got {}",
                MAX_HORIZON, self.default_horizon
            )));
        }
        self.trend.validate()
    }
}

/// One forecast to compute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastRequest {
    pub series: TimeSeries,
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Months to forecast; the service default when `None`.
    #[serde(default)]
    pub horizon: Option<usize>,
}

impl ForecastRequest {
    /// Holt-Winters request with the service's default horizon.
    pub fn new(series: TimeSeries) -> Self {
        Self {
            series,
            algorithm: Algorithm::default(),
            horizon: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }
}

/// Outcome of a forecast request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    algorithm: Algorithm,
    forecast: Vec<f64>,
    forecast_start: Month,
    accuracy: Option<f64>,
    trend: TrendAnalysis,
}

impl ForecastResult {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Forecast values, one per month.
    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }

    /// Calendar month of the first forecast value.
    pub fn forecast_start(&self) -> Month {
        self.forecast_start
    }

    /// Accuracy percentage in `[0, 100]`, or `None` when it could not be measured.
    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn trend(&self) -> &TrendAnalysis {
        &self.trend
    }

    pub fn recommendation(&self) -> Recommendation {
        self.trend.recommendation
    }

    /// Forecast values paired with their calendar months.
    pub fn periods(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        self.forecast
            .iter()
            .enumerate()
            .map(move |(i, value)| (month_after(self.forecast_start, i), *value))
    }

    /// E.g. `Forecast Accuracy: 72.6%`.
    pub fn accuracy_label(&self) -> String {
        match self.accuracy {
            Some(value) => format!("Forecast Accuracy: {:.1}%", value),
            None => "Forecast Accuracy: unavailable".to_string(),
        }
    }

    pub fn trend_label(&self) -> String {
        self.trend.label()
    }

    pub fn recommendation_text(&self) -> String {
        self.trend.recommendation.to_string()
    }
}

/// Runs forecast requests against a fixed configuration.
///
/// Holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ForecastService {
    config: ForecastConfig,
}

impl ForecastService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with custom settings.
    ///
    /// # Errors
    /// `InvalidParameter` when the configuration fails [`ForecastConfig::validate`].
    pub fn with_config(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Produce a forecast, its accuracy and the demand outlook.
    ///
    /// # Errors
    /// - `InsufficientData` when fewer than twelve months carry sales; no
    ///   algorithm is run.
    /// - `InvalidParameter` for a horizon outside `1..=MAX_HORIZON` or bad
    ///   algorithm parameters, including a moving-average window longer than
    ///   the history.
    /// - `ComputationError` when the algorithm cannot produce a finite forecast.
    pub fn run(&self, request: &ForecastRequest) -> Result<ForecastResult> {
        let series = &request.series;

        if let Err(err) = validate_series(series) {
            tracing::info!(
                months_present = err.months_present(),
                algorithm = %request.algorithm,
                "rejecting forecast request: {}",
                err
            );
            return Err(err);
        }

        let horizon = request.horizon.unwrap_or(self.config.default_horizon);
        if !(1..=MAX_HORIZON).contains(&horizon) {
            return Err(ForecastError::InvalidParameter(format!(
                "horizon must be between 1 and {}, got {}",
                MAX_HORIZON, horizon
            )));
        }

        tracing::debug!(algorithm = %request.algorithm, horizon, "running forecast");
        let forecast = request.algorithm.forecast(series, horizon)?.into_values();

        let accuracy = self.holdout_accuracy(series, &forecast);
        let trend = analyze_trend(series.values(), &forecast, &self.config.trend);

        tracing::debug!(
            algorithm = %request.algorithm,
            horizon,
            accuracy = ?accuracy,
            change_percent = trend.change_percent,
            direction = ?trend.direction,
            "forecast complete"
        );

        Ok(ForecastResult {
            algorithm: request.algorithm,
            forecast,
            forecast_start: series.next_month(),
            accuracy,
            trend,
        })
    }

    /// Score the last `horizon` months of history against the start of the forecast.
    fn holdout_accuracy(&self, series: &TimeSeries, forecast: &[f64]) -> Option<f64> {
        let horizon = forecast.len();
        if series.len() < 2 * horizon {
            tracing::debug!(
                horizon,
                history = series.len(),
                "history too short to score accuracy"
            );
            return None;
        }

        match accuracy(series.tail(horizon), &forecast[..horizon]) {
            Ok(score) => score,
            Err(err) => {
                tracing::debug!(error = %err, "accuracy unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::outlook::TrendDirection;
    use approx::assert_relative_eq;

    fn ramp() -> TimeSeries {
        TimeSeries::monthly((1..=12).map(|i| i as f64 * 10.0).collect()).unwrap()
    }

    #[test]
    fn service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastService>();
        assert_send_sync::<ForecastResult>();
    }

    #[test]
    fn default_request_uses_holt_winters_and_six_months() {
        let request = ForecastRequest::new(ramp());
        let result = ForecastService::new().run(&request).unwrap();

        assert_eq!(result.algorithm(), Algorithm::default());
        assert_eq!(result.horizon(), 6);
        assert!(result.forecast().iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn linear_regression_scores_against_recent_history() {
        let request = ForecastRequest::new(ramp())
            .with_algorithm(Algorithm::LinearRegression)
            .with_horizon(3);
        let result = ForecastService::new().run(&request).unwrap();

        // actual [100, 110, 120] vs predicted [130, 140, 150]
        let mape = (30.0 + 300.0 / 11.0 + 25.0) / 3.0;
        assert_relative_eq!(result.accuracy().unwrap(), 100.0 - mape, epsilon = 1e-9);
        assert_eq!(result.accuracy_label(), "Forecast Accuracy: 72.6%");
        assert_eq!(result.trend().direction, TrendDirection::Increasing);
    }

    #[test]
    fn long_horizon_skips_accuracy() {
        let request = ForecastRequest::new(ramp())
            .with_algorithm(Algorithm::SimpleAverage)
            .with_horizon(7);
        let result = ForecastService::new().run(&request).unwrap();

        assert_eq!(result.horizon(), 7);
        assert_eq!(result.accuracy(), None);
        assert_eq!(result.accuracy_label(), "Forecast Accuracy: unavailable");
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let request = ForecastRequest::new(ramp()).with_horizon(0);
        assert!(matches!(
            ForecastService::new().run(&request),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn oversized_horizon_is_rejected() {
        let service = ForecastService::new();
        for horizon in [MAX_HORIZON + 1, usize::MAX] {
            let request = ForecastRequest::new(ramp())
                .with_algorithm(Algorithm::SimpleAverage)
                .with_horizon(horizon);
            assert!(matches!(
                service.run(&request),
                Err(ForecastError::InvalidParameter(_))
            ));
        }

        let request = ForecastRequest::new(ramp())
            .with_algorithm(Algorithm::SimpleAverage)
            .with_horizon(MAX_HORIZON);
        let result = service.run(&request).unwrap();
        assert_eq!(result.horizon(), MAX_HORIZON);
        assert_eq!(result.accuracy(), None);
    }

    #[test]
    fn long_window_is_a_parameter_error() {
        let request = ForecastRequest::new(ramp())
            .with_algorithm(Algorithm::MovingAverage { window: 20 })
            .with_horizon(3);

        let err = ForecastService::new().run(&request).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter(_)));
        assert_eq!(err.months_present(), None);
    }

    #[test]
    fn missing_month_is_rejected_before_forecasting() {
        let mut values = vec![30.0; 12];
        values[5] = 0.0;
        let request = ForecastRequest::new(TimeSeries::monthly(values).unwrap());

        let err = ForecastService::new().run(&request).unwrap_err();
        assert_eq!(err.months_present(), Some(11));
    }

    #[test]
    fn forecast_starts_after_history() {
        let series = ramp().starting_at(Month::March);
        let request = ForecastRequest::new(series)
            .with_algorithm(Algorithm::SimpleAverage)
            .with_horizon(3);
        let result = ForecastService::new().run(&request).unwrap();

        assert_eq!(result.forecast_start(), Month::March);
        let months: Vec<Month> = result.periods().map(|(m, _)| m).collect();
        assert_eq!(months, vec![Month::March, Month::April, Month::May]);
    }

    #[test]
    fn custom_horizon_and_bands() {
        let config = ForecastConfig {
            default_horizon: 2,
            trend: TrendThresholds {
                stable_band: 50.0,
                recommendation_band: 100.0,
            },
        };
        let service = ForecastService::with_config(config).unwrap();
        let request = ForecastRequest::new(ramp()).with_algorithm(Algorithm::LinearRegression);
        let result = service.run(&request).unwrap();

        // forecast mean 135 vs history mean 65: about +108%
        assert_eq!(result.horizon(), 2);
        assert_eq!(result.trend().direction, TrendDirection::Increasing);
        assert!(matches!(
            result.recommendation(),
            Recommendation::IncreaseInventory { .. }
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let zero_horizon = ForecastConfig {
            default_horizon: 0,
            ..ForecastConfig::default()
        };
        assert!(ForecastService::with_config(zero_horizon).is_err());

        let huge_horizon = ForecastConfig {
            default_horizon: MAX_HORIZON + 1,
            ..ForecastConfig::default()
        };
        assert!(matches!(
            ForecastService::with_config(huge_horizon),
            Err(ForecastError::InvalidParameter(_))
        ));

        let inverted = ForecastConfig {
            trend: TrendThresholds {
                stable_band: 20.0,
                recommendation_band: 10.0,
            },
            ..ForecastConfig::default()
        };
        assert!(matches!(
            ForecastService::with_config(inverted),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
