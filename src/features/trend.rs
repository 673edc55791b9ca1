//! Trend-based features for monthly series.
//!
//! Provides the least-squares line through a series and the relative change
//! between two periods' averages.

use crate::error::{ForecastError, Result};
use crate::utils::stats::mean;

/// Result of linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrendResult {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
}

impl LinearTrendResult {
    /// Value of the fitted line at index `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Computes linear trend statistics for the series.
///
/// Fits `y = slope * x + intercept` where x is the index, using
/// `slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)` and `intercept = (Σy − slope·Σx) / n`.
pub fn linear_trend(series: &[f64]) -> Result<LinearTrendResult> {
    if series.len() < 2 {
        return Err(ForecastError::InsufficientData {
            needed: 2,
            got: series.len(),
        });
    }

    let n = series.len() as f64;

    // x values are indices 0, 1, 2, ...
    let sum_x: f64 = (0..series.len()).map(|i| i as f64).sum();
    let sum_y: f64 = series.iter().sum();
    let sum_xy: f64 = series.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..series.len()).map(|i| (i * i) as f64).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return Err(ForecastError::ComputationError(
            "least-squares denominator is zero".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_yy: f64 = series.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = series
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let y_pred = slope * i as f64 + intercept;
            (y - y_pred).powi(2)
        })
        .sum();

    let r_squared = if ss_yy.abs() < 1e-10 {
        1.0 // Perfect fit for constant y
    } else {
        1.0 - ss_res / ss_yy
    };

    Ok(LinearTrendResult {
        slope,
        intercept,
        r_squared,
    })
}

/// Percentage change from the mean of `historical` to the mean of `forecast`.
///
/// # Errors
/// `DegenerateSeries` when either slice is empty or the historical mean is zero.
pub fn mean_change_percent(historical: &[f64], forecast: &[f64]) -> Result<f64> {
    if historical.is_empty() || forecast.is_empty() {
        return Err(ForecastError::DegenerateSeries(
            "cannot compare empty periods".to_string(),
        ));
    }

    let base = mean(historical);
    if base == 0.0 {
        return Err(ForecastError::DegenerateSeries(
            "historical mean is zero".to_string(),
        ));
    }

    Ok((mean(forecast) - base) / base * 100.0)
}
