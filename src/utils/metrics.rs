//! Accuracy metrics for forecast evaluation.
//!
//! Accuracy is reported as `100 - MAPE`, clamped to `[0, 100]`. Points whose
//! actual value is zero are left out of the average rather than counted as
//! zero error, and a comparison with no usable points has no accuracy at all.

use crate::error::{ForecastError, Result};
use serde::Serialize;

/// Outcome of scoring a forecast against known actuals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyScore {
    /// Mean Absolute Percentage Error over the scored points.
    pub mape: f64,
    /// `100 - mape`, clamped to `[0, 100]`.
    pub accuracy: f64,
    /// Points with a non-zero actual value.
    pub scored_points: usize,
    /// Points skipped because the actual value was zero.
    pub skipped_points: usize,
}

/// Score predicted values against actual values.
///
/// # Returns
/// `Ok(None)` when every actual value is zero, since no percentage error can
/// be formed.
///
/// # Errors
/// `LengthMismatch` when the slices differ in length or either is empty.
pub fn score_accuracy(actual: &[f64], predicted: &[f64]) -> Result<Option<AccuracyScore>> {
    if actual.is_empty() || predicted.is_empty() || actual.len() != predicted.len() {
        return Err(ForecastError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }

    let mut sum_ape = 0.0;
    let mut scored_points = 0;

    for (a, p) in actual.iter().zip(predicted.iter()) {
        if *a != 0.0 {
            sum_ape += ((a - p) / a).abs() * 100.0;
            scored_points += 1;
        }
    }

    if scored_points == 0 {
        return Ok(None);
    }

    let mape = sum_ape / scored_points as f64;

    Ok(Some(AccuracyScore {
        mape,
        accuracy: (100.0 - mape).clamp(0.0, 100.0),
        scored_points,
        skipped_points: actual.len() - scored_points,
    }))
}

/// Accuracy percentage only; see [`score_accuracy`].
pub fn accuracy(actual: &[f64], predicted: &[f64]) -> Result<Option<f64>> {
    Ok(score_accuracy(actual, predicted)?.map(|score| score.accuracy))
}
