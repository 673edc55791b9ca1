//! Demand outlook: trend direction and inventory recommendation.
//!
//! Compares the average of the forecast with the average of the history and
//! sorts the relative change into bands. A narrow band decides the trend
//! label; a wider band decides whether to recommend changing stock levels.

use crate::error::{ForecastError, Result};
use crate::features::trend::mean_change_percent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of expected demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Percentage bands used to classify change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    /// Changes within `±stable_band` percent are reported as stable.
    pub stable_band: f64,
    /// Changes beyond `±recommendation_band` percent call for adjusting stock.
    pub recommendation_band: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            stable_band: 5.0,
            recommendation_band: 15.0,
        }
    }
}

impl TrendThresholds {
    /// Check that both bands are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.stable_band.is_finite() || self.stable_band < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "stable band must be a non-negative percentage, got {}",
                self.stable_band
            )));
        }
        if !self.recommendation_band.is_finite() || self.recommendation_band < self.stable_band {
            return Err(ForecastError::InvalidParameter(format!(
                "recommendation band ({}) must be at least the stable band ({})",
                self.recommendation_band, self.stable_band
            )));
        }
        Ok(())
    }

    fn direction(&self, change: f64) -> TrendDirection {
        if change > self.stable_band {
            TrendDirection::Increasing
        } else if change < -self.stable_band {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    fn recommendation(&self, change: f64) -> Recommendation {
        if change > self.recommendation_band {
            Recommendation::IncreaseInventory { percent: change }
        } else if change < -self.recommendation_band {
            Recommendation::ReduceInventory
        } else {
            Recommendation::MaintainInventory
        }
    }
}

/// Inventory guidance derived from the expected change in demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Recommendation {
    IncreaseInventory { percent: f64 },
    ReduceInventory,
    MaintainInventory,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::IncreaseInventory { percent } => write!(
                f,
                "Consider increasing inventory levels by {:.0}%. \
                 Review supply chain capacity to meet growing demand.",
                percent
            ),
            Recommendation::ReduceInventory => f.write_str(
                "Consider reducing inventory levels. \
                 Review pricing strategy and marketing efforts to stimulate demand.",
            ),
            Recommendation::MaintainInventory => f.write_str(
                "Maintain current inventory levels. \
                 Continue monitoring market conditions for changes.",
            ),
        }
    }
}

/// Trend classification of a forecast relative to its history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub direction: TrendDirection,
    /// Change of the forecast mean relative to the historical mean, in percent.
    pub change_percent: f64,
    pub recommendation: Recommendation,
    /// The history averaged to zero, so no change could be measured.
    pub degenerate: bool,
}

impl TrendAnalysis {
    /// Neutral analysis used when the history cannot serve as a baseline.
    pub fn neutral() -> Self {
        Self {
            direction: TrendDirection::Stable,
            change_percent: 0.0,
            recommendation: Recommendation::MaintainInventory,
            degenerate: true,
        }
    }

    /// Human-readable trend label, e.g. `Increasing trend detected (+12.3%)`.
    pub fn label(&self) -> String {
        match self.direction {
            TrendDirection::Increasing => {
                format!("Increasing trend detected (+{:.1}%)", self.change_percent)
            }
            TrendDirection::Decreasing => {
                format!("Decreasing trend detected ({:.1}%)", self.change_percent)
            }
            TrendDirection::Stable => {
                format!("Stable trend (±{:.1}%)", self.change_percent.abs())
            }
        }
    }
}

/// Classify the change from `historical` to `forecast`.
///
/// A history with zero mean yields [`TrendAnalysis::neutral`] instead of an error.
pub fn analyze_trend(
    historical: &[f64],
    forecast: &[f64],
    thresholds: &TrendThresholds,
) -> TrendAnalysis {
    match mean_change_percent(historical, forecast) {
        Ok(change) => TrendAnalysis {
            direction: thresholds.direction(change),
            change_percent: change,
            recommendation: thresholds.recommendation(change),
            degenerate: false,
        },
        Err(err) => {
            tracing::debug!(error = %err, "trend analysis fell back to a neutral outlook");
            TrendAnalysis::neutral()
        }
    }
}
