//! Features derived from a sales history and its forecast.

pub mod outlook;
pub mod trend;

pub use outlook::{analyze_trend, Recommendation, TrendAnalysis, TrendDirection, TrendThresholds};
pub use trend::{linear_trend, mean_change_percent, LinearTrendResult};
