//! # sales-forecast
//!
//! Monthly unit-sales forecasting for inventory planning.
//!
//! Given twelve months of sales for one product, the engine forecasts the
//! coming months with one of four algorithms (Holt-Winters, moving average,
//! simple average, linear regression), scores the forecast against recent
//! history and turns the expected change in demand into a trend label and an
//! inventory recommendation.
//!
//! ```
//! use sales_forecast::prelude::*;
//!
//! let series = TimeSeries::monthly(vec![
//!     120.0, 135.0, 150.0, 160.0, 170.0, 200.0, 240.0, 230.0, 180.0, 160.0, 150.0, 170.0,
//! ])
//! .unwrap();
//!
//! let request = ForecastRequest::new(series).with_horizon(3);
//! let result = ForecastService::new().run(&request).unwrap();
//!
//! assert_eq!(result.forecast().len(), 3);
//! println!("{}", result.accuracy_label());
//! println!("{}", result.trend_label());
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod features;
pub mod models;
pub mod service;
pub mod utils;
pub mod validation;

pub use error::{ForecastError, Result};
pub use service::{ForecastConfig, ForecastRequest, ForecastResult, ForecastService};

pub mod prelude {
    pub use crate::core::{Forecast, TimeSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::features::{Recommendation, TrendAnalysis, TrendDirection, TrendThresholds};
    pub use crate::models::{Algorithm, Forecaster};
    pub use crate::service::{ForecastConfig, ForecastRequest, ForecastResult, ForecastService};
    pub use crate::utils::{accuracy, AccuracyScore};
    pub use crate::validation::validate_series;
}
