//! Core data structures for monthly sales forecasting.

mod forecast;
mod time_series;

pub use forecast::Forecast;
pub use time_series::{month_after, TimeSeries, MAX_HORIZON, MONTHS_PER_YEAR};
