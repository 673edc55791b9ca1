//! Baseline forecasting models built on historical averages.

mod sma;

pub use sma::{MovingAverage, SimpleAverage, DEFAULT_WINDOW};
