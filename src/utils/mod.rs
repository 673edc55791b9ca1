//! Utility functions for forecast evaluation.

pub mod metrics;
pub mod stats;

pub use metrics::{accuracy, score_accuracy, AccuracyScore};
pub use stats::mean;
