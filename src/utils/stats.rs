//! Statistical utility functions.

/// Calculate the mean of a slice.
///
/// Returns NaN for an empty slice; callers that need a defined value must
/// check for emptiness first.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
