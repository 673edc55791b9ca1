//! Forecast result structure for holding predictions.

/// Point predictions for consecutive future months.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    point: Vec<f64>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { point: values }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Get the point predictions.
    pub fn values(&self) -> &[f64] {
        &self.point
    }

    /// Consume the forecast, returning the point predictions.
    pub fn into_values(self) -> Vec<f64> {
        self.point
    }

    /// True if every prediction is a finite number.
    pub fn is_finite(&self) -> bool {
        self.point.iter().all(|v| v.is_finite())
    }

    /// Replace negative predictions with zero.
    pub fn clamp_non_negative(mut self) -> Self {
        for v in self.point.iter_mut() {
            *v = v.max(0.0);
        }
        self
    }
}
