//! Error types for the sales-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Fewer months with recorded sales than a forecast needs.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Series has the wrong number of observations.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Accuracy inputs are empty or of unequal length.
    #[error("length mismatch: {actual} actual values vs {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },

    /// History averages to zero, so relative change is undefined.
    #[error("degenerate series: {0}")]
    DegenerateSeries(String),

    /// Algorithm name could not be recognised.
    #[error("unknown forecasting algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl ForecastError {
    /// Number of months with recorded sales, if this is an insufficient-data rejection.
    pub fn months_present(&self) -> Option<usize> {
        match self {
            ForecastError::InsufficientData { got, .. } => Some(*got),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::InsufficientData { needed: 12, got: 8 };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 12, got 8"
        );

        let err = ForecastError::InvalidParameter("window must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid parameter: window must be positive"
        );

        let err = ForecastError::LengthMismatch {
            actual: 3,
            predicted: 2,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch: 3 actual values vs 2 predicted values"
        );

        let err = ForecastError::UnknownAlgorithm("ARIMA".to_string());
        assert_eq!(err.to_string(), "unknown forecasting algorithm: ARIMA");

        let err = ForecastError::FitRequired;
        assert_eq!(err.to_string(), "model must be fitted before prediction");
    }

    #[test]
    fn months_present_only_for_insufficient_data() {
        let err = ForecastError::InsufficientData { needed: 12, got: 11 };
        assert_eq!(err.months_present(), Some(11));
        assert_eq!(ForecastError::FitRequired.months_present(), None);
        assert_eq!(
            ForecastError::InvalidParameter("window 20 exceeds history length 12".to_string())
                .months_present(),
            None
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ForecastError::DegenerateSeries("zero mean".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
