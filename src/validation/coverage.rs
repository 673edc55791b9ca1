//! Month coverage checks for sales history.
//!
//! A month with zero recorded units counts as missing. Forecasts are only
//! produced for a history in which every month has data.

use crate::core::{TimeSeries, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use chrono::Month;
use serde::Serialize;

/// Which months of a series carry sales data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Months with a value strictly greater than zero.
    pub months_present: usize,
    /// Calendar months with no recorded sales, in series order.
    pub missing: Vec<Month>,
}

impl Coverage {
    /// True when every month of the year has data.
    pub fn is_complete(&self) -> bool {
        self.months_present == MONTHS_PER_YEAR
    }
}

/// Count the months with data without rejecting anything.
pub fn coverage(series: &TimeSeries) -> Coverage {
    let missing: Vec<Month> = series
        .values()
        .iter()
        .enumerate()
        .filter(|(_, v)| **v <= 0.0)
        .map(|(i, _)| series.month_at(i))
        .collect();

    Coverage {
        months_present: series.len() - missing.len(),
        missing,
    }
}

/// Require a full year of sales data.
///
/// # Errors
/// `InsufficientData { needed: 12, got }` where `got` is the number of months
/// with data.
pub fn validate_series(series: &TimeSeries) -> Result<Coverage> {
    let report = coverage(series);

    if !report.is_complete() {
        return Err(ForecastError::InsufficientData {
            needed: MONTHS_PER_YEAR,
            got: report.months_present,
        });
    }

    Ok(report)
}
