//! Monthly sales history for a single product.

use crate::error::{ForecastError, Result};
use chrono::Month;
use serde::Deserialize;

/// Number of observations in one year of monthly history.
pub const MONTHS_PER_YEAR: usize = 12;

/// Longest forecast, in months, that can be requested.
pub const MAX_HORIZON: usize = 120;

/// Month that lies `offset` positions after `start`, wrapping December to January.
pub fn month_after(start: Month, offset: usize) -> Month {
    (0..offset % MONTHS_PER_YEAR).fold(start, |month, _| month.succ())
}

/// Serialized form of a [`TimeSeries`].
#[derive(Debug, Clone, Deserialize)]
struct SeriesRecord {
    values: Vec<f64>,
    #[serde(default)]
    start_month: Option<Month>,
}

impl TryFrom<SeriesRecord> for TimeSeries {
    type Error = ForecastError;

    fn try_from(record: SeriesRecord) -> Result<Self> {
        let series = TimeSeries::monthly(record.values)?;
        Ok(match record.start_month {
            Some(month) => series.starting_at(month),
            None => series,
        })
    }
}

/// Twelve months of unit sales, oldest first.
///
/// A value of `0.0` means no sales were recorded for that month. Values are
/// validated on construction and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SeriesRecord")]
pub struct TimeSeries {
    values: Vec<f64>,
    start: Month,
}

impl TimeSeries {
    /// Create a January-first series from exactly twelve observations.
    pub fn monthly(values: Vec<f64>) -> Result<Self> {
        if values.len() != MONTHS_PER_YEAR {
            return Err(ForecastError::DimensionMismatch {
                expected: MONTHS_PER_YEAR,
                got: values.len(),
            });
        }

        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ForecastError::InvalidParameter(format!(
                "observation {} must be a finite non-negative number, got {}",
                index, value
            )));
        }

        Ok(Self {
            values,
            start: Month::January,
        })
    }

    /// Build a January-first series from per-month totals.
    ///
    /// Months that are not supplied are recorded as `0.0`.
    pub fn from_monthly_totals<I>(totals: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Month, f64)>,
    {
        let mut values = vec![0.0; MONTHS_PER_YEAR];
        let mut seen = [false; MONTHS_PER_YEAR];

        for (month, total) in totals {
            let idx = month.number_from_month() as usize - 1;
            if seen[idx] {
                return Err(ForecastError::InvalidParameter(format!(
                    "duplicate total for {}",
                    month.name()
                )));
            }
            seen[idx] = true;
            values[idx] = total;
        }

        Self::monthly(values)
    }

    /// Set the calendar month of the first observation.
    pub fn starting_at(mut self, month: Month) -> Self {
        self.start = month;
        self
    }

    /// Observations, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Calendar month of the first observation.
    pub fn start_month(&self) -> Month {
        self.start
    }

    /// Calendar month of the observation at `index`.
    pub fn month_at(&self, index: usize) -> Month {
        month_after(self.start, index)
    }

    /// Calendar month immediately after the last observation.
    pub fn next_month(&self) -> Month {
        month_after(self.start, self.values.len())
    }

    /// The most recent `n` observations (all of them if `n` exceeds the length).
    pub fn tail(&self, n: usize) -> &[f64] {
        &self.values[self.values.len().saturating_sub(n)..]
    }

    /// Mean of all observations.
    pub fn mean(&self) -> f64 {
        crate::utils::stats::mean(&self.values)
    }
}
