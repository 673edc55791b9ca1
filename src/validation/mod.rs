//! Input validation for sales history.
//!
//! # Example
//!
//! ```
//! use sales_forecast::core::TimeSeries;
//! use sales_forecast::validation::{coverage, validate_series};
//!
//! let mut values = vec![25.0; 12];
//! values[2] = 0.0;
//! let series = TimeSeries::monthly(values).unwrap();
//!
//! assert_eq!(coverage(&series).months_present, 11);
//! assert!(validate_series(&series).is_err());
//! ```

pub mod coverage;

pub use coverage::{coverage, validate_series, Coverage};
