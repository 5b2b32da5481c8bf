//! Observation types and series validation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data loading and validation errors
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying file I/O failure
    #[error("failed to read prices file: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV structure
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Row with an unparseable date
    #[error("line {line}: unrecognized date {value:?}")]
    InvalidDate { line: u64, value: String },
    /// Row with an unparseable price
    #[error("line {line}: unrecognized price {value:?}")]
    InvalidPrice { line: u64, value: String },
    /// Row with fewer than two columns
    #[error("line {line}: expected date and price columns")]
    MissingColumns { line: u64 },
    /// No observation rows in the file
    #[error("prices file contains no observations")]
    Empty,
    /// Two observations share a date
    #[error("duplicate observation date {0}")]
    DuplicateDate(NaiveDate),
    /// Dates are not strictly increasing
    #[error("observation date {0} is out of order")]
    OutOfOrder(NaiveDate),
}

/// A single historical price observation
///
/// Price unit is currency per unit volume (e.g. USD per MMBtu).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Settlement date
    pub date: NaiveDate,
    /// Observed purchase price
    pub price: Decimal,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// Day offset of `date` from the series origin
///
/// Negative for dates before the origin, which is valid for queries
/// but never occurs inside a validated series.
pub fn elapsed_days(origin: NaiveDate, date: NaiveDate) -> i64 {
    (date - origin).num_days()
}

/// Check the series invariant: non-empty, strictly increasing dates
pub fn validate_series(observations: &[Observation]) -> Result<(), DataError> {
    if observations.is_empty() {
        return Err(DataError::Empty);
    }
    for pair in observations.windows(2) {
        if pair[1].date == pair[0].date {
            return Err(DataError::DuplicateDate(pair[1].date));
        }
        if pair[1].date < pair[0].date {
            return Err(DataError::OutOfOrder(pair[1].date));
        }
    }
    Ok(())
}
