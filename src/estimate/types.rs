//! Estimation types

use crate::decompose::DecomposeError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Estimation errors
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Query issued before the model was built
    #[error("price model has not been built")]
    ModelNotBuilt,
    /// Forecast horizon of zero months
    #[error("months_ahead must be at least 1")]
    InvalidMonthsAhead,
    /// Forecast dates past the supported calendar range
    #[error("forecast dates exceed the supported calendar range")]
    DateOutOfRange,
    /// Model build failed during decomposition
    #[error(transparent)]
    Decompose(#[from] DecomposeError),
}

/// A single extrapolated price at a future month start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Month-start date of the estimate
    pub date: NaiveDate,
    /// Estimated purchase price
    pub price: Decimal,
}
