//! Seasonal decomposition module
//!
//! Splits the observation series into a polynomial trend over elapsed
//! days and mean monthly residual adjustments

mod regression;
mod seasonal;
mod types;

pub use regression::fit_trend;
pub use seasonal::seasonal_adjustments;
pub use types::{DecomposeError, MonthlyAdjustments, TrendModel, MIN_DISTINCT_DATES, TREND_DEGREE};
