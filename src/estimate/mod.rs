//! Price estimation module
//!
//! Builds the immutable price model (trend + monthly adjustments) and
//! answers date queries, forward extrapolation, and summary statistics

mod estimator;
mod model;
mod summary;
mod types;

pub use estimator::PriceEstimator;
pub use model::{Forecast, PriceModel};
pub use summary::{summary_statistics, SeasonalExtreme, SummaryStatistics};
pub use types::{EstimateError, ForecastPoint};
