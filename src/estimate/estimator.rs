//! Stateful estimator wrapper
//!
//! Owns the observation series and an optional built model; every
//! query delegates to the pure `PriceModel` operations

use super::model::{Forecast, PriceModel};
use super::summary::{summary_statistics, SummaryStatistics};
use super::types::EstimateError;
use crate::data::Observation;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Orchestrates model build and queries over one observation series
///
/// Starts unbuilt; queries before `build_model` fail with
/// `EstimateError::ModelNotBuilt`. Rebuilding recomputes and replaces
/// the stored model.
#[derive(Debug, Clone)]
pub struct PriceEstimator {
    observations: Vec<Observation>,
    model: Option<PriceModel>,
}

impl PriceEstimator {
    /// Create an estimator over a validated, ascending series
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            model: None,
        }
    }

    /// Fit trend and seasonal adjustments; idempotent
    pub fn build_model(&mut self) -> Result<&PriceModel, EstimateError> {
        let model = PriceModel::build(&self.observations)?;
        Ok(self.model.insert(model))
    }

    /// The built model, if any
    pub fn model(&self) -> Result<&PriceModel, EstimateError> {
        self.model.as_ref().ok_or(EstimateError::ModelNotBuilt)
    }

    /// Estimate the purchase price at a calendar date
    pub fn estimate_price(&self, date: NaiveDate) -> Result<Decimal, EstimateError> {
        Ok(self.model()?.estimate(date))
    }

    /// Lazy forecast of month-start prices after the last observation
    pub fn extrapolate_future_prices(
        &self,
        months_ahead: u32,
    ) -> Result<Forecast<'_>, EstimateError> {
        self.model()?.extrapolate(months_ahead)
    }

    /// Summary statistics over the observed series and adjustment table
    pub fn summary_statistics(&self) -> Result<SummaryStatistics, EstimateError> {
        let model = self.model()?;
        Ok(summary_statistics(&self.observations, model.adjustments()))
    }

    /// The underlying observation series
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}
