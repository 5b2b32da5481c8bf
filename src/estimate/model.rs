//! Immutable price model
//!
//! Bundle of fitted trend and monthly adjustments, built once and
//! queried as a plain value

use super::types::{EstimateError, ForecastPoint};
use crate::data::{elapsed_days, Observation};
use crate::decompose::{
    fit_trend, seasonal_adjustments, DecomposeError, MonthlyAdjustments, TrendModel,
};
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

/// Fitted price model for a single observation series
///
/// Immutable after build; every query is a pure function of the model
/// and the query date, so a built model is safe to share across
/// read-only callers.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceModel {
    origin: NaiveDate,
    last_observed: NaiveDate,
    trend: TrendModel,
    adjustments: MonthlyAdjustments,
}

impl PriceModel {
    /// Fit trend and seasonal adjustments over an ascending series
    pub fn build(observations: &[Observation]) -> Result<Self, DecomposeError> {
        let trend = fit_trend(observations)?;
        let adjustments = seasonal_adjustments(observations, &trend);

        // fit_trend rejects series shorter than four observations
        let origin = observations[0].date;
        let last_observed = observations[observations.len() - 1].date;
        tracing::debug!(
            %origin,
            %last_observed,
            coefficients = ?trend.coefficients(),
            "price model built"
        );

        Ok(Self {
            origin,
            last_observed,
            trend,
            adjustments,
        })
    }

    /// Estimate the purchase price at an arbitrary calendar date
    ///
    /// Trend value at the date's elapsed-day offset plus the seasonal
    /// adjustment of its calendar month. The same formula covers
    /// historical interpolation and extrapolation in both directions;
    /// accuracy outside the observed range is uncontrolled.
    pub fn estimate(&self, date: NaiveDate) -> Decimal {
        let days = elapsed_days(self.origin, date) as f64;
        let value = self.trend.evaluate(days) + self.adjustments.adjustment(date.month());
        // Stays far inside Decimal range for any representable date
        Decimal::try_from(value).unwrap_or(Decimal::ZERO)
    }

    /// Lazily estimate prices for successive month starts after the
    /// last observation
    ///
    /// Yields exactly `months_ahead` points; the iterator is `Clone`
    /// and restarts from its creation state.
    pub fn extrapolate(&self, months_ahead: u32) -> Result<Forecast<'_>, EstimateError> {
        if months_ahead == 0 {
            return Err(EstimateError::InvalidMonthsAhead);
        }
        let start = NaiveDate::from_ymd_opt(
            self.last_observed.year(),
            self.last_observed.month(),
            1,
        )
        .and_then(|month_start| month_start.checked_add_months(Months::new(1)))
        .ok_or(EstimateError::DateOutOfRange)?;

        Ok(Forecast {
            model: self,
            next_date: Some(start),
            remaining: months_ahead,
        })
    }

    /// Earliest observation date (the elapsed-days origin)
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    /// Latest observation date
    pub fn last_observed(&self) -> NaiveDate {
        self.last_observed
    }

    /// Fitted trend, exposed read-only for downstream rendering
    pub fn trend(&self) -> &TrendModel {
        &self.trend
    }

    /// Monthly adjustment table, exposed read-only
    pub fn adjustments(&self) -> &MonthlyAdjustments {
        &self.adjustments
    }
}

/// Lazy forecast over successive month starts
#[derive(Debug, Clone)]
pub struct Forecast<'a> {
    model: &'a PriceModel,
    next_date: Option<NaiveDate>,
    remaining: u32,
}

impl Iterator for Forecast<'_> {
    type Item = ForecastPoint;

    fn next(&mut self) -> Option<ForecastPoint> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.next_date?;
        self.remaining -= 1;
        self.next_date = date.checked_add_months(Months::new(1));
        Some(ForecastPoint {
            date,
            price: self.model.estimate(date),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
