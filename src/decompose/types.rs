//! Decomposition model types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Polynomial degree of the trend regression
///
/// Fixed design constant: flexible enough to bend with multi-year
/// drift, stiff enough not to chase ~48 monthly points.
pub const TREND_DEGREE: usize = 3;

/// Minimum number of distinct elapsed-day values for a well-posed fit
pub const MIN_DISTINCT_DATES: usize = TREND_DEGREE + 1;

/// Decomposition errors
#[derive(Debug, Error)]
pub enum DecomposeError {
    /// Too few distinct observation dates for a degree-3 fit
    #[error("need at least {MIN_DISTINCT_DATES} distinct observation dates, got {0}")]
    InsufficientData(usize),
    /// Normal equations could not be solved
    #[error("trend regression produced a singular system")]
    SingularSystem,
}

/// Fitted polynomial trend over elapsed days
///
/// Coefficients are stored in ascending powers of `elapsed_days / scale`.
/// The abscissa is scaled by the largest observed offset so the normal
/// equations stay well conditioned; `evaluate` undoes the scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    coefficients: [f64; TREND_DEGREE + 1],
    scale: f64,
}

impl TrendModel {
    pub(crate) fn new(coefficients: [f64; TREND_DEGREE + 1], scale: f64) -> Self {
        Self {
            coefficients,
            scale,
        }
    }

    /// Evaluate the trend at a day offset from the series origin
    ///
    /// Valid for any real offset, including offsets outside the fitted
    /// range; callers own the extrapolation risk.
    pub fn evaluate(&self, elapsed_days: f64) -> f64 {
        let x = elapsed_days / self.scale;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }

    /// Fitted coefficients in ascending powers of `elapsed_days / scale()`
    pub fn coefficients(&self) -> &[f64; TREND_DEGREE + 1] {
        &self.coefficients
    }

    /// Abscissa scale applied before evaluation
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// Mean residual adjustment per calendar month
///
/// Months that never occur in the history carry no entry; `adjustment`
/// falls back to zero for them, so queries in such months return the
/// bare trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAdjustments {
    table: [Option<f64>; 12],
}

impl MonthlyAdjustments {
    pub(crate) fn new(table: [Option<f64>; 12]) -> Self {
        Self { table }
    }

    /// Adjustment for a month (1-12), if any observation fell in it
    pub fn get(&self, month: u32) -> Option<f64> {
        self.table.get(month.checked_sub(1)? as usize).copied()?
    }

    /// Adjustment for a month (1-12) with the zero fallback applied
    pub fn adjustment(&self, month: u32) -> f64 {
        self.get(month).unwrap_or(0.0)
    }

    /// Months (1-12) with an entry, paired with their adjustment
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.map(|value| (index as u32 + 1, value)))
    }

    /// Month with the largest adjustment (ties favor the earlier month)
    pub fn high_month(&self) -> Option<(u32, f64)> {
        self.iter()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }

    /// Month with the smallest adjustment (ties favor the earlier month)
    pub fn low_month(&self) -> Option<(u32, f64)> {
        self.iter()
            .reduce(|best, next| if next.1 < best.1 { next } else { best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_evaluate_constant() {
        let trend = TrendModel::new([10.5, 0.0, 0.0, 0.0], 1.0);
        assert_eq!(trend.evaluate(0.0), 10.5);
        assert_eq!(trend.evaluate(365.0), 10.5);
        assert_eq!(trend.evaluate(-30.0), 10.5);
    }

    #[test]
    fn test_trend_evaluate_scaled_linear() {
        // 10 + 2x with x = days / 100
        let trend = TrendModel::new([10.0, 2.0, 0.0, 0.0], 100.0);
        assert!((trend.evaluate(50.0) - 11.0).abs() < 1e-12);
        assert!((trend.evaluate(200.0) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_evaluate_cubic() {
        let trend = TrendModel::new([1.0, 1.0, 1.0, 1.0], 1.0);
        // 1 + 2 + 4 + 8
        assert!((trend.evaluate(2.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_adjustments_lookup_and_fallback() {
        let mut table = [None; 12];
        table[0] = Some(1.25);
        table[6] = Some(-0.75);
        let adjustments = MonthlyAdjustments::new(table);

        assert_eq!(adjustments.get(1), Some(1.25));
        assert_eq!(adjustments.get(7), Some(-0.75));
        assert_eq!(adjustments.get(3), None);
        assert_eq!(adjustments.adjustment(3), 0.0);
        assert_eq!(adjustments.adjustment(7), -0.75);
        assert_eq!(adjustments.get(0), None);
        assert_eq!(adjustments.get(13), None);
    }

    #[test]
    fn test_adjustments_high_low() {
        let mut table = [None; 12];
        table[0] = Some(0.4);
        table[5] = Some(1.9);
        table[9] = Some(-2.3);
        let adjustments = MonthlyAdjustments::new(table);

        assert_eq!(adjustments.high_month(), Some((6, 1.9)));
        assert_eq!(adjustments.low_month(), Some((10, -2.3)));
    }

    #[test]
    fn test_adjustments_empty() {
        let adjustments = MonthlyAdjustments::new([None; 12]);
        assert_eq!(adjustments.high_month(), None);
        assert_eq!(adjustments.low_month(), None);
        assert_eq!(adjustments.iter().count(), 0);
    }
}
