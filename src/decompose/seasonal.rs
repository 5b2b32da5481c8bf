//! Seasonal adjustment computation
//!
//! Residuals against the fitted trend, grouped by calendar month across
//! all years and averaged

use super::types::{MonthlyAdjustments, TrendModel};
use crate::data::{elapsed_days, Observation};
use chrono::Datelike;

/// Compute mean residual adjustments per calendar month
///
/// The residual of each observation is its price minus the trend value
/// at its elapsed-day offset. Months with no observations get no entry.
pub fn seasonal_adjustments(
    observations: &[Observation],
    trend: &TrendModel,
) -> MonthlyAdjustments {
    let origin = match observations.first() {
        Some(first) => first.date,
        None => return MonthlyAdjustments::new([None; 12]),
    };

    let mut sums = [0.0_f64; 12];
    let mut counts = [0_u32; 12];
    for obs in observations {
        let x = elapsed_days(origin, obs.date) as f64;
        let price: f64 = obs.price.try_into().unwrap_or(0.0);
        let slot = obs.date.month() as usize - 1;
        sums[slot] += price - trend.evaluate(x);
        counts[slot] += 1;
    }

    let mut table = [None; 12];
    for slot in 0..12 {
        if counts[slot] > 0 {
            table[slot] = Some(sums[slot] / counts[slot] as f64);
        }
    }
    MonthlyAdjustments::new(table)
}
