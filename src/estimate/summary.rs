//! Summary statistics over the observed series
//!
//! Mean, dispersion, annualized volatility from month-over-month
//! returns, and the seasonal high/low months from the adjustment table

use crate::data::Observation;
use crate::decompose::MonthlyAdjustments;
use rust_decimal::Decimal;
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Seasonal extreme: a calendar month and its adjustment value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonalExtreme {
    /// Calendar month, 1-12
    pub month: u32,
    /// Mean residual adjustment for that month
    pub adjustment: Decimal,
}

impl SeasonalExtreme {
    /// English month name for display
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

/// Read-only statistics snapshot, recomputed on demand
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStatistics {
    /// Number of observations in the series
    pub observation_count: usize,
    /// Arithmetic mean of observed prices
    pub mean_price: Decimal,
    /// Sample standard deviation of observed prices
    pub std_dev: Decimal,
    /// Std dev of month-over-month percentage changes, scaled by sqrt(12)
    pub annualized_volatility: Decimal,
    /// Month with the largest seasonal adjustment
    pub high_season: Option<SeasonalExtreme>,
    /// Month with the smallest seasonal adjustment
    pub low_season: Option<SeasonalExtreme>,
}

/// Compute summary statistics from observations and adjustments
///
/// Pure read; nothing is cached across calls.
pub fn summary_statistics(
    observations: &[Observation],
    adjustments: &MonthlyAdjustments,
) -> SummaryStatistics {
    let prices: Vec<f64> = observations
        .iter()
        .map(|obs| obs.price.try_into().unwrap_or(0.0))
        .collect();

    let mean = if prices.is_empty() {
        0.0
    } else {
        prices.iter().sum::<f64>() / prices.len() as f64
    };
    let std_dev = sample_std_dev(&prices, mean);

    // Month-over-month simple returns; non-positive prices are skipped
    let mut returns = Vec::with_capacity(prices.len().saturating_sub(1));
    for pair in prices.windows(2) {
        if pair[0] > 0.0 {
            returns.push((pair[1] - pair[0]) / pair[0]);
        }
    }
    let returns_mean = if returns.is_empty() {
        0.0
    } else {
        returns.iter().sum::<f64>() / returns.len() as f64
    };
    let annualized_volatility = sample_std_dev(&returns, returns_mean) * 12.0_f64.sqrt();

    let extreme = |entry: Option<(u32, f64)>| {
        entry.map(|(month, value)| SeasonalExtreme {
            month,
            adjustment: Decimal::try_from(value).unwrap_or(Decimal::ZERO),
        })
    };

    SummaryStatistics {
        observation_count: observations.len(),
        mean_price: Decimal::try_from(mean).unwrap_or(Decimal::ZERO),
        std_dev: Decimal::try_from(std_dev).unwrap_or(Decimal::ZERO),
        annualized_volatility: Decimal::try_from(annualized_volatility)
            .unwrap_or(Decimal::ZERO),
        high_season: extreme(adjustments.high_month()),
        low_season: extreme(adjustments.low_month()),
    }
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

impl SummaryStatistics {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let season = |extreme: &Option<SeasonalExtreme>| match extreme {
            Some(e) => format!("{} ({:+.3})", e.month_name(), e.adjustment),
            None => "n/a".to_string(),
        };

        format!(
            r#"
══════════════════════════════════════════════════════
              GAS PRICE SUMMARY
══════════════════════════════════════════════════════

OBSERVED PRICES
───────────────────────────────────────────────────────
Observations:     {}
Mean Price:       {:.4}
Std Dev:          {:.4}
Annualized Vol:   {:.2}%

SEASONAL PATTERN
───────────────────────────────────────────────────────
High Season:      {}
Low Season:       {}
══════════════════════════════════════════════════════
"#,
            self.observation_count,
            self.mean_price,
            self.std_dev,
            self.annualized_volatility * Decimal::from(100),
            season(&self.high_season),
            season(&self.low_season),
        )
    }
}
