//! State machine and purity tests over the public estimator API

use chrono::{Months, NaiveDate};
use gastrend::data::Observation;
use gastrend::estimate::{EstimateError, PriceEstimator};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn history() -> Vec<Observation> {
    (0..48_u32)
        .map(|i| {
            let d = date(2020, 10, 1).checked_add_months(Months::new(i)).unwrap();
            let price = dec!(10.5) + Decimal::from(i) * dec!(0.015);
            Observation::new(d, price)
        })
        .collect()
}

#[test]
fn test_estimate_before_build_fails() {
    let estimator = PriceEstimator::new(history());
    assert!(matches!(
        estimator.estimate_price(date(2022, 1, 1)),
        Err(EstimateError::ModelNotBuilt)
    ));
}

#[test]
fn test_zero_and_absent_horizons_rejected() {
    let mut estimator = PriceEstimator::new(history());
    estimator.build_model().unwrap();
    assert!(matches!(
        estimator.extrapolate_future_prices(0),
        Err(EstimateError::InvalidMonthsAhead)
    ));
}

#[test]
fn test_estimate_is_repeatable() {
    let mut estimator = PriceEstimator::new(history());
    estimator.build_model().unwrap();

    let query = date(2023, 3, 9);
    let first = estimator.estimate_price(query).unwrap();
    let second = estimator.estimate_price(query).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rebuild_replaces_with_equal_model() {
    let mut estimator = PriceEstimator::new(history());
    let first = estimator.build_model().unwrap().clone();
    let second = estimator.build_model().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.trend().coefficients(), second.trend().coefficients());
}

#[test]
fn test_forecast_restarts_from_creation_state() {
    let mut estimator = PriceEstimator::new(history());
    estimator.build_model().unwrap();

    let forecast = estimator.extrapolate_future_prices(4).unwrap();
    let once: Vec<_> = forecast.clone().collect();
    let again: Vec<_> = forecast.collect();
    assert_eq!(once, again);
    assert_eq!(once.len(), 4);
}
