//! End-to-end tests from CSV file to estimates

use chrono::{Datelike, Months, NaiveDate};
use gastrend::data::load_csv;
use gastrend::estimate::{PriceEstimator, PriceModel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Write four years of drifting, oscillating monthly prices to a CSV
fn write_history() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Dates,Prices").unwrap();

    let start = date(2020, 10, 31);
    for i in 0..48_u32 {
        let d = start.checked_add_months(Months::new(i)).unwrap();
        let swing = match d.month() {
            12 => dec!(1.40),
            1 | 11 => dec!(0.95),
            2 | 10 => dec!(0.40),
            3 | 9 => dec!(-0.25),
            4 | 8 => dec!(-0.70),
            5 | 7 => dec!(-1.05),
            _ => dec!(-1.31),
        };
        let price = dec!(11.15) + Decimal::from(i) * dec!(0.01) + swing;
        writeln!(file, "{},{}", d, price).unwrap();
    }
    file
}

#[test]
fn test_csv_to_estimate() {
    let file = write_history();
    let observations = load_csv(file.path()).unwrap();
    assert_eq!(observations.len(), 48);

    let mut estimator = PriceEstimator::new(observations);
    estimator.build_model().unwrap();

    // Mid-history estimate lands inside the observed price band
    let price = estimator.estimate_price(date(2022, 6, 15)).unwrap();
    assert!(price > dec!(9) && price < dec!(14));
}

#[test]
fn test_csv_to_forecast() {
    let file = write_history();
    let observations = load_csv(file.path()).unwrap();
    let mut estimator = PriceEstimator::new(observations);
    estimator.build_model().unwrap();

    let points: Vec<_> = estimator.extrapolate_future_prices(12).unwrap().collect();
    assert_eq!(points.len(), 12);

    // Last observation is 2024-09-30; forecast starts the next month
    assert_eq!(points[0].date, date(2024, 10, 1));
    for pair in points.windows(2) {
        assert!(pair[1].date > pair[0].date);
        assert_eq!(pair[1].date.day(), 1);
    }
    for point in &points {
        assert!(point.price > dec!(5) && point.price < dec!(20));
    }
}

#[test]
fn test_csv_to_summary() {
    let file = write_history();
    let observations = load_csv(file.path()).unwrap();
    let mut estimator = PriceEstimator::new(observations.clone());
    estimator.build_model().unwrap();

    let summary = estimator.summary_statistics().unwrap();
    let min = observations.iter().map(|o| o.price).min().unwrap();
    let max = observations.iter().map(|o| o.price).max().unwrap();

    assert_eq!(summary.observation_count, 48);
    assert!(summary.mean_price >= min && summary.mean_price <= max);
    assert!(summary.annualized_volatility > Decimal::ZERO);
    assert_eq!(summary.high_season.unwrap().month, 12);
    assert_eq!(summary.low_season.unwrap().month, 6);
}

#[test]
fn test_unseen_month_falls_back_to_bare_trend() {
    // History covering January through June only: estimates in December
    // apply the zero fallback, i.e. the bare trend value
    let observations: Vec<_> = (0..6_u32)
        .map(|i| {
            let d = date(2020, 1, 31).checked_add_months(Months::new(i)).unwrap();
            gastrend::data::Observation::new(d, dec!(10.0) + Decimal::from(i) * dec!(0.2))
        })
        .collect();

    let model = PriceModel::build(&observations).unwrap();
    assert_eq!(model.adjustments().get(12), None);

    let query = date(2020, 12, 15);
    let days = (query - model.origin()).num_days() as f64;
    let bare_trend = Decimal::try_from(model.trend().evaluate(days)).unwrap();
    assert_eq!(model.estimate(query), bare_trend);
}
