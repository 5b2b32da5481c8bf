//! CSV loading for monthly price observations
//!
//! Turns a two-column (date, price) file into a validated observation
//! series. Parsing stays in this module; the model layers never touch
//! files.

use super::{validate_series, DataError, Observation};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::path::Path;

/// Date formats accepted in the first column
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Load a validated observation series from a CSV file
///
/// The first row may be a header; it is skipped when it does not parse
/// as an observation. Dates must come out strictly increasing.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Observation>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut observations = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let (date_field, price_field) = match (record.get(0), record.get(1)) {
            (Some(d), Some(p)) => (d, p),
            _ => return Err(DataError::MissingColumns { line }),
        };

        let date = match parse_date(date_field) {
            Some(date) => date,
            // Tolerate a single header row at the top of the file
            None if index == 0 => continue,
            None => {
                return Err(DataError::InvalidDate {
                    line,
                    value: date_field.to_string(),
                })
            }
        };

        let price: Decimal = price_field.parse().map_err(|_| DataError::InvalidPrice {
            line,
            value: price_field.to_string(),
        })?;

        observations.push(Observation::new(date, price));
    }

    validate_series(&observations)?;
    tracing::debug!(
        count = observations.len(),
        first = %observations[0].date,
        last = %observations[observations.len() - 1].date,
        "loaded observation series"
    );
    Ok(observations)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
