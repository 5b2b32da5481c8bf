//! Trend regression
//!
//! Ordinary least squares fit of a degree-3 polynomial in elapsed days,
//! solved through the normal equations with partial pivoting

use super::types::{DecomposeError, TrendModel, MIN_DISTINCT_DATES, TREND_DEGREE};
use crate::data::{elapsed_days, Observation};

const COEFFICIENTS: usize = TREND_DEGREE + 1;

/// Fit the polynomial trend over an ascending observation series
///
/// The series origin is the first observation date. Requires at least
/// four distinct dates; a pure function of its input.
pub fn fit_trend(observations: &[Observation]) -> Result<TrendModel, DecomposeError> {
    let origin = match observations.first() {
        Some(first) => first.date,
        None => return Err(DecomposeError::InsufficientData(0)),
    };

    let mut days: Vec<i64> = observations
        .iter()
        .map(|obs| elapsed_days(origin, obs.date))
        .collect();
    days.sort_unstable();
    days.dedup();
    if days.len() < MIN_DISTINCT_DATES {
        return Err(DecomposeError::InsufficientData(days.len()));
    }

    // Scale the abscissa into roughly [0, 1]; raw day offsets reach the
    // thousands and their sixth powers would swamp the normal equations.
    let scale = days
        .iter()
        .map(|d| (*d as f64).abs())
        .fold(1.0, f64::max);

    let mut sums = [0.0_f64; 2 * TREND_DEGREE + 1];
    let mut rhs = [0.0_f64; COEFFICIENTS];
    for obs in observations {
        let x = elapsed_days(origin, obs.date) as f64 / scale;
        let y: f64 = obs.price.try_into().unwrap_or(0.0);

        let mut power = 1.0;
        for (k, sum) in sums.iter_mut().enumerate() {
            *sum += power;
            if k < COEFFICIENTS {
                rhs[k] += y * power;
            }
            power *= x;
        }
    }

    let mut matrix = [[0.0_f64; COEFFICIENTS]; COEFFICIENTS];
    for (j, row) in matrix.iter_mut().enumerate() {
        for (k, cell) in row.iter_mut().enumerate() {
            *cell = sums[j + k];
        }
    }

    let coefficients = solve(matrix, rhs).ok_or(DecomposeError::SingularSystem)?;
    Ok(TrendModel::new(coefficients, scale))
}

/// Gaussian elimination with partial pivoting on the 4x4 system
fn solve(
    mut a: [[f64; COEFFICIENTS]; COEFFICIENTS],
    mut b: [f64; COEFFICIENTS],
) -> Option<[f64; COEFFICIENTS]> {
    for col in 0..COEFFICIENTS {
        let pivot_row = (col..COEFFICIENTS)
            .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))?;
        if a[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in (col + 1)..COEFFICIENTS {
            let factor = a[row][col] / a[col][col];
            for k in col..COEFFICIENTS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = [0.0_f64; COEFFICIENTS];
    for row in (0..COEFFICIENTS).rev() {
        let tail: f64 = ((row + 1)..COEFFICIENTS)
            .map(|k| a[row][k] * solution[k])
            .sum();
        solution[row] = (b[row] - tail) / a[row][row];
    }
    Some(solution)
}
