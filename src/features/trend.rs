//! Linear trend of temperature over elapsed time.

use serde::Serialize;

use crate::core::Series;
use crate::error::{ClimateError, Result};

/// Fitted line `y = slope * x + intercept`.
///
/// `x` is measured in days since the first observation, so `slope` is in
/// degrees per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Evaluate the line at `x` days.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Evaluate the line at each of `xs`.
    pub fn fitted(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}

/// Fit an ordinary least-squares line through a series.
///
/// Fails with `InsufficientData` for fewer than two points, and with
/// `ComputationError` when every point shares one timestamp.
pub fn fit_trend(series: &Series) -> Result<TrendModel> {
    fit_line(&series.elapsed_days(), &series.temperatures())
}

/// Closed-form least-squares line through `(x, y)` pairs.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<TrendModel> {
    if x.len() != y.len() {
        return Err(ClimateError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(ClimateError::InsufficientData { needed: 2, got: n });
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let (ss_xx, ss_xy) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - mean_x;
            (sxx + dx * dx, sxy + dx * (yi - mean_y))
        });

    if ss_xx == 0.0 {
        return Err(ClimateError::ComputationError(
            "trend undefined: all observations share one timestamp".to_string(),
        ));
    }

    let slope = ss_xy / ss_xx;
    Ok(TrendModel {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeriesPoint;
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};

    fn daily_series(values: &[f64]) -> Series {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &t)| SeriesPoint::new("Test", base + Duration::days(i as i64), t))
            .collect();
        Series::new("Test", points)
    }

    #[test]
    fn exact_on_linear_series() {
        let values: Vec<f64> = (0..50).map(|i| 2.0 * i as f64 + 5.0).collect();
        let model = fit_trend(&daily_series(&values)).unwrap();

        assert_relative_eq!(model.slope, 2.0, epsilon = 1e-9);
        assert_relative_eq!(model.intercept, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let model = fit_trend(&daily_series(&[7.0; 10])).unwrap();
        assert_relative_eq!(model.slope, 0.0, epsilon = 1e-12);
        assert_relative_eq!(model.intercept, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn uses_fractional_days() {
        // Half-day spacing: temperature rises 1 degree per observation, 2 per day.
        let x = [0.0, 0.5, 1.0, 1.5];
        let y = [0.0, 1.0, 2.0, 3.0];
        let model = fit_line(&x, &y).unwrap();
        assert_relative_eq!(model.slope, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn fitted_values_follow_model() {
        let model = TrendModel {
            slope: 0.5,
            intercept: -1.0,
        };
        assert_eq!(model.fitted(&[0.0, 2.0, 4.0]), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            fit_trend(&daily_series(&[1.0])),
            Err(ClimateError::InsufficientData { needed: 2, got: 1 })
        );
        assert_eq!(
            fit_trend(&daily_series(&[])),
            Err(ClimateError::InsufficientData { needed: 2, got: 0 })
        );
    }

    #[test]
    fn identical_timestamps_are_degenerate() {
        let result = fit_line(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(ClimateError::ComputationError(_))));
    }

    #[test]
    fn mismatched_lengths() {
        assert!(matches!(
            fit_line(&[1.0, 2.0], &[1.0]),
            Err(ClimateError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }
}
