//! Trailing rolling window statistics.
//!
//! Index `i` covers `series[i + 1 - window ..= i]`. The first `window - 1`
//! positions have no full window and are `None`.

use crate::utils::stats;

/// Compute trailing rolling mean.
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_apply(series, window, stats::mean)
}

/// Compute trailing rolling sample standard deviation.
pub fn rolling_std(series: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_apply(series, window, stats::std_dev)
}

/// Compute trailing rolling sample variance.
pub fn rolling_var(series: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_apply(series, window, stats::variance)
}

/// Generic trailing window application.
fn rolling_apply<F>(series: &[f64], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    if window == 0 {
        return vec![None; series.len()];
    }

    (0..series.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                f(&series[i + 1 - window..=i])
            }
        })
        .collect()
}
