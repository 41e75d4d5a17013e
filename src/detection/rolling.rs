//! Rolling-window anomaly flagging.
//!
//! A point is anomalous when it sits more than `sigma` rolling standard
//! deviations away from the rolling mean of the trailing window that ends
//! at it. Points without a full window are never anomalous.

use serde::Serialize;

use crate::core::{Series, SeriesPoint};
use crate::error::{ClimateError, Result};
use crate::transform::{rolling_mean, rolling_std};

/// Default trailing window length, in observations.
pub const DEFAULT_WINDOW: usize = 30;
/// Default anomaly threshold, in standard deviations.
pub const DEFAULT_SIGMA: f64 = 2.0;

/// Configuration for rolling statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingConfig {
    /// Trailing window length; must be at least 2.
    pub window: usize,
    /// Threshold multiplier applied to the rolling standard deviation.
    pub sigma: f64,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl RollingConfig {
    /// Use the given window with the default 2-sigma threshold.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.window < 2 {
            return Err(ClimateError::InvalidParameter(format!(
                "window must be at least 2, got {}",
                self.window
            )));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(ClimateError::InvalidParameter(format!(
                "sigma must be a non-negative finite number, got {}",
                self.sigma
            )));
        }
        Ok(())
    }
}

/// A series point annotated with its trailing-window statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingRecord {
    pub point: SeriesPoint,
    /// `None` until the window is full.
    pub rolling_mean: Option<f64>,
    /// `None` until the window is full.
    pub rolling_std: Option<f64>,
    pub is_anomaly: bool,
}

/// Annotate every point of a series with rolling statistics.
///
/// A series shorter than the window is valid and yields records with no
/// statistics. A zero rolling standard deviation still flags any point
/// that differs from the rolling mean.
pub fn compute_rolling(series: &Series, config: &RollingConfig) -> Result<Vec<RollingRecord>> {
    config.validate()?;
    if series.is_empty() {
        return Err(ClimateError::InsufficientData { needed: 1, got: 0 });
    }

    let temperatures = series.temperatures();
    let means = rolling_mean(&temperatures, config.window);
    let stds = rolling_std(&temperatures, config.window);

    let records = series
        .points()
        .iter()
        .zip(means)
        .zip(stds)
        .map(|((point, rolling_mean), rolling_std)| {
            let is_anomaly = match (rolling_mean, rolling_std) {
                (Some(mean), Some(std)) => (point.temperature - mean).abs() > config.sigma * std,
                _ => false,
            };
            RollingRecord {
                point: point.clone(),
                rolling_mean,
                rolling_std,
                is_anomaly,
            }
        })
        .collect();

    Ok(records)
}

/// The anomalous records, in their original order.
pub fn anomalies(records: &[RollingRecord]) -> Vec<RollingRecord> {
    records.iter().filter(|r| r.is_anomaly).cloned().collect()
}
