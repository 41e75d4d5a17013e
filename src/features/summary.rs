//! Descriptive statistics for a city's series.

use serde::Serialize;

use super::trend::TrendModel;
use crate::core::Series;
use crate::error::{ClimateError, Result};
use crate::utils::stats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub city: String,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub mean_temperature: f64,
    /// Degrees per day; `None` when no trend could be fitted.
    pub trend_slope: Option<f64>,
}

/// Summarise a non-empty series.
pub fn summarize(series: &Series, trend: Option<&TrendModel>) -> Result<SummaryStats> {
    let temperatures = series.temperatures();
    let insufficient = || ClimateError::InsufficientData { needed: 1, got: 0 };

    Ok(SummaryStats {
        city: series.city().to_string(),
        min_temperature: stats::min(&temperatures).ok_or_else(insufficient)?,
        max_temperature: stats::max(&temperatures).ok_or_else(insufficient)?,
        mean_temperature: stats::mean(&temperatures).ok_or_else(insufficient)?,
        trend_slope: trend.map(|t| t.slope),
    })
}
