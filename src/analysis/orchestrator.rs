//! Per-city analysis and multi-city fan-out.

use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::config::AnalysisConfig;
use super::result::AnalysisResult;
use crate::core::{prepare_series, Dataset, CITY_COLUMN, REQUIRED_COLUMNS};
use crate::detection::{anomalies, compute_rolling, RollingConfig};
use crate::error::Result;
use crate::features::{fit_trend, summarize};
use crate::seasonality::build_season_profiles;

/// Outcome for each city, keyed by city name.
pub type CityResults = BTreeMap<String, Result<AnalysisResult>>;

/// Run the full pipeline for one city.
///
/// An empty series fails with `InsufficientData`. A series that is too short
/// for a trend still produces a result, with the trend error recorded in it.
pub fn analyze_city(dataset: &Dataset, city: &str, rolling: &RollingConfig) -> Result<AnalysisResult> {
    let series = prepare_series(dataset, city)?;
    let rolling_records = compute_rolling(&series, rolling)?;
    let anomalies = anomalies(&rolling_records);
    let season_profiles = build_season_profiles(&rolling_records);
    let trend = fit_trend(&series);
    let summary = summarize(&series, trend.as_ref().ok())?;

    debug!(
        city,
        points = series.len(),
        anomalies = anomalies.len(),
        seasons = season_profiles.len(),
        "analysed city"
    );

    Ok(AnalysisResult {
        series,
        summary,
        season_profiles,
        rolling_records,
        anomalies,
        trend,
    })
}

/// Analyse every requested city of a dataset.
///
/// Schema problems and invalid configuration abort the whole run before
/// any city is touched. After that, each city succeeds or fails on its
/// own.
pub fn analyze_dataset(dataset: &Dataset, config: &AnalysisConfig) -> Result<CityResults> {
    dataset.require_column(CITY_COLUMN)?;
    dataset.require_columns(&REQUIRED_COLUMNS)?;
    config.rolling.validate()?;

    let cities = match &config.cities {
        Some(cities) => cities.clone(),
        None => dataset.unique(CITY_COLUMN)?,
    };

    info!(
        cities = cities.len(),
        rows = dataset.len(),
        window = config.rolling.window,
        parallel = config.parallel,
        "starting analysis"
    );

    let run = |city: &String| {
        let outcome = analyze_city(dataset, city, &config.rolling);
        if let Err(err) = &outcome {
            warn!(city = %city, error = %err, "city analysis failed");
        }
        (city.clone(), outcome)
    };

    let results: CityResults = if config.parallel {
        cities.par_iter().map(run).collect::<Vec<_>>().into_iter().collect()
    } else {
        cities.iter().map(run).collect()
    };

    info!(
        succeeded = results.values().filter(|r| r.is_ok()).count(),
        failed = results.values().filter(|r| r.is_err()).count(),
        "analysis finished"
    );

    Ok(results)
}
