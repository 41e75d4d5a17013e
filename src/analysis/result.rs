//! Per-city analysis bundle.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::{Season, Series};
use crate::detection::{classify_live_reading, current_season, LiveStatus, RollingRecord};
use crate::error::{ClimateError, Result};
use crate::features::{SummaryStats, TrendModel};
use crate::seasonality::SeasonProfile;

/// Everything computed for one city.
///
/// Built once by [`analyze_city`](super::analyze_city) and not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub(super) series: Series,
    pub(super) summary: SummaryStats,
    pub(super) season_profiles: BTreeMap<Season, SeasonProfile>,
    pub(super) rolling_records: Vec<RollingRecord>,
    pub(super) anomalies: Vec<RollingRecord>,
    pub(super) trend: Result<TrendModel>,
}

impl AnalysisResult {
    pub fn city(&self) -> &str {
        self.series.city()
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn season_profiles(&self) -> &BTreeMap<Season, SeasonProfile> {
        &self.season_profiles
    }

    pub fn season_profile(&self, season: Season) -> Option<&SeasonProfile> {
        self.season_profiles.get(&season)
    }

    pub fn rolling_records(&self) -> &[RollingRecord] {
        &self.rolling_records
    }

    /// Anomalous rolling records in series order.
    pub fn anomalies(&self) -> &[RollingRecord] {
        &self.anomalies
    }

    /// The fitted trend, or why it could not be fitted.
    pub fn trend(&self) -> std::result::Result<&TrendModel, &ClimateError> {
        self.trend.as_ref()
    }

    /// Fitted trend value at every observation, if a trend exists.
    pub fn trend_line(&self) -> Option<Vec<f64>> {
        self.trend
            .as_ref()
            .ok()
            .map(|model| model.fitted(&self.series.elapsed_days()))
    }

    /// Classify a live reading against the profile of `today`'s season.
    pub fn classify_live(&self, reading: Option<f64>, today: NaiveDate) -> LiveStatus {
        classify_live_reading(reading, current_season(today), &self.season_profiles)
    }
}
