//! Per-season aggregation of temperatures and rolling means.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::Season;
use crate::detection::RollingRecord;
use crate::utils::stats::{mean, std_dev};

/// Aggregate statistics for one season of one city.
///
/// A statistic is `None` when the season has too few values for it: the
/// standard deviations need two values, and the rolling aggregates only
/// count records whose rolling mean is defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonProfile {
    pub season: Season,
    pub mean_temperature: Option<f64>,
    pub std_temperature: Option<f64>,
    pub mean_rolling_temperature: Option<f64>,
    pub std_rolling_temperature: Option<f64>,
    /// Number of observations in the season.
    pub count: usize,
}

impl SeasonProfile {
    fn from_group(season: Season, temperatures: &[f64], rolling_means: &[f64]) -> Self {
        Self {
            season,
            mean_temperature: mean(temperatures),
            std_temperature: std_dev(temperatures),
            mean_rolling_temperature: mean(rolling_means),
            std_rolling_temperature: std_dev(rolling_means),
            count: temperatures.len(),
        }
    }
}

/// Group records by their stored season label and aggregate each group.
///
/// Seasons absent from the records have no entry.
pub fn build_season_profiles(records: &[RollingRecord]) -> BTreeMap<Season, SeasonProfile> {
    let mut groups: BTreeMap<Season, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for record in records {
        let (temperatures, rolling_means) = groups.entry(record.point.season).or_default();
        temperatures.push(record.point.temperature);
        if let Some(rm) = record.rolling_mean {
            rolling_means.push(rm);
        }
    }

    groups
        .into_iter()
        .map(|(season, (temperatures, rolling_means))| {
            (
                season,
                SeasonProfile::from_group(season, &temperatures, &rolling_means),
            )
        })
        .collect()
}
