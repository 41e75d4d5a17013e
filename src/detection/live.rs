//! Classification of a single live reading against the seasonal baseline.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::rolling::DEFAULT_SIGMA;
use crate::core::{season_of, Season};
use crate::seasonality::SeasonProfile;

/// Outcome of comparing a live reading with its season's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveStatus {
    /// Within `sigma` standard deviations of the seasonal mean.
    Normal,
    /// Further than `sigma` standard deviations from the seasonal mean.
    Anomalous,
    /// No reading, no profile for the season, or no seasonal spread.
    Unknown,
}

impl fmt::Display for LiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LiveStatus::Normal => "normal",
            LiveStatus::Anomalous => "anomalous",
            LiveStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Season for the given "today".
pub fn current_season(today: NaiveDate) -> Season {
    season_of(&today)
}

/// Classify a live reading with the default 2-sigma threshold.
pub fn classify_live_reading(
    reading: Option<f64>,
    season: Season,
    profiles: &BTreeMap<Season, SeasonProfile>,
) -> LiveStatus {
    classify_live_reading_with_sigma(reading, season, profiles, DEFAULT_SIGMA)
}

/// Classify a live reading against the profile for `season`.
pub fn classify_live_reading_with_sigma(
    reading: Option<f64>,
    season: Season,
    profiles: &BTreeMap<Season, SeasonProfile>,
    sigma: f64,
) -> LiveStatus {
    let Some(reading) = reading.filter(|r| r.is_finite()) else {
        return LiveStatus::Unknown;
    };
    let Some(profile) = profiles.get(&season) else {
        return LiveStatus::Unknown;
    };
    let (Some(mean), Some(std)) = (profile.mean_temperature, profile.std_temperature) else {
        return LiveStatus::Unknown;
    };

    if (reading - mean).abs() > sigma * std {
        LiveStatus::Anomalous
    } else {
        LiveStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles(season: Season, mean: f64, std: Option<f64>) -> BTreeMap<Season, SeasonProfile> {
        let profile = SeasonProfile {
            season,
            mean_temperature: Some(mean),
            std_temperature: std,
            mean_rolling_temperature: None,
            std_rolling_temperature: None,
            count: 10,
        };
        BTreeMap::from([(season, profile)])
    }

    #[test]
    fn normal_and_anomalous() {
        let p = profiles(Season::Summer, 20.0, Some(2.0));
        assert_eq!(
            classify_live_reading(Some(22.0), Season::Summer, &p),
            LiveStatus::Normal
        );
        assert_eq!(
            classify_live_reading(Some(30.0), Season::Summer, &p),
            LiveStatus::Anomalous
        );
        assert_eq!(
            classify_live_reading(Some(10.0), Season::Summer, &p),
            LiveStatus::Anomalous
        );
    }

    #[test]
    fn boundary_is_normal() {
        let p = profiles(Season::Winter, 0.0, Some(2.5));
        assert_eq!(
            classify_live_reading(Some(5.0), Season::Winter, &p),
            LiveStatus::Normal
        );
        assert_eq!(
            classify_live_reading(Some(-5.0), Season::Winter, &p),
            LiveStatus::Normal
        );
    }

    #[test]
    fn missing_season_is_unknown() {
        let p = profiles(Season::Summer, 20.0, Some(2.0));
        assert_eq!(
            classify_live_reading(Some(20.0), Season::Winter, &p),
            LiveStatus::Unknown
        );
    }

    #[test]
    fn undefined_std_is_unknown() {
        let p = profiles(Season::Spring, 12.0, None);
        assert_eq!(
            classify_live_reading(Some(12.0), Season::Spring, &p),
            LiveStatus::Unknown
        );
    }

    #[test]
    fn missing_reading_is_unknown() {
        let p = profiles(Season::Spring, 12.0, Some(1.0));
        assert_eq!(
            classify_live_reading(None, Season::Spring, &p),
            LiveStatus::Unknown
        );
        assert_eq!(
            classify_live_reading(Some(f64::NAN), Season::Spring, &p),
            LiveStatus::Unknown
        );
    }

    #[test]
    fn zero_std_flags_any_difference() {
        let p = profiles(Season::Autumn, 10.0, Some(0.0));
        assert_eq!(
            classify_live_reading(Some(10.0), Season::Autumn, &p),
            LiveStatus::Normal
        );
        assert_eq!(
            classify_live_reading(Some(10.5), Season::Autumn, &p),
            LiveStatus::Anomalous
        );
    }

    #[test]
    fn current_season_follows_injected_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(current_season(today), Season::Autumn);
        let today = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(current_season(today), Season::Winter);
    }
}
