//! Per-city temperature series and their preparation from a [`Dataset`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::dataset::{Dataset, CITY_COLUMN, TEMPERATURE_COLUMN, TIMESTAMP_COLUMN};
use super::season::{season_of, Season};
use crate::error::{ClimateError, Result};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// One temperature observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub city: String,
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    /// Derived from `timestamp`, never read from input.
    pub season: Season,
}

impl SeriesPoint {
    pub fn new(city: impl Into<String>, timestamp: NaiveDateTime, temperature: f64) -> Self {
        Self {
            city: city.into(),
            timestamp,
            temperature,
            season: season_of(&timestamp),
        }
    }
}

/// Time-ordered observations for a single city.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    city: String,
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Build a series from points, sorting them by timestamp.
    ///
    /// The sort is stable, so equal timestamps keep their input order.
    pub fn new(city: impl Into<String>, mut points: Vec<SeriesPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self {
            city: city.into(),
            points,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    /// Fractional days elapsed since the first observation.
    pub fn elapsed_days(&self) -> Vec<f64> {
        let Some(first) = self.points.first() else {
            return Vec::new();
        };
        self.points
            .iter()
            .map(|p| (p.timestamp - first.timestamp).num_milliseconds() as f64 / MILLIS_PER_DAY)
            .collect()
    }
}

/// Extract one city's observations from a dataset, sorted by timestamp.
///
/// Rows for other cities are skipped without being parsed. The dataset
/// itself is never modified.
pub fn prepare_series(dataset: &Dataset, city: &str) -> Result<Series> {
    let city_idx = dataset.require_column(CITY_COLUMN)?;
    let ts_idx = dataset.require_column(TIMESTAMP_COLUMN)?;
    let temp_idx = dataset.require_column(TEMPERATURE_COLUMN)?;

    let mut points = Vec::new();
    for (row_no, row) in dataset.rows().iter().enumerate() {
        if row[city_idx] != city {
            continue;
        }
        let timestamp = parse_timestamp(&row[ts_idx])
            .ok_or_else(|| ClimateError::parse(TIMESTAMP_COLUMN, &row[ts_idx], row_no))?;
        let temperature = parse_temperature(&row[temp_idx])
            .ok_or_else(|| ClimateError::parse(TEMPERATURE_COLUMN, &row[temp_idx], row_no))?;
        points.push(SeriesPoint::new(city, timestamp, temperature));
    }

    Ok(Series::new(city, points))
}

/// Parse an ISO-8601 timestamp or plain date.
///
/// Offset-carrying stamps are normalised to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn parse_temperature(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|t| t.is_finite())
}
