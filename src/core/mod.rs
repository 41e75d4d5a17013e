//! Core data structures: tabular input, seasons and per-city series.

mod dataset;
mod season;
mod series;

pub use dataset::{Dataset, CITY_COLUMN, REQUIRED_COLUMNS, TEMPERATURE_COLUMN, TIMESTAMP_COLUMN};
pub use season::{season_of, Season};
pub use series::{parse_timestamp, prepare_series, Series, SeriesPoint};
