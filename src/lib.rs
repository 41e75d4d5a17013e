//! # climate-anomaly
//!
//! Historical temperature analysis per city.
//!
//! Builds a time-ordered series for each city, flags points that stray
//! from their rolling window, aggregates seasonal baselines, fits a
//! linear trend, and classifies a live reading against the baseline for
//! the current season. Cities are analysed independently and in parallel.
//!
//! ```
//! use climate_anomaly::prelude::*;
//!
//! let csv = "city,timestamp,temperature\n\
//!            Oslo,2024-01-01,-4.0\n\
//!            Oslo,2024-01-02,-3.0\n\
//!            Oslo,2024-01-03,-5.0\n";
//! let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
//! let results = analyze_dataset(&dataset, &AnalysisConfig::new().with_window(2)).unwrap();
//!
//! let oslo = results["Oslo"].as_ref().unwrap();
//! assert_eq!(oslo.rolling_records().len(), 3);
//! assert!(oslo.season_profile(Season::Winter).is_some());
//! ```

pub mod analysis;
pub mod core;
pub mod detection;
pub mod error;
pub mod features;
pub mod prediction;
pub mod seasonality;
pub mod transform;
pub mod utils;
pub mod weather;

pub use error::{ClimateError, Result};

pub mod prelude {
    pub use crate::analysis::{analyze_city, analyze_dataset, AnalysisConfig, AnalysisResult};
    pub use crate::core::{prepare_series, season_of, Dataset, Season, Series, SeriesPoint};
    pub use crate::detection::{
        classify_live_reading, compute_rolling, current_season, LiveStatus, RollingConfig,
        RollingRecord,
    };
    pub use crate::error::{ClimateError, Result};
    pub use crate::features::{fit_trend, SummaryStats, TrendModel};
    pub use crate::seasonality::{build_season_profiles, SeasonProfile};
    pub use crate::weather::{LiveReading, TemperatureSource};
}
