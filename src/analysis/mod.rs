//! Multi-city analysis.
//!
//! Each city runs through preparation, rolling statistics, seasonal
//! profiling and trend fitting independently. Cities share nothing, so
//! they can run in parallel; the output is keyed by city either way.

mod config;
mod orchestrator;
mod result;

pub use config::AnalysisConfig;
pub use orchestrator::{analyze_city, analyze_dataset, CityResults};
pub use result::AnalysisResult;
