//! Anomaly detection.
//!
//! This module provides:
//! - Rolling-window statistics and point anomaly flagging
//! - Classification of a live reading against a seasonal profile

mod live;
mod rolling;

pub use live::{
    classify_live_reading, classify_live_reading_with_sigma, current_season, LiveStatus,
};
pub use rolling::{
    anomalies, compute_rolling, RollingConfig, RollingRecord, DEFAULT_SIGMA, DEFAULT_WINDOW,
};
