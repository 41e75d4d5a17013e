//! Utility functions shared by the analysis modules.

pub mod stats;

pub use stats::{mean, std_dev, variance};
