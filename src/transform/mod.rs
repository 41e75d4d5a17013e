//! Window transformations for time series.
//!
//! # Example
//!
//! ```
//! use climate_anomaly::transform::rolling_mean;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let rm = rolling_mean(&series, 3);
//! assert_eq!(rm[0], None);
//! assert_eq!(rm[2], Some(2.0));
//! ```

pub mod window;

pub use window::{rolling_mean, rolling_std, rolling_var};
