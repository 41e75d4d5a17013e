//! Series-level features: linear trend and descriptive statistics.

mod summary;
mod trend;

pub use summary::{summarize, SummaryStats};
pub use trend::{fit_line, fit_trend, TrendModel};
