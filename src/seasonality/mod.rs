//! Seasonal baselines.
//!
//! Temperature statistics grouped by calendar season, used as the
//! reference a live reading is compared against.

mod profile;

pub use profile::{build_season_profiles, SeasonProfile};
