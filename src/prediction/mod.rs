//! Used-car price prediction.
//!
//! Listings are reduced to six numeric features, standardised with a
//! pre-fit scaler and passed to a pre-fit regressor. Fitting happens
//! elsewhere; this module only loads and applies the fitted parameters.

mod features;
mod model;
mod predictor;

pub use features::{
    extract_numeric, feature_vector, features_from_json, CarListing, FieldValue, FEATURE_NAMES,
};
pub use model::{LinearRegressor, Regressor, StandardScaler};
pub use predictor::{ModelArtifact, PricePredictor, PREDICTION_COLUMN};
