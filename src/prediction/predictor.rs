//! Scaler plus regressor, for single listings and whole tables.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::features::{feature_vector, features_from_json, CarListing, FieldValue, FEATURE_NAMES};
use super::model::{LinearRegressor, Regressor, StandardScaler};
use crate::core::Dataset;
use crate::error::{ClimateError, Result};

/// Column appended by batch prediction.
pub const PREDICTION_COLUMN: &str = "selling_price";

/// Serialized form of a fitted linear pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub scaler: StandardScaler,
    pub model: LinearRegressor,
}

/// Applies a fitted scaler and regressor to listing features.
#[derive(Debug, Clone)]
pub struct PricePredictor<R = LinearRegressor> {
    scaler: StandardScaler,
    model: R,
}

impl<R: Regressor> PricePredictor<R> {
    pub fn new(scaler: StandardScaler, model: R) -> Result<Self> {
        let expected = FEATURE_NAMES.len();
        for got in [scaler.n_features(), model.n_features()] {
            if got != expected {
                return Err(ClimateError::DimensionMismatch { expected, got });
            }
        }
        Ok(Self { scaler, model })
    }

    /// Predict from an already extracted feature vector.
    pub fn predict_features(&self, features: &[f64]) -> Result<f64> {
        let scaled = self.scaler.transform(features)?;
        self.model.predict_one(&scaled)
    }

    pub fn predict_listing(&self, listing: &CarListing) -> Result<f64> {
        self.predict_features(&listing.feature_vector()?)
    }

    pub fn predict_json(&self, object: &serde_json::Map<String, serde_json::Value>) -> Result<f64> {
        self.predict_features(&features_from_json(object)?)
    }

    /// Predict every row and return the table with a `selling_price` column.
    ///
    /// All or nothing: the first row with an unusable field aborts the
    /// batch with a `Parse` error naming that row.
    pub fn predict_batch(&self, dataset: &Dataset) -> Result<Dataset> {
        let indices = FEATURE_NAMES
            .iter()
            .map(|name| dataset.require_column(name))
            .collect::<Result<Vec<usize>>>()?;

        info!(rows = dataset.len(), "predicting batch");

        let mut predictions = Vec::with_capacity(dataset.len());
        for (row_no, row) in dataset.rows().iter().enumerate() {
            let features = feature_vector(
                |name| {
                    let pos = FEATURE_NAMES.iter().position(|&n| n == name)?;
                    Some(cell_value(&row[indices[pos]]))
                },
                row_no,
            )?;
            predictions.push(self.predict_features(&features)?.to_string());
        }

        dataset.with_column(PREDICTION_COLUMN, predictions)
    }
}

impl PricePredictor<LinearRegressor> {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        Self::new(artifact.scaler, artifact.model)
    }

    /// Load a [`ModelArtifact`] from JSON.
    pub fn from_json_reader<Rd: Read>(reader: Rd) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_reader(reader)
            .map_err(|e| ClimateError::Io(format!("invalid model artifact: {}", e)))?;
        Self::from_artifact(artifact)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_reader(File::open(path)?)
    }
}

/// Plain numeric cells keep their sign; anything else goes through token extraction.
fn cell_value(cell: &str) -> FieldValue<'_> {
    match cell.trim().parse::<f64>() {
        Ok(n) => FieldValue::Number(n),
        Err(_) => FieldValue::Text(cell),
    }
}
