//! Pre-fit scaler and regression model.

use serde::{Deserialize, Serialize};

use crate::error::{ClimateError, Result};

/// A fitted regression model over a fixed-length feature vector.
pub trait Regressor {
    fn n_features(&self) -> usize;

    fn predict_one(&self, features: &[f64]) -> Result<f64>;
}

/// Per-feature standardisation `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.len() != scale.len() {
            return Err(ClimateError::DimensionMismatch {
                expected: mean.len(),
                got: scale.len(),
            });
        }
        Ok(Self { mean, scale })
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardise one feature vector. A zero scale leaves the centred value unscaled.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(ClimateError::DimensionMismatch {
                expected: self.mean.len(),
                got: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((&x, &m), &s)| {
                let s = if s == 0.0 { 1.0 } else { s };
                (x - m) / s
            })
            .collect())
    }
}

/// Linear model `intercept + coefficients . x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl Regressor for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_one(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(ClimateError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }
}
