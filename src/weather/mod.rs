//! Live temperature readings.
//!
//! Fetching happens outside the analysis core. Failures are reported as
//! [`WeatherError`] and reach classification only as a missing reading.

mod client;

pub use client::{parse_weather_response, OpenWeatherClient, WeatherClientConfig};

use thiserror::Error;

/// Why a live reading is unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    /// The service answered with an error (bad key, unknown city, ...).
    #[error("{0}")]
    Api(String),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered 200 with an unexpected body.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that can supply the current temperature of a city.
pub trait TemperatureSource {
    fn current_temperature(&self, city: &str, api_key: &str) -> Result<f64, WeatherError>;
}

/// A reading paired with the message explaining its absence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiveReading {
    pub temperature: Option<f64>,
    pub error: Option<String>,
}

impl LiveReading {
    pub fn from_result(result: Result<f64, WeatherError>) -> Self {
        match result {
            Ok(t) => Self {
                temperature: Some(t),
                error: None,
            },
            Err(e) => Self {
                temperature: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Fetch from `source`, folding any failure into the message.
    pub fn fetch<S: TemperatureSource + ?Sized>(source: &S, city: &str, api_key: &str) -> Self {
        Self::from_result(source.current_temperature(city, api_key))
    }
}
