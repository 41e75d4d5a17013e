//! OpenWeatherMap client for the current temperature of a city.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{TemperatureSource, WeatherError};

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Connection settings for [`OpenWeatherClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherClientConfig {
    pub base_url: String,
    /// Unit system passed to the API; `metric` yields degrees Celsius.
    pub units: String,
    pub timeout: Duration,
}

impl Default for WeatherClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            units: "metric".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Blocking client for the OpenWeatherMap "current weather" endpoint.
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherClientConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherClientConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WeatherClientConfig {
        &self.config
    }
}

impl TemperatureSource for OpenWeatherClient {
    fn current_temperature(&self, city: &str, api_key: &str) -> Result<f64, WeatherError> {
        debug!(city, url = %self.config.base_url, "requesting current temperature");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("q", city),
                ("units", self.config.units.as_str()),
                ("appid", api_key),
            ])
            .send()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let result = parse_weather_response(status, &body);
        if let Err(err) = &result {
            warn!(city, status, error = %err, "weather request failed");
        }
        result
    }
}

/// Turn a status code and response body into a temperature.
///
/// Non-200 responses report the API's `message` field, or
/// `"Unknown error"` if the body has none.
pub fn parse_weather_response(status: u16, body: &str) -> Result<f64, WeatherError> {
    if status != 200 {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(WeatherError::Api(message));
    }

    serde_json::from_str::<WeatherResponse>(body)
        .map(|r| r.main.temp)
        .map_err(|e| WeatherError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_main_temp() {
        let body = r#"{"name":"Berlin","main":{"temp":12.34,"humidity":81},"cod":200}"#;
        assert_eq!(parse_weather_response(200, body), Ok(12.34));
    }

    #[test]
    fn api_error_uses_message() {
        let body = r#"{"cod":401,"message":"Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."}"#;
        match parse_weather_response(401, body) {
            Err(WeatherError::Api(msg)) => assert!(msg.starts_with("Invalid API key")),
            other => panic!("unexpected: {:?}", other),
        }

        let body = r#"{"cod":"404","message":"city not found"}"#;
        assert_eq!(
            parse_weather_response(404, body),
            Err(WeatherError::Api("city not found".to_string()))
        );
    }

    #[test]
    fn api_error_without_message() {
        assert_eq!(
            parse_weather_response(500, "<html>oops</html>"),
            Err(WeatherError::Api("Unknown error".to_string()))
        );
    }

    #[test]
    fn malformed_success_body() {
        assert!(matches!(
            parse_weather_response(200, r#"{"main":{}}"#),
            Err(WeatherError::InvalidResponse(_))
        ));
    }

    #[test]
    fn default_config_targets_openweathermap() {
        let config = WeatherClientConfig::default();
        assert!(config.base_url.contains("api.openweathermap.org"));
        assert_eq!(config.units, "metric");
        let client = OpenWeatherClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }

    #[test]
    #[ignore] // Requires network access and an API key
    fn fetch_live_temperature() {
        let Ok(key) = std::env::var("OPENWEATHER_API_KEY") else {
            return;
        };
        let client = OpenWeatherClient::new(WeatherClientConfig::default()).unwrap();
        let reading = client.current_temperature("Berlin", &key);
        assert!(reading.is_ok(), "{:?}", reading);
    }
}
