//! OpenWeatherMap HTTP client.
//!
//! Fetches current weather by city name. Concurrency is bounded by a
//! semaphore so a survey of many locations does not trip the API's rate
//! limit.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::debug;

use super::error::WeatherError;
use super::survey::WeatherProvider;
use super::types::CurrentWeather;
use crate::domain::Location;

/// Default base URL for the OpenWeatherMap API.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key, sent as the `appid` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production OpenWeatherMap)
    pub base_url: String,
    /// Unit system requested from the API
    pub units: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            units: "metric".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the unit system.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenWeatherMap API client.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    units: String,
    semaphore: Arc<Semaphore>,
}

impl WeatherClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            units: config.units,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Fetch current weather for a city.
    pub async fn get_current_weather(
        &self,
        location: &Location,
    ) -> Result<CurrentWeather, WeatherError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| WeatherError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/weather", self.base_url);

        debug!(location = %location, "Fetching current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(location.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| WeatherError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl WeatherProvider for WeatherClient {
    async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<Arc<CurrentWeather>, WeatherError> {
        self.get_current_weather(location).await.map(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = WeatherConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_units("imperial")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.units, "imperial");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.units, "metric");
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        let config = WeatherConfig::new("test-key").with_base_url("http://localhost:1/");
        let client = WeatherClient::new(config).unwrap();

        assert_eq!(client.base_url, "http://localhost:1");
    }
}
