//! OpenWeatherMap response DTOs.
//!
//! These map the current-weather endpoint. Only the fields the assessment
//! reads are modelled; everything else in the payload is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response from the current-weather endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    /// City name as resolved by the API.
    pub name: Option<String>,

    /// Temperature and humidity readings.
    pub main: MainReadings,

    /// Weather conditions, most significant first. May be empty.
    #[serde(default)]
    pub weather: Vec<Condition>,

    /// Wind readings.
    pub wind: Wind,

    /// Visibility in metres. Omitted by the API for some stations.
    pub visibility: Option<f64>,

    /// Observation time, unix seconds.
    pub dt: Option<i64>,
}

impl CurrentWeather {
    /// The primary condition, if any was reported.
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    /// When the readings were taken.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// The `main` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    /// Temperature, in the units requested (Celsius for metric).
    pub temp: f64,

    /// Relative humidity, percent.
    pub humidity: u8,
}

/// One entry of the `weather` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    /// Free-text description, e.g. "light snow".
    pub description: String,
}

/// The `wind` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Wind {
    /// Wind speed in metres per second.
    pub speed: f64,

    /// Direction in meteorological degrees.
    #[serde(default)]
    pub deg: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "coord": {"lon": 72.85, "lat": 19.01},
        "weather": [{"id": 721, "main": "Haze", "description": "haze", "icon": "50d"}],
        "main": {"temp": 23.1, "feels_like": 23.4, "pressure": 1012, "humidity": 73},
        "visibility": 1000,
        "wind": {"speed": 0.0, "deg": 0},
        "dt": 1700000000,
        "name": "Mumbai",
        "cod": 200
    }"#;

    #[test]
    fn parse_current_weather() {
        let report: CurrentWeather = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(report.name.as_deref(), Some("Mumbai"));
        assert_eq!(report.main.temp, 23.1);
        assert_eq!(report.main.humidity, 73);
        assert_eq!(report.condition().unwrap().description, "haze");
        assert_eq!(report.wind.speed, 0.0);
        assert_eq!(report.wind.deg, Some(0));
        assert_eq!(report.visibility, Some(1000.0));
        assert_eq!(
            report.observed_at(),
            DateTime::from_timestamp(1_700_000_000, 0)
        );
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let json = r#"{
            "main": {"temp": 30.0, "humidity": 40},
            "wind": {"speed": 3.2}
        }"#;
        let report: CurrentWeather = serde_json::from_str(json).unwrap();

        assert!(report.name.is_none());
        assert!(report.weather.is_empty());
        assert!(report.condition().is_none());
        assert!(report.visibility.is_none());
        assert!(report.observed_at().is_none());
        assert!(report.wind.deg.is_none());
    }

    #[test]
    fn missing_main_block_is_rejected() {
        let json = r#"{"wind": {"speed": 1.0}}"#;
        assert!(serde_json::from_str::<CurrentWeather>(json).is_err());
    }
}
