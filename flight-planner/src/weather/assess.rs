//! Flight safety assessment of a weather report.

use std::fmt;

use super::error::WeatherError;
use super::types::CurrentWeather;
use crate::gate::Verdict;

/// Visibility assumed when the report omits it, in metres.
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

/// Description keywords that ground flights regardless of the readings.
const ADVERSE_KEYWORDS: [&str; 2] = ["thunderstorm", "snow"];

/// Limits beyond which flights are rescheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyThresholds {
    /// Highest acceptable wind speed, km/h (exclusive).
    pub max_wind_kmh: f64,

    /// Lowest acceptable visibility, metres (inclusive).
    pub min_visibility_m: f64,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self {
            max_wind_kmh: 50.0,
            min_visibility_m: 2000.0,
        }
    }
}

impl SafetyThresholds {
    /// Set the wind limit.
    pub fn with_max_wind_kmh(mut self, kmh: f64) -> Self {
        self.max_wind_kmh = kmh;
        self
    }

    /// Set the visibility limit.
    pub fn with_min_visibility_m(mut self, metres: f64) -> Self {
        self.min_visibility_m = metres;
        self
    }
}

/// Something in a report that puts flights at risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    HighWind,
    LowVisibility,
    AdverseConditions,
}

impl Hazard {
    fn notice(self) -> &'static str {
        match self {
            Hazard::HighWind => "High wind speeds detected. Flights may be rescheduled.",
            Hazard::LowVisibility => "Low visibility detected. Flights may be rescheduled.",
            Hazard::AdverseConditions => {
                "Adverse weather conditions detected (thunderstorms, snow). Flights may be rescheduled."
            }
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Hazard::HighWind => "high wind speeds",
            Hazard::LowVisibility => "low visibility",
            Hazard::AdverseConditions => "adverse weather conditions",
        };
        f.write_str(s)
    }
}

/// Outcome of assessing one report.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Safe if no hazard was found, otherwise reschedule.
    pub verdict: Verdict,

    /// Hazards found, in check order.
    pub hazards: Vec<Hazard>,

    /// One-line human-readable description of the readings and status.
    pub summary: String,
}

/// Assess a report against `thresholds`.
///
/// # Errors
///
/// Returns [`WeatherError::Json`] if the report carries no weather
/// condition, since the description checks cannot be made.
pub fn assess(
    report: &CurrentWeather,
    thresholds: &SafetyThresholds,
) -> Result<Assessment, WeatherError> {
    let condition = report.condition().ok_or_else(|| WeatherError::Json {
        message: "response has no weather conditions".to_string(),
        body: None,
    })?;

    let wind_kmh = report.wind.speed * 3.6;
    let visibility = report.visibility.unwrap_or(DEFAULT_VISIBILITY_M);
    let description = condition.description.to_lowercase();

    let mut hazards = Vec::new();
    if wind_kmh > thresholds.max_wind_kmh {
        hazards.push(Hazard::HighWind);
    }
    if visibility < thresholds.min_visibility_m {
        hazards.push(Hazard::LowVisibility);
    }
    if ADVERSE_KEYWORDS.iter().any(|k| description.contains(k)) {
        hazards.push(Hazard::AdverseConditions);
    }

    let verdict = if hazards.is_empty() {
        Verdict::Safe
    } else {
        Verdict::Reschedule
    };

    let mut status = String::new();
    for hazard in &hazards {
        status.push_str(hazard.notice());
        status.push(' ');
    }
    status.push_str(if hazards.is_empty() {
        "Arrivals and departures are likely safe."
    } else {
        "Conditions indicate potential delays or rescheduling."
    });

    let summary = format!(
        "Temperature: {:.1}°C, Condition: {}, Humidity: {}%, Wind Speed: {:.1} km/h, Visibility: {:.0} meters, Status: {}",
        report.main.temp,
        condition.description,
        report.main.humidity,
        wind_kmh,
        visibility,
        status
    );

    Ok(Assessment {
        verdict,
        hazards,
        summary,
    })
}
