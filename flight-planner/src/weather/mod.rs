//! Weather-based safety verdicts.
//!
//! Looks up current conditions from OpenWeatherMap and classifies each
//! location as safe or not for flying:
//! - wind above 50 km/h, visibility under 2 km, thunderstorms or snow all
//!   mean flights may be rescheduled
//! - lookups are gathered up front by [`survey`] into a
//!   [`WeatherSnapshot`], which the catalog then consults synchronously

mod assess;
mod client;
mod error;
mod survey;
mod types;

pub use assess::{Assessment, Hazard, SafetyThresholds, assess};
pub use client::{WeatherClient, WeatherConfig};
pub use error::WeatherError;
pub use survey::{WeatherProvider, WeatherSnapshot, survey, survey_with};
pub use types::{Condition, CurrentWeather, MainReadings, Wind};
