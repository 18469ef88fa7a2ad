//! Up-front weather survey producing a synchronous safety gate.
//!
//! The catalog asks its gate synchronously, so lookups are done first, in
//! parallel batches, and the results frozen into a [`WeatherSnapshot`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use super::assess::{Assessment, SafetyThresholds, assess};
use super::error::WeatherError;
use super::types::CurrentWeather;
use crate::domain::Location;
use crate::gate::{SafetyGate, Verdict};

/// Trait for fetching current weather.
///
/// This abstraction allows the survey to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait WeatherProvider {
    /// Current weather at `location`.
    async fn current_weather(&self, location: &Location)
    -> Result<Arc<CurrentWeather>, WeatherError>;
}

/// Assessed weather for a fixed set of locations.
///
/// Serves as a [`SafetyGate`]: surveyed locations get their assessed
/// verdict, anything else (failed lookups, locations never surveyed) is
/// [`Verdict::Unknown`].
#[derive(Debug, Clone, Default)]
pub struct WeatherSnapshot {
    assessments: HashMap<Location, Assessment>,
    failures: HashMap<Location, String>,
}

impl WeatherSnapshot {
    /// Assessment for a location, if its lookup succeeded.
    pub fn assessment(&self, location: &Location) -> Option<&Assessment> {
        self.assessments.get(location)
    }

    /// The human-readable weather line for a location.
    pub fn summary(&self, location: &Location) -> Option<&str> {
        self.assessment(location).map(|a| a.summary.as_str())
    }

    /// Why a location's lookup failed, if it did.
    pub fn failure(&self, location: &Location) -> Option<&str> {
        self.failures.get(location).map(String::as_str)
    }

    /// Number of locations assessed successfully.
    pub fn assessed_count(&self) -> usize {
        self.assessments.len()
    }

    /// Number of locations whose lookup failed.
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

impl SafetyGate for WeatherSnapshot {
    fn verdict(&self, location: &Location) -> Verdict {
        self.assessments
            .get(location)
            .map_or(Verdict::Unknown, |a| a.verdict)
    }
}

/// Survey `locations` with the default thresholds.
pub async fn survey<P: WeatherProvider>(
    provider: &P,
    locations: &[Location],
    batch_size: usize,
) -> WeatherSnapshot {
    survey_with(provider, locations, batch_size, &SafetyThresholds::default()).await
}

/// Survey `locations`, fetching up to `batch_size` of them concurrently.
///
/// Each distinct location is looked up once. Failed lookups are recorded
/// and leave the location without a verdict.
pub async fn survey_with<P: WeatherProvider>(
    provider: &P,
    locations: &[Location],
    batch_size: usize,
    thresholds: &SafetyThresholds,
) -> WeatherSnapshot {
    let mut seen = HashSet::new();
    let distinct: Vec<&Location> = locations.iter().filter(|l| seen.insert(*l)).collect();

    let mut snapshot = WeatherSnapshot::default();

    for batch in distinct.chunks(batch_size.max(1)) {
        let futures: Vec<_> = batch
            .iter()
            .map(|location| async move {
                let result = provider.current_weather(location).await;
                (*location, result)
            })
            .collect();

        let results = join_all(futures).await;

        for (location, result) in results {
            match result.and_then(|report| assess(&report, thresholds)) {
                Ok(assessment) => {
                    debug!(
                        location = %location,
                        verdict = %assessment.verdict,
                        "Weather assessed"
                    );
                    snapshot.assessments.insert(location.clone(), assessment);
                }
                Err(e) => {
                    warn!(
                        location = %location,
                        error = %e,
                        "Weather lookup failed, verdict unknown"
                    );
                    snapshot.failures.insert(location.clone(), e.to_string());
                }
            }
        }
    }

    debug!(
        assessed = snapshot.assessed_count(),
        failed = snapshot.failed_count(),
        "Weather survey complete"
    );

    snapshot
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::weather::types::{Condition, MainReadings, Wind};

    struct MockProvider {
        reports: HashMap<String, CurrentWeather>,
        calls: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                reports: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with(mut self, city: &str, description: &str, visibility: f64) -> Self {
            let report = CurrentWeather {
                name: Some(city.to_string()),
                main: MainReadings {
                    temp: 25.0,
                    humidity: 50,
                },
                weather: vec![Condition {
                    description: description.to_string(),
                }],
                wind: Wind {
                    speed: 2.0,
                    deg: None,
                },
                visibility: Some(visibility),
                dt: None,
            };
            self.reports.insert(city.to_string(), report);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl WeatherProvider for MockProvider {
        async fn current_weather(
            &self,
            location: &Location,
        ) -> Result<Arc<CurrentWeather>, WeatherError> {
            self.calls.lock().unwrap().push(location.to_string());
            self.reports
                .get(location.as_str())
                .cloned()
                .map(Arc::new)
                .ok_or_else(|| WeatherError::NotFound(location.to_string()))
        }
    }

    fn loc(name: &str) -> Location {
        Location::parse(name).unwrap()
    }

    #[tokio::test]
    async fn verdicts_follow_assessments() {
        let provider = MockProvider::new()
            .with("Pune", "clear sky", 10_000.0)
            .with("Mumbai", "haze", 1000.0);

        let snapshot = survey(&provider, &[loc("Pune"), loc("Mumbai"), loc("Atlantis")], 2).await;

        assert_eq!(snapshot.verdict(&loc("Pune")), Verdict::Safe);
        assert_eq!(snapshot.verdict(&loc("Mumbai")), Verdict::Reschedule);
        assert_eq!(snapshot.verdict(&loc("Atlantis")), Verdict::Unknown);
        assert_eq!(snapshot.verdict(&loc("Nowhere")), Verdict::Unknown);

        assert_eq!(snapshot.assessed_count(), 2);
        assert_eq!(snapshot.failed_count(), 1);
        assert_eq!(
            snapshot.failure(&loc("Atlantis")),
            Some("no weather data for Atlantis")
        );
        assert!(
            snapshot
                .summary(&loc("Mumbai"))
                .unwrap()
                .contains("Low visibility detected")
        );
    }

    #[tokio::test]
    async fn each_location_fetched_once() {
        let provider = MockProvider::new()
            .with("A", "clear sky", 10_000.0)
            .with("B", "clear sky", 10_000.0);

        let locations = [loc("A"), loc("B"), loc("A"), loc("B"), loc("A")];
        let snapshot = survey(&provider, &locations, 1).await;

        assert_eq!(provider.calls(), vec!["A", "B"]);
        assert_eq!(snapshot.assessed_count(), 2);
    }

    #[tokio::test]
    async fn zero_batch_size_still_surveys() {
        let provider = MockProvider::new().with("A", "clear sky", 10_000.0);

        let snapshot = survey(&provider, &[loc("A")], 0).await;

        assert_eq!(snapshot.verdict(&loc("A")), Verdict::Safe);
    }

    #[tokio::test]
    async fn empty_survey() {
        let provider = MockProvider::new();

        let snapshot = survey(&provider, &[], 4).await;

        assert!(provider.calls().is_empty());
        assert_eq!(snapshot.assessed_count(), 0);
    }

    #[tokio::test]
    async fn unassessable_report_is_unknown() {
        let mut provider = MockProvider::new().with("A", "clear sky", 10_000.0);
        provider.reports.get_mut("A").unwrap().weather.clear();

        let snapshot = survey(&provider, &[loc("A")], 4).await;

        assert_eq!(snapshot.verdict(&loc("A")), Verdict::Unknown);
        assert!(snapshot.failure(&loc("A")).unwrap().contains("JSON parse error"));
    }

    #[tokio::test]
    async fn thresholds_are_applied() {
        let provider = MockProvider::new().with("A", "mist", 3000.0);
        let strict = SafetyThresholds::default().with_min_visibility_m(5000.0);

        let lenient = survey(&provider, &[loc("A")], 4).await;
        let strict = survey_with(&provider, &[loc("A")], 4, &strict).await;

        assert_eq!(lenient.verdict(&loc("A")), Verdict::Safe);
        assert_eq!(strict.verdict(&loc("A")), Verdict::Reschedule);
    }

    #[tokio::test]
    async fn snapshot_gates_the_catalog() {
        use crate::catalog::{Admission, AdmissionError, Catalog};
        use crate::domain::ConnectionRequest;

        let provider = MockProvider::new()
            .with("Pune", "clear sky", 10_000.0)
            .with("Chennai", "clear sky", 10_000.0)
            .with("Mumbai", "thunderstorm", 10_000.0);
        let snapshot = survey(&provider, &[loc("Pune"), loc("Chennai"), loc("Mumbai")], 3).await;

        let mut catalog = Catalog::new();
        let ok = ConnectionRequest::new("Pune", "Chennai", "Indigo", 100, 60, "6E1");
        let stormy = ConnectionRequest::new("Pune", "Mumbai", "Indigo", 100, 60, "6E2");

        assert!(catalog.admit(&ok, &snapshot).unwrap().is_admitted());
        assert!(matches!(
            catalog.admit(&stormy, &snapshot).unwrap(),
            Admission::Dropped { .. }
        ));
        assert!(catalog.is_restricted(&loc("Mumbai")));
        assert_eq!(
            catalog.admit(&stormy, &snapshot).unwrap_err(),
            AdmissionError::Restricted(loc("Mumbai"))
        );
    }
}
