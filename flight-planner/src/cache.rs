//! Caching layer for weather lookups.
//!
//! Conditions change slowly relative to a planning session, so reports are
//! kept for a short TTL keyed by location. Failed lookups are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::Location;
use crate::weather::{CurrentWeather, WeatherError, WeatherProvider};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

impl CacheConfig {
    /// Set the TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the capacity.
    pub fn with_max_capacity(mut self, n: u64) -> Self {
        self.max_capacity = n;
        self
    }
}

/// Weather provider with caching.
///
/// Wraps any [`WeatherProvider`] and caches successful reports by location.
pub struct CachedWeatherClient<P> {
    inner: P,
    reports: MokaCache<Location, Arc<CurrentWeather>>,
}

impl<P: WeatherProvider> CachedWeatherClient<P> {
    /// Create a new cached client.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let reports = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, reports }
    }

    /// Access the underlying provider for lookups that bypass the cache.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.reports.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.reports.invalidate_all();
    }
}

impl<P: WeatherProvider> WeatherProvider for CachedWeatherClient<P> {
    async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<Arc<CurrentWeather>, WeatherError> {
        if let Some(cached) = self.reports.get(location).await {
            trace!(location = %location, "Weather cache hit");
            return Ok(cached);
        }

        let report = self.inner.current_weather(location).await?;
        self.reports.insert(location.clone(), report.clone()).await;

        Ok(report)
    }
}
