//! Caching layer for Maps travel time lookups.
//!
//! Routes in a file share many stop pairs, and the loader estimates each
//! route segment by segment, so segment durations are cached by
//! `(origin, destination)`.

use std::time::Duration;

use futures::future::join_all;
use moka::future::Cache as MokaCache;
use tracing::{debug, warn};

use super::error::EstimateError;
use super::maps::MapsClient;
use super::types::Coordinates;
use super::TravelTimeEstimator;

/// Minutes assumed for a segment the API could not time.
pub const SEGMENT_FALLBACK_MINS: u32 = 15;

/// Cache key for segment durations: (origin, destination).
type SegmentKey = (String, String);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct MapsCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for MapsCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Maps client with a segment duration cache.
pub struct CachedMapsClient {
    client: MapsClient,
    segments: MokaCache<SegmentKey, u32>,
}

impl CachedMapsClient {
    /// Create a new cached client.
    pub fn new(client: MapsClient, config: &MapsCacheConfig) -> Self {
        let segments = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, segments }
    }

    /// Minutes for one segment, using the cache if available.
    ///
    /// Only successful lookups are cached.
    pub async fn segment_minutes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<u32>, EstimateError> {
        let key = (origin.to_string(), destination.to_string());

        if let Some(minutes) = self.segments.get(&key).await {
            return Ok(Some(minutes));
        }

        let minutes = self.client.segment_minutes(origin, destination).await?;
        if let Some(minutes) = minutes {
            self.segments.insert(key, minutes).await;
        }

        Ok(minutes)
    }

    /// Coordinates of a stop. Not cached.
    pub async fn geocode(&self, stop: &str) -> Result<Coordinates, EstimateError> {
        self.client.geocode(stop).await
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.segments.entry_count()
    }
}

impl TravelTimeEstimator for CachedMapsClient {
    /// Sum of segment durations along `stops`.
    ///
    /// Segments the API cannot time count as [`SEGMENT_FALLBACK_MINS`].
    /// A rejected key or exhausted quota fails the whole estimate.
    async fn travel_minutes(&self, stops: &[String]) -> Result<Option<u32>, EstimateError> {
        if stops.len() < 2 {
            return Ok(None);
        }

        let lookups = stops
            .windows(2)
            .map(|pair| self.segment_minutes(&pair[0], &pair[1]));
        let results = join_all(lookups).await;

        let mut total: u32 = 0;
        for (pair, result) in stops.windows(2).zip(results) {
            let minutes = match result {
                Ok(Some(minutes)) => minutes,
                Ok(None) => SEGMENT_FALLBACK_MINS,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(origin = %pair[0], destination = %pair[1], error = %e, "segment lookup failed");
                    SEGMENT_FALLBACK_MINS
                }
            };
            total = total.saturating_add(minutes);
        }

        debug!(segments = stops.len() - 1, total, "estimated route time");
        Ok(Some(total))
    }
}
