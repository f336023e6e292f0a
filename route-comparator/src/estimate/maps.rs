//! Google Maps HTTP client.
//!
//! Wraps the Distance Matrix API (transit travel time between two stops)
//! and the Geocoding API (coordinates for a stop).

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use super::error::EstimateError;
use super::types::{
    Coordinates, DistanceMatrixResponse, GeocodeResponse, STATUS_OVER_QUERY_LIMIT,
    STATUS_REQUEST_DENIED,
};

/// Default base URL for the Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Appended to stop names so the geocoder resolves them in the right city.
const DEFAULT_REGION_SUFFIX: &str = ", Cape Town, South Africa";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Suffix appended to stop names when geocoding
    pub region_suffix: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region_suffix: DEFAULT_REGION_SUFFIX.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the geocoding region suffix.
    pub fn with_region_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.region_suffix = suffix.into();
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

/// Google Maps web services client.
///
/// Uses a semaphore to limit concurrent requests.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    region_suffix: String,
    semaphore: Arc<Semaphore>,
}

impl MapsClient {
    /// Create a new Maps client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, EstimateError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            region_suffix: config.region_suffix,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Fetch the bus travel time between two stops.
    pub async fn distance_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceMatrixResponse, EstimateError> {
        let url = format!("{}/distancematrix/json", self.base_url);
        let body = self
            .get(
                &url,
                &[
                    ("origins", origin),
                    ("destinations", destination),
                    ("mode", "transit"),
                    ("transit_mode", "bus"),
                    ("key", self.api_key.as_str()),
                ],
            )
            .await?;

        let resp: DistanceMatrixResponse = parse_json(&body)?;
        check_status(&resp.status, resp.error_message.as_deref())?;
        Ok(resp)
    }

    /// Whole minutes to travel by bus from `origin` to `destination`.
    ///
    /// Returns `Ok(None)` when the API has no result for the pair.
    pub async fn segment_minutes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<u32>, EstimateError> {
        let resp = self.distance_matrix(origin, destination).await?;
        let minutes = resp
            .first_duration_secs()
            .map(|secs| u32::try_from(secs / 60).unwrap_or(u32::MAX));

        debug!(origin, destination, ?minutes, "distance matrix lookup");
        Ok(minutes)
    }

    /// Look up the coordinates of a stop.
    ///
    /// Returns `(0, 0)` when the geocoder finds nothing.
    pub async fn geocode(&self, stop: &str) -> Result<Coordinates, EstimateError> {
        let url = format!("{}/geocode/json", self.base_url);
        let address = format!("{stop}{}", self.region_suffix);
        let body = self
            .get(&url, &[("address", address.as_str()), ("key", self.api_key.as_str())])
            .await?;

        let resp: GeocodeResponse = parse_json(&body)?;
        check_status(&resp.status, resp.error_message.as_deref())?;
        Ok(resp.first_location().unwrap_or_default())
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, EstimateError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| EstimateError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN || status == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(EstimateError::Unauthorized(body));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EstimateError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EstimateError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, EstimateError> {
    serde_json::from_str(body).map_err(|e| EstimateError::Json {
        message: e.to_string(),
    })
}

/// Map the API's in-body status to an error where it means the key is unusable.
fn check_status(status: &str, error_message: Option<&str>) -> Result<(), EstimateError> {
    match status {
        STATUS_REQUEST_DENIED => Err(EstimateError::Unauthorized(
            error_message.unwrap_or_default().to_string(),
        )),
        STATUS_OVER_QUERY_LIMIT => Err(EstimateError::RateLimited),
        _ => Ok(()),
    }
}
