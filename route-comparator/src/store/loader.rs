//! Route file loading.
//!
//! Turns the raw JSON route description into [`Route`] records: legs are
//! flattened into a stop sequence, the fare is read from the free-text
//! cash fare where possible, and travel time comes from the injected
//! estimator or the fallback formula.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::domain::{Cost, Route, RouteMetadata};
use crate::estimate::TravelTimeEstimator;
use crate::estimate::formula::{fallback_cost, fallback_minutes};

use super::RouteStore;
use super::error::LoadError;
use super::raw::RawRoute;

/// Matches a rand amount such as "R12" or "R12.50".
// Literal pattern, exercised by the fare_amounts test.
static FARE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R(\d+(?:\.\d+)?)").unwrap());

/// Load a route store from `path`, falling back to the built-in routes.
///
/// A missing or malformed file never fails the caller; it is logged and
/// the sample routes are used instead.
pub async fn load_or_sample<E: TravelTimeEstimator>(path: &Path, estimator: &E) -> RouteStore {
    match load_routes(path, estimator).await {
        Ok(routes) => {
            info!(path = %path.display(), count = routes.len(), "loaded routes");
            RouteStore::new(routes)
        }
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "route file not found, using sample routes");
            RouteStore::sample()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load routes, using sample routes");
            RouteStore::sample()
        }
    }
}

/// Read and normalise every route in the file at `path`.
pub async fn load_routes<E: TravelTimeEstimator>(
    path: &Path,
    estimator: &E,
) -> Result<Vec<Route>, LoadError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_routes(&json, estimator).await
}

/// Normalise every route in a JSON route description.
pub async fn parse_routes<E: TravelTimeEstimator>(
    json: &str,
    estimator: &E,
) -> Result<Vec<Route>, LoadError> {
    let raw_routes: Vec<RawRoute> = serde_json::from_str(json)?;

    let mut routes = Vec::with_capacity(raw_routes.len());
    for raw in &raw_routes {
        routes.push(convert_route(raw, estimator).await?);
    }

    Ok(routes)
}

async fn convert_route<E: TravelTimeEstimator>(
    raw: &RawRoute,
    estimator: &E,
) -> Result<Route, LoadError> {
    let name = raw.display_name();
    let total_time = estimate_minutes(raw, estimator).await;
    let total_cost = estimate_cost(raw).map_err(|source| LoadError::InvalidFare {
        route: name.clone(),
        source,
    })?;

    let metadata = RouteMetadata {
        transfers: raw.transfers_allowed,
        fare_code: raw.fare_code.clone().unwrap_or_default(),
        notes: raw.notes.clone().unwrap_or_default(),
    };

    Ok(Route::new(name, raw.stop_sequence(), total_time, total_cost).with_metadata(metadata))
}

/// Travel time from the estimator, or the formula when it has no usable answer.
async fn estimate_minutes<E: TravelTimeEstimator>(raw: &RawRoute, estimator: &E) -> u32 {
    let endpoints = raw.leg_endpoints();
    if endpoints.len() >= 2 {
        match estimator.travel_minutes(&endpoints).await {
            Ok(Some(minutes)) if minutes > 0 => return minutes,
            Ok(_) => {}
            Err(e) => {
                warn!(route = %raw.route_id, error = %e, "time estimate failed, using formula");
            }
        }
    }

    let minutes = fallback_minutes(raw.transfers_allowed, raw.legs.len());
    debug!(route = %raw.route_id, minutes, "formula time estimate");
    minutes
}

/// Fare from the cash fare text, or the formula when it names no amount.
fn estimate_cost(raw: &RawRoute) -> Result<Cost, crate::domain::InvalidCost> {
    match raw.through_cash_fare.as_deref().and_then(fare_amount) {
        Some(amount) => Cost::from_amount(amount),
        None => Ok(fallback_cost(raw.transfers_allowed)),
    }
}

/// First rand amount in a fare description.
fn fare_amount(text: &str) -> Option<f64> {
    FARE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
