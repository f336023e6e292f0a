//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::compare::Comparison;
use crate::domain::{Cost, Route};

/// Request to compare routes between two stops.
///
/// Missing parameters deserialize as empty so they reach validation
/// instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Starting stop
    #[serde(default)]
    pub start: String,

    /// Destination stop
    #[serde(default)]
    pub end: String,
}

/// A route in comparison results.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Route label
    pub name: String,

    /// Stops in travel order
    pub stops: Vec<String>,

    /// Total travel time in minutes
    pub total_time_mins: u32,

    /// Total fare
    pub total_cost: Cost,

    /// Transfers allowed on the ticket
    pub transfers: u32,

    /// Operator fare code
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fare_code: String,

    /// Free-text notes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// Response for a route comparison.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub start: String,
    pub end: String,

    /// Every matched route, in load order
    pub routes: Vec<RouteResult>,

    /// Route with the lowest travel time
    pub fastest: Option<RouteResult>,

    /// Route with the lowest fare
    pub cheapest: Option<RouteResult>,
}

/// Response listing every known stop.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    /// Stop names, sorted
    pub stops: Vec<String>,
}

/// Request to locate a stop.
#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    #[serde(default)]
    pub stop: String,
}

/// Coordinates of a stop.
#[derive(Debug, Serialize)]
pub struct StopLocationResponse {
    pub stop: String,
    pub lat: f64,
    pub lng: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        let metadata = route.metadata();
        Self {
            name: route.name().to_string(),
            stops: route.stops().to_vec(),
            total_time_mins: route.total_time_mins(),
            total_cost: route.total_cost(),
            transfers: metadata.transfers,
            fare_code: metadata.fare_code.clone(),
            notes: metadata.notes.clone(),
        }
    }
}

impl CompareResponse {
    /// Create from a comparison between `start` and `end`.
    pub fn from_comparison(start: &str, end: &str, comparison: &Comparison<'_>) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            routes: comparison
                .matches
                .iter()
                .map(|r| RouteResult::from_route(r))
                .collect(),
            fastest: comparison.fastest.map(RouteResult::from_route),
            cheapest: comparison.cheapest.map(RouteResult::from_route),
        }
    }
}
