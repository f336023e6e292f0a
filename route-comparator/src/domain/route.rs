//! Bus route records.

use super::Cost;

/// Descriptive data carried with a route.
///
/// None of these fields take part in matching or selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMetadata {
    /// Number of transfers the ticket allows.
    pub transfers: u32,
    /// Operator fare code.
    pub fare_code: String,
    /// Free-text notes.
    pub notes: String,
}

/// A pre-defined bus route: an ordered sequence of stops with an
/// aggregate travel time and fare.
///
/// The order of `stops` is the direction of travel. A route can take a
/// passenger from stop A to stop B only if A appears before B.
///
/// Routes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    stops: Vec<String>,
    total_time_mins: u32,
    total_cost: Cost,
    metadata: RouteMetadata,
}

impl Route {
    /// Create a route with empty metadata.
    pub fn new(
        name: impl Into<String>,
        stops: Vec<String>,
        total_time_mins: u32,
        total_cost: Cost,
    ) -> Self {
        Self {
            name: name.into(),
            stops,
            total_time_mins,
            total_cost,
            metadata: RouteMetadata::default(),
        }
    }

    /// Attach metadata.
    pub fn with_metadata(mut self, metadata: RouteMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in travel order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Total travel time in minutes.
    pub fn total_time_mins(&self) -> u32 {
        self.total_time_mins
    }

    /// Total fare.
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn metadata(&self) -> &RouteMetadata {
        &self.metadata
    }

    /// Index of the first occurrence of `stop`, if the route calls there.
    pub fn position_of(&self, stop: &str) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }

    /// Whether the route calls at `start` strictly before `end`.
    ///
    /// Always false when `start == end`, since both resolve to the same index.
    pub fn serves_in_order(&self, start: &str, end: &str) -> bool {
        match (self.position_of(start), self.position_of(end)) {
            (Some(start_idx), Some(end_idx)) => start_idx < end_idx,
            _ => false,
        }
    }
}
