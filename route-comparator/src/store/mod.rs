//! Route storage and loading.
//!
//! The store is built once at start-up, from a JSON route file when one is
//! available or from a small built-in route set otherwise, and is read-only
//! afterwards.

mod error;
mod loader;
mod raw;
mod sample;

use std::collections::BTreeSet;

use crate::domain::Route;

pub use error::LoadError;
pub use loader::{load_or_sample, load_routes, parse_routes};
pub use raw::{RawLeg, RawRoute};
pub use sample::sample_routes;

/// Read-only collection of known routes.
#[derive(Debug, Clone, Default)]
pub struct RouteStore {
    routes: Vec<Route>,
    /// Union of every route's stops, kept sorted for stable output.
    stops: BTreeSet<String>,
}

impl RouteStore {
    /// Create a store from routes in load order.
    pub fn new(routes: Vec<Route>) -> Self {
        let stops = routes
            .iter()
            .flat_map(|r| r.stops().iter().cloned())
            .collect();

        Self { routes, stops }
    }

    /// Create a store holding the built-in sample routes.
    pub fn sample() -> Self {
        Self::new(sample_routes())
    }

    /// All routes, in load order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Every stop served by any route, deduplicated and sorted.
    pub fn all_stops(&self) -> &BTreeSet<String> {
        &self.stops
    }

    /// Whether any route calls at `stop`.
    pub fn contains_stop(&self, stop: &str) -> bool {
        self.stops.contains(stop)
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are loaded.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
