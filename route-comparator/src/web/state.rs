//! Application state for the web layer.

use std::sync::Arc;

use crate::estimate::CachedMapsClient;
use crate::store::RouteStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Routes loaded at start-up
    pub store: Arc<RouteStore>,

    /// Maps client, when an API key is configured
    pub maps: Option<Arc<CachedMapsClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: RouteStore, maps: Option<Arc<CachedMapsClient>>) -> Self {
        Self {
            store: Arc::new(store),
            maps,
        }
    }
}
