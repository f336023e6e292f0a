//! Route loading error types.

use std::path::PathBuf;

use crate::domain::InvalidCost;

/// Errors from reading or normalising a route file.
///
/// These never reach a route-lookup caller: [`super::load_or_sample`]
/// logs them and falls back to the built-in routes.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The route file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The route file is not valid route JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A route carries a fare that cannot be represented
    #[error("route {route}: {source}")]
    InvalidFare {
        route: String,
        #[source]
        source: InvalidCost,
    },
}

impl LoadError {
    /// Whether the route file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
