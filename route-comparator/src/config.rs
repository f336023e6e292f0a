//! Application configuration.
//!
//! Everything is read from environment variables at start-up, with defaults
//! suitable for running locally.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default route file path.
const DEFAULT_ROUTES_FILE: &str = "routes.json";

/// Default static assets directory.
const DEFAULT_STATIC_DIR: &str = "static";

/// Placeholder key shipped in sample configs; treated as no key.
const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Error in the application configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON route file (`ROUTES_FILE`)
    pub routes_file: PathBuf,
    /// HTTP listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Static assets directory (`STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Google Maps API key (`GOOGLE_MAPS_API_KEY`); `None` disables estimation
    pub maps_api_key: Option<String>,
    /// Override for the Maps API base URL (`MAPS_BASE_URL`)
    pub maps_base_url: Option<String>,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    name: "BIND_ADDR",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => default_bind_addr(),
        };

        let maps_api_key = lookup("GOOGLE_MAPS_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);

        Ok(Self {
            routes_file: lookup("ROUTES_FILE")
                .unwrap_or_else(|| DEFAULT_ROUTES_FILE.to_string())
                .into(),
            bind_addr,
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            maps_api_key,
            maps_base_url: lookup("MAPS_BASE_URL").filter(|url| !url.is_empty()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            routes_file: DEFAULT_ROUTES_FILE.into(),
            bind_addr: default_bind_addr(),
            static_dir: DEFAULT_STATIC_DIR.into(),
            maps_api_key: None,
            maps_base_url: None,
        }
    }
}

/// Default listen address: localhost, port 3000.
fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}
