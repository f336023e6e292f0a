//! Estimation error types.

/// Errors from a travel time or geocoding service.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key was rejected
    #[error("request denied: {0}")]
    Unauthorized(String),

    /// Rate limited or over quota
    #[error("rate limited by maps API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl EstimateError {
    /// Whether retrying other requests with the same credentials is pointless.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EstimateError::Unauthorized(_) | EstimateError::RateLimited)
    }
}
