//! Travel time estimation.
//!
//! The route loader asks a [`TravelTimeEstimator`] for a real-world travel
//! time. When the estimator has no answer or fails, the loader falls back to
//! the deterministic formulas in [`formula`].

mod cache;
mod error;
pub mod formula;
mod maps;
#[cfg(test)]
pub(crate) mod stub;
mod types;

use std::future::Future;

pub use cache::{CachedMapsClient, MapsCacheConfig};
pub use error::EstimateError;
pub use maps::{MapsClient, MapsConfig};
pub use types::{Coordinates, DistanceMatrixResponse, GeocodeResponse};

/// Capability for estimating the travel time along a stop sequence.
pub trait TravelTimeEstimator {
    /// Estimated minutes to travel through `stops` in order.
    ///
    /// Returns `Ok(None)` when the estimator has no answer for this sequence.
    fn travel_minutes(
        &self,
        stops: &[String],
    ) -> impl Future<Output = Result<Option<u32>, EstimateError>> + Send;
}

/// Estimator that never has an answer, leaving every route to the formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEstimator;

impl TravelTimeEstimator for NoEstimator {
    async fn travel_minutes(&self, _stops: &[String]) -> Result<Option<u32>, EstimateError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_estimator_has_no_answer() {
        let stops = vec!["A".to_string(), "B".to_string()];
        assert_eq!(NoEstimator.travel_minutes(&stops).await.unwrap(), None);
    }
}
