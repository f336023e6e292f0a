//! Google Maps web service response types.
//!
//! Only the fields the estimator reads are modelled.

use serde::{Deserialize, Serialize};

/// Top-level status meaning the request succeeded.
pub(crate) const STATUS_OK: &str = "OK";

/// Top-level status for a rejected API key.
pub(crate) const STATUS_REQUEST_DENIED: &str = "REQUEST_DENIED";

/// Top-level status for exhausted quota.
pub(crate) const STATUS_OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";

/// Distance Matrix API response.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,

    #[serde(default)]
    pub rows: Vec<MatrixRow>,

    #[serde(default)]
    pub error_message: Option<String>,
}

/// One origin's row of results.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// Result for one origin/destination pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    pub status: String,

    #[serde(default)]
    pub duration: Option<TextValue>,
}

/// A value with its human-readable rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Seconds for durations
    pub value: u64,

    #[serde(default)]
    pub text: Option<String>,
}

impl DistanceMatrixResponse {
    /// Duration of the first origin/destination pair, if both the request
    /// and that element succeeded.
    pub fn first_duration_secs(&self) -> Option<u64> {
        if self.status != STATUS_OK {
            return None;
        }

        let element = self.rows.first()?.elements.first()?;
        if element.status != STATUS_OK {
            return None;
        }

        element.duration.as_ref().map(|d| d.value)
    }
}

/// Geocoding API response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

/// A latitude/longitude pair.
///
/// `(0, 0)` stands in for a place the geocoder could not find.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    /// Location of the best match, if the request succeeded.
    pub fn first_location(&self) -> Option<Coordinates> {
        if self.status != STATUS_OK {
            return None;
        }
        self.results.first().map(|r| r.geometry.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distance_matrix_ok() {
        let json = r#"{
            "destination_addresses": ["Sea Point, Cape Town, South Africa"],
            "origin_addresses": ["Civic Centre, Cape Town, South Africa"],
            "rows": [{
                "elements": [{
                    "distance": {"text": "5.1 km", "value": 5100},
                    "duration": {"text": "21 mins", "value": 1260},
                    "status": "OK"
                }]
            }],
            "status": "OK"
        }"#;

        let resp: DistanceMatrixResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_duration_secs(), Some(1260));
    }

    #[test]
    fn element_not_found() {
        let json = r#"{
            "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}],
            "status": "OK"
        }"#;

        let resp: DistanceMatrixResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_duration_secs(), None);
    }

    #[test]
    fn request_denied() {
        let json = r#"{
            "error_message": "The provided API key is invalid.",
            "rows": [],
            "status": "REQUEST_DENIED"
        }"#;

        let resp: DistanceMatrixResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, STATUS_REQUEST_DENIED);
        assert_eq!(resp.first_duration_secs(), None);
        assert_eq!(
            resp.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn parse_geocode() {
        let json = r#"{
            "results": [{
                "formatted_address": "Sea Point, Cape Town, 8005, South Africa",
                "geometry": {"location": {"lat": -33.9150, "lng": 18.3870}}
            }],
            "status": "OK"
        }"#;

        let resp: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.first_location(),
            Some(Coordinates {
                lat: -33.9150,
                lng: 18.3870
            })
        );
    }

    #[test]
    fn geocode_zero_results() {
        let json = r#"{"results": [], "status": "ZERO_RESULTS"}"#;
        let resp: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_location(), None);
    }
}
