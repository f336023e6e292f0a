//! Stub Maps web service for tests.
//!
//! Serves canned Distance Matrix and Geocoding answers on a local port,
//! keyed by the stop names in the query.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use super::maps::{MapsClient, MapsConfig};

/// Seconds the stub reports for the `A` → `B` segment (12 minutes).
pub const A_TO_B_SECS: u64 = 720;

/// A running stub server.
pub struct StubMaps {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl StubMaps {
    /// Start the stub on an ephemeral local port.
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/distancematrix/json", get(distance_matrix))
            .route("/geocode/json", get(geocode))
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    /// Client pointed at this stub.
    pub fn client(&self) -> MapsClient {
        MapsClient::new(MapsConfig::new("stub-key").with_base_url(&self.base_url)).unwrap()
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn param<'a>(query: &'a HashMap<String, String>, name: &str) -> &'a str {
    query.get(name).map(String::as_str).unwrap_or_default()
}

async fn distance_matrix(
    State(hits): State<Arc<AtomicUsize>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    if param(&query, "key") != "stub-key" {
        return (StatusCode::UNAUTHORIZED, "bad key").into_response();
    }
    if param(&query, "mode") != "transit" || param(&query, "transit_mode") != "bus" {
        return (StatusCode::BAD_REQUEST, "wrong mode").into_response();
    }

    match (param(&query, "origins"), param(&query, "destinations")) {
        ("A", "B") => Json(json!({
            "status": "OK",
            "rows": [{"elements": [{
                "status": "OK",
                "duration": {"value": A_TO_B_SECS, "text": "12 mins"}
            }]}]
        }))
        .into_response(),
        // Request succeeded, but no transit route for this pair
        ("B", "C") => Json(json!({
            "status": "OK",
            "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}]
        }))
        .into_response(),
        ("C", "D") => Json(json!({"status": "NOT_FOUND", "rows": []})).into_response(),
        ("Denied", _) => Json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }))
        .into_response(),
        ("Quota", _) => Json(json!({"status": "OVER_QUERY_LIMIT"})).into_response(),
        ("Forbidden", _) => (StatusCode::FORBIDDEN, "forbidden").into_response(),
        ("Throttled", _) => StatusCode::TOO_MANY_REQUESTS.into_response(),
        ("Broken", _) => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => "not json".into_response(),
    }
}

async fn geocode(
    State(hits): State<Arc<AtomicUsize>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    match param(&query, "address") {
        "Sea Point, Cape Town, South Africa" => Json(json!({
            "status": "OK",
            "results": [{"geometry": {"location": {"lat": -33.9156, "lng": 18.3876}}}]
        }))
        .into_response(),
        "Denied, Cape Town, South Africa" => {
            Json(json!({"status": "REQUEST_DENIED"})).into_response()
        }
        "Broken, Cape Town, South Africa" => StatusCode::BAD_GATEWAY.into_response(),
        _ => Json(json!({"status": "ZERO_RESULTS", "results": []})).into_response(),
    }
}
