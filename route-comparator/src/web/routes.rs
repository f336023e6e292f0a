//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::compare::compare;
use crate::estimate::{Coordinates, EstimateError};
use crate::store::RouteStore;

use super::directions::directions_url;
use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/compare", get(compare_routes))
        .route("/directions", get(directions))
        .route("/api/stops", get(list_stops))
        .route("/api/geocode", get(geocode_stop))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the stop pickers.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        stops: state.store.all_stops().iter().cloned().collect(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// List every known stop.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    Json(StopsResponse {
        stops: state.store.all_stops().iter().cloned().collect(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Compare the routes between two stops.
async fn compare_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<CompareRequest>,
) -> Response {
    let html = accepts_html(&headers);

    let (start, end) = match validate_pair(&req.start, &req.end)
        .and_then(|pair| validate_known(&state.store, pair))
    {
        Ok(pair) => pair,
        Err(e) => return e.respond(html),
    };

    let comparison = compare(state.store.routes(), start, end);
    info!(start, end, matches = comparison.matches.len(), "compared routes");

    if html {
        let template = CompareTemplate::from_comparison(start, end, &comparison);
        match template.render() {
            Ok(body) => Html(body).into_response(),
            Err(e) => AppError::Internal {
                message: format!("Template error: {}", e),
            }
            .respond(html),
        }
    } else {
        Json(CompareResponse::from_comparison(start, end, &comparison)).into_response()
    }
}

/// Redirect to public-transit directions between two stops.
async fn directions(headers: HeaderMap, Query(req): Query<CompareRequest>) -> Response {
    match validate_pair(&req.start, &req.end) {
        Ok((start, end)) => Redirect::to(&directions_url(start, end)).into_response(),
        Err(e) => e.respond(accepts_html(&headers)),
    }
}

/// Look up the coordinates of a known stop.
async fn geocode_stop(
    State(state): State<AppState>,
    Query(req): Query<GeocodeRequest>,
) -> Result<Json<StopLocationResponse>, AppError> {
    let stop = req.stop.trim();
    if !state.store.contains_stop(stop) {
        return Err(AppError::BadRequest {
            message: format!("Unknown stop: {stop}"),
        });
    }

    let Some(maps) = state.maps.as_ref() else {
        return Err(AppError::Unavailable {
            message: "Maps integration is not configured".to_string(),
        });
    };

    let location = match maps.geocode(stop).await {
        Ok(location) => location,
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(e) => {
            warn!(stop, error = %e, "geocode failed, returning (0, 0)");
            Coordinates::default()
        }
    };
    Ok(Json(StopLocationResponse {
        stop: stop.to_string(),
        lat: location.lat,
        lng: location.lng,
    }))
}

/// Check that both stops are given and differ.
///
/// Returns the trimmed stop names.
fn validate_pair<'a>(start: &'a str, end: &'a str) -> Result<(&'a str, &'a str), AppError> {
    let (start, end) = (start.trim(), end.trim());

    if start.is_empty() || end.is_empty() {
        return Err(AppError::BadRequest {
            message: "Please select both starting location and destination.".to_string(),
        });
    }

    if start == end {
        return Err(AppError::BadRequest {
            message: "Starting location and destination cannot be the same.".to_string(),
        });
    }

    Ok((start, end))
}

/// Check that both stops are served by some route.
fn validate_known<'a>(
    store: &RouteStore,
    (start, end): (&'a str, &'a str),
) -> Result<(&'a str, &'a str), AppError> {
    if !store.contains_stop(start) || !store.contains_stop(end) {
        return Err(AppError::BadRequest {
            message: "Please select valid locations from the list.".to_string(),
        });
    }

    Ok((start, end))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }

    /// Respond with an error page for browsers, JSON otherwise.
    fn respond(self, html: bool) -> Response {
        if !html {
            return self.into_response();
        }

        let (status, message) = self.status_and_message();
        warn!(%status, message, "request failed");

        let title = match status {
            StatusCode::BAD_REQUEST => "Invalid request",
            _ => "Something went wrong",
        };
        let page = ErrorTemplate {
            title: title.to_string(),
            message: message.to_string(),
        };
        let body = page
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e));

        (status, Html(body)).into_response()
    }
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        if e.is_fatal() {
            AppError::Unavailable {
                message: e.to_string(),
            }
        } else {
            AppError::Internal {
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, message, "request failed");

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
