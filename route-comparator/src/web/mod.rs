//! Web layer for the route comparator.
//!
//! Provides the HTML interface and JSON endpoints for picking two stops
//! and comparing the routes between them.

mod directions;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use directions::directions_url;
pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
