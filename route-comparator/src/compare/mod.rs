//! Route lookup and comparison.
//!
//! Given a start and end stop, [`find_routes`] keeps the routes that call at
//! both in that order, and [`fastest`] / [`cheapest`] pick the two options
//! worth highlighting. Everything here is a pure function over borrowed
//! routes.

mod matcher;
mod select;

pub use matcher::find_routes;
pub use select::{Comparison, cheapest, compare, fastest};
