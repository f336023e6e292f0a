//! Domain types for the route comparator.
//!
//! Types here are validated at construction, so code that receives them
//! can trust their invariants.

mod cost;
mod route;

pub use cost::{Cost, InvalidCost};
pub use route::{Route, RouteMetadata};
