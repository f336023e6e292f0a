//! Built-in routes used when no route file can be loaded.

use crate::domain::{Cost, Route};

/// The fallback route set.
pub fn sample_routes() -> Vec<Route> {
    vec![
        Route::new("Route A", stops(&["A", "B", "C", "D"]), 40, Cost::from_units(15)),
        Route::new("Route B", stops(&["A", "E", "D"]), 35, Cost::from_units(20)),
        Route::new("Route C", stops(&["A", "F", "G", "D"]), 50, Cost::from_units(10)),
    ]
}

fn stops(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
