//! Start/end route matching.

use crate::domain::Route;

/// Routes that can take a passenger from `start` to `end`.
///
/// A route qualifies if it calls at both stops and calls at `start` strictly
/// before `end`. Routes visiting the stops in the opposite direction are
/// excluded. Unknown stops, and `start == end`, yield no matches.
///
/// Matches are returned in the order of `routes`.
pub fn find_routes<'a>(routes: &'a [Route], start: &str, end: &str) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| route.serves_in_order(start, end))
        .collect()
}
