//! Fastest and cheapest route selection.

use crate::domain::Route;

use super::matcher::find_routes;

/// The route with the lowest total travel time.
///
/// Ties go to the route encountered first, so the pick is deterministic for
/// a given input order. Returns `None` for an empty input.
pub fn fastest<'a, I>(routes: I) -> Option<&'a Route>
where
    I: IntoIterator<Item = &'a Route>,
{
    // `min_by_key` keeps the first of several equal minima.
    routes.into_iter().min_by_key(|r| r.total_time_mins())
}

/// The route with the lowest total fare.
///
/// Same tie-break as [`fastest`]. Returns `None` for an empty input.
pub fn cheapest<'a, I>(routes: I) -> Option<&'a Route>
where
    I: IntoIterator<Item = &'a Route>,
{
    routes.into_iter().min_by_key(|r| r.total_cost())
}

/// Result of comparing routes between two stops.
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    /// Every matched route, in load order.
    pub matches: Vec<&'a Route>,
    pub fastest: Option<&'a Route>,
    pub cheapest: Option<&'a Route>,
}

impl Comparison<'_> {
    /// Returns true if no route connects the two stops.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Match routes from `start` to `end` and pick the fastest and cheapest.
pub fn compare<'a>(routes: &'a [Route], start: &str, end: &str) -> Comparison<'a> {
    let matches = find_routes(routes, start, end);
    let fastest = fastest(matches.iter().copied());
    let cheapest = cheapest(matches.iter().copied());

    Comparison {
        matches,
        fastest,
        cheapest,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Cost;
    use proptest::prelude::*;

    fn route_strategy() -> impl Strategy<Value = Route> {
        (0u32..500, 0u64..5_000, 0u32..1000).prop_map(|(time, cents, id)| {
            Route::new(
                format!("R{id}"),
                vec!["X".to_string(), "Z".to_string()],
                time,
                Cost::from_cents(cents),
            )
        })
    }

    fn routes_strategy() -> impl Strategy<Value = Vec<Route>> {
        prop::collection::vec(route_strategy(), 0..20)
    }

    proptest! {
        #[test]
        fn fastest_is_minimum(routes in routes_strategy()) {
            match fastest(&routes) {
                None => prop_assert!(routes.is_empty()),
                Some(best) => {
                    for r in &routes {
                        prop_assert!(best.total_time_mins() <= r.total_time_mins());
                    }
                }
            }
        }

        #[test]
        fn cheapest_is_minimum(routes in routes_strategy()) {
            match cheapest(&routes) {
                None => prop_assert!(routes.is_empty()),
                Some(best) => {
                    for r in &routes {
                        prop_assert!(best.total_cost() <= r.total_cost());
                    }
                }
            }
        }

        /// The pick is the first route holding the minimum
        #[test]
        fn fastest_is_first_minimum(routes in routes_strategy()) {
            if let Some(best) = fastest(&routes) {
                let first = routes
                    .iter()
                    .find(|r| r.total_time_mins() == best.total_time_mins())
                    .unwrap();
                prop_assert!(std::ptr::eq(first, best));
            }
        }

        #[test]
        fn cheapest_is_first_minimum(routes in routes_strategy()) {
            if let Some(best) = cheapest(&routes) {
                let first = routes
                    .iter()
                    .find(|r| r.total_cost() == best.total_cost())
                    .unwrap();
                prop_assert!(std::ptr::eq(first, best));
            }
        }
    }
}
