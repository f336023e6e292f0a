//! Askama templates for the web frontend.

use askama::Template;

use crate::compare::Comparison;
use crate::domain::Route;

use super::directions::directions_url;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the stop pickers.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stops: Vec<String>,
}

impl IndexTemplate {
    /// Comma-separated list of every stop.
    pub fn stops_summary(&self) -> String {
        self.stops.join(", ")
    }
}

/// Comparison results page.
#[derive(Template)]
#[template(path = "compare.html")]
pub struct CompareTemplate {
    pub start: String,
    pub end: String,
    pub routes: Vec<RouteView>,
    pub fastest: Option<RouteView>,
    pub cheapest: Option<RouteView>,
    pub directions_url: String,
}

impl CompareTemplate {
    /// Build the page for a comparison between `start` and `end`.
    pub fn from_comparison(start: &str, end: &str, comparison: &Comparison<'_>) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            routes: comparison
                .matches
                .iter()
                .map(|r| RouteView::from_route(r))
                .collect(),
            fastest: comparison.fastest.map(RouteView::from_route),
            cheapest: comparison.cheapest.map(RouteView::from_route),
            directions_url: directions_url(start, end),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub name: String,
    pub stops: Vec<String>,
    pub time_mins: u32,
    pub cost: String,
    pub transfers: u32,
    pub fare_code: String,
    pub notes: String,
}

impl RouteView {
    /// Stops joined with arrows, e.g. "Civic Centre → Green Point → Sea Point".
    pub fn stops_display(&self) -> String {
        self.stops.join(" → ")
    }

    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        let metadata = route.metadata();
        Self {
            name: route.name().to_string(),
            stops: route.stops().to_vec(),
            time_mins: route.total_time_mins(),
            cost: route.total_cost().to_string(),
            transfers: metadata.transfers,
            fare_code: metadata.fare_code.clone(),
            notes: metadata.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::domain::Cost;

    fn routes() -> Vec<Route> {
        vec![
            Route::new(
                "Route A",
                vec!["A".into(), "B".into(), "D".into()],
                40,
                Cost::from_units(15),
            ),
            Route::new("Route B", vec!["A".into(), "D".into()], 35, Cost::from_cents(2050)),
        ]
    }

    #[test]
    fn route_view_formatting() {
        let routes = routes();
        let view = RouteView::from_route(&routes[0]);

        assert_eq!(view.stops_display(), "A → B → D");
        assert_eq!(view.time_mins, 40);
        assert_eq!(view.cost, "15.00");
    }

    #[test]
    fn index_lists_stops() {
        let page = IndexTemplate {
            stops: vec!["A".into(), "B".into(), "Sea Point".into()],
        };
        assert_eq!(page.stops_summary(), "A, B, Sea Point");

        let html = page.render().unwrap();
        assert!(html.contains("<option value=\"Sea Point\">"));
    }

    #[test]
    fn compare_page_highlights_picks() {
        let routes = routes();
        let comparison = compare(&routes, "A", "D");
        let page = CompareTemplate::from_comparison("A", "D", &comparison);

        assert_eq!(page.routes.len(), 2);
        assert_eq!(page.fastest.as_ref().map(|r| r.name.as_str()), Some("Route B"));
        assert_eq!(page.cheapest.as_ref().map(|r| r.name.as_str()), Some("Route A"));

        let html = page.render().unwrap();
        assert!(html.contains("FASTEST ROUTE"));
        assert!(html.contains("CHEAPEST ROUTE"));
        assert!(html.contains("20.50"));
    }

    #[test]
    fn compare_page_without_matches() {
        let routes = routes();
        let comparison = compare(&routes, "D", "A");
        let page = CompareTemplate::from_comparison("D", "A", &comparison);

        let html = page.render().unwrap();
        assert!(html.contains("No routes found from D to A."));
        assert!(!html.contains("FASTEST ROUTE"));
    }

    #[test]
    fn error_page_escapes_message() {
        let page = ErrorTemplate {
            title: "Invalid request".into(),
            message: "<script>".into(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("&lt;script&gt;"));
    }
}
