//! Raw route file format.
//!
//! These types mirror the JSON route description as published, before
//! legs are flattened into a stop sequence.

use serde::Deserialize;

/// Placeholder used in place of an intermediate stop list.
pub(crate) const STOPS_PLACEHOLDER: &str = "See PDF";

/// One route as it appears in the route file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    pub route_id: String,
    pub route_description: String,

    /// Legs in travel order. Required; may be empty.
    pub legs: Vec<RawLeg>,

    /// Number of transfers the ticket allows
    #[serde(default)]
    pub transfers_allowed: u32,

    #[serde(default)]
    pub fare_code: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    /// Free-text fare, e.g. "R12.50 cash"
    #[serde(default)]
    pub through_cash_fare: Option<String>,
}

/// A from → to segment of a raw route.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLeg {
    pub from: String,
    pub to: String,

    /// Semicolon-separated intermediate stops
    #[serde(default)]
    pub stops: Option<String>,
}

impl RawRoute {
    /// Display name: `"{route_id} - {route_description}"`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.route_id, self.route_description)
    }

    /// Ordered, deduplicated stop sequence.
    ///
    /// Starts at the first leg's origin, then walks each leg's intermediate
    /// stops and destination, keeping only the first occurrence of each stop.
    pub fn stop_sequence(&self) -> Vec<String> {
        let Some(first) = self.legs.first() else {
            return Vec::new();
        };

        let mut stops = vec![first.from.clone()];
        for leg in &self.legs {
            for stop in leg.intermediate_stops() {
                push_unique(&mut stops, stop);
            }
            push_unique(&mut stops, &leg.to);
        }

        stops
    }

    /// Leg endpoints only: the first origin followed by every leg's destination.
    ///
    /// Not deduplicated. This is the sequence sent to a time estimator.
    pub fn leg_endpoints(&self) -> Vec<String> {
        let Some(first) = self.legs.first() else {
            return Vec::new();
        };

        std::iter::once(first.from.clone())
            .chain(self.legs.iter().map(|leg| leg.to.clone()))
            .collect()
    }
}

impl RawLeg {
    /// Intermediate stops, trimmed, with blanks and placeholders dropped.
    pub fn intermediate_stops(&self) -> impl Iterator<Item = &str> {
        self.stops
            .as_deref()
            .filter(|s| !s.is_empty() && *s != STOPS_PLACEHOLDER)
            .into_iter()
            .flat_map(|s| s.split(';'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn push_unique(stops: &mut Vec<String>, stop: &str) {
    if !stops.iter().any(|s| s == stop) {
        stops.push(stop.to_string());
    }
}
