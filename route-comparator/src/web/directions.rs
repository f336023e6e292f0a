//! Google Maps directions links.
//!
//! Generates a public-transit directions URL between two stops, so a
//! passenger can check a comparison against the live network.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Base of the directions URL.
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir";

/// Appended to each place so Maps resolves it in Cape Town.
const CITY_SUFFIX: &str = ",+Cape+Town,+South+Africa";

/// Map viewport over Cape Town, with transit mode selected.
const VIEWPORT: &str = "@-33.9249,18.4241,12z/data=!3m1!4b1!4m2!4m1!3e3";

/// Generate a public-transit directions URL from `start` to `end`.
///
/// # Example
///
/// ```
/// use route_comparator::web::directions_url;
///
/// let url = directions_url("Civic Centre", "Sea Point");
/// assert!(url.starts_with(
///     "https://www.google.com/maps/dir/Civic+Centre,+Cape+Town,+South+Africa/Sea+Point,"
/// ));
/// ```
pub fn directions_url(start: &str, end: &str) -> String {
    format!(
        "{DIRECTIONS_BASE}/{}{CITY_SUFFIX}/{}{CITY_SUFFIX}/{VIEWPORT}",
        encode_place(start),
        encode_place(end),
    )
}

/// Characters left as-is in a place name; everything else is percent-encoded.
const PLACE_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode a place name as a URL path segment, with spaces as `+`.
///
/// The result is always visible ASCII, so it is a valid header value.
fn encode_place(place: &str) -> String {
    place
        .trim()
        .split(' ')
        .map(|word| utf8_percent_encode(word, PLACE_SAFE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
