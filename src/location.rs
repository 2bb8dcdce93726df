//! Physical and virtual location extraction

use crate::patterns::{EXPLICIT_LOCATION, PLACE_LOCATION};
use crate::types::MeetingUrl;

/// Longest location returned, in characters
pub const MAX_LOCATION_CHARS: usize = 100;

/// Find an explicit location in `body`.
///
/// A labelled line (`Location:`, `Where:`, `Address:`, `Venue:`) wins over
/// an `at <Place> Room/Building/Street...` phrase.
#[must_use]
pub fn extract_location(body: &str) -> Option<String> {
    [&*EXPLICIT_LOCATION, &*PLACE_LOCATION]
        .into_iter()
        .flat_map(|re| re.captures_iter(body))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|s| !s.is_empty())
        .map(|s| {
            let capped: String = s.chars().take(MAX_LOCATION_CHARS).collect();
            capped.trim_end().to_string()
        })
}

/// Explicit location, or a virtual label for the meeting link
#[must_use]
pub fn resolve_location(body: &str, meeting_url: Option<&MeetingUrl>) -> Option<String> {
    extract_location(body).or_else(|| meeting_url.map(|u| u.platform.virtual_label()))
}
