//! Meeting link detection
//!
//! Platform patterns (Zoom, Google Meet, Teams) run first, then a generic
//! http(s) pattern picks up everything else. A link already tagged with a
//! platform is not repeated as generic.

use crate::patterns::url_pattern;
use crate::types::{MeetingUrl, Platform};
use std::collections::HashSet;
use tracing::trace;

/// Sentence punctuation that ends up glued to links in prose
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Find meeting links in `body`, platform-specific ones first.
///
/// Within a platform, links keep the order they appear in.
#[must_use]
pub fn extract_meeting_urls(body: &str) -> Vec<MeetingUrl> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for platform in Platform::ALL {
        for m in url_pattern(platform).find_iter(body) {
            let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if url.is_empty() || !seen.insert(without_scheme(url).to_lowercase()) {
                continue;
            }
            urls.push(MeetingUrl::new(platform, url));
        }
    }

    trace!(count = urls.len(), "extracted meeting links");
    urls
}

/// First link found, preferring conferencing platforms
#[must_use]
pub fn primary_meeting_url(body: &str) -> Option<MeetingUrl> {
    extract_meeting_urls(body).into_iter().next()
}

fn without_scheme(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}
