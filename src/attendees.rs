//! Participant harvesting from sender and recipient headers

use crate::types::EmailInput;
use std::collections::HashSet;

/// Most participants reported for one event
pub const MAX_ATTENDEES: usize = 5;

/// Strip an optional display name: `"Jane Doe" <jane@x.io>` becomes `jane@x.io`.
///
/// Returns `None` for text without an `@`.
#[must_use]
pub fn bare_address(s: &str) -> Option<&str> {
    let s = s.trim();

    let address = if let Some(start) = s.find('<')
        && let Some(end) = s[start..].find('>')
    {
        s[start + 1..start + end].trim()
    } else {
        s
    };

    address.contains('@').then_some(address)
}

/// Sender first, then recipients, without duplicates and capped at
/// [`MAX_ATTENDEES`]. Addresses compare case-insensitively.
#[must_use]
pub fn extract_attendees(email: &EmailInput) -> Vec<String> {
    let recipients = email
        .to_email
        .split(',')
        .filter_map(bare_address)
        .take(MAX_ATTENDEES);
    let mut seen = HashSet::new();

    bare_address(&email.from_email)
        .into_iter()
        .chain(recipients)
        .filter(|addr| seen.insert(addr.to_lowercase()))
        .take(MAX_ATTENDEES)
        .map(str::to_string)
        .collect()
}
