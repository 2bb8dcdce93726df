//! Bulk sender detection

use crate::patterns::NEWSLETTER_SENDER_MARKERS;

/// Check whether a sender address belongs to a newsletter or other bulk
/// source. Mail from such senders never produces an event, however strong
/// its text looks.
#[must_use]
pub fn is_newsletter_sender(sender: &str) -> bool {
    let lower = sender.trim().to_lowercase();
    if lower.is_empty() {
        return false;
    }

    NEWSLETTER_SENDER_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}
