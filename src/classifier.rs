//! Keyword scoring of email text against event types

use crate::patterns::event_patterns;
use crate::sender::is_newsletter_sender;
use crate::types::EventType;
use serde::Serialize;
use tracing::{debug, trace};

/// Pattern match counts for every event type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventScores {
    meeting: usize,
    webinar: usize,
    deadline: usize,
    appointment: usize,
}

impl EventScores {
    /// Number of pattern matches counted for `event_type`
    #[must_use]
    pub const fn get(&self, event_type: EventType) -> usize {
        match event_type {
            EventType::Meeting => self.meeting,
            EventType::Webinar => self.webinar,
            EventType::Deadline => self.deadline,
            EventType::Appointment => self.appointment,
        }
    }

    const fn slot(&mut self, event_type: EventType) -> &mut usize {
        match event_type {
            EventType::Meeting => &mut self.meeting,
            EventType::Webinar => &mut self.webinar,
            EventType::Deadline => &mut self.deadline,
            EventType::Appointment => &mut self.appointment,
        }
    }

    /// Highest scoring type. Ties go to the type listed first in
    /// [`EventType::ALL`]; an all-zero score has no winner.
    #[must_use]
    pub fn winner(&self) -> Option<EventType> {
        let mut best: Option<(EventType, usize)> = None;
        for event_type in EventType::ALL {
            let score = self.get(event_type);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((event_type, score));
            }
        }
        best.map(|(event_type, _)| event_type)
    }

    /// Sum of all scores
    #[must_use]
    pub const fn total(&self) -> usize {
        self.meeting + self.webinar + self.deadline + self.appointment
    }
}

/// Count case-insensitive pattern matches for each event type
#[must_use]
pub fn score_event_types(text: &str) -> EventScores {
    let mut scores = EventScores::default();
    for event_type in EventType::ALL {
        let count: usize = event_patterns(event_type)
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum();
        *scores.slot(event_type) = count;
    }
    trace!(?scores, "scored event types");
    scores
}

/// Classify text into an event type.
///
/// Returns `None` when the sender is a bulk sender or no pattern matches.
#[must_use]
pub fn detect_event_type(text: &str, sender: Option<&str>) -> Option<EventType> {
    if let Some(sender) = sender
        && is_newsletter_sender(sender)
    {
        debug!("Skipping bulk sender {sender}");
        return None;
    }

    let scores = score_event_types(text);
    let winner = scores.winner();
    debug!(?winner, total = scores.total(), "classified email text");
    winner
}
