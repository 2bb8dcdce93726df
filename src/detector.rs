//! Single-email and batch event detection

use crate::attendees::extract_attendees;
use crate::classifier::detect_event_type;
use crate::config::DetectorConfig;
use crate::confidence::score;
use crate::dateparse::{DateParser, FuzzyDateParser};
use crate::links::extract_meeting_urls;
use crate::location::resolve_location;
use crate::temporal::extract_datetime_with;
use crate::types::{DetectedEvent, EmailInput};
use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// Runs the detection pipeline with a given date parser and configuration.
///
/// Detection is a pure function of the email, the configuration and the
/// parser. It never fails: an email either yields an event or nothing, and
/// missing details only leave fields empty.
#[derive(Debug, Clone, Default)]
pub struct EventDetector<P = FuzzyDateParser> {
    parser: P,
    config: DetectorConfig,
}

impl EventDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: DetectorConfig) -> Self {
        Self {
            parser: FuzzyDateParser::new(),
            config,
        }
    }
}

impl<P: DateParser> EventDetector<P> {
    /// Use a custom date parser
    #[must_use]
    pub const fn with_parser(parser: P, config: DetectorConfig) -> Self {
        Self { parser, config }
    }

    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn now(&self) -> NaiveDateTime {
        self.config
            .reference_time
            .unwrap_or_else(|| Local::now().naive_local())
    }

    /// Detect an event in one email
    #[must_use]
    pub fn detect(&self, email: &EmailInput) -> Option<DetectedEvent> {
        let text = email.full_text();
        let event_type = detect_event_type(&text, Some(email.from_email.as_str()))?;

        let date_time = extract_datetime_with(&self.parser, &text, self.now(), self.config.fuzzy);
        let urls = extract_meeting_urls(&email.body_text);
        let primary = urls.first();
        let location = resolve_location(&email.body_text, primary);
        let attendees = extract_attendees(email);

        let confidence = score(
            true,
            date_time.is_some(),
            location.is_some() || primary.is_some(),
        );

        debug!(
            email_id = %email.email_id,
            %event_type,
            %confidence,
            "detected event"
        );

        Some(DetectedEvent {
            email_id: email.email_id.clone(),
            event_type,
            title: email.subject.clone(),
            date_time,
            location,
            url: primary.map(|u| u.url.clone()),
            attendees: (!attendees.is_empty()).then(|| attendees.join(", ")),
            confidence,
        })
    }

    /// Detect events across emails, keeping input order and dropping
    /// emails without an event
    #[must_use]
    pub fn detect_batch(&self, emails: &[EmailInput]) -> Vec<DetectedEvent> {
        let events: Vec<_> = emails.iter().filter_map(|e| self.detect(e)).collect();
        debug!(emails = emails.len(), events = events.len(), "batch detection done");
        events
    }
}

/// Detect an event in one email with the default detector
#[must_use]
pub fn detect_event_from_email(email: &EmailInput) -> Option<DetectedEvent> {
    EventDetector::new().detect(email)
}

/// Detect events across emails with the default detector
#[must_use]
pub fn batch_detect_events(emails: &[EmailInput]) -> Vec<DetectedEvent> {
    EventDetector::new().detect_batch(emails)
}
