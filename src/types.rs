//! Core types for email input and detected events

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the email an event was detected in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EmailId(pub String);

impl EmailId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a synthetic ID for messages without a Message-ID header
    #[must_use]
    pub fn synthetic(uid: u32) -> Self {
        Self(format!("<synthetic-{uid}@local>"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmailId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An email as supplied by the retrieval layer
///
/// Only these five fields are consulted during detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailInput {
    pub email_id: EmailId,

    pub subject: String,

    /// Plain text body
    pub body_text: String,

    /// Sender address
    pub from_email: String,

    /// Comma-joined recipient list
    pub to_email: String,
}

impl EmailInput {
    pub fn new(
        email_id: impl Into<EmailId>,
        subject: impl Into<String>,
        body_text: impl Into<String>,
        from_email: impl Into<String>,
        to_email: impl Into<String>,
    ) -> Self {
        Self {
            email_id: email_id.into(),
            subject: subject.into(),
            body_text: body_text.into(),
            from_email: from_email.into(),
            to_email: to_email.into(),
        }
    }

    /// Subject and body joined, the text the classifier and temporal
    /// extractor look at
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} {}", self.subject, self.body_text)
    }
}

/// Kind of calendar item an email describes
///
/// Declaration order is the tie-break priority used by the classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Meeting,
    Webinar,
    Deadline,
    Appointment,
}

impl EventType {
    /// All event types in classification priority order
    pub const ALL: [Self; 4] = [
        Self::Meeting,
        Self::Webinar,
        Self::Deadline,
        Self::Appointment,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Webinar => "webinar",
            Self::Deadline => "deadline",
            Self::Appointment => "appointment",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse trust level of a detected event, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conferencing platform a meeting link belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Zoom,
    GoogleMeet,
    Teams,
    /// Any other http(s) link
    Generic,
}

impl Platform {
    /// Platforms in URL pattern evaluation order
    pub const ALL: [Self; 4] = [Self::Zoom, Self::GoogleMeet, Self::Teams, Self::Generic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zoom => "zoom",
            Self::GoogleMeet => "google_meet",
            Self::Teams => "teams",
            Self::Generic => "generic",
        }
    }

    /// Location label used when an event only has a link
    #[must_use]
    pub fn virtual_label(self) -> String {
        format!("Virtual ({})", self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link found in an email body, tagged by platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingUrl {
    pub platform: Platform,
    pub url: String,
}

impl MeetingUrl {
    pub fn new(platform: Platform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
        }
    }
}

/// A calendar-worthy event extracted from one email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectedEvent {
    pub email_id: EmailId,

    pub event_type: EventType,

    /// Subject line, verbatim
    pub title: String,

    /// When the event happens, in naive local time
    pub date_time: Option<NaiveDateTime>,

    /// Explicit location, or a `Virtual (<platform>)` label
    pub location: Option<String>,

    /// Primary meeting link
    pub url: Option<String>,

    /// Comma-joined participant addresses, sender first, at most five
    pub attendees: Option<String>,

    pub confidence: Confidence,
}

impl DetectedEvent {
    /// Render the event as JSON for the persistence layer
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Attendee addresses split back out of the joined field
    #[must_use]
    pub fn attendee_list(&self) -> Vec<&str> {
        self.attendees
            .as_deref()
            .map(|a| a.split(", ").collect())
            .unwrap_or_default()
    }
}
