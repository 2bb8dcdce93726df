// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Email Event Detection
//!
//! Decides whether an email describes something that belongs on a calendar
//! and, if so, pulls out what kind of event it is, when and where it
//! happens, who takes part and how much to trust the result.
//!
//! # Pipeline
//!
//! - Bulk senders (newsletters, no-reply addresses) are dropped first
//! - Keyword scoring picks a meeting, webinar, deadline or appointment
//! - Date and time tokens are parsed, and dates that look already past
//!   are moved to their next plausible occurrence
//! - Meeting links are tagged by platform; locations come from labelled
//!   lines, place phrases, or the meeting link
//! - Sender and recipients become the attendee list
//! - A fixed rubric turns the signals into a confidence level
//!
//! Detection never fails: an email yields a [`DetectedEvent`] or nothing.
//!
//! # Example
//!
//! ```rust
//! use email_events::{EmailInput, EventType, detect_event_from_email};
//!
//! let email = EmailInput::new(
//!     "msg-1",
//!     "Team Sync",
//!     "Let's meet tomorrow at 3pm. Join: https://zoom.us/j/1234567890",
//!     "alice@company.com",
//!     "bob@company.com",
//! );
//!
//! let event = detect_event_from_email(&email).unwrap();
//! assert_eq!(event.event_type, EventType::Meeting);
//! assert_eq!(event.location.as_deref(), Some("Virtual (zoom)"));
//! ```

mod attendees;
mod classifier;
mod confidence;
mod config;
mod dateparse;
mod detector;
mod error;
mod intake;
mod links;
mod location;
mod patterns;
mod sender;
mod temporal;
mod types;

pub use attendees::{MAX_ATTENDEES, bare_address, extract_attendees};
pub use classifier::{EventScores, detect_event_type, score_event_types};
pub use confidence::score;
pub use config::DetectorConfig;
pub use dateparse::{DateParser, FuzzyDateParser};
pub use detector::{EventDetector, batch_detect_events, detect_event_from_email};
pub use error::{DetectError, Result};
pub use intake::parse_email_input;
pub use links::{extract_meeting_urls, primary_meeting_url};
pub use location::{MAX_LOCATION_CHARS, extract_location, resolve_location};
pub use sender::is_newsletter_sender;
pub use temporal::{
    extract_datetime, extract_datetime_with, find_date_candidates, find_time_candidate,
};
pub use types::*;
