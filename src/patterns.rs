//! Static pattern tables shared by the extractors
//!
//! Every table is compiled once on first use and shared read-only. Per-type
//! and per-platform tables are reached through exhaustive `match`es on the
//! closed enums, so a new variant cannot be added without giving it patterns.

use crate::types::{EventType, Platform};
use regex::Regex;
use std::sync::LazyLock;

/// Compile case-insensitive patterns
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid built-in pattern"))
        .collect()
}

// --- Event type keywords ---

static MEETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bmeeting\b",
        r"\bmeet\b",
        r"\bcall\b",
        r"\bsync\b",
        r"\bstand-?up\b",
        r"\b1:1\b",
        r"\bone[- ]on[- ]one\b",
        r"\bcatch[- ]up\b",
        r"\bcheck[- ]in\b",
        r"\bdiscussion\b",
        r"\bzoom\b",
        r"\bgoogle meet\b",
        r"\binterview\b",
        r"\bkick-?off\b",
    ])
});

static WEBINAR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bwebinar\b",
        r"\bworkshop\b",
        r"\bregister for\b",
        r"\bregistration\b",
        r"\bseminar\b",
        r"\bmasterclass\b",
        r"\blive session\b",
        r"\blivestream\b",
        r"\bvirtual event\b",
        r"\btraining session\b",
    ])
});

static DEADLINE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bdeadline\b",
        r"\bdue\b",
        r"\bexpires?\b",
        r"\bexpiring\b",
        r"\bsubmit by\b",
        r"\blast day\b",
        r"\bno later than\b",
        r"\bcut-?off\b",
    ])
});

static APPOINTMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bappointment\b",
        r"\bdoctor\b",
        r"\bdentist\b",
        r"\bclinic\b",
        r"\bcheck-?up\b",
        r"\bconsultation\b",
        r"\breservation\b",
        r"\bbooking confirm(?:ed|ation)\b",
        r"\bhair ?cut\b",
        r"\btherapy\b",
    ])
});

/// Keyword patterns scored for an event type
#[must_use]
pub fn event_patterns(event_type: EventType) -> &'static [Regex] {
    match event_type {
        EventType::Meeting => &MEETING_PATTERNS,
        EventType::Webinar => &WEBINAR_PATTERNS,
        EventType::Deadline => &DEADLINE_PATTERNS,
        EventType::Appointment => &APPOINTMENT_PATTERNS,
    }
}

// --- Bulk senders ---

/// Substrings of lower-cased sender addresses that mark bulk mail
pub const NEWSLETTER_SENDER_MARKERS: &[&str] = &[
    "noreply@",
    "no-reply@",
    "donotreply@",
    "do-not-reply@",
    "newsletter@",
    "newsletters@",
    "news@",
    "marketing@",
    "promotions@",
    "promo@",
    "digest@",
    "mailer-daemon@",
    "bounce",
    "@substack.com",
    "beehiiv.com",
    "mailchimp",
    "mcsv.net",
    "convertkit",
    "sendgrid.net",
    "mailgun",
    "constantcontact",
    "hubspotemail",
];

// --- Temporal tokens ---

/// Time-of-day tokens, tried in order; the first pattern with a match wins
pub static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b\d{1,2}:\d{2}(?:\s*[ap]m)?\b",
        r"\b\d{1,2}\s*[ap]m\b",
        r"\bat\s+\d{1,2}(?::\d{2})?\b",
    ])
});

/// Date tokens; every match of every pattern is a candidate, in pattern order
pub static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        r"\b(?:today|tomorrow|next week)\b",
        r"\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+\d{1,2}(?:st|nd|rd|th)?\b",
        r"\b\d{1,2}/\d{1,2}/\d{2}(?:\d{2})?\b",
        r"\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s+\d{4})?\b",
    ])
});

// --- Links ---

static ZOOM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:https?://)?(?:[a-z0-9-]+\.)*zoom\.us/(?:j|my|w|wc)/[^\s<>"'\)\]]+"#)
        .expect("invalid Zoom pattern")
});

static MEET_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:https?://)?meet\.google\.com/[^\s<>"'\)\]]+"#)
        .expect("invalid Meet pattern")
});

static TEAMS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:https?://)?teams\.(?:microsoft|live)\.com/[^\s<>"'\)\]]+"#)
        .expect("invalid Teams pattern")
});

static GENERIC_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"'\)\]]+"#).expect("invalid URL pattern")
});

/// Link pattern for a platform
#[must_use]
pub fn url_pattern(platform: Platform) -> &'static Regex {
    match platform {
        Platform::Zoom => &ZOOM_URL,
        Platform::GoogleMeet => &MEET_URL,
        Platform::Teams => &TEAMS_URL,
        Platform::Generic => &GENERIC_URL,
    }
}

// --- Locations ---

/// `Location: ...` style lines; group 1 is the value
pub static EXPLICIT_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:location|where|address|venue)\s*:[ \t]*([^\r\n]+)")
        .expect("invalid location pattern")
});

/// `at <Capitalized Place> Room|Building|Street|...`; group 1 is the place.
/// Case-sensitive so that ordinary lower-case prose does not match.
pub static PLACE_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b[Aa]t\s+(",
        r"(?:[A-Z0-9][\w'&.-]*\s+)+",
        r"(?:(?:Room|Building|Street|Avenue|Road|Boulevard|Hall|Center|Centre|Office|Suite|Floor|Cafe|Restaurant|Hotel|Library|Park)\b|(?:St|Ave|Rd|Blvd)\.)",
        r"(?:\s+[A-Z0-9][A-Za-z0-9-]{0,4}\b)?",
        r")",
    ))
    .expect("invalid place pattern")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_type_has_patterns() {
        for event_type in EventType::ALL {
            assert!(!event_patterns(event_type).is_empty(), "{event_type}");
        }
    }

    #[test]
    fn time_patterns_prefer_clock_times() {
        let text = "see you at 4 or 10:30 am";
        let first = TIME_PATTERNS
            .iter()
            .find_map(|re| re.find(text))
            .map(|m| m.as_str());
        assert_eq!(first, Some("10:30 am"));
    }

    #[test]
    fn month_abbreviation_does_not_swallow_full_names() {
        assert!(!DATE_PATTERNS[2].is_match("March 5"));
        assert!(DATE_PATTERNS[2].is_match("Mar 5"));
        assert!(DATE_PATTERNS[4].is_match("March 5th, 2027"));
    }

    #[test]
    fn place_pattern_takes_trailing_identifier() {
        let caps = PLACE_LOCATION
            .captures("We will be at Conference Room B tomorrow")
            .unwrap();
        assert_eq!(&caps[1], "Conference Room B");
    }
}
