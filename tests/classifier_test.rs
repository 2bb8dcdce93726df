use email_events::*;

// --- Sender filter ---

#[test]
fn test_newsletter_senders() {
    assert!(is_newsletter_sender("newsletter@milkroad.com"));
    assert!(is_newsletter_sender("NoReply@github.com"));
    assert!(is_newsletter_sender("no-reply@accounts.google.com"));
    assert!(is_newsletter_sender("writer@substack.com"));
    assert!(is_newsletter_sender("bounce-123@mail.vendor.com"));
}

#[test]
fn test_regular_senders() {
    assert!(!is_newsletter_sender("alice@company.com"));
    assert!(!is_newsletter_sender("billing@vendor.com"));
    assert!(!is_newsletter_sender(""));
    assert!(!is_newsletter_sender("   "));
}

// --- Scoring ---

#[test]
fn test_scores_count_every_match() {
    let scores = score_event_types("Webinar registration: register for the webinar today");
    assert_eq!(scores.get(EventType::Webinar), 4);
    assert_eq!(scores.get(EventType::Meeting), 0);
    assert_eq!(scores.total(), 4);
}

#[test]
fn test_scores_are_case_insensitive() {
    let scores = score_event_types("DENTIST APPOINTMENT");
    assert_eq!(scores.get(EventType::Appointment), 2);
}

#[test]
fn test_no_keywords_no_winner() {
    let scores = score_event_types("Here is some unrelated text with no keywords.");
    assert_eq!(scores.total(), 0);
    assert_eq!(scores.winner(), None);
}

// --- Classification ---

#[test]
fn test_detect_meeting() {
    let text = "Team Sync Let's meet tomorrow at 3pm.";
    assert_eq!(detect_event_type(text, None), Some(EventType::Meeting));
}

#[test]
fn test_detect_deadline() {
    let text = "Invoice due Please submit payment by Friday.";
    assert_eq!(
        detect_event_type(text, Some("billing@vendor.com")),
        Some(EventType::Deadline)
    );
}

#[test]
fn test_highest_score_wins() {
    let text = "Quick meeting about the deadline: the deadline is due Friday";
    assert_eq!(detect_event_type(text, None), Some(EventType::Deadline));
}

#[test]
fn test_tie_break_priority() {
    assert_eq!(
        detect_event_type("meeting or webinar", None),
        Some(EventType::Meeting)
    );
    assert_eq!(
        detect_event_type("webinar deadline", None),
        Some(EventType::Webinar)
    );
    assert_eq!(
        detect_event_type("deadline for the appointment", None),
        Some(EventType::Deadline)
    );
}

#[test]
fn test_newsletter_sender_short_circuits() {
    let text = "URGENT MEETING TODAY 3pm zoom.us/j/123";
    assert_eq!(detect_event_type(text, Some("newsletter@milkroad.com")), None);
    assert_eq!(detect_event_type(text, None), Some(EventType::Meeting));
}

#[test]
fn test_keywords_need_word_boundaries() {
    // "recall" and "overdue" do not contain the standalone words
    assert_eq!(detect_event_type("recall the overdue item", None), None);
}
