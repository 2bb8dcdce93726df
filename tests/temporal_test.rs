use chrono::{NaiveDate, NaiveDateTime};
use email_events::*;
use std::sync::Mutex;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Wednesday, mid-morning
fn now() -> NaiveDateTime {
    at(2026, 10, 14, 10, 0)
}

fn extract(text: &str) -> Option<NaiveDateTime> {
    extract_datetime(text, Some(now()))
}

// --- Candidates ---

#[test]
fn test_time_candidate_forms() {
    assert_eq!(find_time_candidate("starts 10:30 am sharp"), Some("10:30 am"));
    assert_eq!(find_time_candidate("starts 3pm"), Some("3pm"));
    assert_eq!(find_time_candidate("starts at 4"), Some("at 4"));
    assert_eq!(find_time_candidate("starts later"), None);
}

#[test]
fn test_date_candidate_forms() {
    assert_eq!(find_date_candidates("see you Monday"), vec!["Monday"]);
    assert_eq!(find_date_candidates("due next week"), vec!["next week"]);
    assert_eq!(find_date_candidates("on Dec 3rd"), vec!["Dec 3rd"]);
    assert_eq!(find_date_candidates("on 11/20/2026"), vec!["11/20/2026"]);
    assert_eq!(
        find_date_candidates("on November 20, 2026"),
        vec!["November 20, 2026"]
    );
}

// --- Date and time together ---

#[test]
fn test_combined_future() {
    assert_eq!(
        extract("Let's meet tomorrow at 3pm."),
        Some(at(2026, 10, 15, 15, 0))
    );
}

#[test]
fn test_combined_recent_past_moves_a_year() {
    assert_eq!(extract("Standup today at 9am"), Some(at(2027, 10, 14, 9, 0)));
}

#[test]
fn test_combined_older_past_moves_a_week() {
    assert_eq!(extract("Review Oct 1 at 2pm"), Some(at(2026, 10, 8, 14, 0)));
}

#[test]
fn test_combined_uses_first_date() {
    assert_eq!(
        extract("Friday or Monday, 11:00 am"),
        Some(at(2026, 10, 16, 11, 0))
    );
}

// --- Date alone ---

#[test]
fn test_weekday_is_upcoming_midnight() {
    assert_eq!(
        extract("Please submit payment by Friday."),
        Some(at(2026, 10, 16, 0, 0))
    );
}

#[test]
fn test_today_is_not_past() {
    assert_eq!(extract("Deadline today"), Some(at(2026, 10, 14, 0, 0)));
}

#[test]
fn test_date_earlier_this_year_moves_a_year() {
    assert_eq!(extract("Due Oct 1"), Some(at(2027, 10, 1, 0, 0)));
}

#[test]
fn test_date_years_ago_moves_a_week() {
    assert_eq!(extract("Due 03/15/2024"), Some(at(2024, 3, 22, 0, 0)));
}

#[test]
fn test_explicit_future_year() {
    assert_eq!(
        extract("Conference on March 5th, 2027"),
        Some(at(2027, 3, 5, 0, 0))
    );
}

// --- Whole text fallback ---

#[test]
fn test_time_only_later_today() {
    assert_eq!(extract("Call at 15:30"), Some(at(2026, 10, 14, 15, 30)));
}

#[test]
fn test_time_only_within_two_hours_is_kept() {
    assert_eq!(extract("Call at 8:30"), Some(at(2026, 10, 14, 8, 30)));
}

#[test]
fn test_time_only_well_past_moves_a_year() {
    assert_eq!(extract("Call at 7:00"), Some(at(2027, 10, 14, 7, 0)));
}

#[test]
fn test_earlier_day_this_month_moves_a_year() {
    assert_eq!(extract("Review on the 3rd"), Some(at(2027, 10, 3, 0, 0)));
}

#[test]
fn test_recent_past_within_sixty_days() {
    assert_eq!(
        extract("Recap of 20 September"),
        Some(at(2027, 9, 20, 0, 0))
    );
}

#[test]
fn test_old_date_rejected() {
    assert_eq!(extract("Planning notes from 5 March"), None);
}

#[test]
fn test_meridiem_word_later_in_prose_is_ignored() {
    assert_eq!(
        extract("Quick call at 3pm. I am free after."),
        Some(at(2026, 10, 14, 15, 0))
    );
}

#[test]
fn test_weekday_abbreviation_in_prose_is_ignored() {
    assert_eq!(
        extract("Call at 3pm, we sat down earlier"),
        Some(at(2026, 10, 14, 15, 0))
    );
}

// --- Failures ---

#[test]
fn test_no_date() {
    assert_eq!(extract("Let's catch up soon"), None);
}

#[test]
fn test_invalid_date_degrades_to_none() {
    assert_eq!(extract("Due Feb 30"), None);
}

struct RecordingParser {
    seen: Mutex<Vec<String>>,
}

impl DateParser for RecordingParser {
    fn parse(&self, text: &str, _fuzzy: bool, _reference: NaiveDateTime) -> Result<NaiveDateTime> {
        self.seen.lock().unwrap().push(text.to_string());
        Err(DetectError::NoDate(text.to_string()))
    }
}

#[test]
fn test_parser_failures_fall_through_every_stage() {
    let parser = RecordingParser {
        seen: Mutex::new(Vec::new()),
    };
    let text = "Sync tomorrow or Friday at 3pm";

    assert_eq!(extract_datetime_with(&parser, text, now(), true), None);

    let seen = parser.seen.into_inner().unwrap();
    assert_eq!(seen, vec!["Friday 3pm", "Friday", "tomorrow", text]);
}
