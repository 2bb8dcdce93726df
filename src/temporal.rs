//! Date/time extraction with past-date correction
//!
//! Candidates are tried in three stages, each a fallible step yielding
//! `Option<NaiveDateTime>`:
//!
//! 1. the first date token joined with the first time token,
//! 2. each date token on its own,
//! 3. the whole text.
//!
//! Emails often leave out the year, so a parsed timestamp that lands in the
//! past is moved to the next plausible occurrence. The corrections are
//! bounded so that genuinely old dates are left alone or rejected.

use crate::dateparse::{DateParser, FuzzyDateParser};
use crate::patterns::{DATE_PATTERNS, TIME_PATTERNS};
use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

/// First time-of-day token, taken from the first time pattern that matches
#[must_use]
pub fn find_time_candidate(text: &str) -> Option<&str> {
    TIME_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str())
}

/// All date tokens, grouped by pattern and in text order within a pattern
#[must_use]
pub fn find_date_candidates(text: &str) -> Vec<&str> {
    DATE_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str()))
        .collect()
}

/// Extract the event timestamp from email text using the built-in parser.
///
/// `email_date` is the instant treated as "now" for past-date correction;
/// `None` uses the local clock.
#[must_use]
pub fn extract_datetime(text: &str, email_date: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
    let now = email_date.unwrap_or_else(|| Local::now().naive_local());
    extract_datetime_with(&FuzzyDateParser, text, now, true)
}

/// Extract the event timestamp from `text` through `parser`, relative to `now`.
#[must_use]
pub fn extract_datetime_with<P: DateParser + ?Sized>(
    parser: &P,
    text: &str,
    now: NaiveDateTime,
    fuzzy: bool,
) -> Option<NaiveDateTime> {
    let time = find_time_candidate(text);
    let dates = find_date_candidates(text);
    trace!(?time, ?dates, "temporal candidates");

    let parse = |candidate: &str| match parser.parse(candidate, fuzzy, now) {
        Ok(dt) => Some(dt),
        Err(e) => {
            trace!("date parse failed: {e}");
            None
        }
    };

    combined(&parse, dates.first().copied(), time, now)
        .or_else(|| date_only(&parse, &dates, now))
        .or_else(|| full_text(&parse, text, now))
}

/// Stage 1: first date token plus time token
fn combined(
    parse: &impl Fn(&str) -> Option<NaiveDateTime>,
    date: Option<&str>,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let (date, time) = date.zip(time)?;
    let parsed = parse(&format!("{date} {time}"))?;

    if parsed >= now {
        debug!(%parsed, "date and time from '{date} {time}'");
        return Some(parsed);
    }

    let corrected = if now - parsed < Duration::days(7) {
        one_year_later(parsed)
    } else {
        parsed + Duration::days(7)
    };
    debug!(%parsed, %corrected, "moved past date and time forward");
    Some(corrected)
}

/// Stage 2: each date token alone; the first that parses wins
fn date_only(
    parse: &impl Fn(&str) -> Option<NaiveDateTime>,
    dates: &[&str],
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let (candidate, parsed) = dates
        .iter()
        .find_map(|candidate| parse(*candidate).map(|dt| (candidate, dt)))?;

    if parsed.time() != NaiveTime::MIN || parsed.date() >= now.date() {
        debug!(%parsed, "date from '{candidate}'");
        return Some(parsed);
    }

    let corrected = if (now.date() - parsed.date()).num_days() < 365 {
        one_year_later(parsed)
    } else {
        parsed + Duration::days(7)
    };
    debug!(%parsed, %corrected, "moved past date forward");
    Some(corrected)
}

/// Stage 3: the whole text, with tighter bounds on how far back a date may be
fn full_text(
    parse: &impl Fn(&str) -> Option<NaiveDateTime>,
    text: &str,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let parsed = parse(text)?;

    if parsed >= now - Duration::hours(2) {
        debug!(%parsed, "date from full text");
        return Some(parsed);
    }

    if parsed.year() == now.year() && parsed.month() == now.month() && parsed.day() < now.day() {
        let corrected = one_year_later(parsed);
        debug!(%parsed, %corrected, "moved earlier day of this month to next year");
        return Some(corrected);
    }

    if now - parsed <= Duration::days(60) {
        let corrected = one_year_later(parsed);
        debug!(%parsed, %corrected, "moved recent past date to next year");
        return Some(corrected);
    }

    debug!(%parsed, "rejected date from full text, too far in the past");
    None
}

/// Same month, day and time one year on; Feb 29 falls back to 365 days
fn one_year_later(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_year(dt.year() + 1)
        .unwrap_or_else(|| dt + Duration::days(365))
}
