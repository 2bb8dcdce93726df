//! Natural-language date parsing
//!
//! [`DateParser`] is the seam the temporal extractor parses through.
//! [`FuzzyDateParser`] is the built-in implementation: it understands
//! relative day words, weekday names, month names with a day, numeric and
//! ISO dates and clock times, and fills anything missing from a reference
//! timestamp (its date, at midnight).

use crate::error::{DetectError, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Regex;
use std::sync::LazyLock;

/// Parses loosely structured date/time text
pub trait DateParser: Send + Sync {
    /// Parse `text` into a timestamp.
    ///
    /// Fields absent from the text are taken from `reference`, with the
    /// time of day defaulting to midnight. With `fuzzy` set, tokens that
    /// carry no date information are skipped instead of rejected.
    fn parse(&self, text: &str, fuzzy: bool, reference: NaiveDateTime) -> Result<NaiveDateTime>;
}

/// Built-in English date parser
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyDateParser;

impl FuzzyDateParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DateParser for FuzzyDateParser {
    fn parse(&self, text: &str, fuzzy: bool, reference: NaiveDateTime) -> Result<NaiveDateTime> {
        let tokens = tokenize(text);
        let fields = Fields::collect(&tokens, fuzzy, reference.date(), text)?;
        fields.resolve(reference.date(), text)
    }
}

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(\d{4})-(\d{1,2})-(\d{1,2})",
        r"|(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?",
        r"|(\d{1,2}):(\d{2})(?::(\d{2}))?",
        r"|(\d+)(st|nd|rd|th)?",
        r"|([a-z]+)",
    ))
    .expect("invalid token pattern")
});

/// Words that connect date parts and are accepted even in strict mode
const JUMP_WORDS: &[&str] = &["at", "on", "of", "the", "and", "by"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Number { value: u32, digits: usize, ordinal: bool },
    Clock { hour: u32, minute: u32, second: u32 },
    Slashed { month: u32, day: u32, year: Option<i32> },
    Iso { year: i32, month: u32, day: u32 },
}

fn num<T: std::str::FromStr>(caps: &regex::Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx).and_then(|m| m.as_str().parse().ok())
}

fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            if let (Some(year), Some(month), Some(day)) =
                (num(&caps, 1), num(&caps, 2), num(&caps, 3))
            {
                return Some(Token::Iso { year, month, day });
            }
            if let (Some(month), Some(day)) = (num(&caps, 4), num(&caps, 5)) {
                let year = caps.get(6).and_then(|m| {
                    let y: i32 = m.as_str().parse().ok()?;
                    Some(if m.as_str().len() == 2 { 2000 + y } else { y })
                });
                return Some(Token::Slashed { month, day, year });
            }
            if let (Some(hour), Some(minute)) = (num(&caps, 7), num(&caps, 8)) {
                let second = num(&caps, 9).unwrap_or(0);
                return Some(Token::Clock { hour, minute, second });
            }
            if let Some(digits) = caps.get(10) {
                return Some(Token::Number {
                    value: digits.as_str().parse().unwrap_or(u32::MAX),
                    digits: digits.as_str().len(),
                    ordinal: caps.get(11).is_some(),
                });
            }
            caps.get(12).map(|w| Token::Word(w.as_str().to_lowercase()))
        })
        .collect()
}

fn month_from(word: &str) -> Option<u32> {
    let month = match word.trim_end_matches('.') {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn weekday_from(word: &str) -> Option<Weekday> {
    full_weekday(word).or_else(|| short_weekday(word))
}

fn full_weekday(word: &str) -> Option<Weekday> {
    let weekday = match word {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Abbreviations double as ordinary words ("sat", "sun", "wed")
fn short_weekday(word: &str) -> Option<Weekday> {
    let weekday = match word {
        "mon" => Weekday::Mon,
        "tue" | "tues" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" | "thurs" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Next date falling on `weekday`, counting `from` itself when `inclusive`
fn next_weekday(from: NaiveDate, weekday: Weekday, inclusive: bool) -> NaiveDate {
    let ahead = (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 && !inclusive { 7 } else { ahead };
    from + Duration::days(i64::from(ahead))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Date and time fields picked out of the token stream
#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    /// Date given by a relative word or weekday name
    anchor: Option<NaiveDate>,
    hour: Option<u32>,
    minute: u32,
    second: u32,
    meridiem: Option<Meridiem>,
}

impl Fields {
    fn collect(tokens: &[Token], fuzzy: bool, today: NaiveDate, text: &str) -> Result<Self> {
        let mut fields = Self::default();
        let word_at = |idx: Option<usize>| match idx.and_then(|i| tokens.get(i)) {
            Some(Token::Word(w)) => Some(w.as_str()),
            _ => None,
        };
        let is_month = |idx: Option<usize>| word_at(idx).and_then(month_from).is_some();
        let reject = |what: &str| -> Result<Self> {
            Err(DetectError::InvalidDate(format!(
                "unexpected token '{what}' in '{text}'"
            )))
        };

        let mut i = 0;
        while i < tokens.len() {
            let prev = i.checked_sub(1);
            let next = Some(i + 1);
            match &tokens[i] {
                Token::Iso { year, month, day } => {
                    fields.year = Some(*year);
                    fields.month = Some(*month);
                    fields.day = Some(*day);
                }
                Token::Slashed { month, day, year } => {
                    fields.month = Some(*month);
                    fields.day = Some(*day);
                    if year.is_some() {
                        fields.year = *year;
                    }
                }
                Token::Clock { hour, minute, second } => {
                    fields.hour = Some(*hour);
                    fields.minute = *minute;
                    fields.second = *second;
                }
                Token::Number { value, digits, ordinal } => {
                    let before_meridiem = matches!(word_at(next), Some("am" | "pm"));
                    if *digits <= 2 && (before_meridiem || word_at(prev) == Some("at")) {
                        fields.hour = Some(*value);
                        fields.minute = 0;
                        fields.second = 0;
                    } else if *digits <= 2 && (*ordinal || is_month(prev) || is_month(next)) {
                        fields.day = Some(*value);
                    } else if *digits == 4
                        && (is_month(prev) || (fields.month.is_some() && fields.day.is_some()))
                    {
                        fields.year = i32::try_from(*value).ok();
                    } else if !fuzzy {
                        return reject(&value.to_string());
                    }
                }
                Token::Word(word) => match word.as_str() {
                    "today" => fields.anchor = Some(today),
                    "tomorrow" => fields.anchor = Some(today + Duration::days(1)),
                    "yesterday" => fields.anchor = Some(today - Duration::days(1)),
                    "noon" => {
                        fields.hour = Some(12);
                        fields.meridiem = None;
                    }
                    "midnight" => {
                        fields.hour = Some(0);
                        fields.meridiem = None;
                    }
                    "am" | "pm" if fields.hour.is_some() && sets_hour(tokens, prev) => {
                        fields.meridiem = Some(if word == "am" {
                            Meridiem::Am
                        } else {
                            Meridiem::Pm
                        });
                    }
                    "next" => {
                        if word_at(next) == Some("week") {
                            fields.anchor = Some(today + Duration::days(7));
                            i += 1;
                        } else if let Some(weekday) = word_at(next).and_then(weekday_from) {
                            fields.anchor = Some(next_weekday(today, weekday, false));
                            i += 1;
                        } else if !fuzzy {
                            return reject(word);
                        }
                    }
                    w if JUMP_WORDS.contains(&w) => {}
                    w => {
                        let near_material =
                            has_date_material(tokens, prev) || has_date_material(tokens, next);
                        if let Some(weekday) = full_weekday(w)
                            .or_else(|| short_weekday(w).filter(|_| !fuzzy || near_material))
                        {
                            fields.anchor = Some(next_weekday(today, weekday, true));
                        } else if let Some(month) = month_from(w)
                            && (!fuzzy || has_number(tokens, prev) || has_number(tokens, next))
                        {
                            fields.month = Some(month);
                        } else if !fuzzy {
                            return reject(w);
                        }
                    }
                },
            }
            i += 1;
        }

        Ok(fields)
    }

    const fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.day.is_none()
            && self.anchor.is_none()
            && self.hour.is_none()
    }

    fn resolve(self, today: NaiveDate, text: &str) -> Result<NaiveDateTime> {
        if self.is_empty() {
            return Err(DetectError::NoDate(text.to_string()));
        }
        let invalid = || DetectError::InvalidDate(text.to_string());

        let date = if self.year.is_some() || self.month.is_some() || self.day.is_some() {
            let base = self.anchor.unwrap_or(today);
            let year = self.year.unwrap_or_else(|| base.year());
            let month = self.month.unwrap_or_else(|| base.month());
            let day = self
                .day
                .unwrap_or_else(|| if self.month.is_some() { 1 } else { base.day() });
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?
        } else {
            self.anchor.unwrap_or(today)
        };

        let raw_hour = self.hour.unwrap_or(0);
        let hour = match self.meridiem {
            Some(_) if raw_hour == 0 || raw_hour > 12 => return Err(invalid()),
            Some(Meridiem::Pm) if raw_hour < 12 => raw_hour + 12,
            Some(Meridiem::Am) if raw_hour == 12 => 0,
            _ => raw_hour,
        };
        let time = NaiveTime::from_hms_opt(hour, self.minute, self.second).ok_or_else(invalid)?;

        Ok(date.and_time(time))
    }
}

/// A number or clock time right before a meridiem word
fn sets_hour(tokens: &[Token], idx: Option<usize>) -> bool {
    matches!(
        idx.and_then(|i| tokens.get(i)),
        Some(Token::Number { .. } | Token::Clock { .. })
    )
}

fn has_date_material(tokens: &[Token], idx: Option<usize>) -> bool {
    matches!(
        idx.and_then(|i| tokens.get(i)),
        Some(Token::Number { .. } | Token::Clock { .. } | Token::Slashed { .. } | Token::Iso { .. })
    )
}

fn has_number(tokens: &[Token], idx: Option<usize>) -> bool {
    matches!(
        idx.and_then(|i| tokens.get(i)),
        Some(Token::Number { digits, .. }) if *digits <= 2 || *digits == 4
    )
}
