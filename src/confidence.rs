//! Fixed additive confidence rubric

use crate::types::Confidence;

/// Score the signals found for an event.
///
/// A detected type is worth 1 point, a date 2 and a location or link 1.
/// Four points or more is high, two or three medium, less is low.
#[must_use]
pub fn score(has_type: bool, has_datetime: bool, has_location_or_url: bool) -> Confidence {
    let points = u8::from(has_type) + 2 * u8::from(has_datetime) + u8::from(has_location_or_url);
    match points {
        4.. => Confidence::High,
        2..=3 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rubric() {
        assert_eq!(score(true, true, true), Confidence::High);
        assert_eq!(score(true, true, false), Confidence::Medium);
        assert_eq!(score(true, false, true), Confidence::Medium);
        assert_eq!(score(true, false, false), Confidence::Low);
        assert_eq!(score(false, true, false), Confidence::Medium);
        assert_eq!(score(false, false, false), Confidence::Low);
    }

    #[test]
    fn adding_a_date_never_lowers_confidence() {
        for has_type in [false, true] {
            for has_place in [false, true] {
                assert!(score(has_type, true, has_place) >= score(has_type, false, has_place));
            }
        }
    }
}
