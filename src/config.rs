//! Detector configuration

use crate::error::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Settings for an [`EventDetector`](crate::EventDetector)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Instant treated as "now" when correcting past dates; the local
    /// clock when unset
    pub reference_time: Option<NaiveDateTime>,

    /// Passed to the date parser; skip non-date tokens instead of failing
    pub fuzzy: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            reference_time: None,
            fuzzy: true,
        }
    }
}

impl DetectorConfig {
    /// Load settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pin "now" to a fixed instant
    #[must_use]
    pub const fn with_reference_time(mut self, reference_time: NaiveDateTime) -> Self {
        self.reference_time = Some(reference_time);
        self
    }
}
