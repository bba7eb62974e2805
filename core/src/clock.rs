//! Mock clock — the single source of "now" for synthesized dates.
//!
//! Date fields (billing cut-off, token expiry) are offsets from the
//! clock's reference instant. Pinning the clock makes them reproducible.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MockClock {
    /// Wall-clock time.
    #[default]
    System,
    /// Every call to `now()` returns the same instant.
    Fixed { at: DateTime<Utc> },
}

impl MockClock {
    /// Fixed at midnight UTC of `date`.
    pub fn fixed_on(date: NaiveDate) -> Self {
        Self::Fixed {
            at: date.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed { at } => *at,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
