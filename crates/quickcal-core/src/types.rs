//! Data model for event requests.
//!
//! Date-bearing fields are kept as the raw strings the form fields produced;
//! they are parsed with the appropriate grammar during validation and again
//! during expansion, from the same reference date, so the two passes agree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An hour/minute pair with no seconds and no timezone.
///
/// Serialized as an `HH:MM` string, matching the value format of the form's
/// time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Construct a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    /// Parse an `HH:MM` field value (`H:MM` is accepted too).
    pub fn from_hhmm(value: &str) -> Option<Self> {
        let (hour, minute) = value.trim().split_once(':')?;
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    /// Minutes since midnight, the comparison key for interval checks.
    pub fn minutes(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Basic-format time stamp with seconds forced to zero: `HHMM00`.
    pub fn to_basic(self) -> String {
        format!("{:02}{:02}00", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_hhmm(&value)
            .ok_or_else(|| format!("invalid time of day {value:?} (expected HH:MM)"))
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// How the set of dates an event occurs on is described.
///
/// Weekday indices run 0..=6 with 0 = Sunday, matching the form's checkbox
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OccurrenceMode {
    /// Exactly one date, from the structured single-date field.
    Single {
        #[serde(default)]
        date: String,
    },
    /// An unordered, possibly duplicated list of date tokens.
    ExplicitList {
        #[serde(default)]
        dates: Vec<String>,
    },
    /// Every date in the inclusive range whose weekday is in the set.
    WeekdayRecurrence {
        #[serde(default)]
        start: String,
        #[serde(default)]
        end: String,
        #[serde(default)]
        weekdays: BTreeSet<u8>,
    },
}

/// One logical event request with fields shared across all occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpec {
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub mode: OccurrenceMode,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
}

/// One row of the bulk table: every field is per-row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
}

/// The JSON document the CLI and WASM layers accept: an object is a single
/// event spec, an array is a bulk row list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportRequest {
    Rows(Vec<EventRow>),
    Event(Box<EventSpec>),
}
