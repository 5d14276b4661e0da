//! Occurrence expansion — from an occurrence mode to the concrete, ordered
//! set of calendar dates an event takes place on.
//!
//! Pure given the reference date: the same mode and reference always produce
//! the same sequence, ascending and deduplicated by calendar day. Validation
//! and serialization both call this with one shared reference date per
//! export, so the two passes agree.

use crate::extract::parse_date_list_at;
use crate::parse::{parse_field_date_at, today};
use crate::types::OccurrenceMode;
use chrono::{Datelike, NaiveDate};

/// Expand an occurrence mode into its ordered, deduplicated date sequence.
pub fn expand(mode: &OccurrenceMode) -> Vec<NaiveDate> {
    expand_at(mode, today())
}

/// [`expand`] with the year-inference reference date injected.
///
/// - `Single`: one element, or empty when the token does not parse (the
///   validation gate rejects that case before serialization).
/// - `ExplicitList`: list-mode extraction over the tokens; unparseable
///   tokens are dropped silently.
/// - `WeekdayRecurrence`: every date in the inclusive range whose weekday
///   index (0 = Sunday) is in the set. An inverted range or an empty set
///   yields an empty sequence. Range length is not bounded here; callers
///   guard against unbounded ranges if they need to.
pub fn expand_at(mode: &OccurrenceMode, today: NaiveDate) -> Vec<NaiveDate> {
    match mode {
        OccurrenceMode::Single { date } => {
            parse_field_date_at(date, today).into_iter().collect()
        }
        OccurrenceMode::ExplicitList { dates } => parse_date_list_at(&dates.join("\n"), today),
        OccurrenceMode::WeekdayRecurrence { start, end, weekdays } => {
            let (Some(start), Some(end)) =
                (parse_field_date_at(start, today), parse_field_date_at(end, today))
            else {
                return Vec::new();
            };
            let mut occurrences = Vec::new();
            let mut day = start;
            while day <= end {
                let index = day.weekday().num_days_from_sunday() as u8;
                if weekdays.contains(&index) {
                    occurrences.push(day);
                }
                let Some(next) = day.succ_opt() else { break };
                day = next;
            }
            occurrences
        }
    }
}
