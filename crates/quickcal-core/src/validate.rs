//! The validation gate — a request must pass every check before any file is
//! produced; export is refused entirely on the first failure.
//!
//! Check order for a single event spec: title, then the occurrence-mode
//! requirement, then the timed-interval check. Bulk rows: at least one row,
//! then per-row title/date presence and the same timed-interval check.
//!
//! Row dates are checked for presence only, matching the form's behavior:
//! a row whose date token later fails to parse is dropped at serialization
//! time rather than rejected here.

use crate::error::{Result, ValidationError};
use crate::expand::expand_at;
use crate::parse::{parse_field_date_at, today};
use crate::types::{EventRow, EventSpec, OccurrenceMode, TimeOfDay};
use chrono::NaiveDate;

/// Validate a single event spec. `Err` carries the human-readable message
/// shown to the user.
pub fn validate(spec: &EventSpec) -> Result<()> {
    validate_at(spec, today())
}

/// [`validate`] with the year-inference reference date injected — the same
/// reference the serializer will expand with.
pub fn validate_at(spec: &EventSpec, today: NaiveDate) -> Result<()> {
    if spec.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    match &spec.mode {
        OccurrenceMode::Single { date } => {
            if date.trim().is_empty() {
                return Err(ValidationError::MissingDate);
            }
            if parse_field_date_at(date, today).is_none() {
                return Err(ValidationError::UnrecognizedDate(date.trim().to_string()));
            }
        }
        OccurrenceMode::ExplicitList { .. } => {
            if expand_at(&spec.mode, today).is_empty() {
                return Err(ValidationError::NoParseableDates);
            }
        }
        OccurrenceMode::WeekdayRecurrence { start, end, weekdays } => {
            if start.trim().is_empty() {
                return Err(ValidationError::MissingRecurrenceStart);
            }
            if end.trim().is_empty() {
                return Err(ValidationError::MissingRecurrenceEnd);
            }
            let Some(start) = parse_field_date_at(start, today) else {
                return Err(ValidationError::UnrecognizedDate(start.trim().to_string()));
            };
            let Some(end) = parse_field_date_at(end, today) else {
                return Err(ValidationError::UnrecognizedDate(end.trim().to_string()));
            };
            if weekdays.is_empty() {
                return Err(ValidationError::NoWeekdays);
            }
            if end < start {
                return Err(ValidationError::RangeInverted);
            }
        }
    }
    check_times(spec.all_day, spec.start_time, spec.end_time, false)
}

/// Validate bulk rows.
pub fn validate_rows(rows: &[EventRow]) -> Result<()> {
    if rows.is_empty() {
        return Err(ValidationError::NoRows);
    }
    for row in rows {
        if row.title.trim().is_empty() || row.date.trim().is_empty() {
            return Err(ValidationError::RowMissingTitleOrDate);
        }
        check_times(row.all_day, row.start_time, row.end_time, true)?;
    }
    Ok(())
}

fn check_times(
    all_day: bool,
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    per_row: bool,
) -> Result<()> {
    if all_day {
        return Ok(());
    }
    let (Some(start), Some(end)) = (start, end) else {
        return Err(ValidationError::MissingTimes);
    };
    if end.minutes() <= start.minutes() {
        return Err(if per_row {
            ValidationError::RowTimesInverted
        } else {
            ValidationError::TimesInverted
        });
    }
    Ok(())
}
