//! Validation failures surfaced to the caller before any file is produced.
//!
//! Parse failures are not errors — an unrecognized date token is an absent
//! result (`Option::None`) and bulk callers skip it silently. The variants
//! here are the only user-facing failures, and their `Display` strings are
//! shown to the user verbatim.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter an event title.")]
    MissingTitle,

    #[error("No valid dates found. Use D/M/YYYY or Month Day (optional weekday/year).")]
    NoParseableDates,

    #[error("Please pick a date.")]
    MissingDate,

    #[error("Could not understand the date \"{0}\".")]
    UnrecognizedDate(String),

    #[error("Please pick a start date.")]
    MissingRecurrenceStart,

    #[error("Please pick an end date.")]
    MissingRecurrenceEnd,

    #[error("Select at least one weekday.")]
    NoWeekdays,

    #[error("End date must be on or after the start date.")]
    RangeInverted,

    #[error("Provide start and end times or select All day.")]
    MissingTimes,

    #[error("End time must be after start time.")]
    TimesInverted,

    #[error("Add at least one row.")]
    NoRows,

    #[error("Each row needs a title and date.")]
    RowMissingTitleOrDate,

    #[error("Row end time must be after start time.")]
    RowTimesInverted,
}

/// Convenience alias used throughout quickcal-core.
pub type Result<T> = std::result::Result<T, ValidationError>;
