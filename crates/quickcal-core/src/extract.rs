//! Date-list extraction — harvesting every recognizable date from a block of
//! text.
//!
//! Two contexts share the same dedup+sort tail:
//!
//! - **Prose mode** ([`extract_dates`]): split on whitespace, commas,
//!   semicolons, newlines, and tabs, then try 1-3-token candidate windows at
//!   every position so both single-token dates (`2024-01-05`, `3/14/2024`)
//!   and multi-token phrases (`Jan 5, 2024`) are found. Windows overlap by
//!   design; correctness relies on deduplication, not non-overlap.
//! - **List mode** ([`parse_date_list`]): the caller already intends one
//!   date per line/field, so split on separator boundaries only and parse
//!   each piece independently.
//!
//! Unparseable pieces are skipped silently in both modes.

use crate::parse::{parse_date_at, today};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// A comma glued to a 4-digit year is normalized to `", "` before parsing,
/// so `Jan 5,2024`-style spacing still matches the month-name grammar.
fn comma_before_year() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*,\s*(\d{4})\b").expect("valid pattern"))
}

fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

fn is_list_separator(c: char) -> bool {
    matches!(c, '\n' | '\r' | ',' | ';' | '\t')
}

/// Scan free-form prose and return every recognizable date, ascending and
/// deduplicated by calendar day.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    extract_dates_at(text, today())
}

/// [`extract_dates`] with the year-inference reference date injected.
pub fn extract_dates_at(text: &str, today: NaiveDate) -> Vec<NaiveDate> {
    let tokens: Vec<&str> = text.split(is_token_separator).filter(|t| !t.is_empty()).collect();
    let mut found = BTreeSet::new();
    for start in 0..tokens.len() {
        let widest = (tokens.len() - start).min(3);
        // Widest window first, keeping only one parse per position: a
        // year-bearing phrase must not also surface as its year-inferred
        // prefix ("Jan 5, 2024" would otherwise add a second "Jan 5").
        for width in (1..=widest).rev() {
            let candidate = tokens[start..start + width].join(" ");
            let candidate = comma_before_year().replace(&candidate, ", $1");
            if let Some(date) = parse_date_at(&candidate, today) {
                found.insert(date);
                break;
            }
        }
    }
    found.into_iter().collect()
}

/// Parse a separator-delimited date list (newline/comma/semicolon/tab), one
/// date per piece, ascending and deduplicated.
pub fn parse_date_list(text: &str) -> Vec<NaiveDate> {
    parse_date_list_at(text, today())
}

/// [`parse_date_list`] with the year-inference reference date injected.
pub fn parse_date_list_at(text: &str, today: NaiveDate) -> Vec<NaiveDate> {
    let mut found = BTreeSet::new();
    for piece in text.split(is_list_separator) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        if let Some(date) = parse_date_at(piece, today) {
            found.insert(date);
        }
    }
    found.into_iter().collect()
}

/// Render recovered dates as `MM/DD/YYYY`, one per line — the "clean list"
/// output of the paste-reformat feature.
pub fn format_date_list(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|date| date.format("%m/%d/%Y").to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
