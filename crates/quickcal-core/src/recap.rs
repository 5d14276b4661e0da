//! The recap line — the one-sentence summary shown under the form.

use crate::expand::expand_at;
use crate::parse::{parse_date_at, today};
use crate::types::{EventRow, EventSpec};
use chrono::NaiveDate;

/// Recap for the bulk table: a prompt when empty, a readiness count while
/// no row date parses, otherwise the event count with the first/last dates.
pub fn recap_rows(rows: &[EventRow]) -> String {
    recap_rows_at(rows, today())
}

/// [`recap_rows`] with the year-inference reference date injected.
pub fn recap_rows_at(rows: &[EventRow], today: NaiveDate) -> String {
    if rows.is_empty() {
        return "Paste dates and build your table to see a recap.".to_string();
    }
    let mut dates: Vec<NaiveDate> = rows
        .iter()
        .filter_map(|row| parse_date_at(&row.date, today))
        .collect();
    dates.sort();
    if dates.is_empty() {
        return if rows.len() == 1 {
            "1 row ready.".to_string()
        } else {
            format!("{} rows ready.", rows.len())
        };
    }
    span_phrase(rows.len(), &dates)
}

/// Recap for a single event spec, phrased over its occurrence set.
pub fn recap_spec(spec: &EventSpec) -> String {
    recap_spec_at(spec, today())
}

/// [`recap_spec`] with the year-inference reference date injected.
pub fn recap_spec_at(spec: &EventSpec, today: NaiveDate) -> String {
    let dates = expand_at(&spec.mode, today);
    if dates.is_empty() {
        return "No dates selected yet.".to_string();
    }
    span_phrase(dates.len(), &dates)
}

fn span_phrase(count: usize, dates: &[NaiveDate]) -> String {
    let first = human_date(dates[0]);
    if count == 1 {
        format!("1 event on {first}")
    } else {
        let last = human_date(*dates.last().unwrap_or(&dates[0]));
        format!("{count} events ({first} to {last})")
    }
}

fn human_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
