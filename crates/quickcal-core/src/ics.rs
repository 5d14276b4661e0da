//! iCalendar serialization — occurrence lists to a byte-exact `.ics`
//! document.
//!
//! The output contract:
//!
//! - CRLF line endings throughout, with a trailing CRLF.
//! - One VCALENDAR envelope (PRODID, VERSION 2.0, GREGORIAN scale, PUBLISH
//!   method, display name/description), one VEVENT block per occurrence.
//! - Fixed per-event field order: UID, DTSTAMP, DTSTART, DTEND, SUMMARY,
//!   then LOCATION and DESCRIPTION only when non-empty.
//! - All-day events use `VALUE=DATE` markers with an exclusive next-day end;
//!   timed events use floating local `YYYYMMDDTHHMM00` stamps — no `Z`
//!   suffix, no TZID, by design.
//! - Text values are escaped (backslash, newline, comma, semicolon — in that
//!   precedence order, backslash first so later substitutions are not
//!   double-escaped).
//! - Logical lines longer than 75 characters are folded onto continuation
//!   lines prefixed with a single space; no physical line exceeds 75
//!   characters, the continuation space included. Folding counts characters,
//!   an accepted approximation of the octet-based RFC 5545 rule.
//!
//! One UID base token and one DTSTAMP are generated per export and shared by
//! every block in the document; the `_at` constructors take them (and the
//! reference date) explicitly so tests and the export façade stay
//! deterministic.

use crate::expand::expand_at;
use crate::parse::{parse_date_at, today};
use crate::types::{EventRow, EventSpec, TimeOfDay};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Media type of the exported buffer.
pub const MEDIA_TYPE: &str = "text/calendar;charset=utf-8";

const MAX_LINE_CHARS: usize = 75;
const PRODID: &str = "-//Quickcal//EN";
const CALENDAR_NAME: &str = "Quickcal";
const CALENDAR_DESCRIPTION: &str = "Generated with Quickcal";
const UID_DOMAIN: &str = "quickcal.local";

/// Serialize a shared-fields event spec into a complete `.ics` document.
pub fn build_calendar(spec: &EventSpec) -> String {
    build_calendar_at(spec, today(), &utc_dtstamp(), &fresh_uid_token())
}

/// [`build_calendar`] with the reference date, DTSTAMP, and UID base token
/// injected.
pub fn build_calendar_at(
    spec: &EventSpec,
    today: NaiveDate,
    dtstamp: &str,
    uid_token: &str,
) -> String {
    let mut lines = open_envelope();
    for (index, date) in expand_at(&spec.mode, today).into_iter().enumerate() {
        push_event(
            &mut lines,
            &Block {
                date,
                index,
                title: &spec.title,
                location: &spec.location,
                description: &spec.description,
                all_day: spec.all_day,
                start: spec.start_time,
                end: spec.end_time,
            },
            dtstamp,
            uid_token,
        );
    }
    close_envelope(lines)
}

/// Serialize bulk rows into a complete `.ics` document. Rows whose date
/// token does not parse are skipped; their ordinal is still consumed, so
/// UIDs keep the row index.
pub fn build_calendar_rows(rows: &[EventRow]) -> String {
    build_calendar_rows_at(rows, today(), &utc_dtstamp(), &fresh_uid_token())
}

/// [`build_calendar_rows`] with the reference date, DTSTAMP, and UID base
/// token injected.
pub fn build_calendar_rows_at(
    rows: &[EventRow],
    today: NaiveDate,
    dtstamp: &str,
    uid_token: &str,
) -> String {
    let mut lines = open_envelope();
    for (index, row) in rows.iter().enumerate() {
        let Some(date) = parse_date_at(&row.date, today) else {
            continue;
        };
        push_event(
            &mut lines,
            &Block {
                date,
                index,
                title: &row.title,
                location: &row.location,
                description: "",
                all_day: row.all_day,
                start: row.start_time,
                end: row.end_time,
            },
            dtstamp,
            uid_token,
        );
    }
    close_envelope(lines)
}

/// The per-occurrence inputs of one VEVENT block.
struct Block<'a> {
    date: NaiveDate,
    index: usize,
    title: &'a str,
    location: &'a str,
    description: &'a str,
    all_day: bool,
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
}

fn open_envelope() -> Vec<String> {
    vec![
        "BEGIN:VCALENDAR".to_string(),
        format!("PRODID:{PRODID}"),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{CALENDAR_NAME}"),
        format!("X-WR-CALDESC:{CALENDAR_DESCRIPTION}"),
    ]
}

fn close_envelope(mut lines: Vec<String>) -> String {
    lines.push("END:VCALENDAR".to_string());
    let raw = lines.join("\r\n") + "\r\n";
    fold_lines(&raw)
}

fn push_event(lines: &mut Vec<String>, block: &Block<'_>, dtstamp: &str, uid_token: &str) {
    let date_basic = block.date.format("%Y%m%d").to_string();
    let timed = !block.all_day && (block.start.is_some() || block.end.is_some());

    let (dtstart, dtend) = if timed {
        let start = block.start.unwrap_or(TimeOfDay::MIDNIGHT);
        let end = block.end.unwrap_or(TimeOfDay::MIDNIGHT);
        (
            format!("DTSTART:{date_basic}T{}", start.to_basic()),
            format!("DTEND:{date_basic}T{}", end.to_basic()),
        )
    } else {
        // Exclusive end: a single-day all-day event ends the following day.
        let next = block.date.succ_opt().unwrap_or(block.date);
        (
            format!("DTSTART;VALUE=DATE:{date_basic}"),
            format!("DTEND;VALUE=DATE:{}", next.format("%Y%m%d")),
        )
    };

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!(
        "UID:{date_basic}-{}-{uid_token}@{UID_DOMAIN}",
        block.index
    ));
    lines.push(format!("DTSTAMP:{dtstamp}"));
    lines.push(dtstart);
    lines.push(dtend);

    let title = block.title.trim();
    let title = if title.is_empty() { "Event" } else { title };
    lines.push(format!("SUMMARY:{}", escape_text(title)));

    let location = block.location.trim();
    if !location.is_empty() {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    let description = block.description.trim();
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    lines.push("END:VEVENT".to_string());
}

/// Escape a text value for embedding in a content line. Backslash is
/// replaced first so the escapes introduced for newline, comma, and
/// semicolon are not themselves re-escaped.
pub fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// Fold every logical line longer than 75 characters onto continuation
/// lines prefixed with a single space. The prefix counts against the limit:
/// the first chunk carries 75 characters, continuations 74 plus the space.
/// Unfolding (removing every CRLF + single-space pair) reproduces the input
/// exactly.
pub fn fold_lines(raw: &str) -> String {
    let mut folded: Vec<String> = Vec::new();
    for line in raw.split("\r\n") {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() <= MAX_LINE_CHARS {
            folded.push(line.to_string());
            continue;
        }
        let mut position = 0;
        let mut first = true;
        while position < chars.len() {
            let take = if first { MAX_LINE_CHARS } else { MAX_LINE_CHARS - 1 };
            let end = (position + take).min(chars.len());
            let chunk: String = chars[position..end].iter().collect();
            folded.push(if first { chunk } else { format!(" {chunk}") });
            position = end;
            first = false;
        }
    }
    folded.join("\r\n")
}

/// Derive the suggested download filename stem from an event title:
/// lower-cased, whitespace collapsed to hyphens, everything outside
/// `[a-z0-9-]` stripped, with a generic fallback when nothing survives.
pub fn suggested_filename(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    if slug.is_empty() {
        "events".to_string()
    } else {
        slug
    }
}

/// The document-level creation timestamp: the current UTC instant in basic
/// format, computed once per export.
pub(crate) fn utc_dtstamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
}

/// The per-export UID base token shared by every block of one document.
pub(crate) fn fresh_uid_token() -> String {
    Uuid::new_v4().simple().to_string()
}
