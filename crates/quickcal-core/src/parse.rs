//! Date token parsing — one free-form string to a calendar date.
//!
//! Grammars are tried in a fixed priority order, first match wins:
//!
//! 1. **ISO**: `YYYY-MM-DD`, exact 4-2-2 digit groups.
//! 2. **Slash form**: `A/B/C` with a 4-digit year, after stripping internal
//!    whitespace. Month/day disambiguation: month-first, unless A > 12 and
//!    B <= 12, in which case the two are swapped (day/month/year). Lossy for
//!    ambiguous inputs like `3/4/2024`, which always reads month-first.
//! 3. **Month-name form**: an optional leading weekday name (with optional
//!    comma) is stripped, ordinal suffixes (`1st`, `22nd`, …) are stripped,
//!    then `MonthName Day[, Year]` with full or abbreviated English month
//!    names (`Sept` is recognized alongside `Sep`). A missing year is
//!    inferred: current year, rolled forward once the date has passed.
//!
//! The structured single-date field uses a sibling grammar
//! ([`parse_field_date`]) that reads `A/B/C` strictly month-first with a
//! 2-4 digit year, expanding 2-digit years by adding 2000.
//!
//! Year inference depends on a reference date; the `_at` variants take it
//! explicitly and are pure, the plain forms use the local current date.
//! Out-of-range components (day 32, Feb 30) are rejected, never rolled over.

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled grammar patterns, built once per process.
struct DatePatterns {
    iso: Regex,
    slash: Regex,
    field_slash: Regex,
    weekday_prefix: Regex,
    ordinal: Regex,
    month_day_year: Regex,
}

impl DatePatterns {
    fn new() -> Self {
        Self {
            iso: Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid pattern"),
            slash: Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid pattern"),
            field_slash: Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4})$").expect("valid pattern"),
            weekday_prefix: Regex::new(
                r"^(?i)(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thu|friday|fri|saturday|sat|sunday|sun)\s*,?\s*",
            )
            .expect("valid pattern"),
            ordinal: Regex::new(r"(?i)(\d+)(?:st|nd|rd|th)").expect("valid pattern"),
            // The day/year separator accepts plain whitespace as well as a
            // comma: windowed extraction consumes commas as token separators,
            // and "Jan 5 2024" must still carry its year.
            month_day_year: Regex::new(
                r"^(?i)(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\s+(\d{1,2})(?:(?:\s*,\s*|\s+)(\d{4}))?$",
            )
            .expect("valid pattern"),
        }
    }
}

fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(DatePatterns::new)
}

/// The local current date, the default reference for year inference.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse one free-form date token. `None` means no grammar matched; bulk
/// callers skip the token, single-date callers reject the input.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    parse_date_at(token, today())
}

/// [`parse_date`] with the year-inference reference date injected.
pub fn parse_date_at(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let raw = token.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(date) = parse_iso(raw) {
        return Some(date);
    }
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(caps) = patterns().slash.captures(&compact) {
        let a: u32 = caps[1].parse().ok()?;
        let b: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        let (month, day) = if a > 12 && b <= 12 { (b, a) } else { (a, b) };
        return ymd(year, month, day);
    }
    parse_month_name(raw, today)
}

/// Parse the structured single-date field: ISO, then strictly month-first
/// `M/D/Y` with a 2-4 digit year (2-digit years expand by adding 2000), then
/// the month-name grammar.
pub fn parse_field_date(token: &str) -> Option<NaiveDate> {
    parse_field_date_at(token, today())
}

/// [`parse_field_date`] with the year-inference reference date injected.
pub fn parse_field_date_at(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let raw = token.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(date) = parse_iso(raw) {
        return Some(date);
    }
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(caps) = patterns().field_slash.captures(&compact) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let year_digits = &caps[3];
        let mut year: i32 = year_digits.parse().ok()?;
        if year_digits.len() == 2 {
            year += 2000;
        }
        return ymd(year, month, day);
    }
    parse_month_name(raw, today)
}

fn parse_iso(raw: &str) -> Option<NaiveDate> {
    let caps = patterns().iso.captures(raw)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    ymd(year, month, day)
}

fn parse_month_name(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let p = patterns();
    let stripped = p.weekday_prefix.replace(raw, "");
    let cleaned = p.ordinal.replace_all(&stripped, "$1");
    let caps = p.month_day_year.captures(cleaned.trim())?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    if let Some(year) = caps.get(3) {
        return ymd(year.as_str().parse().ok()?, month, day);
    }
    // No year given: this year, rolled to next year once the date has passed.
    let candidate = ymd(today.year(), month, day)?;
    if candidate < today {
        ymd(today.year() + 1, month, day)
    } else {
        Some(candidate)
    }
}

fn month_number(name: &str) -> Option<u32> {
    let number = match name.to_ascii_lowercase().as_str() {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(number)
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
