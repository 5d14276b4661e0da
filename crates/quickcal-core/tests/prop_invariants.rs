//! Property-based tests for the parser, serializer helpers, and expander.
//!
//! These verify invariants that should hold for *any* input in range, not
//! just the specific examples in the unit test files.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use quickcal_core::{
    escape_text, expand_at, fold_lines, parse_date, parse_field_date, OccurrenceMode,
};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Year/month/day triples with day capped at 28 to stay valid in any month.
fn arb_ymd() -> impl Strategy<Value = (i32, u32, u32)> {
    (1970i32..=2100, 1u32..=12, 1u32..=28)
}

/// Content lines that survive unfolding unambiguously: no CR/LF, and no
/// leading space (real content lines never start with one — that is the
/// continuation marker).
fn arb_content_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        proptest::string::string_regex("[!-~][ -~]{0,150}").expect("valid regex"),
    ]
}

/// Text with the characters the escaper cares about well represented.
fn arb_text_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 ,;\\\\\n]{0,80}").expect("valid regex")
}

/// A weekday set drawn from a 7-bit mask (possibly empty).
fn arb_weekdays() -> impl Strategy<Value = BTreeSet<u8>> {
    (0u8..=127).prop_map(|mask| (0u8..7).filter(|bit| mask & (1 << bit) != 0).collect())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Reverse of `escape_text`.
fn unescape(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Property 1: ISO strings round-trip through the parser
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn iso_round_trips((y, m, d) in arb_ymd()) {
        let token = format!("{y:04}-{m:02}-{d:02}");
        prop_assert_eq!(parse_date(&token), NaiveDate::from_ymd_opt(y, m, d));
    }
}

// ---------------------------------------------------------------------------
// Property 2: the slash swap heuristic agrees with the plain reading
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slash_swap_matches_plain_reading(
        day in 13u32..=28,
        month in 1u32..=12,
        year in 1970i32..=2100,
    ) {
        let swapped = parse_date(&format!("{day}/{month}/{year}"));
        let plain = parse_date(&format!("{month}/{day}/{year}"));
        prop_assert_eq!(swapped, NaiveDate::from_ymd_opt(year, month, day));
        prop_assert_eq!(plain, swapped);
    }
}

// ---------------------------------------------------------------------------
// Property 3: the field grammar expands 2-digit years by 2000
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn field_grammar_expands_short_years(
        month in 1u32..=12,
        day in 1u32..=28,
        year in 0i32..=99,
    ) {
        let token = format!("{month}/{day}/{year:02}");
        prop_assert_eq!(
            parse_field_date(&token),
            NaiveDate::from_ymd_opt(2000 + year, month, day)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: escaping round-trips and leaves no raw newline behind
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn escape_round_trips(value in arb_text_value()) {
        let escaped = escape_text(&value);
        prop_assert!(!escaped.contains('\n'));
        prop_assert_eq!(unescape(&escaped), value);
    }
}

// ---------------------------------------------------------------------------
// Property 5: folding bounds every physical line and unfolds losslessly
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn folding_bounds_lines_and_unfolds_losslessly(
        lines in proptest::collection::vec(arb_content_line(), 0..8),
    ) {
        let raw = lines.join("\r\n");
        let folded = fold_lines(&raw);
        for physical in folded.split("\r\n") {
            prop_assert!(physical.chars().count() <= 75);
        }
        prop_assert_eq!(folded.replace("\r\n ", ""), raw);
    }
}

// ---------------------------------------------------------------------------
// Property 6: recurrence expansion is ordered, in range, and exhaustive
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn recurrence_is_ordered_in_range_and_exhaustive(
        (y, m, d) in (2020i32..=2030, 1u32..=12, 1u32..=28),
        span_days in 0u64..=120,
        weekdays in arb_weekdays(),
    ) {
        let start = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let end = start
            .checked_add_days(chrono::Days::new(span_days))
            .unwrap();
        let mode = OccurrenceMode::WeekdayRecurrence {
            start: start.format("%Y-%m-%d").to_string(),
            end: end.format("%Y-%m-%d").to_string(),
            weekdays: weekdays.clone(),
        };
        let got = expand_at(&mode, start);

        for window in got.windows(2) {
            prop_assert!(window[0] < window[1], "not strictly ascending");
        }
        for occurrence in &got {
            prop_assert!(*occurrence >= start && *occurrence <= end);
            let index = occurrence.weekday().num_days_from_sunday() as u8;
            prop_assert!(weekdays.contains(&index));
        }

        // Exhaustive: an independent walk finds exactly the same days.
        let mut expected = Vec::new();
        let mut day = start;
        while day <= end {
            if weekdays.contains(&(day.weekday().num_days_from_sunday() as u8)) {
                expected.push(day);
            }
            day = day.succ_opt().unwrap();
        }
        prop_assert_eq!(got, expected);
    }
}
