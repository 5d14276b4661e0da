//! End-to-end tests for the `quickcal` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn quickcal() -> Command {
    Command::cargo_bin("quickcal").expect("binary builds")
}

const SINGLE_EVENT: &str = r#"{
    "title": "Team Lunch",
    "mode": { "kind": "single", "date": "2024-06-01" },
    "all_day": true
}"#;

const ROWS: &str = r#"[
    { "title": "Opening", "date": "2024-06-01", "all_day": true },
    { "title": "Closing", "date": "2024-06-08",
      "start_time": "09:00", "end_time": "10:30" }
]"#;

// ============================================================================
// generate
// ============================================================================

#[test]
fn generate_writes_a_calendar_to_stdout() {
    quickcal()
        .arg("generate")
        .write_stdin(SINGLE_EVENT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCALENDAR\r\n"))
        .stdout(predicate::str::contains("DTSTART;VALUE=DATE:20240601"))
        .stdout(predicate::str::contains("DTEND;VALUE=DATE:20240602"))
        .stdout(predicate::str::contains("SUMMARY:Team Lunch"))
        .stdout(predicate::str::ends_with("END:VCALENDAR\r\n"));
}

#[test]
fn generate_handles_bulk_rows() {
    quickcal()
        .arg("generate")
        .write_stdin(ROWS)
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY:Opening"))
        .stdout(predicate::str::contains("DTSTART:20240608T090000"))
        .stdout(predicate::str::contains("DTEND:20240608T103000"));
}

#[test]
fn generate_rejects_an_invalid_request_without_output() {
    quickcal()
        .arg("generate")
        .write_stdin(r#"{"title":"","mode":{"kind":"single","date":"2024-06-01"},"all_day":true}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter an event title."))
        .stdout(predicate::str::is_empty());
}

#[test]
fn generate_rejects_malformed_json() {
    quickcal()
        .arg("generate")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("event request JSON"));
}

#[test]
fn generate_writes_to_a_file() {
    let dir = std::env::temp_dir().join("quickcal-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.ics");

    quickcal()
        .arg("generate")
        .arg("-o")
        .arg(&path)
        .write_stdin(SINGLE_EVENT)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("DTSTART;VALUE=DATE:20240601"));
    std::fs::remove_file(&path).unwrap();
}

// ============================================================================
// extract
// ============================================================================

#[test]
fn extract_prints_one_date_per_line() {
    quickcal()
        .arg("extract")
        .write_stdin("kickoff 2024-09-02, retro on 10/7/2024 thanks")
        .assert()
        .success()
        .stdout("09/02/2024\n10/07/2024\n");
}

#[test]
fn extract_dedupes_across_grammars() {
    quickcal()
        .arg("extract")
        .write_stdin("Meet Jan 5, 2024 and 2024-01-05")
        .assert()
        .success()
        .stdout("01/05/2024\n");
}

#[test]
fn extract_list_mode_parses_line_by_line() {
    quickcal()
        .arg("extract")
        .arg("--list")
        .write_stdin("2024-06-01\nnot a date\n13/5/2024")
        .assert()
        .success()
        .stdout("05/13/2024\n06/01/2024\n");
}

#[test]
fn extract_fails_when_nothing_is_found() {
    quickcal()
        .arg("extract")
        .write_stdin("no dates in here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid dates found."));
}

// ============================================================================
// recap
// ============================================================================

#[test]
fn recap_prints_the_summary_line() {
    quickcal()
        .arg("recap")
        .write_stdin(ROWS)
        .assert()
        .success()
        .stdout("2 events (Jun 1, 2024 to Jun 8, 2024)\n");
}

#[test]
fn recap_counts_unparsed_rows() {
    quickcal()
        .arg("recap")
        .write_stdin(r#"[{ "title": "One", "date": "someday" }]"#)
        .assert()
        .success()
        .stdout("1 row ready.\n");
}
