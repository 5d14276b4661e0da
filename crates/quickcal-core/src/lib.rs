//! # quickcal-core
//!
//! Date interpretation and iCalendar serialization engine: free-text and
//! structured date parsing, occurrence-set expansion for single dates,
//! explicit date lists, and weekday recurrences, and byte-exact `.ics`
//! encoding (escaping, 75-character line folding, UID/timestamp generation).
//!
//! The form layer driving this engine stays outside the crate: callers hand
//! over an [`ExportRequest`] (or raw pasted text, for extraction) and get
//! back either a validation message or the finished file buffer with a
//! suggested filename and a recap line. All event times are floating local
//! times — nothing here converts to UTC except the document creation stamp.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quickcal_core::{export_at, ExportRequest};
//!
//! let request: ExportRequest = serde_json::from_str(
//!     r#"{
//!         "title": "Team lunch",
//!         "mode": { "kind": "single", "date": "2024-06-01" },
//!         "all_day": true
//!     }"#,
//! )
//! .unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let result = export_at(&request, today, "20240501T120000Z", "doctoken").unwrap();
//! assert!(result.ics.contains("DTSTART;VALUE=DATE:20240601"));
//! assert_eq!(result.filename, "team-lunch.ics");
//! assert_eq!(result.recap, "1 event on Jun 1, 2024");
//! ```
//!
//! ## Modules
//!
//! - [`parse`] — one date token to a calendar date, multi-grammar
//! - [`extract`] — every recognizable date out of a block of text
//! - [`expand`] — occurrence mode to the ordered set of event dates
//! - [`ics`] — occurrence lists to the folded, escaped `.ics` document
//! - [`validate`] — the gate every request passes before serialization
//! - [`export`] — the one-call façade (validate + serialize + recap)
//! - [`recap`] — the human-readable summary line
//! - [`types`] — request data model
//! - [`error`] — validation failures

pub mod error;
pub mod expand;
pub mod export;
pub mod extract;
pub mod ics;
pub mod parse;
pub mod recap;
pub mod types;
pub mod validate;

pub use error::ValidationError;
pub use expand::{expand, expand_at};
pub use export::{export, export_at, Export};
pub use extract::{
    extract_dates, extract_dates_at, format_date_list, parse_date_list, parse_date_list_at,
};
pub use ics::{
    build_calendar, build_calendar_at, build_calendar_rows, build_calendar_rows_at, escape_text,
    fold_lines, suggested_filename, MEDIA_TYPE,
};
pub use parse::{parse_date, parse_date_at, parse_field_date, parse_field_date_at};
pub use recap::{recap_rows, recap_rows_at, recap_spec, recap_spec_at};
pub use types::{EventRow, EventSpec, ExportRequest, OccurrenceMode, TimeOfDay};
pub use validate::{validate, validate_at, validate_rows};
