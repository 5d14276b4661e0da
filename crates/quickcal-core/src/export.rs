//! The export façade — the single seam the form layer calls.
//!
//! One call validates the request, serializes the document, derives the
//! suggested filename, and renders the recap, all from one captured
//! reference date and creation instant, so the validation-time and
//! serialization-time occurrence sets always agree.

use crate::error::Result;
use crate::ics::{
    build_calendar_at, build_calendar_rows_at, fresh_uid_token, suggested_filename, utc_dtstamp,
};
use crate::parse::today;
use crate::recap::{recap_rows_at, recap_spec_at};
use crate::types::ExportRequest;
use crate::validate::{validate_at, validate_rows};
use chrono::NaiveDate;

/// A finished export: the document bytes, the suggested download filename,
/// and the human-readable recap line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub ics: String,
    pub filename: String,
    pub recap: String,
}

/// Validate and export a request. `Err` carries the message to surface to
/// the user; no partial file is ever produced.
pub fn export(request: &ExportRequest) -> Result<Export> {
    export_at(request, today(), &utc_dtstamp(), &fresh_uid_token())
}

/// [`export`] with the reference date, DTSTAMP, and UID base token injected.
pub fn export_at(
    request: &ExportRequest,
    today: NaiveDate,
    dtstamp: &str,
    uid_token: &str,
) -> Result<Export> {
    match request {
        ExportRequest::Event(spec) => {
            validate_at(spec, today)?;
            Ok(Export {
                ics: build_calendar_at(spec, today, dtstamp, uid_token),
                filename: format!("{}.ics", suggested_filename(&spec.title)),
                recap: recap_spec_at(spec, today),
            })
        }
        ExportRequest::Rows(rows) => {
            validate_rows(rows)?;
            let first_title = rows.first().map(|row| row.title.as_str()).unwrap_or("");
            Ok(Export {
                ics: build_calendar_rows_at(rows, today, dtstamp, uid_token),
                filename: format!("{}.ics", suggested_filename(first_title)),
                recap: recap_rows_at(rows, today),
            })
        }
    }
}
