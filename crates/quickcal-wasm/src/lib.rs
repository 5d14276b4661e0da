//! WASM bindings for quickcal-core.
//!
//! The browser form calls these `#[wasm_bindgen]` functions with the same
//! JSON request document the CLI accepts (an event object or an array of
//! rows) and gets strings back; validation and parse failures surface as JS
//! error strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p quickcal-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/quickcal_wasm.wasm
//! ```

use quickcal_core::ExportRequest;
use wasm_bindgen::prelude::*;

fn parse_request(json: &str) -> std::result::Result<ExportRequest, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid event request: {e}")))
}

/// Validate a JSON event request and generate the `.ics` document text.
///
/// Throws the validation message when the request is rejected; no partial
/// document is ever returned.
#[wasm_bindgen]
pub fn generate(json: &str) -> std::result::Result<String, JsValue> {
    let request = parse_request(json)?;
    quickcal_core::export(&request)
        .map(|exported| exported.ics)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Suggested download filename for a JSON event request, derived from the
/// (first) event title. Does not validate the request.
#[wasm_bindgen]
pub fn suggest_filename(json: &str) -> std::result::Result<String, JsValue> {
    let request = parse_request(json)?;
    let title = match &request {
        ExportRequest::Event(spec) => spec.title.clone(),
        ExportRequest::Rows(rows) => rows
            .first()
            .map(|row| row.title.clone())
            .unwrap_or_default(),
    };
    Ok(format!("{}.ics", quickcal_core::suggested_filename(&title)))
}

/// Recap line for a JSON event request ("1 event on Jun 1, 2024", …).
#[wasm_bindgen]
pub fn recap(json: &str) -> std::result::Result<String, JsValue> {
    let request = parse_request(json)?;
    Ok(match &request {
        ExportRequest::Rows(rows) => quickcal_core::recap_rows(rows),
        ExportRequest::Event(spec) => quickcal_core::recap_spec(spec),
    })
}

/// Extract every recognizable date from free-form text, rendered as
/// `MM/DD/YYYY` one per line. Empty when nothing was found.
#[wasm_bindgen]
pub fn extract_dates(text: &str) -> String {
    let dates = quickcal_core::extract_dates(text);
    quickcal_core::format_date_list(&dates)
}
