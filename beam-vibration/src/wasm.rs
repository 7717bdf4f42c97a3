//! WASM bindings for the beam vibration engine
//!
//! Lets a browser front end run analyses directly, with JSON in and JSON out.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::model::AnalysisRequest;
use crate::results::BeamResults;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<BeamResults>,
    pub ms_elapsed: u64,
}

/// Analyze a beam
///
/// Takes a JSON [`AnalysisRequest`] and returns a JSON [`AnalysisResponse`].
#[wasm_bindgen]
pub fn analyze(request_json: &str) -> String {
    let start = js_sys::Date::now();

    let response = match AnalysisRequest::from_json(request_json).and_then(|r| r.run()) {
        Ok(results) => AnalysisResponse {
            success: true,
            error: None,
            results: Some(results),
            ms_elapsed: elapsed_ms(start),
        },
        Err(e) => AnalysisResponse {
            success: false,
            error: Some(e.to_string()),
            results: None,
            ms_elapsed: elapsed_ms(start),
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}

fn elapsed_ms(start: f64) -> u64 {
    (js_sys::Date::now() - start) as u64
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
