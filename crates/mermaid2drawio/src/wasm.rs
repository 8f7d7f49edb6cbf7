//! WebAssembly bindings for mermaid2drawio
//!
//! Browser-friendly wrappers around the conversion pipeline. Errors are
//! thrown as JavaScript exceptions carrying the error message.

use wasm_bindgen::prelude::*;

use crate::core::DiagramKind;
use crate::plugins::Orchestrator;

/// Initialize WASM module
///
/// Sets up the panic hook and routes tracing output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Convert Mermaid text to draw.io XML (auto-detects the dialect)
#[wasm_bindgen]
pub fn convert(input: &str) -> Result<String, JsValue> {
    Orchestrator::new()
        .process(input)
        .map_err(|e| JsValue::from_str(&format!("{}", e)))
}

/// Convert Mermaid text as an explicit dialect ("sequence" or "er")
#[wasm_bindgen]
pub fn convert_as(input: &str, diagram_type: &str) -> Result<String, JsValue> {
    let kind: DiagramKind = diagram_type
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    Orchestrator::new()
        .process_as(kind, input)
        .map_err(|e| JsValue::from_str(&format!("{}", e)))
}

/// Name of the detected dialect: "sequence" or "er"
#[wasm_bindgen]
pub fn detect(input: &str) -> String {
    Orchestrator::new().detect_diagram_type(input).to_string()
}

/// Parse Mermaid text and return JSON with the dialect and element counts
///
/// Fields: diagram_type, node_count, edge_count, error
#[wasm_bindgen]
pub fn summary(input: &str) -> String {
    match Orchestrator::new().parse(input) {
        Ok(diagram) => serde_json::json!({
            "diagram_type": diagram.kind().as_str(),
            "node_count": diagram.node_count(),
            "edge_count": diagram.edge_count(),
            "error": null
        })
        .to_string(),
        Err(e) => serde_json::json!({
            "diagram_type": null,
            "node_count": 0,
            "edge_count": 0,
            "error": format!("{}", e)
        })
        .to_string(),
    }
}
