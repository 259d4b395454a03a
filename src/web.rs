//! Browser entry point.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::Viewer;

/// Runs when the wasm module is instantiated: wire up logging and panics to
/// the console, then start the viewer with default options.
///
/// # Errors
///
/// Returns the startup error as a JS string.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Viewer::builder()
        .build()
        .run()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
