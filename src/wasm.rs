//! WASM bindings for browser-based document chunking.
//!
//! This module exposes the chunker and serializer to JavaScript via wasm-bindgen.
//! Chunk lists cross the boundary as JSON arrays of `{type, content, language?}`
//! objects.

use std::path::Path;

use wasm_bindgen::prelude::*;

use crate::document::{RenderConfig, Renderer, parse};
use crate::engine::{EngineConfig, check};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse a document and return its chunks as JSON.
#[wasm_bindgen]
pub fn chunk_document(text: &str) -> Result<String, JsValue> {
    serde_json::to_string(&parse(text)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a document, wrapping prose in raw blocks of `format`.
#[wasm_bindgen]
pub fn render_document(text: &str, format: &str) -> String {
    let config = RenderConfig::default().with_raw_format(format);
    Renderer::with_config(config).render(&parse(text))
}

/// Validate a document against the extension policy for `path`.
///
/// Throws the usage error message when a plain markdown file contains code.
#[wasm_bindgen]
pub fn check_document(path: &str, text: &str) -> Result<(), JsValue> {
    check(&EngineConfig::default(), Path::new(path), &parse(text))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
