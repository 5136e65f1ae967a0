use crate::errors::GenerateError;
use crate::generator::{generate, GenerateOptions};
use crate::log::init_logger;
use crate::word_list::WordList;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "WASM002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GenerateError> for WasmError {
    fn from(e: GenerateError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn internal_error(code: &str, message: String, description: &str) -> WasmError {
    WasmError {
        code: code.to_string(),
        message,
        description: description.to_string(),
        details: "The puzzle data could not be converted between JavaScript and Rust.".to_string(),
        help: Some("Ensure you're passing a string array of words and an object of word -> clue".to_string()),
    }
}

/// Initialize crossgen logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: (words: string[], clues: {[word]: clue} | null, grid_size, max_attempts, seed?)
/// returns the export object `{ size, grid, clues: { across, down } }`.
#[wasm_bindgen]
pub fn generate_crossword_wasm(
    words: JsValue,
    clues: JsValue,
    grid_size: usize,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| {
        internal_error("WASM001", format!("words must be string[]: {e}"), "Invalid word-list format")
    })?;
    let clues: HashMap<String, String> = if clues.is_null() || clues.is_undefined() {
        HashMap::new()
    } else {
        serde_wasm_bindgen::from_value(clues).map_err(|e| {
            internal_error("WASM002", format!("clues must map words to strings: {e}"), "Invalid clue map")
        })?
    };

    let options = GenerateOptions { grid_size, max_attempts, seed };
    let result = generate(&words, &clues, &options).map_err(WasmError::from)?;
    if !result.unplaced.is_empty() {
        log::info!("Unplaced words: {}", result.unplaced.join(", "));
    }

    serde_wasm_bindgen::to_value(&result.grid.to_export()).map_err(|e| {
        internal_error("WASM003", format!("serialization failed: {e}"), "Failed to serialize puzzle").into()
    })
}

/// Parse a newline-separated `word;clue` list and return `{ words, clues }`.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct Parsed {
        words: Vec<String>,
        clues: HashMap<String, String>,
    }

    let list = WordList::parse_from_str(text);
    serde_wasm_bindgen::to_value(&Parsed { words: list.words, clues: list.clues }).map_err(|e| {
        internal_error("WASM004", format!("serialization failed: {e}"), "Failed to serialize word list").into()
    })
}
