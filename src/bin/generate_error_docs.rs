//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `GenerateError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crossgen::errors::GenerateError;
use std::fmt::Write;

/// Helper to create all `GenerateError` variants for documentation
fn all_generate_error_variants() -> Vec<GenerateError> {
    vec![
        GenerateError::EmptyInput,
        GenerateError::WordTooLong { word: "ALGORITHM".to_string(), len: 9, grid_size: 5 },
        GenerateError::InvalidGridSize { rows: 0, cols: 0 },
        GenerateError::MalformedExport { reason: "size says 5 rows but grid has 4".to_string() },
        // Json--create by parsing invalid JSON
        GenerateError::Json(serde_json::from_str::<serde_json::Value>("{oops").unwrap_err()),
    ]
}

/// Render the whole reference document.
fn render_docs(errors: &[GenerateError]) -> String {
    let mut out = String::new();
    // NB: writing to a String never fails
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");
    let _ = writeln!(out, "## Generator Errors\n");
    let _ = writeln!(out, "A word that cannot be placed is not an error; it is reported in the result's `unplaced` list.\n");

    for error in errors {
        let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(out, "**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            let _ = writeln!(out, "**How to fix:**\n```\n{help_text}\n```\n");
        }

        let _ = writeln!(out, "**Example error message:**\n```\n{error}\n```\n");
        let _ = writeln!(out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
        let _ = writeln!(out, "---\n");
    }

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format\n```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```");
    out
}

fn main() {
    print!("{}", render_docs(&all_generate_error_variants()));
}
