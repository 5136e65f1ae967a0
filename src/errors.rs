//! Error types for grid construction, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G005) for documentation lookup:
//!
//! - G001: `EmptyInput` (No words supplied)
//! - G002: `WordTooLong` (Seed word does not fit the grid)
//! - G003: `InvalidGridSize` (Grid dimension is zero)
//! - G004: `MalformedExport` (Serialized puzzle cannot be re-read)
//! - G005: `Json` (JSON (de)serialization failed)
//!
//! A word that could not be placed is *not* an error: it is reported through
//! [`crate::generator::GenerateResult::unplaced`].
//!
//! # Examples
//!
//! ```
//! use crossgen::errors::GenerateError;
//! use crossgen::generator::{generate, GenerateOptions};
//! use std::collections::HashMap;
//!
//! let words: Vec<&str> = vec![];
//! match generate(&words, &HashMap::new(), &GenerateOptions::default()) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("empty input must fail"),
//! }
//! ```

use std::io;

/// Hard failures of the generator and of the serialized view.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("No words to place")]
    EmptyInput,

    #[error("Word \"{word}\" has {len} letters but the grid is only {grid_size} wide")]
    WordTooLong { word: String, len: usize, grid_size: usize },

    #[error("Invalid grid size {rows}x{cols}")]
    InvalidGridSize { rows: usize, cols: usize },

    #[error("Malformed puzzle export: {reason}")]
    MalformedExport { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GenerateError> for io::Error {
    fn from(e: GenerateError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    }
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::EmptyInput => "G001",
            GenerateError::WordTooLong { .. } => "G002",
            GenerateError::InvalidGridSize { .. } => "G003",
            GenerateError::MalformedExport { .. } => "G004",
            GenerateError::Json(_) => "G005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::EmptyInput => "No words supplied",
            GenerateError::WordTooLong { .. } => "Seed word does not fit the grid",
            GenerateError::InvalidGridSize { .. } => "Grid dimension is zero",
            GenerateError::MalformedExport { .. } => "Serialized puzzle cannot be re-read",
            GenerateError::Json(_) => "JSON (de)serialization failed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GenerateError::EmptyInput => "Generation needs at least one non-blank word. No partial grid is produced.",
            GenerateError::WordTooLong { .. } => "The longest word is placed first, centered on the middle row. It must not be longer than the grid is wide.",
            GenerateError::InvalidGridSize { .. } => "Grids need at least one row and one column.",
            GenerateError::MalformedExport { .. } => "The size, cell rows, or clue entries of the serialized puzzle are inconsistent with each other.",
            GenerateError::Json(_) => "The puzzle could not be converted to or from JSON text.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::EmptyInput => Some("Pass at least one word, e.g. 'crossgen CAT CUP TAP'"),
            GenerateError::WordTooLong { .. } => Some("Increase the grid size (--size) or drop the longest word"),
            GenerateError::InvalidGridSize { .. } => Some("Use a grid size of 1 or more (default 15)"),
            GenerateError::MalformedExport { .. } | GenerateError::Json(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
