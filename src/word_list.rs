//! `word_list` — load the words (and optional clues) to build a puzzle from.
//!
//! Input is plain text, one entry per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! python;A popular programming language
//! loop;Repeating control structure
//! class
//! ```
//!
//! The parsing logic:
//! - Each line is either `word` or `word;clue`, split on the *first* `;` so clues may
//!   contain semicolons.
//! - Surrounding whitespace is trimmed from both parts.
//! - Lines that are empty, start with `#`, or have an empty word are skipped.
//! - Duplicate words (compared case-insensitively) keep their first occurrence.
//! - Input order is preserved: the generator breaks length ties by it.
//!
//! Like the rest of the crate this module is WASM-friendly: `parse_from_str` works
//! everywhere, `load_from_path` is native-only.

use std::collections::{HashMap, HashSet};

/// Words in input order plus the clues that were supplied for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Words as written in the input (not uppercased).
    pub words: Vec<String>,
    /// `word -> clue`, keyed by the word exactly as it appears in `words`.
    pub clues: HashMap<String, String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut list = WordList::default();
        let mut seen = HashSet::new();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, clue) = match line.split_once(';') {
                Some((w, c)) => (w.trim(), c.trim()),
                None => (line, ""),
            };
            if word.is_empty() || !seen.insert(word.to_uppercase()) {
                continue;
            }

            if !clue.is_empty() {
                list.clues.insert(word.to_string(), clue.to_string());
            }
            list.words.push(word.to_string());
        }

        list
    }

    /// Add words given directly (e.g. on the command line) after the parsed ones,
    /// skipping duplicates.
    pub fn extend_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = self.words.iter().map(|w| w.to_uppercase()).collect();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() && seen.insert(word.to_uppercase()) {
                self.words.push(word.to_string());
            }
        }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;
        Ok(Self::parse_from_str(&data))
    }
}
