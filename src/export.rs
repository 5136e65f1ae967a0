//! `export` — the serialized puzzle view handed to renderers.
//!
//! Shape (as JSON):
//!
//! ```text
//! {
//!   "size":  { "rows": 3, "cols": 5 },
//!   "grid":  [[".", ".", ".", ".", "."], [".", "C", "A", "T", "."], ...],
//!   "clues": {
//!     "across": [{ "number": 1, "clue": "...", "answer": "CAT", "row": 1, "col": 1, "length": 3 }],
//!     "down":   [...]
//!   }
//! }
//! ```
//!
//! Empty and blocked cells both serialize as `"."`, and so does a placed `.` letter;
//! on re-reading, a `"."` cell covered by a clue answer takes the answer's letter. Clue lists are sorted by number
//! (stable, so placement order breaks ties). Numbers are always derived from word
//! origins when exporting, so an export never carries unassigned (0) numbers.
//!
//! An export can be read back with [`Grid::from_export`]; exporting the result again
//! yields byte-identical JSON.

use crate::cell::{Cell, BLANK_CHAR};
use crate::direction::Direction;
use crate::errors::GenerateError;
use crate::grid::{Grid, PlacedWord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// One numbered clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
    pub answer: String,
    pub row: usize,
    pub col: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClueLists {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

/// The full serialized puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleExport {
    pub size: GridSize,
    pub grid: Vec<Vec<String>>,
    pub clues: ClueLists,
}

impl PuzzleExport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GenerateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// Returns [`GenerateError::Json`] if `json` is not a valid export.
    pub fn from_json(json: &str) -> Result<PuzzleExport, GenerateError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn malformed(reason: String) -> GenerateError {
    GenerateError::MalformedExport { reason }
}

impl Grid {
    /// Build the serialized view, numbering words by origin.
    #[must_use]
    pub fn to_export(&self) -> PuzzleExport {
        let numbers = self.origin_numbers();

        let grid = (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|c| self.cell(r, c).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();

        let mut clues = ClueLists::default();
        for pw in self.placed_words() {
            let entry = ClueEntry {
                number: numbers.get(&(pw.row, pw.col)).copied().unwrap_or(0),
                clue: pw.clue.clone(),
                answer: pw.word.clone(),
                row: pw.row,
                col: pw.col,
                length: pw.len(),
            };
            match pw.direction {
                Direction::Across => clues.across.push(entry),
                Direction::Down => clues.down.push(entry),
            }
        }
        clues.across.sort_by_key(|e| e.number);
        clues.down.sort_by_key(|e| e.number);

        PuzzleExport { size: GridSize { rows: self.rows(), cols: self.cols() }, grid, clues }
    }

    /// Rebuild a grid from its serialized view.
    ///
    /// Placed words are restored across list first, then down list, and renumbered.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MalformedExport`] if the declared size disagrees with the
    /// cell rows, a cell is not a single character, or a clue entry leaves the grid or
    /// disagrees with the cells under it. Returns [`GenerateError::InvalidGridSize`] for
    /// a zero dimension.
    pub fn from_export(export: &PuzzleExport) -> Result<Grid, GenerateError> {
        let GridSize { rows, cols } = export.size;
        if rows == 0 || cols == 0 {
            return Err(GenerateError::InvalidGridSize { rows, cols });
        }
        if export.grid.len() != rows {
            return Err(malformed(format!("size says {rows} rows but grid has {}", export.grid.len())));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in export.grid.iter().enumerate() {
            if row.len() != cols {
                return Err(malformed(format!("row {r} has {} cells, expected {cols}", row.len())));
            }
            for (c, s) in row.iter().enumerate() {
                let mut chars = s.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(BLANK_CHAR), None) => Cell::Empty,
                    (Some(ch), None) => Cell::Letter(ch),
                    _ => return Err(malformed(format!("cell ({r}, {c}) is {s:?}, expected one character"))),
                };
                cells.push(cell);
            }
        }

        let entries = export
            .clues
            .across
            .iter()
            .map(|e| (e, Direction::Across))
            .chain(export.clues.down.iter().map(|e| (e, Direction::Down)));

        let mut placed_words = Vec::new();
        for (entry, direction) in entries {
            let pw = PlacedWord {
                word: entry.answer.clone(),
                row: entry.row,
                col: entry.col,
                direction,
                number: entry.number,
                clue: entry.clue.clone(),
            };
            if pw.is_empty() || pw.len() != entry.length {
                return Err(malformed(format!("entry {} has length {} but answer {:?}", entry.number, entry.length, entry.answer)));
            }
            if pw.row >= rows || pw.col >= cols {
                return Err(malformed(format!("answer {:?} starts outside the grid at ({}, {})", entry.answer, pw.row, pw.col)));
            }
            for ((r, c), expected) in pw.positions().zip(pw.word.chars()) {
                let idx = r * cols + c;
                if r >= rows || c >= cols {
                    return Err(malformed(format!("answer {:?} leaves the grid at ({r}, {c})", entry.answer)));
                }
                // a placed '.' is written out like an empty cell
                if expected == BLANK_CHAR && cells[idx] == Cell::Empty {
                    cells[idx] = Cell::Letter(BLANK_CHAR);
                }
                if cells[idx] != Cell::Letter(expected) {
                    return Err(malformed(format!("answer {:?} does not match the grid at ({r}, {c})", entry.answer)));
                }
            }
            placed_words.push(pw);
        }

        let mut grid = Grid::from_parts(rows, cols, cells, placed_words);
        grid.assign_numbers();
        Ok(grid)
    }
}
