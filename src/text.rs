//! Plain-text views of a grid: a box-drawn board and a numbered clue listing.

use crate::cell::Cell;
use crate::direction::Direction;
use crate::grid::{Grid, PlacedWord};
use std::fmt::Write;

const FILLED: &str = "███";
const CELL_SEPARATOR: &str = "│";
const ROW_SEGMENT: &str = "───";
const ROW_JOINT: &str = "┼";

impl Grid {
    /// Render the board, three characters per cell.
    ///
    /// Cells without a letter are drawn solid. A letter cell shows its clue number
    /// (right-aligned, width 2) when a word starts there, followed by the letter if
    /// `show_answers` is set.
    #[must_use]
    pub fn to_ascii(&self, show_answers: bool) -> String {
        let numbers = self.origin_numbers();

        let lines: Vec<String> = (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|c| match self.cell(r, c) {
                        Some(Cell::Letter(ch)) => {
                            let num = numbers.get(&(r, c)).map(u32::to_string).unwrap_or_default();
                            let shown = if show_answers { ch } else { ' ' };
                            format!("{num:>2}{shown}")
                        }
                        _ => FILLED.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR)
            })
            .collect();

        let separator = vec![ROW_SEGMENT; self.cols()].join(ROW_JOINT);
        lines.join(format!("\n{separator}\n").as_str())
    }

    /// Numbered clue listing, across then down.
    ///
    /// Words without a clue get a `[Clue for WORD]` placeholder.
    #[must_use]
    pub fn clue_listing(&self) -> String {
        let numbers = self.origin_numbers();
        let number_of = |pw: &PlacedWord| numbers.get(&(pw.row, pw.col)).copied().unwrap_or(0);

        let mut out = String::new();
        for (heading, direction) in [("**ACROSS**", Direction::Across), ("**DOWN**", Direction::Down)] {
            if direction == Direction::Down {
                out.push('\n');
            }
            let mut words: Vec<&PlacedWord> = self.placed_words().iter().filter(|pw| pw.direction == direction).collect();
            words.sort_by_key(|pw| number_of(*pw));

            // NB: writing to a String never fails
            let _ = writeln!(out, "{heading}");
            for pw in words {
                let clue = if pw.clue.is_empty() { format!("[Clue for {}]", pw.word) } else { pw.clue.clone() };
                let _ = writeln!(out, "{}. {clue} ({} letters)", number_of(pw), pw.len());
            }
        }
        out.truncate(out.trim_end_matches('\n').len());
        out
    }
}
