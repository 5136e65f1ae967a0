//! The grid model: a board of [`Cell`]s plus the words placed on it.
//!
//! Every placed word reads back exactly from the cells it covers, and when a word is
//! placed there is no letter directly before its first cell or after its last cell
//! (in its own direction), so two runs never fuse into one longer word.
//!
//! Only the start/end neighbors are checked. Letters running alongside a word (the
//! cells above/below an across word) are left alone, so a later crossing word may
//! still land next to an earlier word's end.

use crate::cell::Cell;
use crate::direction::Direction;
use crate::errors::GenerateError;
use std::collections::{BTreeMap, BTreeSet};

/// Uppercase a word the way the grid stores it.
pub(crate) fn normalize(word: &str) -> String {
    word.to_uppercase()
}

/// A word that has been written into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// Uppercase answer.
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Clue number; 0 until [`Grid::assign_numbers`] runs.
    pub number: u32,
    /// Clue text, possibly empty.
    pub clue: String,
}

impl PlacedWord {
    /// Number of letters (not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// `(row, col)` of every letter, in reading order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.len()).map(move |i| (self.row + dr * i, self.col + dc * i))
    }
}

/// A candidate position for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    #[must_use]
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Placement { row, col, direction }
    }
}

/// A `rows × cols` crossword board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` long.
    cells: Vec<Cell>,
    placed_words: Vec<PlacedWord>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidGridSize`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GenerateError> {
        if rows == 0 || cols == 0 {
            return Err(GenerateError::InvalidGridSize { rows, cols });
        }
        Ok(Grid { rows, cols, cells: vec![Cell::Empty; rows * cols], placed_words: Vec::new() })
    }

    /// Assemble a grid from already-consistent parts (used when re-reading an export).
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>, placed_words: Vec<PlacedWord>) -> Grid {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells, placed_words }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.at(row, col))
    }

    /// Number of cells holding a letter.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_letter()).count()
    }

    /// Mark a cell as blocked. Returns `false` (and changes nothing) if the cell is
    /// outside the grid or already holds a letter.
    pub fn block(&mut self, row: usize, col: usize) -> bool {
        match self.cell(row, col) {
            Some(Cell::Empty | Cell::Blocked) => {
                self.cells[row * self.cols + col] = Cell::Blocked;
                true
            }
            _ => false,
        }
    }

    fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn is_letter_at(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_letter)
    }

    /// Check whether `word` can be written at `(row, col)` running in `direction`.
    ///
    /// In order:
    /// 1. the whole word must lie inside the grid;
    /// 2. the cells just before the first letter and just after the last letter must not
    ///    hold letters;
    /// 3. every covered cell must be empty or already hold the same letter (the latter is
    ///    an intersection). Blocked cells reject.
    ///
    /// The word is compared uppercased. An empty word never fits.
    #[must_use]
    pub fn can_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        let letters: Vec<char> = normalize(word).chars().collect();
        self.fits(&letters, Placement::new(row, col, direction))
    }

    fn fits(&self, letters: &[char], at: Placement) -> bool {
        let len = letters.len();
        if len == 0 || at.row >= self.rows || at.col >= self.cols {
            return false;
        }
        let (dr, dc) = at.direction.step();
        let fits_extent = match at.direction {
            Direction::Across => at.col + len <= self.cols,
            Direction::Down => at.row + len <= self.rows,
        };
        if !fits_extent {
            return false;
        }

        if let (Some(r), Some(c)) = (at.row.checked_sub(dr), at.col.checked_sub(dc)) {
            if self.is_letter_at(r, c) {
                return false;
            }
        }
        if self.is_letter_at(at.row + dr * len, at.col + dc * len) {
            return false;
        }

        letters
            .iter()
            .enumerate()
            .all(|(i, &ch)| self.at(at.row + dr * i, at.col + dc * i).accepts(ch))
    }

    /// Write `word` (uppercased) into the grid and record it.
    ///
    /// Precondition: [`Grid::can_place`] returned `true` for the same arguments. This is
    /// not re-checked in release builds; breaking it leaves the grid inconsistent.
    pub fn place(&mut self, word: &str, row: usize, col: usize, direction: Direction, clue: &str) -> &PlacedWord {
        debug_assert!(
            self.can_place(word, row, col, direction),
            "place({word:?}, {row}, {col}, {direction}) called on an illegal position"
        );
        let word = normalize(word);
        let (dr, dc) = direction.step();
        for (i, ch) in word.chars().enumerate() {
            let idx = (row + dr * i) * self.cols + col + dc * i;
            self.cells[idx] = Cell::Letter(ch);
        }
        self.placed_words.push(PlacedWord { word, row, col, direction, number: 0, clue: clue.to_string() });
        let last = self.placed_words.len() - 1;
        &self.placed_words[last]
    }

    /// Every legal position where `word` crosses an already placed word on a shared
    /// letter.
    ///
    /// Iterates placed words, then letters of `word`, then letters of the placed word;
    /// results come back in that order, unranked and possibly repeated.
    #[must_use]
    pub fn find_intersections(&self, word: &str) -> Vec<Placement> {
        let letters: Vec<char> = normalize(word).chars().collect();
        let mut positions = Vec::new();

        for placed in &self.placed_words {
            let placed_letters: Vec<char> = placed.word.chars().collect();
            for (i, &letter) in letters.iter().enumerate() {
                for (j, &placed_letter) in placed_letters.iter().enumerate() {
                    if letter != placed_letter {
                        continue;
                    }
                    // Shift the new word back by `i` so its i-th letter sits on the shared cell.
                    let origin = match placed.direction {
                        Direction::Across => (placed.row.checked_sub(i), Some(placed.col + j)),
                        Direction::Down => (Some(placed.row + j), placed.col.checked_sub(i)),
                    };
                    if let (Some(row), Some(col)) = origin {
                        let candidate = Placement::new(row, col, placed.direction.perpendicular());
                        if self.fits(&letters, candidate) {
                            positions.push(candidate);
                        }
                    }
                }
            }
        }

        positions
    }

    /// Clue number for each distinct origin, row-major from 1.
    pub(crate) fn origin_numbers(&self) -> BTreeMap<(usize, usize), u32> {
        let origins: BTreeSet<(usize, usize)> = self.placed_words.iter().map(|pw| (pw.row, pw.col)).collect();
        origins.into_iter().zip(1..).collect()
    }

    /// Number every placed word by its origin. Words sharing an origin share a number.
    pub fn assign_numbers(&mut self) {
        let numbers = self.origin_numbers();
        for pw in &mut self.placed_words {
            pw.number = numbers.get(&(pw.row, pw.col)).copied().unwrap_or(0);
        }
    }

    /// Shrink the grid to the bounding box of its letters plus a one-cell border
    /// (clamped to the current extent). Placed words are shifted accordingly.
    /// A grid with no letters is returned unchanged.
    #[must_use]
    pub fn trim(self) -> Grid {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.at(r, c).is_letter() {
                    bounds = Some(match bounds {
                        None => (r, r, c, c),
                        Some((r0, r1, c0, c1)) => (r0.min(r), r1.max(r), c0.min(c), c1.max(c)),
                    });
                }
            }
        }
        let Some((min_row, max_row, min_col, max_col)) = bounds else {
            return self;
        };

        let top = min_row.saturating_sub(1);
        let bottom = (max_row + 1).min(self.rows - 1);
        let left = min_col.saturating_sub(1);
        let right = (max_col + 1).min(self.cols - 1);
        let rows = bottom - top + 1;
        let cols = right - left + 1;

        let mut cells = Vec::with_capacity(rows * cols);
        for r in top..=bottom {
            cells.extend_from_slice(&self.cells[r * self.cols + left..=r * self.cols + right]);
        }

        let placed_words = self
            .placed_words
            .into_iter()
            .map(|pw| PlacedWord { row: pw.row - top, col: pw.col - left, ..pw })
            .collect();

        Grid { rows, cols, cells, placed_words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Across, Down};

    fn grid_with_cat() -> Grid {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.place("CAT", 1, 1, Across, "Feline pet");
        grid
    }

    fn read_back(grid: &Grid, pw: &PlacedWord) -> String {
        pw.positions().filter_map(|(r, c)| grid.cell(r, c).and_then(Cell::letter)).collect()
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(Grid::new(0, 4), Err(GenerateError::InvalidGridSize { rows: 0, cols: 4 })));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_place_uppercases_and_records() {
        let mut grid = Grid::new(5, 5).unwrap();
        let pw = grid.place("cat", 2, 0, Across, "");
        assert_eq!(pw.word, "CAT");
        assert_eq!(pw.number, 0);
        assert_eq!(grid.cell(2, 0), Some(Cell::Letter('C')));
        assert_eq!(grid.cell(2, 2), Some(Cell::Letter('T')));
        assert_eq!(grid.letter_count(), 3);
    }

    #[test]
    fn test_can_place_bounds() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(grid.can_place("HELLO", 0, 0, Across));
        assert!(!grid.can_place("HELLO", 0, 1, Across));
        assert!(grid.can_place("HELLO", 0, 4, Down));
        assert!(!grid.can_place("HELLO", 1, 4, Down));
        assert!(!grid.can_place("A", 5, 0, Across));
        assert!(!grid.can_place("", 0, 0, Across));
    }

    #[test]
    fn test_can_place_rejects_letter_before_start_or_after_end() {
        let grid = grid_with_cat();
        // "CAT" occupies (1,1)..(1,3); an across word starting at (1,4) would touch T
        assert!(!grid.can_place("S", 1, 4, Across));
        // ending at (1,0) would touch C
        assert!(!grid.can_place("A", 1, 0, Across));
        // a down word ending right above the A
        assert!(!grid.can_place("X", 0, 2, Down));
    }

    #[test]
    fn test_can_place_allows_matching_letter_and_rejects_conflict() {
        let grid = grid_with_cat();
        assert!(grid.can_place("AXE", 1, 2, Down));
        assert!(!grid.can_place("OXE", 1, 2, Down));
    }

    #[test]
    fn test_can_place_does_not_check_side_neighbors() {
        let grid = grid_with_cat();
        // runs alongside CAT on row 2: accepted by the loose rule
        assert!(grid.can_place("DOG", 2, 1, Across));
    }

    #[test]
    fn test_blocked_cell_rejects() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.block(0, 1));
        assert!(!grid.can_place("ABC", 0, 0, Across));
        assert!(grid.can_place("ABC", 1, 0, Across));
        assert!(!grid.block(3, 3));
    }

    #[test]
    fn test_blocked_cell_does_not_count_as_neighbor_letter() {
        let mut grid = Grid::new(1, 4).unwrap();
        grid.block(0, 0);
        assert!(grid.can_place("ABC", 0, 1, Across));
    }

    #[test]
    fn test_find_intersections_includes_shared_first_letter() {
        let grid = grid_with_cat();
        let found = grid.find_intersections("CUP");
        assert!(found.contains(&Placement::new(1, 1, Down)));
    }

    #[test]
    fn test_find_intersections_order_and_validity() {
        let grid = grid_with_cat();
        // 'A' of TAN can hang from the A of CAT at (1,2): origin (0,2)
        let found = grid.find_intersections("TAN");
        assert!(found.contains(&Placement::new(0, 2, Down)));
        for p in &found {
            assert_eq!(p.direction, Down);
            assert!(grid.can_place("TAN", p.row, p.col, p.direction));
        }
    }

    #[test]
    fn test_find_intersections_exact_order() {
        // within one placed word: letters of the new word, then letters of the placed word
        let grid = grid_with_cat();
        assert_eq!(grid.find_intersections("AT"), vec![Placement::new(1, 2, Down), Placement::new(0, 3, Down)]);

        // placed words are visited in placement order
        let mut grid = grid_with_cat();
        grid.place("CUP", 1, 1, Down, "");
        assert_eq!(grid.find_intersections("PAT"), vec![Placement::new(0, 2, Down), Placement::new(3, 1, Across)]);
    }

    #[test]
    fn test_find_intersections_skips_negative_origin() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.place("CAT", 0, 0, Across, "");
        // the T of "AT" would need the word to start at row -1
        let found = grid.find_intersections("AT");
        assert!(found.iter().all(|p| p.direction == Down));
        assert!(!found.is_empty());
        assert!(found.iter().all(|p| p.row == 0));
    }

    #[test]
    fn test_find_intersections_empty_when_no_shared_letters() {
        let grid = grid_with_cat();
        assert!(grid.find_intersections("DOG").is_empty());
    }

    #[test]
    fn test_assign_numbers_shared_origin() {
        let mut grid = grid_with_cat();
        grid.place("CUP", 1, 1, Down, "Drinking vessel");
        grid.assign_numbers();
        assert!(grid.placed_words().iter().all(|pw| pw.number == 1));
    }

    #[test]
    fn test_assign_numbers_row_major_and_idempotent() {
        let mut grid = Grid::new(7, 7).unwrap();
        grid.place("CAT", 3, 1, Across, "");
        grid.place("BAD", 2, 2, Down, "");
        grid.place("TOE", 3, 3, Down, "");
        grid.assign_numbers();
        let first: Vec<u32> = grid.placed_words().iter().map(|pw| pw.number).collect();
        assert_eq!(first, vec![2, 1, 3]);
        grid.assign_numbers();
        let second: Vec<u32> = grid.placed_words().iter().map(|pw| pw.number).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trim_adds_padding_and_shifts_words() {
        let mut grid = Grid::new(9, 9).unwrap();
        grid.place("CAT", 4, 3, Across, "");
        grid.place("ANT", 4, 4, Down, "");
        let trimmed = grid.trim();
        assert_eq!((trimmed.rows(), trimmed.cols()), (5, 5));
        let cat = &trimmed.placed_words()[0];
        assert_eq!((cat.row, cat.col), (1, 1));
        let ant = &trimmed.placed_words()[1];
        assert_eq!((ant.row, ant.col), (1, 2));
        for pw in trimmed.placed_words() {
            assert_eq!(read_back(&trimmed, pw), pw.word);
        }
    }

    #[test]
    fn test_trim_clamps_at_edges() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.place("HELLO", 0, 0, Across, "");
        let trimmed = grid.trim();
        assert_eq!((trimmed.rows(), trimmed.cols()), (2, 5));
        assert_eq!(trimmed.cell(0, 0), Some(Cell::Letter('H')));
    }

    #[test]
    fn test_trim_empty_grid_is_unchanged() {
        let grid = Grid::new(4, 6).unwrap();
        let trimmed = grid.clone().trim();
        assert_eq!(trimmed, grid);
    }

    #[test]
    fn test_place_touches_only_footprint() {
        let mut grid = grid_with_cat();
        let before = grid.clone();
        assert!(grid.can_place("ACE", 1, 2, Down));
        grid.place("ACE", 1, 2, Down, "");
        let footprint: Vec<(usize, usize)> = grid.placed_words()[1].positions().collect();
        for r in 0..5 {
            for c in 0..5 {
                if !footprint.contains(&(r, c)) {
                    assert_eq!(grid.cell(r, c), before.cell(r, c));
                }
            }
        }
    }
}
