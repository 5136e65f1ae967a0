//! The placement engine: builds a [`Grid`] from a word list.
//!
//! The algorithm is greedy and never backtracks:
//! 1. sort words by descending length (stable, so ties keep input order);
//! 2. place the longest word across the middle row, centered;
//! 3. for each remaining word, pick a random crossing from
//!    [`Grid::find_intersections`], or failing that try up to `max_attempts` random
//!    positions;
//! 4. drop the word if nothing fits;
//! 5. trim the grid to its letters plus a one-cell border.
//!
//! All randomness comes from the generator passed to [`generate_with_rng`], so a fixed
//! seed reproduces a puzzle exactly.
//!
//! # Examples
//!
//! ```
//! use crossgen::generator::{generate, GenerateOptions};
//! use std::collections::HashMap;
//!
//! let words = ["python", "loop", "class"];
//! let options = GenerateOptions { seed: Some(7), ..GenerateOptions::default() };
//! let result = generate(&words, &HashMap::new(), &options)?;
//!
//! assert!(!result.grid.placed_words().is_empty());
//! for word in &result.unplaced {
//!     println!("could not place {word}");
//! }
//! # Ok::<(), crossgen::errors::GenerateError>(())
//! ```

use crate::direction::{Direction, DIRECTIONS};
use crate::errors::GenerateError;
use crate::grid::{normalize, Grid};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Default side length of the working grid.
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Default number of random placements tried per word once no crossing exists.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Tunables for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Side length of the square working grid (before trimming).
    pub grid_size: usize,
    /// Random placements tried per word when no crossing is available. 0 disables
    /// the fallback.
    pub max_attempts: usize,
    /// Seed for the random source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions { grid_size: DEFAULT_GRID_SIZE, max_attempts: DEFAULT_MAX_ATTEMPTS, seed: None }
    }
}

/// Whether every input word made it into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementStatus {
    AllPlaced,
    /// Some words were dropped. Contains how many.
    Partial { unplaced: usize },
}

/// Successful run (even if some words were dropped).
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The trimmed grid.
    pub grid: Grid,
    /// Normalized (uppercase) words that could not be placed, in processing order.
    pub unplaced: Vec<String>,
}

impl GenerateResult {
    #[must_use]
    pub fn status(&self) -> PlacementStatus {
        if self.unplaced.is_empty() {
            PlacementStatus::AllPlaced
        } else {
            PlacementStatus::Partial { unplaced: self.unplaced.len() }
        }
    }
}

/// Generate a puzzle using a random source seeded from `options.seed` (or entropy).
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate<S: AsRef<str>>(
    words: &[S],
    clues: &HashMap<String, String>,
    options: &GenerateOptions,
) -> Result<GenerateResult, GenerateError> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with_rng(words, clues, options, &mut rng)
}

/// Generate a puzzle, drawing every random choice from `rng`.
///
/// `options.seed` is ignored here; the caller owns the random source.
///
/// # Errors
///
/// - [`GenerateError::EmptyInput`] if no word is left once blank entries are skipped;
/// - [`GenerateError::InvalidGridSize`] if `grid_size` is 0;
/// - [`GenerateError::WordTooLong`] if the longest word is longer than `grid_size`.
///
/// Words that cannot be placed are not errors; they are listed in
/// [`GenerateResult::unplaced`]. Blank entries are skipped with a warning.
/// Surrounding whitespace is stripped before a word is uppercased, so `" cat"` is
/// placed as `CAT`.
pub fn generate_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    clues: &HashMap<String, String>,
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<GenerateResult, GenerateError> {
    // (original, normalized) pairs; originals are kept for clue lookup
    let mut entries: Vec<(&str, String)> = Vec::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let original = word.as_ref().trim();
        if original.is_empty() {
            warn!("Skipping blank word #{index}");
            continue;
        }
        entries.push((original, normalize(original)));
    }
    if entries.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    // `sort_by_key` is stable: equal lengths keep input order
    entries.sort_by_key(|(_, w)| std::cmp::Reverse(w.chars().count()));

    let grid_size = options.grid_size;
    let mut grid = Grid::new(grid_size, grid_size)?;

    let (seed_original, seed_word) = &entries[0];
    let seed_len = seed_word.chars().count();
    if seed_len > grid_size {
        return Err(GenerateError::WordTooLong { word: seed_word.clone(), len: seed_len, grid_size });
    }
    let (row, col) = (grid_size / 2, (grid_size - seed_len) / 2);
    grid.place(seed_word, row, col, Direction::Across, &clue_for(clues, seed_original, seed_word));
    debug!("Seeded {seed_word} across at ({row}, {col})");

    let mut unplaced = Vec::new();
    for (original, word) in &entries[1..] {
        let clue = clue_for(clues, original, word);

        let mut candidates = grid.find_intersections(word);
        if !candidates.is_empty() {
            candidates.shuffle(rng);
            let chosen = candidates[0];
            grid.place(word, chosen.row, chosen.col, chosen.direction, &clue);
            debug!(
                "Placed {word} {} at ({}, {}) via intersection ({} candidates)",
                chosen.direction,
                chosen.row,
                chosen.col,
                candidates.len()
            );
            continue;
        }

        if try_random_placement(&mut grid, word, &clue, options.max_attempts, rng) {
            continue;
        }

        warn!("Could not place {word} after {} random attempts", options.max_attempts);
        unplaced.push(word.clone());
    }

    let placed = grid.placed_words().len();
    let grid = grid.trim();
    debug!("Placed {placed}/{} words; trimmed grid to {}x{}", entries.len(), grid.rows(), grid.cols());

    Ok(GenerateResult { grid, unplaced })
}

/// Draw up to `max_attempts` random positions and place `word` at the first legal one.
fn try_random_placement<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    clue: &str,
    max_attempts: usize,
    rng: &mut R,
) -> bool {
    let size = grid.rows();
    for attempt in 1..=max_attempts {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        let direction = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
        if grid.can_place(word, row, col, direction) {
            grid.place(word, row, col, direction, clue);
            debug!("Placed {word} {direction} at ({row}, {col}) on random attempt {attempt}");
            return true;
        }
    }
    false
}

/// Clue for a word: exact input spelling first, then the uppercase form, else empty.
fn clue_for(clues: &HashMap<String, String>, original: &str, normalized: &str) -> String {
    clues.get(original).or_else(|| clues.get(normalized)).cloned().unwrap_or_default()
}
