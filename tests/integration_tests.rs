//! Integration tests for the crossgen puzzle generator.
//!
//! These tests drive the public API end to end: word list loading, generation,
//! numbering, and the serialized view, using small pinned scenarios and a realistic
//! word list from the fixtures.

use std::collections::{HashMap, HashSet};

use crossgen::errors::GenerateError;
use crossgen::generator::{generate, GenerateOptions, PlacementStatus};
use crossgen::word_list::WordList;
use crossgen::{Cell, Direction, Grid, Placement, PuzzleExport};

/// Load the fixture word list
fn load_fixture() -> WordList {
    WordList::load_from_path("tests/fixtures/programming_terms.txt").expect("Failed to read fixture word list")
}

fn seeded(seed: u64) -> GenerateOptions {
    GenerateOptions { seed: Some(seed), ..GenerateOptions::default() }
}

/// Every placed word must read back from the cells it covers.
///
/// Clear ends are only guaranteed when a word is placed: a later crossing word may
/// occupy the cell past an earlier word's end, since side neighbors are not checked.
fn assert_words_read_back(grid: &Grid) {
    for pw in grid.placed_words() {
        let read: String = pw.positions().filter_map(|(r, c)| grid.cell(r, c).and_then(Cell::letter)).collect();
        assert_eq!(read, pw.word, "{} does not read back from the grid", pw.word);
    }
}

#[cfg(test)]
mod boundaries {
    use super::*;

    #[test]
    fn test_empty_input() {
        let words: Vec<&str> = vec![];
        let err = generate(&words, &HashMap::new(), &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyInput));
        assert_eq!(err.code(), "G001");
    }

    #[test]
    fn test_blank_entry_does_not_sink_the_puzzle() {
        let result = generate(&["CAT", ""], &HashMap::new(), &seeded(1)).unwrap();
        assert_eq!(result.grid.placed_words().len(), 1);
        assert_eq!(result.grid.placed_words()[0].word, "CAT");
        assert!(result.unplaced.is_empty());
    }

    #[test]
    fn test_word_longer_than_one_cell_grid() {
        let options = GenerateOptions { grid_size: 1, ..seeded(1) };
        let err = generate(&["AB"], &HashMap::new(), &options).unwrap_err();
        assert!(matches!(err, GenerateError::WordTooLong { len: 2, grid_size: 1, .. }));
    }

    #[test]
    fn test_single_letter_on_one_cell_grid() {
        let options = GenerateOptions { grid_size: 1, ..seeded(1) };
        let result = generate(&["a"], &HashMap::new(), &options).unwrap();
        assert_eq!((result.grid.rows(), result.grid.cols()), (1, 1));
        assert_eq!(result.grid.cell(0, 0), Some(Cell::Letter('A')));
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_single_word_centered_and_trimmed() {
        let options = GenerateOptions { grid_size: 5, ..seeded(0) };
        let result = generate(&["CAT"], &HashMap::new(), &options).unwrap();
        let grid = &result.grid;

        assert_eq!((grid.rows(), grid.cols()), (3, 5));
        let cat = &grid.placed_words()[0];
        assert_eq!((cat.row, cat.col, cat.direction), (1, 1, Direction::Across));
        let middle: String = (0..5).map(|c| grid.cell(1, c).unwrap().to_string()).collect();
        assert_eq!(middle, ".CAT.");
    }

    #[test]
    fn test_cup_crosses_cat_on_shared_c() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.place("CAT", 1, 1, Direction::Across, "");
        assert!(grid.find_intersections("CUP").contains(&Placement::new(1, 1, Direction::Down)));
    }

    #[test]
    fn test_shared_origin_gets_one_number() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.place("CAT", 1, 1, Direction::Across, "Feline pet");
        grid.place("CUP", 1, 1, Direction::Down, "Drinking vessel");
        grid.assign_numbers();

        let numbers: HashSet<u32> = grid.placed_words().iter().map(|pw| pw.number).collect();
        assert_eq!(numbers, HashSet::from([1]));
    }

    #[test]
    fn test_programming_terms_subset() {
        let words = ["PYTHON", "LOOP", "CLASS", "METHOD", "OBJECT"];
        let inputs: HashSet<&str> = words.iter().copied().collect();

        for seed in 0..20 {
            let result = generate(&words, &HashMap::new(), &seeded(seed)).unwrap();
            let placed = result.grid.placed_words();
            assert!((1..=5).contains(&placed.len()));
            assert_eq!(placed.len() + result.unplaced.len(), words.len());
            for pw in placed {
                assert!(inputs.contains(pw.word.as_str()), "unexpected word {}", pw.word);
            }
            assert_words_read_back(&result.grid);
        }
    }
}

#[cfg(test)]
mod word_list_pipeline {
    use super::*;

    #[test]
    fn test_fixture_words_and_clues_flow_into_export() {
        let list = load_fixture();
        assert_eq!(list.words.len(), 10);

        let result = generate(&list.words, &list.clues, &seeded(2024)).unwrap();
        let export = result.grid.to_export();

        // longest word seeds the grid and keeps its clue
        let seed_word = &result.grid.placed_words()[0];
        assert_eq!(seed_word.word, "ALGORITHM");
        assert_eq!(seed_word.clue, "Step-by-step procedure for solving a problem");

        for entry in export.clues.across.iter().chain(&export.clues.down) {
            assert!(!entry.clue.is_empty(), "{} lost its clue", entry.answer);
            assert_eq!(entry.length, entry.answer.chars().count());
        }
        assert_words_read_back(&result.grid);
    }

    #[test]
    fn test_status_reflects_unplaced_words() {
        let list = load_fixture();
        let result = generate(&list.words, &list.clues, &seeded(7)).unwrap();
        match result.status() {
            PlacementStatus::AllPlaced => assert!(result.unplaced.is_empty()),
            PlacementStatus::Partial { unplaced } => assert_eq!(unplaced, result.unplaced.len()),
        }
    }
}

#[cfg(test)]
mod serialization {
    use super::*;

    #[test]
    fn test_export_round_trip_is_byte_identical() {
        let list = load_fixture();
        for seed in [1, 2, 3] {
            let result = generate(&list.words, &list.clues, &seeded(seed)).unwrap();
            let json = result.grid.to_export().to_json().unwrap();
            let reread = Grid::from_export(&PuzzleExport::from_json(&json).unwrap()).unwrap();
            assert_eq!(reread.to_export().to_json().unwrap(), json);
        }
    }

    #[test]
    fn test_clues_sorted_within_direction() {
        let list = load_fixture();
        let export = generate(&list.words, &list.clues, &seeded(99)).unwrap().grid.to_export();
        for entries in [&export.clues.across, &export.clues.down] {
            assert!(entries.windows(2).all(|w| w[0].number <= w[1].number));
        }
    }

    #[test]
    fn test_export_grid_matches_size() {
        let export = generate(&["PYTHON", "LOOP"], &HashMap::new(), &seeded(5)).unwrap().grid.to_export();
        assert_eq!(export.grid.len(), export.size.rows);
        assert!(export.grid.iter().all(|row| row.len() == export.size.cols));
        assert!(export.grid.iter().flatten().all(|cell| cell.chars().count() == 1));
    }

    #[test]
    fn test_same_seed_same_json() {
        let list = load_fixture();
        let a = generate(&list.words, &list.clues, &seeded(31)).unwrap().grid.to_export().to_json().unwrap();
        let b = generate(&list.words, &list.clues, &seeded(31)).unwrap().grid.to_export().to_json().unwrap();
        assert_eq!(a, b);
    }
}
