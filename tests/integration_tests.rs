//! Integration tests for the wordgrid solver.
//!
//! These tests drive the full pipeline from the fixture files through loading,
//! the player's round, the computer's solve, and the printed reports.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use wordgrid::board::Board;
use wordgrid::config::GameConfig;
use wordgrid::errors::GridError;
use wordgrid::prefix_index::{LoadSummary, PrefixIndex};
use wordgrid::report::{format_board, format_found_words, Finder};
use wordgrid::solver::{GridSolver, Rejection, SolveStatus, Validation};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")).join(name)
}

fn fixture_config() -> GameConfig {
    GameConfig {
        board_path: fixture("board.txt"),
        dictionary_path: fixture("dictionary.txt"),
        ..GameConfig::default()
    }
}

fn fixture_solver() -> GridSolver {
    fixture_config().load_solver().expect("fixtures should load")
}

/// Every fixture dictionary word of length >= 4 that can be traced on the fixture board
const EXPECTED_COMPUTER_WORDS: [&str; 20] = [
    "ante", "cats", "coat", "coats", "dogs", "dote", "dotes", "gate", "gates", "goat",
    "goats", "mane", "mine", "mint", "nite", "oats", "rate", "taco", "tine", "toga",
];

#[cfg(test)]
mod loading {
    use super::*;

    #[test]
    fn test_board_fixture() {
        let board = Board::load_from_path(fixture("board.txt"), None).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.rows().collect::<Vec<_>>(), vec!["cats", "doge", "rate", "mine"]);
        assert_eq!(board.letter(3, 3), Some('e'));
    }

    #[test]
    fn test_board_fixture_with_explicit_size() {
        assert!(Board::load_from_path(fixture("board.txt"), Some(4)).is_ok());
        assert!(matches!(
            Board::load_from_path(fixture("board.txt"), Some(5)),
            Err(GridError::BoardSizeMismatch { expected: 25, found: 16 })
        ));
    }

    #[test]
    fn test_dictionary_fixture_summary() {
        let mut index = PrefixIndex::new();
        let summary = index.load_from_path(fixture("dictionary.txt")).unwrap();
        assert_eq!(summary, LoadSummary { inserted: 33, duplicates: 1, skipped: 1 });
        assert_eq!(index.word_count(), 33);

        // uppercase tokens are lowercased; tokens with punctuation are dropped
        assert!(index.is_word("taco"));
        assert!(!index.is_word("dont"));
        assert!(index.is_prefix("zeb"));
    }

    #[test]
    fn test_dictionary_listing_is_sorted() {
        let index = PrefixIndex::from_path(fixture("dictionary.txt")).unwrap();
        let words: Vec<String> = index.words().collect();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
        assert_eq!(words.first().map(String::as_str), Some("acts"));
        assert_eq!(words.last().map(String::as_str), Some("zebra"));
    }

    #[test]
    fn test_missing_dictionary_is_e001() {
        let config = GameConfig {
            dictionary_path: fixture("no_such_dictionary.txt"),
            ..fixture_config()
        };
        let err = config.load_solver().unwrap_err();
        assert_eq!(err.code(), "E001");
        let detailed = err.display_detailed();
        assert!(detailed.contains("no_such_dictionary.txt"));
        assert!(detailed.contains("(E001)"));
    }

    #[test]
    fn test_config_size_is_enforced() {
        let config = GameConfig { board_size: Some(3), ..fixture_config() };
        assert!(matches!(config.load_solver(), Err(GridError::BoardSizeMismatch { .. })));
    }
}

#[cfg(test)]
mod solving {
    use super::*;

    #[test]
    fn test_solve_all_finds_expected_words() {
        let mut solver = fixture_solver();
        let result = solver.solve_all();

        assert_eq!(result.status, SolveStatus::Exhausted);
        assert_eq!(result.new_words, EXPECTED_COMPUTER_WORDS.len());
        assert_eq!(solver.computer_words().words().collect::<Vec<_>>(), EXPECTED_COMPUTER_WORDS);
    }

    #[test]
    fn test_solve_all_is_idempotent() {
        let mut solver = fixture_solver();
        solver.solve_all();
        let again = solver.solve_all();
        assert_eq!(again.new_words, 0);
        assert_eq!(solver.computer_words().word_count(), EXPECTED_COMPUTER_WORDS.len());
    }

    #[test]
    fn test_per_cell_solve_matches_solve_all() {
        let mut by_cell = fixture_solver();
        let size = by_cell.board().size();
        let mut total = 0;
        for row in 0..size {
            for col in 0..size {
                total += by_cell.solve(row, col);
            }
        }

        let mut whole = fixture_solver();
        assert_eq!(whole.solve_all().new_words, total);
        assert_eq!(
            by_cell.computer_words().words().collect::<Vec<_>>(),
            whole.computer_words().words().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_longer_minimum_length() {
        let config = GameConfig { min_word_len: 5, ..fixture_config() };
        let mut solver = config.load_solver().unwrap();
        solver.solve_all();
        assert_eq!(
            solver.computer_words().words().collect::<Vec<_>>(),
            vec!["coats", "dotes", "gates", "goats"]
        );
    }

    #[test]
    fn test_every_found_word_traces_without_reuse() {
        let mut solver = fixture_solver();
        solver.solve_all();

        for word in solver.computer_words() {
            let path = solver.trace(&word).unwrap_or_else(|| panic!("{word} should trace"));
            assert_eq!(path.len(), word.len());

            let distinct: HashSet<_> = path.iter().collect();
            assert_eq!(distinct.len(), path.len(), "{word} reuses a cell");

            for (&(row, col), letter) in path.iter().zip(word.chars()) {
                assert_eq!(solver.board().letter(row, col), Some(letter));
            }
            for pair in path.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1, "{word} jumps {a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn test_zero_time_limit_times_out() {
        let config = GameConfig { time_limit: Some(Duration::ZERO), ..fixture_config() };
        let mut solver = config.load_solver().unwrap();
        let result = solver.solve_all();
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
        assert_eq!(result.new_words, 0);
        assert!(solver.computer_words().is_empty());
    }
}

#[cfg(test)]
mod playing {
    use super::*;

    #[test]
    fn test_validation_outcomes() {
        let mut solver = fixture_solver();

        assert_eq!(solver.validate_candidate("goats"), Validation::Accepted);
        assert_eq!(solver.validate_candidate("Goats"), Validation::Rejected(Rejection::AlreadyFound));
        assert_eq!(solver.validate_candidate("cat"), Validation::Rejected(Rejection::TooShort { min_len: 4 }));
        assert_eq!(solver.validate_candidate("queens"), Validation::Rejected(Rejection::NotInDictionary));
        // in the dictionary but not on the board
        for word in ["acts", "grate", "scat", "tacos", "zebra"] {
            assert_eq!(solver.validate_candidate(word), Validation::Rejected(Rejection::NotOnBoard), "{word}");
        }

        assert_eq!(solver.user_words().words().collect::<Vec<_>>(), vec!["goats"]);
    }

    #[test]
    fn test_user_words_are_not_claimed_by_computer() {
        let mut solver = fixture_solver();
        for word in ["coats", "mint", "toga"] {
            assert!(solver.validate_candidate(word).is_accepted());
        }

        let result = solver.solve_all();
        assert_eq!(result.new_words, EXPECTED_COMPUTER_WORDS.len() - 3);

        let user: HashSet<String> = solver.user_words().words().collect();
        let computer: HashSet<String> = solver.computer_words().words().collect();
        assert!(user.is_disjoint(&computer));
        assert_eq!(user.len() + computer.len(), EXPECTED_COMPUTER_WORDS.len());
    }

    #[test]
    fn test_reports() {
        let mut solver = fixture_solver();
        assert!(solver.validate_candidate("mane").is_accepted());
        solver.solve_all();

        assert_eq!(
            format_board(solver.board()),
            "\ncats\ndoge\nrate\nmine\n============\n"
        );
        assert_eq!(
            format_found_words(Finder::User, solver.user_words()),
            "The user found the following words:\n============\nmane\n============\nThe user found 1 word.\n"
        );

        let computer = format_found_words(Finder::Computer, solver.computer_words());
        assert!(computer.starts_with("The computer found the following words:\n============\nante\n"));
        assert!(computer.ends_with("toga\n============\nThe computer found 19 words.\n"));
    }
}
