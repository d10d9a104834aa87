//! Error types for loading boards and dictionaries, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E010) for documentation lookup:
//!
//! - E001: `FileAccess` (Board or dictionary source could not be read)
//! - E002: `EmptyBoard` (Board text contains no letters)
//! - E003: `BoardNotSquare` (Letter count is not a perfect square)
//! - E004: `BoardSizeMismatch` (Letter count does not match the requested size)
//! - E005: `InvalidBoardChar` (Non-letter character in board text)
//! - E006: `RaggedBoard` (Row length differs from the number of rows)
//! - E007: `EmptyWord` (Empty word inserted into a prefix index)
//! - E008: `InvalidWord` (Word contains a character outside a-z)
//! - E009: `InvalidBoardSize` (Requested board size is zero or too large)
//! - E010: `NomError` (Low-level nom parser error)
//!
//! Validation of user-submitted words is *not* an error: see
//! [`crate::solver::Validation`].
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::GridError;
//! use wordgrid::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! match index.insert("Cat") {
//!     Err(e @ GridError::InvalidWord { .. }) => {
//!         assert_eq!(e.code(), "E008");
//!         println!("{}", e.display_detailed());
//!     }
//!     other => panic!("uppercase letters are rejected, got {other:?}"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;

/// Errors raised while building the inputs the solver works on.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Unable to open {path} for reading: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Board contains no letters")]
    EmptyBoard,

    #[error("Board has {letters} letters, which is not a perfect square")]
    BoardNotSquare { letters: usize },

    #[error("Board should have {expected} letters but has {found}")]
    BoardSizeMismatch { expected: usize, found: usize },

    #[error("Invalid character '{invalid_char}' in board at offset {position} (only letters allowed)")]
    InvalidBoardChar { invalid_char: char, position: usize },

    #[error("Board row {row} has {found} letters (expected {expected})")]
    RaggedBoard { row: usize, expected: usize, found: usize },

    #[error("Cannot insert an empty word")]
    EmptyWord,

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only lowercase a-z allowed)")]
    InvalidWord { word: String, invalid_char: char },

    #[error("Invalid board size: {size}")]
    InvalidBoardSize { size: usize },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        match ge {
            GridError::FileAccess { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

impl<'a> NomParseError<&'a str> for Box<GridError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(GridError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::FileAccess { .. } => "E001",
            GridError::EmptyBoard => "E002",
            GridError::BoardNotSquare { .. } => "E003",
            GridError::BoardSizeMismatch { .. } => "E004",
            GridError::InvalidBoardChar { .. } => "E005",
            GridError::RaggedBoard { .. } => "E006",
            GridError::EmptyWord => "E007",
            GridError::InvalidWord { .. } => "E008",
            GridError::InvalidBoardSize { .. } => "E009",
            GridError::NomError(_) => "E010",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::FileAccess { .. } => "Source file could not be read",
            GridError::EmptyBoard => "Board text contains no letters",
            GridError::BoardNotSquare { .. } => "Letter count is not a perfect square",
            GridError::BoardSizeMismatch { .. } => "Letter count does not match the board size",
            GridError::InvalidBoardChar { .. } => "Non-letter character in board text",
            GridError::RaggedBoard { .. } => "Board row has the wrong length",
            GridError::EmptyWord => "Empty word",
            GridError::InvalidWord { .. } => "Word contains a character outside a-z",
            GridError::InvalidBoardSize { .. } => "Board size is zero or too large",
            GridError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::FileAccess { .. } => "The board or dictionary file could not be opened. Loading stops immediately; nothing is retried.",
            GridError::EmptyBoard => "The board file was readable but held only whitespace.",
            GridError::BoardNotSquare { .. } => "Without an explicit size the board dimension is inferred from the number of letters, which must therefore be n*n.",
            GridError::BoardSizeMismatch { .. } => "An explicit board size was given, so the board must contain exactly size*size letters.",
            GridError::InvalidBoardChar { .. } => "Board text may only contain letters separated by whitespace. Letters are lowercased on load.",
            GridError::RaggedBoard { .. } => "Every row of a board built from rows must have as many letters as there are rows.",
            GridError::EmptyWord => "A prefix index stores non-empty words only.",
            GridError::InvalidWord { .. } => "A prefix index stores words over the 26 lowercase Latin letters only.",
            GridError::InvalidBoardSize { .. } => "The requested board size was zero, or so large that size*size does not fit in memory.",
            GridError::NomError(_) => "The board parser failed at a low level. This usually means the input is not text.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::FileAccess { .. } => Some("Check the path and permissions, or pass --board / --dictionary"),
            GridError::EmptyBoard => Some("Example board file: 'cats\\ndogs\\nmice\\nrats'"),
            GridError::BoardNotSquare { .. } => Some("Use 16 letters for a 4x4 board, 25 for 5x5, and so on"),
            GridError::BoardSizeMismatch { .. } => Some("Either fix the board file or drop --size to infer it"),
            GridError::InvalidBoardChar { .. } => Some("Remove digits and punctuation from the board file"),
            GridError::RaggedBoard { .. } => Some("Pad or trim rows so the board is n x n"),
            GridError::InvalidWord { .. } => Some("Only lowercase letters a-z are allowed"),
            GridError::InvalidBoardSize { .. } => Some("Use a size of at least 1, or drop --size to infer it"),
            _ => None,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn one_of_each() -> Vec<GridError> {
        vec![
            GridError::FileAccess {
                path: "missing.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            GridError::EmptyBoard,
            GridError::BoardNotSquare { letters: 15 },
            GridError::BoardSizeMismatch { expected: 16, found: 9 },
            GridError::InvalidBoardChar { invalid_char: '7', position: 3 },
            GridError::RaggedBoard { row: 1, expected: 4, found: 3 },
            GridError::EmptyWord,
            GridError::InvalidWord { word: "Cat".to_string(), invalid_char: 'C' },
            GridError::InvalidBoardSize { size: 0 },
            GridError::NomError(ErrorKind::Eof),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = GridError::EmptyBoard;
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("Example"));
    }

    /// Test that all `GridError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in one_of_each() {
            let code = err.code();
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 10);
    }

    /// Test that all error codes follow the format E0XX
    #[test]
    fn test_error_code_format() {
        for err in one_of_each() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = GridError::EmptyWord;
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), "Cannot insert an empty word (E007)");
    }

    #[test]
    fn test_size_mismatch_mentions_values() {
        let detailed = GridError::BoardSizeMismatch { expected: 16, found: 9 }.display_detailed();
        assert!(detailed.contains("16") && detailed.contains('9'));
        assert!(detailed.contains("--size"));
    }

    #[test]
    fn test_file_access_keeps_source() {
        use std::error::Error;
        let err = GridError::FileAccess {
            path: "ospd.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("ospd.txt"));
        assert!(err.source().is_some());

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_descriptions_and_details_are_filled_in() {
        for err in one_of_each() {
            assert!(!err.description().is_empty(), "{:?} has no description", err);
            assert!(err.details().len() > 10, "{:?} has no useful details", err);
        }
    }
}
