//! Plain-text listings of the board and of found words.

use crate::board::Board;
use crate::prefix_index::PrefixIndex;
use std::fmt::{self, Write};

const RULE: &str = "============";

/// Who a word list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finder {
    User,
    Computer,
}

impl fmt::Display for Finder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finder::User => write!(f, "user"),
            Finder::Computer => write!(f, "computer"),
        }
    }
}

/// Alphabetical listing of `words` framed by a header and a count line.
#[must_use]
pub fn format_found_words(finder: Finder, words: &PrefixIndex) -> String {
    let count = words.word_count();
    let mut out = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(out, "The {finder} found the following words:");
    let _ = writeln!(out, "{RULE}");
    let _ = write!(out, "{words}");
    let _ = writeln!(out, "{RULE}");
    let noun = if count == 1 { "word" } else { "words" };
    let _ = writeln!(out, "The {finder} found {count} {noun}.");
    out
}

/// The board one row per line, preceded by a blank line and followed by a rule.
#[must_use]
pub fn format_board(board: &Board) -> String {
    format!("\n{board}{RULE}\n")
}
