//! Generate error code documentation from `GridError`, the single source of truth.
//!
//! Codes, descriptions, details, and help text come straight from the
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;
use wordgrid::errors::GridError;

/// One instance of every `GridError` variant, in code order
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::FileAccess {
            path: "boggle-in.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        GridError::EmptyBoard,
        GridError::BoardNotSquare { letters: 15 },
        GridError::BoardSizeMismatch { expected: 16, found: 25 },
        GridError::InvalidBoardChar { invalid_char: '7', position: 5 },
        GridError::RaggedBoard { row: 2, expected: 4, found: 3 },
        GridError::EmptyWord,
        GridError::InvalidWord { word: "naïve".to_string(), invalid_char: 'ï' },
        GridError::InvalidBoardSize { size: 0 },
        GridError::NomError(nom::error::ErrorKind::Satisfy),
    ]
}

fn render_error(out: &mut String, error: &GridError) {
    // NB: writing to a String never fails
    let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
    let _ = writeln!(out, "**Details:** {}\n", error.details());

    if let Some(help_text) = error.help() {
        let _ = writeln!(out, "**How to fix:**");
        let _ = writeln!(out, "```\n{help_text}\n```\n");
    }

    let _ = writeln!(out, "**Example error message:**");
    let _ = writeln!(out, "```\n{error}\n```\n");

    let _ = writeln!(out, "**Detailed format:**");
    let _ = writeln!(out, "```\n{}\n```\n", error.display_detailed());

    let _ = writeln!(out, "---\n");
}

fn render_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Grid Errors\n");
    let _ = writeln!(out, "Errors raised while loading a board or a dictionary.\n");
    for error in all_grid_error_variants() {
        render_error(&mut out, &error);
    }

    let _ = writeln!(out, "\n## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```\nError: {}\n```\n", GridError::BoardNotSquare { letters: 15 }.display_detailed());
    let _ = writeln!(out, "1. Note the error code (e.g., `E003`)");
    let _ = writeln!(out, "2. Look it up in this document for detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested resolution steps\n");

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format\n```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```");
    out
}

fn main() {
    print!("{}", render_docs());
}
