//! The square letter grid the solver searches.
//!
//! A board is parsed from text holding `size * size` letters separated by arbitrary
//! whitespace, read in row-major order. Both of these describe the same 4x4 board:
//!
//! ```text
//! cats        c a t s
//! dogs        d o g s
//! mice        m i c e
//! rats        r a t s
//! ```
//!
//! Letters are lowercased on load. Once built, a board is never mutated.

use crate::errors::GridError;
use log::debug;
use nom::{
    character::complete::{multispace0, satisfy},
    error::ErrorKind,
    multi::many0,
    sequence::preceded,
    IResult,
    Parser,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `GridError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<GridError>>;

/// Row/column offsets of the eight cells around a cell.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One board letter, optionally preceded by whitespace.
fn board_letter(input: &str) -> PResult<'_, char> {
    preceded(multispace0, satisfy(|c: char| c.is_ascii_alphabetic())).parse(input)
}

/// All board letters plus any trailing whitespace.
fn board_letters(input: &str) -> PResult<'_, Vec<char>> {
    let (input, letters) = many0(board_letter).parse(input)?;
    let (input, _) = multispace0.parse(input)?;
    Ok((input, letters))
}

/// Smallest `n` with `n * n == count`, if any.
fn exact_sqrt(count: usize) -> Option<usize> {
    let guess = (count as f64).sqrt() as usize;
    (guess.saturating_sub(1)..=guess + 1).find(|n| n * n == count)
}

/// Immutable `size x size` grid of lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells.
    cells: Vec<char>,
}

impl Board {
    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyBoard`] if there are no rows, [`GridError::RaggedBoard`] if a row
    /// is not `rows.len()` long, and [`GridError::InvalidBoardChar`] for non-letters.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, letters) in rows.into_iter().enumerate() {
            if letters.len() != size {
                return Err(GridError::RaggedBoard { row, expected: size, found: letters.len() });
            }
            for (col, c) in letters.into_iter().enumerate() {
                if !c.is_ascii_alphabetic() {
                    return Err(GridError::InvalidBoardChar { invalid_char: c, position: row * size + col });
                }
                cells.push(c.to_ascii_lowercase());
            }
        }

        Ok(Board { size, cells })
    }

    /// Parse board text.
    ///
    /// With `size = Some(n)` exactly `n * n` letters are required; with `None` the
    /// dimension is inferred and the letter count must be a perfect square.
    ///
    /// # Errors
    ///
    /// See [`GridError`] codes E002-E005, E009 and E010.
    pub fn parse_from_str(text: &str, size: Option<usize>) -> Result<Self, GridError> {
        if size == Some(0) {
            return Err(GridError::InvalidBoardSize { size: 0 });
        }

        let (rest, letters) = board_letters(text).map_err(|e| match e {
            nom::Err::Error(ge) | nom::Err::Failure(ge) => *ge,
            nom::Err::Incomplete(_) => GridError::NomError(ErrorKind::Complete),
        })?;

        if let Some(invalid_char) = rest.chars().next() {
            return Err(GridError::InvalidBoardChar { invalid_char, position: text.len() - rest.len() });
        }
        if letters.is_empty() {
            return Err(GridError::EmptyBoard);
        }

        let size = match size {
            Some(expected) => {
                let cells = expected
                    .checked_mul(expected)
                    .ok_or(GridError::InvalidBoardSize { size: expected })?;
                if cells != letters.len() {
                    return Err(GridError::BoardSizeMismatch { expected: cells, found: letters.len() });
                }
                expected
            }
            None => exact_sqrt(letters.len()).ok_or(GridError::BoardNotSquare { letters: letters.len() })?,
        };

        debug!("Parsed {size}x{size} board");
        Ok(Board {
            size,
            cells: letters.into_iter().map(|c| c.to_ascii_lowercase()).collect(),
        })
    }

    /// Native-only convenience method: read a board from a file path and parse it.
    ///
    /// # Errors
    ///
    /// [`GridError::FileAccess`] if the file cannot be read, otherwise any parse error
    /// from [`Board::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<Path>>(path: P, size: Option<usize>) -> Result<Self, GridError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| GridError::FileAccess {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_from_str(&data, size)
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Flat row-major index of `(row, col)`; caller guarantees it is on the board.
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    /// Every position in row-major (raster) order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| (row, col)))
    }

    /// The up-to-eight on-board cells adjacent to `(row, col)`, excluding the cell itself.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.size && c < self.size).then_some((r, c))
        })
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.size).map(|row| row.iter().collect())
    }
}

impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse_from_str(s, None)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
