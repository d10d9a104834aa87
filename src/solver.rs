//! The grid search engine: finds every dictionary word traceable on a board and
//! validates words submitted by a player.
//!
//! A word is traceable when its letters can be read along a path of 8-adjacent
//! cells (diagonals included) that never visits the same cell twice.
//!
//! # Examples
//!
//! ## Solving a board
//!
//! ```
//! use wordgrid::board::Board;
//! use wordgrid::prefix_index::PrefixIndex;
//! use wordgrid::solver::{GridSolver, SolveStatus};
//!
//! let board: Board = "ca ts".parse()?;
//! let dictionary: PrefixIndex = ["cat", "cats", "at", "scat"].into_iter().collect();
//!
//! let mut solver = GridSolver::new(board, dictionary);
//! let result = solver.solve_all();
//!
//! assert_eq!(result.status, SolveStatus::Exhausted);
//! assert_eq!(solver.computer_words().words().collect::<Vec<_>>(), vec!["cats", "scat"]);
//! # Ok::<(), wordgrid::errors::GridError>(())
//! ```
//!
//! ## Validating player words
//!
//! ```
//! use wordgrid::board::Board;
//! use wordgrid::prefix_index::PrefixIndex;
//! use wordgrid::solver::{GridSolver, Rejection, Validation};
//!
//! let board: Board = "ca ts".parse()?;
//! let dictionary: PrefixIndex = ["cat", "cats"].into_iter().collect();
//! let mut solver = GridSolver::new(board, dictionary);
//!
//! assert_eq!(solver.validate_candidate("cats"), Validation::Accepted);
//! assert_eq!(solver.validate_candidate("cats"), Validation::Rejected(Rejection::AlreadyFound));
//! # Ok::<(), wordgrid::errors::GridError>(())
//! ```

use crate::board::{Board, NEIGHBOR_OFFSETS};
use crate::prefix_index::PrefixIndex;
use instant::Instant;
use log::{debug, info, warn};
use std::fmt;
use std::time::Duration;

/// Shortest word the solver collects or accepts unless configured otherwise.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Status of a full solve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every start cell was searched.
    Exhausted,

    /// Solver stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

impl SolveStatus {
    /// Stable snake_case name, as handed to JavaScript.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SolveStatus::Exhausted => "exhausted",
            SolveStatus::TimedOut { .. } => "timed_out",
        }
    }
}

/// Outcome of [`GridSolver::solve_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Words added to the computer's set by this run.
    pub new_words: usize,
    pub status: SolveStatus,
}

/// Why a submitted word was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Shorter than the minimum word length.
    TooShort { min_len: usize },
    NotInDictionary,
    /// The player already found this word.
    AlreadyFound,
    /// No non-repeating adjacent path spells the word on this board.
    NotOnBoard,
}

/// Result of [`GridSolver::validate_candidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    Rejected(Rejection),
}

impl Validation {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Accepted => write!(f, "Nice! Word is legal."),
            Validation::Rejected(Rejection::TooShort { min_len }) => {
                write!(f, "Word is invalid. Must be at least {min_len} characters.")
            }
            Validation::Rejected(Rejection::NotInDictionary) => {
                write!(f, "Word is invalid. Not found in the dictionary.")
            }
            Validation::Rejected(Rejection::AlreadyFound) => write!(f, "Word is invalid. Already found."),
            Validation::Rejected(Rejection::NotOnBoard) => {
                write!(f, "Word is invalid. Impossible with the given board.")
            }
        }
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,   // when the budget began
    limit: Duration,  // maximum allowed elapsed time
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Board, dictionary and the two found-word sets of one game.
///
/// The dictionary is read-only once the solver is built. The computer's set grows
/// only through [`solve`](Self::solve) and the player's set only through
/// [`validate_candidate`](Self::validate_candidate).
#[derive(Debug, Clone)]
pub struct GridSolver {
    board: Board,
    dictionary: PrefixIndex,
    computer_words: PrefixIndex,
    user_words: PrefixIndex,
    /// Cells on the current `solve` path; all false between calls.
    visited: Vec<bool>,
    min_word_len: usize,
    time_limit: Option<Duration>,
}

impl GridSolver {
    #[must_use]
    pub fn new(board: Board, dictionary: PrefixIndex) -> Self {
        let cells = board.size() * board.size();
        GridSolver {
            board,
            dictionary,
            computer_words: PrefixIndex::new(),
            user_words: PrefixIndex::new(),
            visited: vec![false; cells],
            min_word_len: DEFAULT_MIN_WORD_LEN,
            time_limit: None,
        }
    }

    /// Override the minimum word length (default [`DEFAULT_MIN_WORD_LEN`]).
    #[must_use]
    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// Stop [`solve_all`](Self::solve_all) between start cells once `limit` has elapsed.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn dictionary(&self) -> &PrefixIndex {
        &self.dictionary
    }

    /// Words found by [`solve`](Self::solve) / [`solve_all`](Self::solve_all).
    #[must_use]
    pub fn computer_words(&self) -> &PrefixIndex {
        &self.computer_words
    }

    /// Words accepted by [`validate_candidate`](Self::validate_candidate).
    #[must_use]
    pub fn user_words(&self) -> &PrefixIndex {
        &self.user_words
    }

    #[must_use]
    pub fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    /// Depth-first search for words starting at `(start_row, start_col)`.
    ///
    /// Every word of at least the minimum length that is in the dictionary and in
    /// neither found set is added to the computer's set. Returns how many were added.
    /// An off-board start finds nothing.
    pub fn solve(&mut self, start_row: usize, start_col: usize) -> usize {
        let mut word = String::new();
        let found = self.solve_from(&mut word, start_row, start_col);
        debug_assert!(self.visited.iter().all(|v| !v), "visited cells leaked out of solve");
        found
    }

    fn solve_from(&mut self, word: &mut String, row: usize, col: usize) -> usize {
        let Some(letter) = self.board.letter(row, col) else { return 0 };
        let cell = self.board.index(row, col);
        if self.visited[cell] {
            return 0;
        }
        // checks the word *before* this cell's letter; a dead prefix costs one extra level
        if !self.dictionary.is_prefix(word) {
            return 0;
        }

        self.visited[cell] = true;
        word.push(letter);

        let mut found = 0;
        if word.len() >= self.min_word_len
            && self.dictionary.is_word(word)
            && !self.computer_words.is_word(word)
            && !self.user_words.is_word(word)
        {
            debug!("found {word:?}");
            self.computer_words.insert_validated(word);
            found += 1;
        }

        for (dr, dc) in NEIGHBOR_OFFSETS {
            if let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                found += self.solve_from(word, r, c);
            }
        }

        word.pop();
        self.visited[cell] = false;
        found
    }

    /// Run [`solve`](Self::solve) from every cell in raster order.
    ///
    /// With a time limit the run may stop early between start cells; words found so far
    /// stay in the computer's set.
    pub fn solve_all(&mut self) -> SolveResult {
        let budget = self.time_limit.map(TimeBudget::new);
        let size = self.board.size();
        let mut new_words = 0;

        for row in 0..size {
            for col in 0..size {
                if let Some(budget) = budget.as_ref().filter(|b| b.expired()) {
                    let elapsed = budget.elapsed();
                    warn!("Time budget expired after {:.3}s at cell ({row}, {col})", elapsed.as_secs_f64());
                    return SolveResult { new_words, status: SolveStatus::TimedOut { elapsed } };
                }
                new_words += self.solve(row, col);
            }
        }

        info!("Solved {size}x{size} board: {new_words} new word(s)");
        SolveResult { new_words, status: SolveStatus::Exhausted }
    }

    /// Can `word` be traced on the board, regardless of the dictionary?
    #[must_use]
    pub fn is_on_board(&self, word: &str) -> bool {
        self.trace(word).is_some()
    }

    /// First path (cells in word order) that spells `word`, scanning start cells in
    /// raster order. No cell appears twice in a path. `None` for the empty word.
    #[must_use]
    pub fn trace(&self, word: &str) -> Option<Vec<(usize, usize)>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }

        // reuse is forbidden within one candidate path only
        let mut used = vec![false; self.board.size() * self.board.size()];
        let mut path = Vec::with_capacity(letters.len());
        for (row, col) in self.board.positions() {
            if self.trace_from(&letters, row, col, &mut used, &mut path) {
                return Some(path);
            }
        }
        None
    }

    fn trace_from(
        &self,
        letters: &[char],
        row: usize,
        col: usize,
        used: &mut [bool],
        path: &mut Vec<(usize, usize)>,
    ) -> bool {
        let Some((&first, rest)) = letters.split_first() else { return true };
        let cell = self.board.index(row, col);
        if used[cell] || self.board.letter(row, col) != Some(first) {
            return false;
        }

        used[cell] = true;
        path.push((row, col));

        let complete = rest.is_empty()
            || self
                .board
                .neighbors(row, col)
                .any(|(r, c)| self.trace_from(rest, r, c, used, path));

        used[cell] = false;
        if !complete {
            path.pop();
        }
        complete
    }

    /// Check a player's word and, if it is legal, add it to the player's set.
    ///
    /// Checks run in this order and stop at the first failure: minimum length,
    /// dictionary membership, already found by the player, traceable on the board.
    /// The word is trimmed and lowercased first.
    pub fn validate_candidate(&mut self, word: &str) -> Validation {
        let word = word.trim().to_ascii_lowercase();

        let verdict = if word.chars().count() < self.min_word_len {
            Validation::Rejected(Rejection::TooShort { min_len: self.min_word_len })
        } else if !self.dictionary.is_word(&word) {
            Validation::Rejected(Rejection::NotInDictionary)
        } else if self.user_words.is_word(&word) {
            Validation::Rejected(Rejection::AlreadyFound)
        } else if !self.is_on_board(&word) {
            Validation::Rejected(Rejection::NotOnBoard)
        } else {
            // dictionary words are always valid index words
            self.user_words.insert_validated(&word);
            Validation::Accepted
        };

        debug!("validate {word:?}: {verdict:?}");
        verdict
    }

    /// [`validate_candidate`](Self::validate_candidate) each word in turn, pairing it
    /// with its verdict. Later words see the words accepted before them.
    pub fn validate_candidates<I, S>(&mut self, candidates: I) -> Vec<(S, Validation)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .map(|word| {
                let verdict = self.validate_candidate(word.as_ref());
                (word, verdict)
            })
            .collect()
    }
}
