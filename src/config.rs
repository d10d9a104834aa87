//! Game configuration: where the board and dictionary come from and how the
//! solver is tuned. Nothing here is compiled into the search itself.

use crate::board::Board;
use crate::errors::GridError;
use crate::prefix_index::PrefixIndex;
use crate::solver::{GridSolver, DEFAULT_MIN_WORD_LEN};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BOARD_PATH: &str = "boggle-in.txt";
pub const DEFAULT_DICTIONARY_PATH: &str = "ospd.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_path: PathBuf,
    pub dictionary_path: PathBuf,
    /// `None` infers the size from the number of letters on the board.
    pub board_size: Option<usize>,
    pub min_word_len: usize,
    pub time_limit: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_path: PathBuf::from(DEFAULT_BOARD_PATH),
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            board_size: None,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            time_limit: None,
        }
    }
}

impl GameConfig {
    /// Load the board, then the dictionary, and build a solver from them.
    ///
    /// # Errors
    ///
    /// The first [`GridError`] hit while loading; the dictionary is not read if the
    /// board fails.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_solver(&self) -> Result<GridSolver, GridError> {
        let board = Board::load_from_path(&self.board_path, self.board_size)?;
        info!("Loaded {0}x{0} board from '{1}'", board.size(), self.board_path.display());

        let dictionary = PrefixIndex::from_path(&self.dictionary_path)?;

        Ok(GridSolver::new(board, dictionary)
            .with_min_word_len(self.min_word_len)
            .with_time_limit(self.time_limit))
    }
}
