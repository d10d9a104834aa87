use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use wordgrid::config::{GameConfig, DEFAULT_BOARD_PATH, DEFAULT_DICTIONARY_PATH};
use wordgrid::errors::GridError;
use wordgrid::report::{format_board, format_found_words, Finder};
use wordgrid::solver::{GridSolver, SolveStatus, DEFAULT_MIN_WORD_LEN};

const PROMPT: &str = "Enter as many words as you can! Enter \"q\" to quit.";

/// Word-grid game: find words on a letter board, then see what the computer finds
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Board file: letters separated by whitespace, row by row
    #[arg(short, long, default_value = DEFAULT_BOARD_PATH)]
    board: PathBuf,

    /// Dictionary file: whitespace-separated words
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Board dimension (inferred from the letter count if omitted)
    #[arg(short, long)]
    size: Option<usize>,

    /// Shortest word that counts
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_length: usize,

    /// Stop the computer's search after this many seconds
    #[arg(short = 't', long)]
    time_limit: Option<f64>,

    /// Skip the interactive round and only show the computer's words
    #[arg(long)]
    solve_only: bool,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig, Box<dyn std::error::Error>> {
        let time_limit = self.time_limit.map(Duration::try_from_secs_f64).transpose()?;
        Ok(GameConfig {
            board_path: self.board,
            dictionary_path: self.dictionary,
            board_size: self.size,
            min_word_len: self.min_length,
            time_limit,
        })
    }
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], printing any error (with its code and help text when
/// it is a [`GridError`]) before exiting with code 1.
fn main() -> ExitCode {
    wordgrid::log::init_logger(wordgrid::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load the game, run the player's round, then let the computer solve the board.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let solve_only = cli.solve_only;
    let config = cli.into_config()?;

    let t_load = Instant::now();
    let mut solver = config.load_solver()?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "{}", format_board(solver.board()))?;

    if !solve_only {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;
        play_round(&mut solver, io::stdin().lock(), &mut out)?;
        write_user_report(&solver, &mut out)?;
    }

    let t_solve = Instant::now();
    let result = solver.solve_all();
    let solve_secs = t_solve.elapsed().as_secs_f64();

    write!(out, "{}", format_found_words(Finder::Computer, solver.computer_words()))?;
    out.flush()?;

    if let SolveStatus::TimedOut { elapsed } = result.status {
        eprintln!("Timed out after {:.1}s; some words may be missing", elapsed.as_secs_f64());
    }
    eprintln!(
        "Loaded {} dictionary words in {:.3}s; solved in {:.3}s.",
        solver.dictionary().word_count(),
        load_secs,
        solve_secs
    );

    Ok(())
}

/// The player's listing, set off from the round and the computer's listing by blank lines.
fn write_user_report<W: Write>(solver: &GridSolver, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", format_found_words(Finder::User, solver.user_words()))?;
    writeln!(out)
}

/// Validate whitespace-separated words from `input` until `q`/`Q` or end of input,
/// writing one verdict per word.
fn play_round<R: BufRead, W: Write>(solver: &mut GridSolver, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if token.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            writeln!(out, "{}", solver.validate_candidate(token))?;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid::board::Board;
    use wordgrid::prefix_index::PrefixIndex;

    fn cats_solver() -> GridSolver {
        let board: Board = "ca ts".parse().unwrap();
        let dictionary: PrefixIndex = ["cat", "cats", "scat", "at"].into_iter().collect();
        GridSolver::new(board, dictionary)
    }

    #[test]
    fn test_play_round_stops_at_q() {
        let mut solver = cats_solver();
        let mut out = Vec::new();
        play_round(&mut solver, "cats cat\nQ scat\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Nice! Word is legal.\nWord is invalid. Must be at least 4 characters.\n"
        );
        assert!(solver.user_words().is_word("cats"));
        assert!(!solver.user_words().is_word("scat"));
    }

    #[test]
    fn test_play_round_runs_to_end_of_input() {
        let mut solver = cats_solver();
        let mut out = Vec::new();
        play_round(&mut solver, "scat\n\n  cats   cats".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.lines().last(), Some("Word is invalid. Already found."));
        assert_eq!(solver.user_words().word_count(), 2);
    }

    #[test]
    fn test_user_report_is_framed_by_blank_lines() {
        let mut solver = cats_solver();
        assert!(solver.validate_candidate("scat").is_accepted());

        let mut out = Vec::new();
        write_user_report(&solver, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nThe user found the following words:\n============\nscat\n============\nThe user found 1 word.\n\n"
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wordgrid"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_cli_rejects_negative_time_limit() {
        let cli = Cli::parse_from(["wordgrid", "--time-limit=-1"]);
        assert!(cli.into_config().is_err());
    }
}
