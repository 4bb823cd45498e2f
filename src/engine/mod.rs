//! Pure rule evaluation and scoring for the three arcade games.
//!
//! Nothing in this module touches sessions, storage, or the clock: every
//! function maps inputs to outputs so the rules can be tested in isolation.
//! Randomness (secret numbers, computer hands) is always injected by the
//! caller through a [`rand::Rng`].

mod board;
mod guess;
mod rps;
pub mod scoring;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub use board::{
    BOARD_CELLS, Board, BoardStatus, Cell, Mark, computer_move, place_mark, status,
};
pub use guess::{GUESS_MAX, GUESS_MIN, GuessOutcome, evaluate_guess};
pub use rps::{Hand, RpsOutcome, duel, random_hand};

/// The three games hosted by the arcade, used as a tag wherever state or
/// scores are keyed by game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GameKind {
    /// Guess a secret number between 1 and 100.
    #[serde(rename = "number_guess", alias = "number-guess")]
    NumberGuess,
    /// Tic-tac-toe against the computer.
    #[serde(rename = "tic_tac_toe", alias = "tic-tac-toe")]
    TicTacToe,
    /// Rock-paper-scissors against a random computer hand.
    #[serde(rename = "rock_paper_scissors", alias = "rock-paper-scissors")]
    RockPaperScissors,
}

impl GameKind {
    /// Canonical identifier used in persisted records and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::NumberGuess => "number_guess",
            GameKind::TicTacToe => "tic_tac_toe",
            GameKind::RockPaperScissors => "rock_paper_scissors",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejections raised by the rule evaluators. All of them leave the state
/// they were evaluated against untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Guess submitted outside the accepted 1-100 range.
    #[error("guess {guess} is outside the {GUESS_MIN}-{GUESS_MAX} range")]
    GuessOutOfRange {
        /// The rejected guess.
        guess: i64,
    },
    /// Board move aimed at a cell index that does not exist.
    #[error("cell {index} is outside the 0-{} board", BOARD_CELLS - 1)]
    CellOutOfRange {
        /// The rejected cell index.
        index: usize,
    },
    /// Board move aimed at a cell that already carries a mark.
    #[error("cell {index} is already occupied")]
    CellOccupied {
        /// The rejected cell index.
        index: usize,
    },
    /// A move was applied to a session state tracking a different game.
    #[error("expected {expected} state, found {actual}")]
    WrongGame {
        /// Game the move belongs to.
        expected: GameKind,
        /// Game the session state actually tracks.
        actual: GameKind,
    },
}
