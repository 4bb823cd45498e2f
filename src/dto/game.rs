//! DTO definitions for the game move routes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use validator::{Validate, ValidationErrors};

use crate::{
    dto::validation::validate_player_name,
    engine::{BoardStatus, Cell, GuessOutcome, Hand, Mark, RpsOutcome},
    state::game::{BoardMove, RpsRound},
};

/// Validate an optional player name the way every move payload does.
fn validate_optional_player_name(name: &Option<String>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(name) = name {
        if let Err(err) = validate_player_name(name) {
            errors.add("player_name", err);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Payload submitting one guess at the secret number.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GuessRequest {
    /// Name credited on the leaderboard; "Anonymous" when omitted.
    pub player_name: Option<String>,
    /// The guessed number, expected within 1-100.
    pub guess: u32,
}

impl Validate for GuessRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_optional_player_name(&self.player_name)
    }
}

/// Hint returned after each guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GuessHint {
    /// The secret was found; the round is over.
    Correct,
    /// Try a lower number.
    TooHigh,
    /// Try a higher number.
    TooLow,
}

impl From<GuessOutcome> for GuessHint {
    fn from(outcome: GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::Correct => GuessHint::Correct,
            GuessOutcome::TooHigh => GuessHint::TooHigh,
            GuessOutcome::TooLow => GuessHint::TooLow,
        }
    }
}

/// Result of one guess, including the score when the round ended.
#[derive(Debug, Serialize, ToSchema)]
pub struct GuessResponse {
    /// Session the state is bound to; echo it in `x-session-id`.
    pub session_id: Uuid,
    /// Whether the guess was correct, too high, or too low.
    pub result: GuessHint,
    /// Guesses spent on the current secret.
    pub attempts: u32,
    /// Awarded score, present only on a correct guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Whether the round reached its terminal outcome.
    pub finished: bool,
}

/// Payload placing the player's mark on the tic-tac-toe board.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BoardMoveRequest {
    /// Name credited on the leaderboard; "Anonymous" when omitted.
    pub player_name: Option<String>,
    /// Cell index, row-major 0-8.
    pub position: usize,
}

impl Validate for BoardMoveRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_optional_player_name(&self.player_name)
    }
}

/// Terminal classification of a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardOutcome {
    /// The game continues.
    Ongoing,
    /// The player completed a line.
    PlayerWon,
    /// The computer completed a line.
    ComputerWon,
    /// Full board, no line.
    Draw,
}

impl From<BoardStatus> for BoardOutcome {
    fn from(status: BoardStatus) -> Self {
        match status {
            BoardStatus::Ongoing => BoardOutcome::Ongoing,
            BoardStatus::Won(Mark::Player) => BoardOutcome::PlayerWon,
            BoardStatus::Won(Mark::Computer) => BoardOutcome::ComputerWon,
            BoardStatus::Draw => BoardOutcome::Draw,
        }
    }
}

/// Result of one board move, including the computer's reply.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardMoveResponse {
    /// Session the state is bound to; echo it in `x-session-id`.
    pub session_id: Uuid,
    /// Board after the player's mark and the computer's reply, row-major.
    pub board: Vec<Cell>,
    /// Classification of the resulting board.
    pub status: BoardOutcome,
    /// Cell the computer answered with, if it played.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_move: Option<usize>,
    /// Awarded score, present only when the player won.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Whether the board reached a terminal outcome.
    pub finished: bool,
}

impl BoardMoveResponse {
    /// Assemble the response from the applied move and the optional award.
    pub fn from_move(session_id: Uuid, applied: BoardMove, score: Option<u32>) -> Self {
        let status: BoardOutcome = applied.status.into();
        Self {
            session_id,
            board: applied.board.to_vec(),
            status,
            computer_move: applied.computer_cell,
            score,
            finished: status != BoardOutcome::Ongoing,
        }
    }
}

/// Payload throwing one rock-paper-scissors hand.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RpsRequest {
    /// Name credited on the leaderboard; "Anonymous" when omitted.
    pub player_name: Option<String>,
    /// The player's hand.
    pub choice: Hand,
}

impl Validate for RpsRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_optional_player_name(&self.player_name)
    }
}

/// Result of one rock-paper-scissors round with the session tallies.
#[derive(Debug, Serialize, ToSchema)]
pub struct RpsResponse {
    /// Session the tallies are bound to; echo it in `x-session-id`.
    pub session_id: Uuid,
    /// Hand the player threw.
    pub player_choice: Hand,
    /// Hand the computer drew.
    pub computer_choice: Hand,
    /// Round outcome from the player's point of view.
    pub outcome: RpsOutcome,
    /// Cumulative rounds won by the player this session.
    pub wins: u32,
    /// Cumulative rounds won by the computer this session.
    pub losses: u32,
    /// Cumulative rounds with identical hands this session.
    pub ties: u32,
    /// Player win percentage over the session, one decimal.
    pub win_rate: f64,
    /// Awarded score, present only on a won round.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl RpsResponse {
    /// Assemble the response from a resolved round.
    pub fn from_round(
        session_id: Uuid,
        player_choice: Hand,
        computer_choice: Hand,
        round: RpsRound,
        score: Option<u32>,
    ) -> Self {
        let rounds = round.rounds();
        let win_rate = if rounds == 0 {
            0.0
        } else {
            (f64::from(round.wins) / f64::from(rounds) * 1000.0).round() / 10.0
        };

        Self {
            session_id,
            player_choice,
            computer_choice,
            outcome: round.outcome,
            wins: round.wins,
            losses: round.losses,
            ties: round.ties,
            win_rate,
            score,
        }
    }
}

/// Acknowledgement of a per-session game reset.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResetGameResponse {
    /// Session the reset applied to.
    pub session_id: Uuid,
    /// Whether a live state existed and was discarded.
    pub cleared: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rate_is_rounded_to_one_decimal() {
        let round = RpsRound {
            outcome: RpsOutcome::Win,
            wins: 1,
            losses: 1,
            ties: 1,
        };
        let response =
            RpsResponse::from_round(Uuid::new_v4(), Hand::Rock, Hand::Scissors, round, Some(10));
        assert_eq!(response.win_rate, 33.3);
    }

    #[test]
    fn board_response_flags_terminal_outcomes() {
        let applied = BoardMove {
            board: [Cell::Empty; 9],
            status: BoardStatus::Draw,
            computer_cell: None,
        };
        let response = BoardMoveResponse::from_move(Uuid::new_v4(), applied, None);
        assert!(response.finished);
        assert_eq!(response.status, BoardOutcome::Draw);
    }
}
