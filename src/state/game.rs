//! Per-session game state and the move application logic tying it to the
//! rule engine.

use rand::Rng;

use crate::engine::{
    self, Board, BoardStatus, Cell, EngineError, GUESS_MAX, GUESS_MIN, GameKind, GuessOutcome,
    Hand, Mark, RpsOutcome,
};

/// Mutable state of one in-progress game for one session.
///
/// Exactly one value lives per (session, game kind) pair; a finished state is
/// replaced by a fresh one on the next move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Number-guessing round: a fixed secret and the attempts spent on it.
    NumberGuess {
        /// Secret drawn at creation, 1-100.
        secret: u32,
        /// Guesses consumed so far.
        attempts: u32,
        /// Set once the secret has been guessed.
        finished: bool,
    },
    /// Tic-tac-toe game against the computer.
    TicTacToe {
        /// Current board contents.
        board: Board,
        /// Set once the board reached a win or a draw.
        finished: bool,
        /// Winning side, if any.
        winner: Option<Mark>,
    },
    /// Rock-paper-scissors running tallies, cumulative across rounds.
    RockPaperScissors {
        /// Rounds won by the player.
        wins: u32,
        /// Rounds won by the computer.
        losses: u32,
        /// Rounds with identical hands.
        ties: u32,
    },
}

/// Everything a tic-tac-toe move produced: the resulting board, its status,
/// and the computer's reply when one was played.
#[derive(Debug, Clone, Copy)]
pub struct BoardMove {
    /// Board after the player's mark and the computer's reply.
    pub board: Board,
    /// Status of that board.
    pub status: BoardStatus,
    /// Cell the computer answered with, if it got to play.
    pub computer_cell: Option<usize>,
}

/// Outcome of one rock-paper-scissors round plus the updated tallies.
#[derive(Debug, Clone, Copy)]
pub struct RpsRound {
    /// Round outcome from the player's point of view.
    pub outcome: RpsOutcome,
    /// Cumulative player wins.
    pub wins: u32,
    /// Cumulative player losses.
    pub losses: u32,
    /// Cumulative ties.
    pub ties: u32,
}

impl RpsRound {
    /// Total rounds played in this session.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl GameState {
    /// Create the initial state for `kind`, drawing any secrets from `rng`.
    pub fn new(kind: GameKind, rng: &mut impl Rng) -> Self {
        match kind {
            GameKind::NumberGuess => GameState::NumberGuess {
                secret: rng.random_range(GUESS_MIN..=GUESS_MAX),
                attempts: 0,
                finished: false,
            },
            GameKind::TicTacToe => GameState::TicTacToe {
                board: [Cell::Empty; engine::BOARD_CELLS],
                finished: false,
                winner: None,
            },
            GameKind::RockPaperScissors => GameState::RockPaperScissors {
                wins: 0,
                losses: 0,
                ties: 0,
            },
        }
    }

    /// Game this state belongs to.
    pub fn kind(&self) -> GameKind {
        match self {
            GameState::NumberGuess { .. } => GameKind::NumberGuess,
            GameState::TicTacToe { .. } => GameKind::TicTacToe,
            GameState::RockPaperScissors { .. } => GameKind::RockPaperScissors,
        }
    }

    /// Whether this state reached a terminal outcome. Rock-paper-scissors
    /// tallies never finish; they accumulate until reset or expiry.
    pub fn is_finished(&self) -> bool {
        match self {
            GameState::NumberGuess { finished, .. } => *finished,
            GameState::TicTacToe { finished, .. } => *finished,
            GameState::RockPaperScissors { .. } => false,
        }
    }

    /// Evaluate one guess against the secret, updating the attempt counter.
    /// Rejected guesses leave the state untouched.
    pub fn apply_guess(&mut self, guess: u32) -> Result<(GuessOutcome, u32), EngineError> {
        let GameState::NumberGuess {
            secret,
            attempts,
            finished,
        } = self
        else {
            return Err(self.wrong_game(GameKind::NumberGuess));
        };

        let (outcome, spent) = engine::evaluate_guess(*secret, guess, *attempts)?;
        *attempts = spent;
        if outcome == GuessOutcome::Correct {
            *finished = true;
        }
        Ok((outcome, spent))
    }

    /// Place the player's mark at `position` and, when the game goes on, let
    /// the computer reply. Rejected moves leave the board untouched.
    pub fn apply_board_move(&mut self, position: usize) -> Result<BoardMove, EngineError> {
        let GameState::TicTacToe {
            board,
            finished,
            winner,
        } = self
        else {
            return Err(self.wrong_game(GameKind::TicTacToe));
        };

        engine::place_mark(board, position, Mark::Player)?;
        let mut status = engine::status(board);
        let mut computer_cell = None;

        if status == BoardStatus::Ongoing {
            if let Some(cell) = engine::computer_move(board) {
                // The reply targets a cell computer_move just reported empty.
                engine::place_mark(board, cell, Mark::Computer)?;
                status = engine::status(board);
                computer_cell = Some(cell);
            }
        }

        if matches!(status, BoardStatus::Won(_) | BoardStatus::Draw) {
            *finished = true;
            if let BoardStatus::Won(mark) = status {
                *winner = Some(mark);
            }
        }

        Ok(BoardMove {
            board: *board,
            status,
            computer_cell,
        })
    }

    /// Resolve one rock-paper-scissors round and fold it into the tallies.
    pub fn apply_rps(&mut self, player: Hand, computer: Hand) -> Result<RpsRound, EngineError> {
        let GameState::RockPaperScissors { wins, losses, ties } = self else {
            return Err(self.wrong_game(GameKind::RockPaperScissors));
        };

        let outcome = engine::duel(player, computer);
        match outcome {
            RpsOutcome::Win => *wins += 1,
            RpsOutcome::Lose => *losses += 1,
            RpsOutcome::Tie => *ties += 1,
        }

        Ok(RpsRound {
            outcome,
            wins: *wins,
            losses: *losses,
            ties: *ties,
        })
    }

    fn wrong_game(&self, expected: GameKind) -> EngineError {
        EngineError::WrongGame {
            expected,
            actual: self.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess_state(secret: u32) -> GameState {
        GameState::NumberGuess {
            secret,
            attempts: 0,
            finished: false,
        }
    }

    #[test]
    fn guessing_the_secret_finishes_the_state() {
        let mut state = guess_state(30);
        assert_eq!(state.apply_guess(10), Ok((GuessOutcome::TooLow, 1)));
        assert!(!state.is_finished());
        assert_eq!(state.apply_guess(30), Ok((GuessOutcome::Correct, 2)));
        assert!(state.is_finished());
    }

    #[test]
    fn rejected_guess_leaves_state_untouched() {
        let mut state = guess_state(30);
        let before = state.clone();
        assert!(state.apply_guess(500).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn board_move_gets_a_computer_reply_while_ongoing() {
        let mut rng = rand::rng();
        let mut state = GameState::new(GameKind::TicTacToe, &mut rng);

        let result = state.apply_board_move(0).unwrap();
        assert_eq!(result.status, BoardStatus::Ongoing);
        // First reply under the greedy policy is always the center.
        assert_eq!(result.computer_cell, Some(4));
        assert!(!state.is_finished());
    }

    #[test]
    fn board_win_marks_the_state_finished() {
        let mut state = GameState::TicTacToe {
            board: [
                Cell::Player,
                Cell::Player,
                Cell::Empty,
                Cell::Computer,
                Cell::Computer,
                Cell::Empty,
                Cell::Player,
                Cell::Empty,
                Cell::Empty,
            ],
            finished: false,
            winner: None,
        };

        let result = state.apply_board_move(2).unwrap();
        assert_eq!(result.status, BoardStatus::Won(Mark::Player));
        assert_eq!(result.computer_cell, None);
        assert!(state.is_finished());
        assert!(matches!(
            state,
            GameState::TicTacToe {
                winner: Some(Mark::Player),
                ..
            }
        ));
    }

    #[test]
    fn rps_tallies_accumulate() {
        let mut rng = rand::rng();
        let mut state = GameState::new(GameKind::RockPaperScissors, &mut rng);

        let round = state.apply_rps(Hand::Rock, Hand::Scissors).unwrap();
        assert_eq!(round.outcome, RpsOutcome::Win);
        let round = state.apply_rps(Hand::Rock, Hand::Rock).unwrap();
        assert_eq!(round.outcome, RpsOutcome::Tie);
        let round = state.apply_rps(Hand::Paper, Hand::Scissors).unwrap();
        assert_eq!(round.outcome, RpsOutcome::Lose);

        assert_eq!((round.wins, round.losses, round.ties), (1, 1, 1));
        assert_eq!(round.rounds(), 3);
        assert!(!state.is_finished());
    }

    #[test]
    fn moves_against_the_wrong_state_are_rejected() {
        let mut state = guess_state(30);
        assert!(matches!(
            state.apply_board_move(0),
            Err(EngineError::WrongGame { .. })
        ));
    }
}
