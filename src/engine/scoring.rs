//! Score formulas applied to terminal game outcomes.

use super::{BoardStatus, Mark, RpsOutcome};

/// Score awarded for a correct guess on the very first attempt.
pub const GUESS_SCORE_CEILING: u32 = 100;
/// Minimum score a correct guess can yield, however many attempts it took.
pub const GUESS_SCORE_FLOOR: u32 = 10;
/// Fixed reward for beating the computer at tic-tac-toe.
pub const BOARD_WIN_SCORE: u32 = 100;
/// Fixed reward for winning one rock-paper-scissors round.
pub const RPS_WIN_SCORE: u32 = 10;

/// Score for a correct guess after `attempts` attempts:
/// `max(100 - attempts, 10)`.
pub fn guess_score(attempts: u32) -> u32 {
    GUESS_SCORE_CEILING
        .saturating_sub(attempts)
        .max(GUESS_SCORE_FLOOR)
}

/// Score for a finished board: the win reward for a player win, nothing for
/// a draw or a computer win.
pub fn board_score(status: BoardStatus) -> u32 {
    match status {
        BoardStatus::Won(Mark::Player) => BOARD_WIN_SCORE,
        _ => 0,
    }
}

/// Score for one rock-paper-scissors round.
pub fn rps_score(outcome: RpsOutcome) -> u32 {
    match outcome {
        RpsOutcome::Win => RPS_WIN_SCORE,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_score_decreases_with_attempts() {
        assert_eq!(guess_score(0), 100);
        assert_eq!(guess_score(1), 99);
        assert_eq!(guess_score(50), 50);
    }

    #[test]
    fn guess_score_floors_at_ten() {
        assert_eq!(guess_score(90), 10);
        assert_eq!(guess_score(95), 10);
        assert_eq!(guess_score(1000), 10);
    }

    #[test]
    fn only_player_wins_pay_on_the_board() {
        assert_eq!(board_score(BoardStatus::Won(Mark::Player)), BOARD_WIN_SCORE);
        assert_eq!(board_score(BoardStatus::Won(Mark::Computer)), 0);
        assert_eq!(board_score(BoardStatus::Draw), 0);
        assert_eq!(board_score(BoardStatus::Ongoing), 0);
    }

    #[test]
    fn only_rps_wins_pay() {
        assert_eq!(rps_score(RpsOutcome::Win), RPS_WIN_SCORE);
        assert_eq!(rps_score(RpsOutcome::Lose), 0);
        assert_eq!(rps_score(RpsOutcome::Tie), 0);
    }
}
