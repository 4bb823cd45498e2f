//! Rock-paper-scissors outcome table and the computer's hand draw.

use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A hand thrown in rock-paper-scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    /// Rock blunts scissors.
    Rock,
    /// Paper wraps rock.
    Paper,
    /// Scissors cut paper.
    Scissors,
}

impl Hand {
    /// The hand this one defeats.
    fn beats(&self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }
}

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RpsOutcome {
    /// The player's hand beat the computer's.
    Win,
    /// The computer's hand beat the player's.
    Lose,
    /// Both sides threw the same hand.
    Tie,
}

/// Resolve a round between the player's and the computer's hands.
pub fn duel(player: Hand, computer: Hand) -> RpsOutcome {
    if player == computer {
        RpsOutcome::Tie
    } else if player.beats() == computer {
        RpsOutcome::Win
    } else {
        RpsOutcome::Lose
    }
}

/// Draw a uniformly random hand from the provided randomness source.
pub fn random_hand(rng: &mut impl Rng) -> Hand {
    match rng.random_range(0..3u8) {
        0 => Hand::Rock,
        1 => Hand::Paper,
        _ => Hand::Scissors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winning_pairs() {
        assert_eq!(duel(Hand::Rock, Hand::Scissors), RpsOutcome::Win);
        assert_eq!(duel(Hand::Paper, Hand::Rock), RpsOutcome::Win);
        assert_eq!(duel(Hand::Scissors, Hand::Paper), RpsOutcome::Win);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(duel(Hand::Rock, Hand::Paper), RpsOutcome::Lose);
        assert_eq!(duel(Hand::Paper, Hand::Scissors), RpsOutcome::Lose);
        assert_eq!(duel(Hand::Scissors, Hand::Rock), RpsOutcome::Lose);
    }

    #[test]
    fn identical_hands_tie() {
        for hand in [Hand::Rock, Hand::Paper, Hand::Scissors] {
            assert_eq!(duel(hand, hand), RpsOutcome::Tie);
        }
    }

    #[test]
    fn random_hand_covers_all_hands() {
        let mut rng = rand::rng();
        let mut seen = [false; 3];
        for _ in 0..200 {
            match random_hand(&mut rng) {
                Hand::Rock => seen[0] = true,
                Hand::Paper => seen[1] = true,
                Hand::Scissors => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }
}
