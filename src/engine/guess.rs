//! Number-guessing rules: compare a guess against the secret and keep count
//! of the attempts spent.

use super::EngineError;

/// Lowest value a secret number (and therefore a guess) can take.
pub const GUESS_MIN: u32 = 1;
/// Highest value a secret number (and therefore a guess) can take.
pub const GUESS_MAX: u32 = 100;

/// Result of comparing one guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the secret; the round is over.
    Correct,
    /// The guess was above the secret.
    TooHigh,
    /// The guess was below the secret.
    TooLow,
}

/// Compare `guess` against `secret`, returning the outcome and the updated
/// attempt count.
///
/// Guesses outside [`GUESS_MIN`]..=[`GUESS_MAX`] are rejected without
/// consuming an attempt.
pub fn evaluate_guess(
    secret: u32,
    guess: u32,
    attempts: u32,
) -> Result<(GuessOutcome, u32), EngineError> {
    if !(GUESS_MIN..=GUESS_MAX).contains(&guess) {
        return Err(EngineError::GuessOutOfRange {
            guess: guess.into(),
        });
    }

    let outcome = if guess == secret {
        GuessOutcome::Correct
    } else if guess > secret {
        GuessOutcome::TooHigh
    } else {
        GuessOutcome::TooLow
    };

    Ok((outcome, attempts + 1))
}
