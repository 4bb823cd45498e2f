//! Registry mapping (session id, game kind) to live game state.
//!
//! The registry is the explicit form of the session binding: handlers pass
//! the session id extracted from the request and never cache state across
//! invocations. Entries are swept once they sit idle past the configured
//! time-to-live.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use crate::{engine::GameKind, state::game::GameState};

/// One live game slot together with its idle-tracking timestamp.
struct SessionSlot {
    state: GameState,
    last_seen: Instant,
}

/// Concurrent map of live game states keyed by (session id, game kind).
#[derive(Default)]
pub struct SessionRegistry {
    slots: DashMap<(Uuid, GameKind), SessionSlot>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `apply` against the live state for (`session`, `kind`).
    ///
    /// A missing slot is created with `fresh`; a slot holding a finished
    /// state is replaced with `fresh` first, so a move after a terminal
    /// outcome always starts a new game. The slot's idle clock is refreshed.
    pub fn update<T>(
        &self,
        session: Uuid,
        kind: GameKind,
        mut fresh: impl FnMut() -> GameState,
        apply: impl FnOnce(&mut GameState) -> T,
    ) -> T {
        let mut slot = self
            .slots
            .entry((session, kind))
            .or_insert_with(|| SessionSlot {
                state: fresh(),
                last_seen: Instant::now(),
            });

        if slot.state.is_finished() {
            slot.state = fresh();
        }
        slot.last_seen = Instant::now();

        apply(&mut slot.state)
    }

    /// Discard the state for (`session`, `kind`), reporting whether a slot
    /// existed.
    pub fn reset(&self, session: Uuid, kind: GameKind) -> bool {
        self.slots.remove(&(session, kind)).is_some()
    }

    /// Drop every slot idle for longer than `ttl`, returning how many were
    /// removed.
    pub fn sweep_expired(&self, ttl: Duration) -> usize {
        let before = self.slots.len();
        let cutoff = Instant::now();
        self.slots
            .retain(|_, slot| cutoff.duration_since(slot.last_seen) <= ttl);
        before.saturating_sub(self.slots.len())
    }

    /// Number of live slots, used for observability.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is live.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GuessOutcome;

    fn fixed_guess_state(secret: u32) -> GameState {
        GameState::NumberGuess {
            secret,
            attempts: 0,
            finished: false,
        }
    }

    #[test]
    fn state_persists_across_moves() {
        let registry = SessionRegistry::new();
        let session = Uuid::new_v4();

        let first = registry.update(
            session,
            GameKind::NumberGuess,
            || fixed_guess_state(50),
            |state| state.apply_guess(10).unwrap(),
        );
        assert_eq!(first, (GuessOutcome::TooLow, 1));

        let second = registry.update(
            session,
            GameKind::NumberGuess,
            || fixed_guess_state(50),
            |state| state.apply_guess(80).unwrap(),
        );
        assert_eq!(second, (GuessOutcome::TooHigh, 2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn finished_state_is_replaced_on_the_next_move() {
        let registry = SessionRegistry::new();
        let session = Uuid::new_v4();

        let (outcome, attempts) = registry.update(
            session,
            GameKind::NumberGuess,
            || fixed_guess_state(50),
            |state| state.apply_guess(50).unwrap(),
        );
        assert_eq!((outcome, attempts), (GuessOutcome::Correct, 1));

        // Next move starts over with a fresh secret and a zeroed counter.
        let (_, attempts) = registry.update(
            session,
            GameKind::NumberGuess,
            || fixed_guess_state(60),
            |state| state.apply_guess(10).unwrap(),
        );
        assert_eq!(attempts, 1);
    }

    #[test]
    fn fresh_factory_serves_both_creation_and_replacement() {
        let registry = SessionRegistry::new();
        let session = Uuid::new_v4();
        let mut spawned = 0;
        let mut fresh = || {
            spawned += 1;
            fixed_guess_state(50)
        };

        // First move creates the slot, second finishes it, third replaces it.
        registry.update(session, GameKind::NumberGuess, &mut fresh, |state| {
            state.apply_guess(10).unwrap()
        });
        registry.update(session, GameKind::NumberGuess, &mut fresh, |state| {
            state.apply_guess(50).unwrap()
        });
        let (_, attempts) = registry.update(session, GameKind::NumberGuess, &mut fresh, |state| {
            state.apply_guess(10).unwrap()
        });

        assert_eq!(attempts, 1);
        assert_eq!(spawned, 2);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let registry = SessionRegistry::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        registry.update(
            first,
            GameKind::NumberGuess,
            || fixed_guess_state(50),
            |state| state.apply_guess(10).unwrap(),
        );
        let (_, attempts) = registry.update(
            second,
            GameKind::NumberGuess,
            || fixed_guess_state(50),
            |state| state.apply_guess(10).unwrap(),
        );
        assert_eq!(attempts, 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reset_discards_only_the_targeted_slot() {
        let registry = SessionRegistry::new();
        let session = Uuid::new_v4();
        let mut rng = rand::rng();

        registry.update(
            session,
            GameKind::NumberGuess,
            || GameState::new(GameKind::NumberGuess, &mut rng),
            |_| (),
        );
        let mut rng = rand::rng();
        registry.update(
            session,
            GameKind::RockPaperScissors,
            || GameState::new(GameKind::RockPaperScissors, &mut rng),
            |_| (),
        );

        assert!(registry.reset(session, GameKind::NumberGuess));
        assert!(!registry.reset(session, GameKind::NumberGuess));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn sweep_removes_idle_slots() {
        let registry = SessionRegistry::new();
        let session = Uuid::new_v4();
        let mut rng = rand::rng();

        registry.update(
            session,
            GameKind::RockPaperScissors,
            || GameState::new(GameKind::RockPaperScissors, &mut rng),
            |_| (),
        );

        assert_eq!(registry.sweep_expired(Duration::from_secs(60)), 0);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(registry.sweep_expired(Duration::ZERO), 1);
        assert!(registry.is_empty());
    }
}
