use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

use crate::engine::GameKind;

/// One completed game round as persisted by the score store.
///
/// Records are immutable once written: the store only ever appends, reads,
/// or wipes them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecordEntity {
    /// Stable identifier for the record.
    pub id: Uuid,
    /// Display name the player submitted with the move ("Anonymous" when
    /// omitted).
    pub player_name: String,
    /// Game the round belongs to.
    pub game_type: GameKind,
    /// Score awarded for the round.
    pub score: u32,
    /// Attempts or rounds spent reaching the outcome.
    pub attempts: u32,
    /// When the record was written.
    pub created_at: SystemTime,
}

impl ScoreRecordEntity {
    /// Build a record stamped with the current time and a fresh identifier.
    pub fn new(player_name: String, game_type: GameKind, score: u32, attempts: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_name,
            game_type,
            score,
            attempts,
            created_at: SystemTime::now(),
        }
    }
}
