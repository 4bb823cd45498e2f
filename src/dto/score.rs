//! DTO definitions for the leaderboard routes.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use utoipa::{IntoParams, ToSchema};

use crate::{dao::models::ScoreRecordEntity, engine::GameKind};

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// One leaderboard entry as served over HTTP.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreDto {
    /// Name the player submitted with the winning move.
    pub player_name: String,
    /// Game the round belongs to.
    pub game_type: GameKind,
    /// Score awarded for the round.
    pub score: u32,
    /// Attempts or rounds spent reaching the outcome.
    pub attempts: u32,
    /// RFC 3339 timestamp of when the record was written.
    pub created_at: String,
}

impl From<ScoreRecordEntity> for ScoreDto {
    fn from(entity: ScoreRecordEntity) -> Self {
        Self {
            player_name: entity.player_name,
            game_type: entity.game_type,
            score: entity.score,
            attempts: entity.attempts,
            created_at: format_system_time(entity.created_at),
        }
    }
}

/// Query parameters accepted by the leaderboard routes.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    /// Maximum records to return; defaults to the configured limit and is
    /// capped server-side.
    pub limit: Option<usize>,
}
