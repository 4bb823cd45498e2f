use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{dao::models::ScoreRecordEntity, engine::GameKind};

/// BSON projection of a [`ScoreRecordEntity`]. `game_type` serializes to the
/// same snake_case tag [`GameKind::as_str`] reports, so filters can compare
/// against plain strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoScoreDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    player_name: String,
    game_type: GameKind,
    score: u32,
    attempts: u32,
    created_at: DateTime,
}

impl From<ScoreRecordEntity> for MongoScoreDocument {
    fn from(value: ScoreRecordEntity) -> Self {
        Self {
            id: value.id,
            player_name: value.player_name,
            game_type: value.game_type,
            score: value.score,
            attempts: value.attempts,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl From<MongoScoreDocument> for ScoreRecordEntity {
    fn from(value: MongoScoreDocument) -> Self {
        Self {
            id: value.id,
            player_name: value.player_name,
            game_type: value.game_type,
            score: value.score,
            attempts: value.attempts,
            created_at: value.created_at.to_system_time(),
        }
    }
}
