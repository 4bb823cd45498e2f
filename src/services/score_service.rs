//! Read side of the score table: leaderboards and the recent-scores feed.

use crate::{
    dto::score::ScoreDto,
    engine::GameKind,
    error::ServiceError,
    state::SharedState,
};

/// The best records for one game, ordered by score descending with ties
/// broken by the earlier timestamp.
pub async fn top_scores(
    state: &SharedState,
    game_type: GameKind,
    limit: Option<usize>,
) -> Result<Vec<ScoreDto>, ServiceError> {
    let store = state.require_score_store().await?;
    let limit = state.config().effective_limit(limit);
    let records = store.top_scores(game_type, limit).await?;
    Ok(records.into_iter().map(Into::into).collect())
}

/// The most recently written records across all games, newest first.
pub async fn recent_scores(
    state: &SharedState,
    limit: Option<usize>,
) -> Result<Vec<ScoreDto>, ServiceError> {
    let store = state.require_score_store().await?;
    let limit = state.config().effective_limit(limit);
    let records = store.recent_scores(limit).await?;
    Ok(records.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::{
            models::ScoreRecordEntity,
            score_store::{ScoreStore, memory::MemoryScoreStore},
        },
        state::AppState,
    };

    #[tokio::test]
    async fn leaderboard_reads_go_through_the_configured_limit() {
        let state = AppState::new(AppConfig::default());
        let store = MemoryScoreStore::new();
        for i in 0..20 {
            store
                .record(ScoreRecordEntity::new(
                    format!("p{i}"),
                    GameKind::NumberGuess,
                    50 + i,
                    1,
                ))
                .await
                .unwrap();
        }
        state
            .install_score_store(Arc::new(store) as Arc<dyn ScoreStore>)
            .await;

        // Default limit is 10; an oversized request is capped server-side.
        let scores = top_scores(&state, GameKind::NumberGuess, None).await.unwrap();
        assert_eq!(scores.len(), 10);
        assert_eq!(scores[0].score, 69);

        let scores = top_scores(&state, GameKind::NumberGuess, Some(1_000))
            .await
            .unwrap();
        assert_eq!(scores.len(), 20);
    }

    #[tokio::test]
    async fn reads_fail_in_degraded_mode() {
        let state = AppState::new(AppConfig::default());
        let err = recent_scores(&state, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Degraded));
    }
}
