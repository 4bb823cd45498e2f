//! Business logic behind the admin routes.

use tracing::info;

use crate::{dto::admin::ResetScoresResponse, error::ServiceError, state::SharedState};

/// Wipe the persisted score table, reporting how many records were removed.
/// Idempotent: a second call on an empty table removes zero.
pub async fn reset_scores(state: &SharedState) -> Result<ResetScoresResponse, ServiceError> {
    let store = state.require_score_store().await?;
    let removed = store.reset_all().await?;
    info!(removed, "score table reset by administrator");
    Ok(ResetScoresResponse { removed })
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
        engine::GameKind,
        state::AppState,
    };

    #[tokio::test]
    async fn reset_reports_the_removed_count_then_zero() {
        let state = AppState::new(AppConfig::default());
        let store = MemoryScoreStore::new();
        for i in 0..4 {
            store
                .record(ScoreRecordEntity::new(
                    "p".into(),
                    GameKind::TicTacToe,
                    100,
                    i,
                ))
                .await
                .unwrap();
        }
        state
            .install_score_store(Arc::new(store) as Arc<dyn ScoreStore>)
            .await;

        assert_eq!(reset_scores(&state).await.unwrap().removed, 4);
        assert_eq!(reset_scores(&state).await.unwrap().removed, 0);
    }
}
