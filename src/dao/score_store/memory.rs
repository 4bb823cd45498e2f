//! In-memory [`ScoreStore`] keeping records in a `Vec` behind an async
//! lock. Backs `ARCADE_STORE=memory` runs and the service-level tests.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::{ScoreStore, leaderboard_order};
use crate::{dao::models::ScoreRecordEntity, dao::storage::StorageResult, engine::GameKind};

/// Volatile score store; every clone shares the same records.
#[derive(Clone, Default)]
pub struct MemoryScoreStore {
    records: Arc<RwLock<Vec<ScoreRecordEntity>>>,
}

impl MemoryScoreStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn record(&self, entry: ScoreRecordEntity) -> BoxFuture<'static, StorageResult<()>> {
        let records = self.records.clone();
        Box::pin(async move {
            records.write().await.push(entry);
            Ok(())
        })
    }

    fn top_scores(
        &self,
        game_type: GameKind,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreRecordEntity>>> {
        let records = self.records.clone();
        Box::pin(async move {
            let guard = records.read().await;
            let mut matching: Vec<ScoreRecordEntity> = guard
                .iter()
                .filter(|record| record.game_type == game_type)
                .cloned()
                .collect();
            matching.sort_by(leaderboard_order);
            matching.truncate(limit);
            Ok(matching)
        })
    }

    fn recent_scores(
        &self,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreRecordEntity>>> {
        let records = self.records.clone();
        Box::pin(async move {
            let guard = records.read().await;
            let mut all: Vec<ScoreRecordEntity> = guard.clone();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            all.truncate(limit);
            Ok(all)
        })
    }

    fn reset_all(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let records = self.records.clone();
        Box::pin(async move {
            let mut guard = records.write().await;
            let removed = guard.len() as u64;
            guard.clear();
            Ok(removed)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use uuid::Uuid;

    use super::*;

    fn record_at(name: &str, kind: GameKind, score: u32, offset_secs: u64) -> ScoreRecordEntity {
        ScoreRecordEntity {
            id: Uuid::new_v4(),
            player_name: name.into(),
            game_type: kind,
            score,
            attempts: 1,
            created_at: SystemTime::UNIX_EPOCH + Duration::from_secs(offset_secs),
        }
    }

    #[tokio::test]
    async fn top_scores_sorted_descending_with_timestamp_tiebreak() {
        let store = MemoryScoreStore::new();
        store
            .record(record_at("ada", GameKind::NumberGuess, 80, 30))
            .await
            .unwrap();
        store
            .record(record_at("bob", GameKind::NumberGuess, 95, 10))
            .await
            .unwrap();
        // Same score as ada but written earlier: must come first of the two.
        store
            .record(record_at("cleo", GameKind::NumberGuess, 80, 20))
            .await
            .unwrap();
        store
            .record(record_at("dan", GameKind::TicTacToe, 100, 5))
            .await
            .unwrap();

        let top = store.top_scores(GameKind::NumberGuess, 10).await.unwrap();
        let names: Vec<&str> = top.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, ["bob", "cleo", "ada"]);
    }

    #[tokio::test]
    async fn top_scores_respects_the_limit() {
        let store = MemoryScoreStore::new();
        for score in [10, 20, 30, 40] {
            store
                .record(record_at("p", GameKind::RockPaperScissors, score, score as u64))
                .await
                .unwrap();
        }

        let top = store
            .top_scores(GameKind::RockPaperScissors, 2)
            .await
            .unwrap();
        let scores: Vec<u32> = top.iter().map(|r| r.score).collect();
        assert_eq!(scores, [40, 30]);
    }

    #[tokio::test]
    async fn recent_scores_newest_first_across_games() {
        let store = MemoryScoreStore::new();
        store
            .record(record_at("ada", GameKind::NumberGuess, 50, 10))
            .await
            .unwrap();
        store
            .record(record_at("bob", GameKind::TicTacToe, 100, 30))
            .await
            .unwrap();
        store
            .record(record_at("cleo", GameKind::RockPaperScissors, 10, 20))
            .await
            .unwrap();

        let recent = store.recent_scores(2).await.unwrap();
        let names: Vec<&str> = recent.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, ["bob", "cleo"]);
    }

    #[tokio::test]
    async fn reset_all_reports_the_removed_count_once() {
        let store = MemoryScoreStore::new();
        for i in 0..3 {
            store
                .record(record_at("p", GameKind::NumberGuess, 10 + i, i as u64))
                .await
                .unwrap();
        }

        assert_eq!(store.reset_all().await.unwrap(), 3);
        assert!(store.top_scores(GameKind::NumberGuess, 10).await.unwrap().is_empty());
        assert_eq!(store.reset_all().await.unwrap(), 0);
    }
}
