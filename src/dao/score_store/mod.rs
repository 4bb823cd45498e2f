/// Always-available in-memory backend, used for tests and store-less runs.
pub mod memory;
/// MongoDB-backed score store.
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use futures::future::BoxFuture;

use crate::{dao::models::ScoreRecordEntity, dao::storage::StorageResult, engine::GameKind};

/// Abstraction over the persistence layer for completed game rounds.
///
/// The store is append-only: records are written once, read back ordered,
/// and only removed wholesale through [`ScoreStore::reset_all`].
pub trait ScoreStore: Send + Sync {
    /// Append one record. Fails only on backend I/O; writes are
    /// whole-record atomic.
    fn record(&self, entry: ScoreRecordEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// The best `limit` records for one game, descending by score with ties
    /// broken by the earlier timestamp.
    fn top_scores(
        &self,
        game_type: GameKind,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreRecordEntity>>>;
    /// The `limit` most recently written records across all games, newest
    /// first.
    fn recent_scores(
        &self,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreRecordEntity>>>;
    /// Remove every record and return how many were removed. Idempotent on
    /// an empty store.
    fn reset_all(&self) -> BoxFuture<'static, StorageResult<u64>>;
    /// Cheap readiness probe used by the storage supervisor.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Attempt to re-establish the backend connection after a failed probe.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}

/// Order records the way leaderboards are served: score descending, earlier
/// timestamp first among equal scores.
pub(crate) fn leaderboard_order(a: &ScoreRecordEntity, b: &ScoreRecordEntity) -> std::cmp::Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.created_at.cmp(&b.created_at))
}
