use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Client, Collection, Database, bson::doc, options::IndexOptions};
use tokio::sync::RwLock;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::MongoScoreDocument,
};
use crate::{
    dao::{models::ScoreRecordEntity, score_store::ScoreStore, storage::StorageResult},
    engine::GameKind,
};

const SCORE_COLLECTION_NAME: &str = "scores";

/// [`ScoreStore`] backed by a MongoDB `scores` collection.
#[derive(Clone)]
pub struct MongoScoreStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let client = {
            let guard = self.state.read().await;
            guard.client.clone()
        };

        client
            .database(&self.config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoScoreStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    /// Create the leaderboard index so top-N reads stay cheap as the
    /// collection grows.
    async fn ensure_indexes(&self) -> MongoResult<()> {
        let collection = self.collection().await;
        let index = mongodb::IndexModel::builder()
            .keys(doc! { "game_type": 1, "score": -1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name(Some("leaderboard_idx".to_owned()))
                    .build(),
            )
            .build();

        collection
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: SCORE_COLLECTION_NAME,
                index: "game_type,score,created_at",
                source,
            })?;

        Ok(())
    }

    async fn collection(&self) -> Collection<MongoScoreDocument> {
        let guard = self.inner.state.read().await;
        guard
            .database
            .collection::<MongoScoreDocument>(SCORE_COLLECTION_NAME)
    }

    async fn insert_record(&self, entry: ScoreRecordEntity) -> MongoResult<()> {
        let id = entry.id;
        let document: MongoScoreDocument = entry.into();
        let collection = self.collection().await;
        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::SaveScore { id, source })?;
        Ok(())
    }

    async fn find_top(
        &self,
        game_type: GameKind,
        limit: usize,
    ) -> MongoResult<Vec<ScoreRecordEntity>> {
        let collection = self.collection().await;
        let documents: Vec<MongoScoreDocument> = collection
            .find(doc! { "game_type": game_type.as_str() })
            .sort(doc! { "score": -1, "created_at": 1 })
            .limit(limit as i64)
            .await
            .map_err(|source| MongoDaoError::ListScores { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListScores { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_recent(&self, limit: usize) -> MongoResult<Vec<ScoreRecordEntity>> {
        let collection = self.collection().await;
        let documents: Vec<MongoScoreDocument> = collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit as i64)
            .await
            .map_err(|source| MongoDaoError::ListScores { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListScores { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn delete_all(&self) -> MongoResult<u64> {
        let collection = self.collection().await;
        let result = collection
            .delete_many(doc! {})
            .await
            .map_err(|source| MongoDaoError::ResetScores { source })?;
        Ok(result.deleted_count)
    }
}

impl ScoreStore for MongoScoreStore {
    fn record(&self, entry: ScoreRecordEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_record(entry).await.map_err(Into::into) })
    }

    fn top_scores(
        &self,
        game_type: GameKind,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreRecordEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_top(game_type, limit).await.map_err(Into::into) })
    }

    fn recent_scores(
        &self,
        limit: usize,
    ) -> BoxFuture<'static, StorageResult<Vec<ScoreRecordEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_recent(limit).await.map_err(Into::into) })
    }

    fn reset_all(&self) -> BoxFuture<'static, StorageResult<u64>> {
        let store = self.clone();
        Box::pin(async move { store.delete_all().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let inner = self.inner.clone();
        Box::pin(async move { inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let inner = self.inner.clone();
        Box::pin(async move { inner.reconnect().await.map_err(Into::into) })
    }
}
