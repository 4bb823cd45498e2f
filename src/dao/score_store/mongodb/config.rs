use mongodb::options::ClientOptions;

use super::error::{MongoDaoError, MongoResult};

/// Default database used when `MONGO_DB` is not provided.
const DEFAULT_DATABASE: &str = "arcade";

/// Parsed connection settings for the score store.
#[derive(Clone)]
pub struct MongoConfig {
    /// Parsed driver options for the cluster.
    pub options: ClientOptions,
    /// Database holding the score collection.
    pub database_name: String,
}

impl MongoConfig {
    /// Parse a connection URI, with an optional database name override.
    pub async fn from_uri(uri: &str, db_name: Option<&str>) -> MongoResult<Self> {
        let database_name = db_name.unwrap_or(DEFAULT_DATABASE).to_owned();
        let options =
            ClientOptions::parse(uri)
                .await
                .map_err(|source| MongoDaoError::InvalidUri {
                    uri: uri.to_owned(),
                    source,
                })?;

        Ok(Self {
            options,
            database_name,
        })
    }
}
