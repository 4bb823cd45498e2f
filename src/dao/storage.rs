use std::error::Error;

use thiserror::Error;

/// Result alias for score store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Backend-agnostic failure surfaced by [`ScoreStore`] implementations.
///
/// [`ScoreStore`]: crate::dao::score_store::ScoreStore
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not serve the operation.
    #[error("score store unavailable: {message}")]
    Unavailable {
        /// What the backend reported, already rendered for logs.
        message: String,
        /// The backend failure itself.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a backend failure, keeping its rendered message for display.
    pub fn unavailable(source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message: source.to_string(),
            source: Box::new(source),
        }
    }
}
