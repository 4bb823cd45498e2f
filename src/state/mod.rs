/// Per-session game state and move application.
pub mod game;
/// Session registry keyed by (session id, game kind).
pub mod sessions;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::AppConfig, dao::score_store::ScoreStore, error::ServiceError};

pub use self::sessions::SessionRegistry;

/// Shared handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state: configuration, live sessions, and the
/// installed score store.
pub struct AppState {
    config: AppConfig,
    score_store: RwLock<Option<Arc<dyn ScoreStore>>>,
    sessions: SessionRegistry,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be
    /// cloned cheaply.
    ///
    /// The application starts in degraded mode until a score store is
    /// installed by the storage supervisor.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            config,
            score_store: RwLock::new(None),
            sessions: SessionRegistry::new(),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registry of live game states.
    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Obtain a handle to the current score store, if one is installed.
    pub async fn score_store(&self) -> Option<Arc<dyn ScoreStore>> {
        let guard = self.score_store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the score store or fail with a degraded-mode error.
    pub async fn require_score_store(&self) -> Result<Arc<dyn ScoreStore>, ServiceError> {
        self.score_store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a score store implementation and leave degraded mode.
    pub async fn install_score_store(&self, store: Arc<dyn ScoreStore>) {
        let mut guard = self.score_store.write().await;
        *guard = Some(store);
    }

    /// Remove the current score store and enter degraded mode.
    pub async fn clear_score_store(&self) {
        let mut guard = self.score_store.write().await;
        guard.take();
    }

    /// Whether the application currently runs without a score store.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.score_store.read().await;
        guard.is_none()
    }
}
