use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Ping the score store and fold the result into the health payload. A
/// failed ping reports degraded even while the store stays installed; the
/// supervisor decides separately whether to tear it down.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let store_connected = match state.require_score_store().await {
        Ok(store) => match store.health_check().await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "score store ping failed");
                false
            }
        },
        Err(_) => {
            warn!("score store not installed (degraded mode)");
            false
        }
    };

    HealthResponse::report(store_connected, state.sessions().len())
}
