use serde::Serialize;
use utoipa::ToSchema;

/// Payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` when the score store answers, `"degraded"` otherwise.
    pub status: String,
    /// Whether the score store is installed and answered its last ping.
    pub store_connected: bool,
    /// Number of game sessions currently held in memory.
    pub live_sessions: usize,
}

impl HealthResponse {
    /// Build the payload from the store ping result and session gauge.
    pub fn report(store_connected: bool, live_sessions: usize) -> Self {
        let status = if store_connected { "ok" } else { "degraded" };
        Self {
            status: status.to_string(),
            store_connected,
            live_sessions,
        }
    }
}
