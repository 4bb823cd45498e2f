//! DTO definitions used by the admin REST API.

use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of wiping the score table.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResetScoresResponse {
    /// Number of score records removed.
    pub removed: u64,
}
