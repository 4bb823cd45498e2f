use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::post,
};

use crate::{
    dto::admin::ResetScoresResponse, error::AppError, services::admin_service, state::SharedState,
};

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Admin-only maintenance endpoints, gated by the configured admin token.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/admin/scores/reset", post(reset_scores))
        .route_layer(middleware::from_fn_with_state(state, require_admin_token))
}

/// Wipe the persisted score table.
#[utoipa::path(
    post,
    path = "/admin/scores/reset",
    tag = "admin",
    params(("x-admin-token" = String, Header, description = "Token configured through ARCADE_ADMIN_TOKEN")),
    responses(
        (status = 200, description = "Score table wiped", body = ResetScoresResponse),
        (status = 401, description = "Missing or invalid admin token"),
        (status = 503, description = "Score store unavailable")
    )
)]
pub async fn reset_scores(
    State(state): State<SharedState>,
) -> Result<Json<ResetScoresResponse>, AppError> {
    Ok(Json(admin_service::reset_scores(&state).await?))
}

/// Reject requests whose `x-admin-token` header does not match the
/// configured token. A missing configuration rejects everything.
async fn require_admin_token(
    State(state): State<SharedState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config().admin_token() else {
        return Err(AppError::Unauthorized("admin token not configured".into()));
    };

    let provided = request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(expected) {
        return Err(AppError::Unauthorized("invalid admin token".into()));
    }

    Ok(next.run(request).await)
}
