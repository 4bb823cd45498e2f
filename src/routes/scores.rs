use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::score::{LeaderboardQuery, ScoreDto},
    engine::GameKind,
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Read-only routes serving the persisted score table.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/scores/recent", get(recent_scores))
        .route("/scores/{kind}", get(top_scores))
}

/// Leaderboard for one game: best scores first, earlier record wins ties.
#[utoipa::path(
    get,
    path = "/scores/{kind}",
    tag = "scores",
    params(
        ("kind" = GameKind, Path, description = "Game the leaderboard belongs to"),
        LeaderboardQuery
    ),
    responses(
        (status = 200, description = "Ordered leaderboard", body = [ScoreDto]),
        (status = 503, description = "Score store unavailable")
    )
)]
pub async fn top_scores(
    State(state): State<SharedState>,
    Path(kind): Path<GameKind>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<ScoreDto>>, AppError> {
    Ok(Json(
        score_service::top_scores(&state, kind, query.limit).await?,
    ))
}

/// Most recently completed rounds across all games.
#[utoipa::path(
    get,
    path = "/scores/recent",
    tag = "scores",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Newest records first", body = [ScoreDto]),
        (status = 503, description = "Score store unavailable")
    )
)]
pub async fn recent_scores(
    State(state): State<SharedState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<ScoreDto>>, AppError> {
    Ok(Json(score_service::recent_scores(&state, query.limit).await?))
}
