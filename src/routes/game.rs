use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::post,
};
use validator::Validate;

use crate::{
    dto::game::{
        BoardMoveRequest, BoardMoveResponse, GuessRequest, GuessResponse, ResetGameResponse,
        RpsRequest, RpsResponse,
    },
    engine::GameKind,
    error::AppError,
    routes::session_from_headers,
    services::game_service,
    state::SharedState,
};

/// Routes handling game moves and per-session resets.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games/number-guess/guess", post(submit_guess))
        .route("/games/tic-tac-toe/move", post(play_board_move))
        .route("/games/rock-paper-scissors/play", post(play_rps))
        .route("/games/{kind}/reset", post(reset_game))
}

/// Submit one guess at the session's secret number.
#[utoipa::path(
    post,
    path = "/games/number-guess/guess",
    tag = "games",
    params(("x-session-id" = Option<String>, Header, description = "Session identifier; minted when absent")),
    request_body = GuessRequest,
    responses(
        (status = 200, description = "Guess evaluated", body = GuessResponse),
        (status = 400, description = "Guess outside the accepted range")
    )
)]
pub async fn submit_guess(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, AppError> {
    payload.validate()?;
    let session = session_from_headers(&headers);
    Ok(Json(game_service::play_guess(&state, session, payload).await?))
}

/// Place the player's mark on the session's tic-tac-toe board.
#[utoipa::path(
    post,
    path = "/games/tic-tac-toe/move",
    tag = "games",
    params(("x-session-id" = Option<String>, Header, description = "Session identifier; minted when absent")),
    request_body = BoardMoveRequest,
    responses(
        (status = 200, description = "Move applied, computer reply included", body = BoardMoveResponse),
        (status = 400, description = "Cell occupied or out of range")
    )
)]
pub async fn play_board_move(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<BoardMoveRequest>,
) -> Result<Json<BoardMoveResponse>, AppError> {
    payload.validate()?;
    let session = session_from_headers(&headers);
    Ok(Json(
        game_service::play_board_move(&state, session, payload).await?,
    ))
}

/// Throw one rock-paper-scissors hand against the computer.
#[utoipa::path(
    post,
    path = "/games/rock-paper-scissors/play",
    tag = "games",
    params(("x-session-id" = Option<String>, Header, description = "Session identifier; minted when absent")),
    request_body = RpsRequest,
    responses(
        (status = 200, description = "Round resolved", body = RpsResponse)
    )
)]
pub async fn play_rps(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<RpsRequest>,
) -> Result<Json<RpsResponse>, AppError> {
    payload.validate()?;
    let session = session_from_headers(&headers);
    Ok(Json(game_service::play_rps(&state, session, payload).await?))
}

/// Discard the session's state for one game.
#[utoipa::path(
    post,
    path = "/games/{kind}/reset",
    tag = "games",
    params(
        ("kind" = GameKind, Path, description = "Game to reset"),
        ("x-session-id" = Option<String>, Header, description = "Session identifier; minted when absent")
    ),
    responses(
        (status = 200, description = "Session state discarded", body = ResetGameResponse)
    )
)]
pub async fn reset_game(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(kind): Path<GameKind>,
) -> Result<Json<ResetGameResponse>, AppError> {
    let session = session_from_headers(&headers);
    Ok(Json(game_service::reset_game(&state, session, kind)))
}
