use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the arcade backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::submit_guess,
        crate::routes::game::play_board_move,
        crate::routes::game::play_rps,
        crate::routes::game::reset_game,
        crate::routes::scores::top_scores,
        crate::routes::scores::recent_scores,
        crate::routes::admin::reset_scores,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::GuessRequest,
            crate::dto::game::GuessResponse,
            crate::dto::game::GuessHint,
            crate::dto::game::BoardMoveRequest,
            crate::dto::game::BoardMoveResponse,
            crate::dto::game::BoardOutcome,
            crate::dto::game::RpsRequest,
            crate::dto::game::RpsResponse,
            crate::dto::game::ResetGameResponse,
            crate::dto::score::ScoreDto,
            crate::dto::admin::ResetScoresResponse,
            crate::engine::GameKind,
            crate::engine::Cell,
            crate::engine::Hand,
            crate::engine::RpsOutcome,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "Game move submission and session resets"),
        (name = "scores", description = "Leaderboards and recent results"),
        (name = "admin", description = "Administrative score table maintenance"),
    )
)]
pub struct ApiDoc;
