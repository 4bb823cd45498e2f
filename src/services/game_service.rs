//! Business logic powering the game move routes. Each helper resolves the
//! session's game state, applies the move through the rule engine, and on a
//! terminal outcome awards a score and persists it.

use tracing::debug;
use uuid::Uuid;

use crate::{
    dao::models::ScoreRecordEntity,
    dto::game::{
        BoardMoveRequest, BoardMoveResponse, GuessRequest, GuessResponse, ResetGameResponse,
        RpsRequest, RpsResponse,
    },
    engine::{self, BoardStatus, GameKind, GuessOutcome, Hand, Mark, RpsOutcome, scoring},
    error::ServiceError,
    state::{SharedState, game::GameState},
};

/// Name credited when the player did not supply one.
const ANONYMOUS_PLAYER: &str = "Anonymous";

/// Evaluate one guess for the session's number-guessing round.
///
/// A correct guess finishes the round, awards `max(100 - misses, 10)`, and
/// persists the record; the next guess starts a fresh secret.
pub async fn play_guess(
    state: &SharedState,
    session: Uuid,
    request: GuessRequest,
) -> Result<GuessResponse, ServiceError> {
    let player_name = resolve_player_name(request.player_name);
    let guess = request.guess;

    let (outcome, attempts) = state.sessions().update(
        session,
        GameKind::NumberGuess,
        || GameState::new(GameKind::NumberGuess, &mut rand::rng()),
        |game| game.apply_guess(guess),
    )?;

    let mut score = None;
    if outcome == GuessOutcome::Correct {
        // The winning guess itself does not count against the score.
        let awarded = scoring::guess_score(attempts.saturating_sub(1));
        persist_score(
            state,
            ScoreRecordEntity::new(player_name, GameKind::NumberGuess, awarded, attempts),
        )
        .await?;
        score = Some(awarded);
    }

    Ok(GuessResponse {
        session_id: session,
        result: outcome.into(),
        attempts,
        score,
        finished: outcome == GuessOutcome::Correct,
    })
}

/// Place the player's mark for the session's tic-tac-toe game and let the
/// computer reply.
///
/// A player win awards the fixed board reward and persists it; draws and
/// computer wins end the game without a record.
pub async fn play_board_move(
    state: &SharedState,
    session: Uuid,
    request: BoardMoveRequest,
) -> Result<BoardMoveResponse, ServiceError> {
    let player_name = resolve_player_name(request.player_name);
    let position = request.position;

    let applied = state.sessions().update(
        session,
        GameKind::TicTacToe,
        || GameState::new(GameKind::TicTacToe, &mut rand::rng()),
        |game| game.apply_board_move(position),
    )?;

    let mut score = None;
    if applied.status == BoardStatus::Won(Mark::Player) {
        let awarded = scoring::board_score(applied.status);
        persist_score(
            state,
            ScoreRecordEntity::new(player_name, GameKind::TicTacToe, awarded, 1),
        )
        .await?;
        score = Some(awarded);
    }

    Ok(BoardMoveResponse::from_move(session, applied, score))
}

/// Resolve one rock-paper-scissors round against a uniformly random
/// computer hand.
pub async fn play_rps(
    state: &SharedState,
    session: Uuid,
    request: RpsRequest,
) -> Result<RpsResponse, ServiceError> {
    let computer = engine::random_hand(&mut rand::rng());
    play_rps_with(state, session, request, computer).await
}

/// Resolve one rock-paper-scissors round against a known computer hand.
/// Split out so tests can drive deterministic rounds.
pub async fn play_rps_with(
    state: &SharedState,
    session: Uuid,
    request: RpsRequest,
    computer: Hand,
) -> Result<RpsResponse, ServiceError> {
    let player_name = resolve_player_name(request.player_name);
    let player = request.choice;

    let round = state.sessions().update(
        session,
        GameKind::RockPaperScissors,
        || GameState::new(GameKind::RockPaperScissors, &mut rand::rng()),
        |game| game.apply_rps(player, computer),
    )?;

    let mut score = None;
    if round.outcome == RpsOutcome::Win {
        let awarded = scoring::rps_score(round.outcome);
        persist_score(
            state,
            ScoreRecordEntity::new(
                player_name,
                GameKind::RockPaperScissors,
                awarded,
                round.rounds(),
            ),
        )
        .await?;
        score = Some(awarded);
    }

    Ok(RpsResponse::from_round(
        session, player, computer, round, score,
    ))
}

/// Discard the session's live state for one game, reporting whether there
/// was anything to discard.
pub fn reset_game(state: &SharedState, session: Uuid, kind: GameKind) -> ResetGameResponse {
    let cleared = state.sessions().reset(session, kind);
    if cleared {
        debug!(%session, game = %kind, "discarded session game state");
    }
    ResetGameResponse {
        session_id: session,
        cleared,
    }
}

/// Write one score record, surfacing storage failures to the caller. The
/// in-memory game outcome stands even when the write fails.
async fn persist_score(state: &SharedState, entity: ScoreRecordEntity) -> Result<(), ServiceError> {
    let store = state.require_score_store().await?;
    debug!(
        player = %entity.player_name,
        game = %entity.game_type,
        score = entity.score,
        "recording completed round"
    );
    store.record(entity).await?;
    Ok(())
}

fn resolve_player_name(name: Option<String>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => ANONYMOUS_PLAYER.to_owned(),
    }
}
