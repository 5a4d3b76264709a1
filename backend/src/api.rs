//! HTTP API for the Take-Me Chess service
//!
//! Router, shared state and the game/move/bot handlers. Engine rejections
//! map onto status codes here: ownership problems are 403, everything else
//! a player can fix is 400, unknown games are 404. Illegal requests never
//! change stored state.

use crate::leaderboard;
use crate::store::{GameStore, StoredGame};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Sqlite};
use takeme_engine::api as engine;
use takeme_engine::board::piece_at;
use takeme_engine::bot::{choose_bot_move, generate_bot_avatar, generate_bot_name, play_bot_turn};
use takeme_engine::move_gen;
use takeme_engine::types::*;
use takeme_engine::{ActionError, BotMove};

type ApiError = (StatusCode, String);

#[derive(Clone)]
pub struct AppState {
    /// Live games, keyed by game id
    pub games: GameStore,
    /// Database pool backing the leaderboard
    pub db: Pool<Sqlite>,
}

#[derive(Deserialize)]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub is_bot: bool,
}

#[derive(Deserialize)]
pub struct CreateGameRequest {
    pub game_mode: GameMode,
    pub players: Vec<NewPlayer>,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion_piece: Option<PieceType>,
}

#[derive(Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub legal_moves: Vec<Square>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct LegalMovesResponse {
    pub legal_moves: Vec<Square>,
}

#[derive(Deserialize)]
pub struct LegalMovesQuery {
    pub row: i8,
    pub col: i8,
}

#[derive(Serialize)]
pub struct BotMoveResponse {
    pub game_state: StoredGame,
    pub bot_move: Option<BotMove>,
}

#[derive(Serialize)]
pub struct EndGameResponse {
    pub message: String,
    pub final_state: StoredGame,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub fn router(db: Pool<Sqlite>) -> Router {
    let state = AppState {
        games: GameStore::new(),
        db,
    };

    Router::new()
        .route("/health", get(health))
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game).delete(end_game))
        .route("/games/{id}/moves", post(make_move))
        .route("/games/{id}/moves/validate", post(validate_move))
        .route("/games/{id}/take-me", post(take_me))
        .route("/games/{id}/bot-move", post(bot_move))
        .route("/games/{id}/legal-moves", get(get_legal_moves))
        .route(
            "/leaderboard",
            get(leaderboard::get_leaderboard).post(leaderboard::submit_result),
        )
        .with_state(state)
}

fn not_found() -> ApiError {
    (StatusCode::NOT_FOUND, "Game not found".to_string())
}

/// The core assumes in-range coordinates; the transport rejects the rest
fn ensure_in_bounds(squares: &[Square]) -> Result<(), ApiError> {
    if squares.iter().all(|square| square.in_bounds()) {
        Ok(())
    } else {
        Err((StatusCode::BAD_REQUEST, "Square out of range".to_string()))
    }
}

fn action_error_response(err: ActionError) -> ApiError {
    match err {
        ActionError::GameNotActive => (StatusCode::BAD_REQUEST, "Game is not active".to_string()),
        ActionError::EmptySquare { .. } | ActionError::NotYourPiece { .. } => {
            (StatusCode::FORBIDDEN, "Not your turn".to_string())
        }
        ActionError::IllegalDestination { .. } => {
            (StatusCode::BAD_REQUEST, "Invalid move".to_string())
        }
        ActionError::MustCapture => (
            StatusCode::BAD_REQUEST,
            "Must capture exposed piece".to_string(),
        ),
        other => (StatusCode::BAD_REQUEST, other.to_string()),
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}

async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<StoredGame>, ApiError> {
    if payload.players.len() != 2 {
        return Err((
            StatusCode::BAD_REQUEST,
            "Exactly two players are required".to_string(),
        ));
    }

    let mut rng = rand::rng();
    let mut build = |entry: &NewPlayer, color: PieceColor| Player {
        name: if entry.is_bot && entry.name.is_empty() {
            generate_bot_name(&mut rng)
        } else {
            entry.name.clone()
        },
        color,
        is_bot: entry.is_bot,
        avatar: entry.is_bot.then(|| generate_bot_avatar(&mut rng)),
    };
    let players = [
        build(&payload.players[0], PieceColor::White),
        build(&payload.players[1], PieceColor::Black),
    ];

    let game = state
        .games
        .insert(payload.game_mode, engine::new_game(players));
    tracing::info!(game_id = %game.id, "game created");
    Ok(Json(game))
}

async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoredGame>, ApiError> {
    state.games.get(&id).map(Json).ok_or_else(not_found)
}

async fn end_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EndGameResponse>, ApiError> {
    let final_state = state.games.remove(&id).ok_or_else(not_found)?;
    tracing::info!(game_id = %id, "game ended");

    Ok(Json(EndGameResponse {
        message: "Game ended successfully".to_string(),
        final_state,
    }))
}

async fn make_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<StoredGame>, ApiError> {
    ensure_in_bounds(&[req.from, req.to])?;
    let game = state.games.get(&id).ok_or_else(not_found)?;

    let next = engine::play_move(&game.state, req.from, req.to, req.promotion_piece)
        .map_err(action_error_response)?;
    let stored = state.games.update(&id, next.clone()).ok_or_else(not_found)?;

    // When the next player is a bot, its reply is played immediately; the
    // response still carries the human-move snapshot.
    if next.status == GameStatus::Active && next.player(next.current_turn).is_bot {
        let mut rng = rand::rng();
        match play_bot_turn(&next, &mut rng) {
            Some(Ok(after_bot)) => {
                state.games.update(&id, after_bot);
            }
            Some(Err(err)) => {
                tracing::warn!(game_id = %id, error = %err, "bot move rejected");
            }
            None => {
                let mut drawn = next.clone();
                drawn.status = GameStatus::Draw;
                state.games.update(&id, drawn);
            }
        }
    }

    Ok(Json(stored))
}

async fn validate_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<ValidationResponse>, ApiError> {
    ensure_in_bounds(&[req.from, req.to])?;
    let game = state.games.get(&id).ok_or_else(not_found)?;

    let owned = piece_at(&game.state.board, req.from)
        .is_some_and(|piece| piece.color == game.state.current_turn);
    if !owned {
        return Ok(Json(ValidationResponse {
            valid: false,
            legal_moves: Vec::new(),
            error: Some("Not your turn".to_string()),
        }));
    }

    let mut moves = move_gen::legal_moves(&game.state.board, req.from);
    if game.state.take_me_state.must_capture {
        moves.retain(|to| game.state.take_me_state.capturable_pieces.contains(to));
    }

    let valid = moves.contains(&req.to);
    Ok(Json(ValidationResponse {
        valid,
        legal_moves: moves,
        error: (!valid).then(|| "Invalid move".to_string()),
    }))
}

async fn take_me(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<StoredGame>, ApiError> {
    ensure_in_bounds(&[req.from, req.to])?;
    let game = state.games.get(&id).ok_or_else(not_found)?;

    let next = engine::play_move_declaring(&game.state, req.from, req.to, req.promotion_piece)
        .map_err(action_error_response)?;
    tracing::info!(game_id = %id, declarer = ?game.state.current_turn, "Take Me declared");

    let stored = state.games.update(&id, next).ok_or_else(not_found)?;
    Ok(Json(stored))
}

async fn bot_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BotMoveResponse>, ApiError> {
    let game = state.games.get(&id).ok_or_else(not_found)?;

    if game.state.status != GameStatus::Active {
        return Err((StatusCode::BAD_REQUEST, "Game is not active".to_string()));
    }
    if !game.state.player(game.state.current_turn).is_bot {
        return Err((StatusCode::FORBIDDEN, "Not bot's turn".to_string()));
    }

    let mut rng = rand::rng();
    let choice = choose_bot_move(
        &game.state.board,
        game.state.current_turn,
        game.state.take_me_state.must_capture,
        &game.state.take_me_state.capturable_pieces,
        &mut rng,
    );

    let Some(bot) = choice else {
        // A stalemated bot ends the game as a draw
        let mut drawn = game.state.clone();
        drawn.status = GameStatus::Draw;
        let stored = state.games.update(&id, drawn).ok_or_else(not_found)?;
        return Ok(Json(BotMoveResponse {
            game_state: stored,
            bot_move: None,
        }));
    };

    let next = if bot.declare_take_me {
        engine::play_move_declaring(&game.state, bot.mv.from, bot.mv.to, None)
    } else {
        engine::play_move(&game.state, bot.mv.from, bot.mv.to, None)
    }
    .map_err(action_error_response)?;

    let stored = state.games.update(&id, next).ok_or_else(not_found)?;
    Ok(Json(BotMoveResponse {
        game_state: stored,
        bot_move: Some(bot),
    }))
}

async fn get_legal_moves(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LegalMovesQuery>,
) -> Result<Json<LegalMovesResponse>, ApiError> {
    let square = Square::new(query.row, query.col);
    ensure_in_bounds(&[square])?;
    let game = state.games.get(&id).ok_or_else(not_found)?;

    let mut moves = move_gen::legal_moves(&game.state.board, square);
    if game.state.take_me_state.must_capture {
        moves.retain(|to| game.state.take_me_state.capturable_pieces.contains(to));
    }

    Ok(Json(LegalMovesResponse { legal_moves: moves }))
}
