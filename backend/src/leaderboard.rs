//! Leaderboard storage and handlers
//!
//! One row per (player, game mode) in SQLite, accumulating results across
//! games. Queries follow the runtime `sqlx::query` + `Row::get` style; the
//! upsert folds a posted result into the existing row.

use crate::api::AppState;
use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Row, Sqlite};
use takeme_engine::types::GameMode;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub score: i64,
    pub game_mode: GameMode,
    pub last_played: Option<DateTime<Utc>>,
}

/// One game's outcome for a player, folded into their row on submit
#[derive(Deserialize)]
pub struct SubmitResultRequest {
    pub player_name: String,
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    #[serde(default)]
    pub score: i64,
    pub game_mode: GameMode,
}

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    pub game_mode: Option<GameMode>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct SubmitResultResponse {
    pub message: String,
    pub updated_leaderboard: Vec<LeaderboardEntry>,
}

/// Create the leaderboard table. Run once at startup (and by tests against
/// their in-memory pools).
pub async fn init_schema(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS leaderboard (
            player_name TEXT NOT NULL,
            game_mode TEXT NOT NULL,
            wins INTEGER NOT NULL DEFAULT 0,
            losses INTEGER NOT NULL DEFAULT 0,
            draws INTEGER NOT NULL DEFAULT 0,
            score INTEGER NOT NULL DEFAULT 0,
            last_played DATETIME,
            PRIMARY KEY (player_name, game_mode)
        );",
    )
    .execute(pool)
    .await?;

    Ok(())
}

fn mode_as_str(mode: GameMode) -> &'static str {
    match mode {
        GameMode::SinglePlayer => "1P",
        GameMode::TwoPlayer => "2P",
    }
}

fn mode_from_str(raw: &str) -> GameMode {
    match raw {
        "1P" => GameMode::SinglePlayer,
        _ => GameMode::TwoPlayer,
    }
}

fn entry_from_row(row: &sqlx::sqlite::SqliteRow) -> LeaderboardEntry {
    LeaderboardEntry {
        player_name: row.get("player_name"),
        wins: row.get("wins"),
        losses: row.get("losses"),
        draws: row.get("draws"),
        score: row.get("score"),
        game_mode: mode_from_str(&row.get::<String, _>("game_mode")),
        last_played: row.get("last_played"),
    }
}

async fn top_entries(
    pool: &Pool<Sqlite>,
    game_mode: Option<GameMode>,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    let rows = match game_mode {
        Some(mode) => {
            sqlx::query(
                "SELECT player_name, wins, losses, draws, score, game_mode, last_played
                 FROM leaderboard WHERE game_mode = $1
                 ORDER BY wins DESC LIMIT $2",
            )
            .bind(mode_as_str(mode))
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query(
                "SELECT player_name, wins, losses, draws, score, game_mode, last_played
                 FROM leaderboard ORDER BY wins DESC LIMIT $1",
            )
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.iter().map(entry_from_row).collect())
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, (StatusCode, String)> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let entries = top_entries(&state.db, query.game_mode, limit)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "leaderboard query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
        })?;

    Ok(Json(entries))
}

pub async fn submit_result(
    State(state): State<AppState>,
    Json(payload): Json<SubmitResultRequest>,
) -> Result<Json<SubmitResultResponse>, (StatusCode, String)> {
    sqlx::query(
        "INSERT INTO leaderboard (player_name, game_mode, wins, losses, draws, score, last_played)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT(player_name, game_mode) DO UPDATE SET
             wins = wins + excluded.wins,
             losses = losses + excluded.losses,
             draws = draws + excluded.draws,
             score = score + excluded.score,
             last_played = excluded.last_played",
    )
    .bind(&payload.player_name)
    .bind(mode_as_str(payload.game_mode))
    .bind(payload.wins)
    .bind(payload.losses)
    .bind(payload.draws)
    .bind(payload.score)
    .bind(Utc::now())
    .execute(&state.db)
    .await
    .map_err(|err| {
        tracing::error!(error = %err, "leaderboard upsert failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
    })?;

    let updated_leaderboard = top_entries(&state.db, None, DEFAULT_LIMIT)
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()))?;

    Ok(Json(SubmitResultResponse {
        message: "Game result recorded successfully".to_string(),
        updated_leaderboard,
    }))
}
