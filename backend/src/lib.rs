//! Take-Me Chess HTTP backend
//!
//! Axum service over the [`takeme_engine`] core: game CRUD, move and
//! Take-Me endpoints, bot turns, and a SQLite-backed leaderboard. Games
//! live in an in-memory keyed store; the engine itself is stateless, so
//! every handler loads a snapshot, runs it through the engine, and writes
//! the result back.

pub mod api;
pub mod leaderboard;
pub mod store;
