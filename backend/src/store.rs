//! In-memory game store
//!
//! Keyed game records behind an `Arc<Mutex<HashMap>>`. One lock per
//! operation serializes all mutations per process, which is the ordering
//! guarantee the engine asks its caller for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use takeme_engine::types::{GameMode, GameState};
use uuid::Uuid;

/// A stored game: the engine snapshot plus transport-level metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredGame {
    pub id: String,
    pub game_mode: GameMode,
    pub state: GameState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Shared handle to the game table
#[derive(Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<String, StoredGame>>>,
}

impl GameStore {
    pub fn new() -> GameStore {
        GameStore::default()
    }

    /// Store a fresh game under a new id
    pub fn insert(&self, game_mode: GameMode, state: GameState) -> StoredGame {
        let now = Utc::now();
        let game = StoredGame {
            id: Uuid::new_v4().to_string(),
            game_mode,
            state,
            created_at: now,
            updated_at: now,
        };

        self.games
            .lock()
            .unwrap()
            .insert(game.id.clone(), game.clone());
        game
    }

    pub fn get(&self, id: &str) -> Option<StoredGame> {
        self.games.lock().unwrap().get(id).cloned()
    }

    /// Replace a game's snapshot, bumping `updated_at`
    pub fn update(&self, id: &str, state: GameState) -> Option<StoredGame> {
        let mut games = self.games.lock().unwrap();
        let game = games.get_mut(id)?;
        game.state = state;
        game.updated_at = Utc::now();
        Some(game.clone())
    }

    pub fn remove(&self, id: &str) -> Option<StoredGame> {
        self.games.lock().unwrap().remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use takeme_engine::api::new_game;
    use takeme_engine::types::{PieceColor, Player};

    fn players() -> [Player; 2] {
        [
            Player {
                name: "Ada".to_string(),
                color: PieceColor::White,
                is_bot: false,
                avatar: None,
            },
            Player {
                name: "Grace".to_string(),
                color: PieceColor::Black,
                is_bot: false,
                avatar: None,
            },
        ]
    }

    #[test]
    fn test_insert_get_remove_roundtrip() {
        let store = GameStore::new();
        let game = store.insert(GameMode::TwoPlayer, new_game(players()));

        assert!(store.get(&game.id).is_some());
        assert!(store.remove(&game.id).is_some());
        assert!(store.get(&game.id).is_none());
    }

    #[test]
    fn test_update_bumps_timestamp_only_for_existing() {
        let store = GameStore::new();
        let game = store.insert(GameMode::TwoPlayer, new_game(players()));

        let updated = store.update(&game.id, game.state.clone()).unwrap();
        assert!(updated.updated_at >= game.updated_at);
        assert!(store.update("missing", game.state.clone()).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let store = GameStore::new();
        let a = store.insert(GameMode::TwoPlayer, new_game(players()));
        let b = store.insert(GameMode::TwoPlayer, new_game(players()));
        assert_ne!(a.id, b.id);
    }
}
