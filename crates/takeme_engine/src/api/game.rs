//! Game lifecycle management

use crate::board::{count_pieces, init_board};
use crate::types::*;

/// Create a new game in the starting position, white to move.
///
/// Callers supply exactly two players, one per color; the state is born
/// `active` with an empty Take-Me obligation and no history.
pub fn new_game(players: [Player; 2]) -> GameState {
    let board = init_board();
    let piece_count = count_pieces(&board);

    GameState {
        board,
        current_turn: PieceColor::White,
        players,
        status: GameStatus::Active,
        winner: None,
        selected_piece: None,
        legal_moves: Vec::new(),
        take_me_state: TakeMeState::default(),
        move_history: Vec::new(),
        piece_count,
    }
}
