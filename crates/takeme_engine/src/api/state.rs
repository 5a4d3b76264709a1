//! End-of-turn evaluation
//!
//! Win and stalemate detection, run after every completed move. The win
//! condition is inverted from standard chess: the color that loses all its
//! pieces first is the winner.

use crate::analysis::has_legal_moves;
use crate::types::*;

/// The winner, if either color has run out of pieces. Reaching zero pieces
/// is the goal, so the emptied color itself wins.
pub fn check_win(count: &PieceCount) -> Option<PieceColor> {
    if count.white == 0 {
        Some(PieceColor::White)
    } else if count.black == 0 {
        Some(PieceColor::Black)
    } else {
        None
    }
}

/// True iff `color` has no pseudo-legal move across all its pieces.
/// The Take-Me filter is ignored here: an obligation the player cannot meet
/// does not strand the game.
pub fn stalemate(board: &Board, color: PieceColor) -> bool {
    !has_legal_moves(board, color)
}

/// Status and winner after a move has been applied: win if a color was
/// emptied, draw if the player to move is stalemated, otherwise still active.
pub(super) fn evaluate_turn_end(
    board: &Board,
    count: &PieceCount,
    next_turn: PieceColor,
    players: &[Player; 2],
) -> (GameStatus, Option<Player>) {
    if let Some(color) = check_win(count) {
        let winner = players.iter().find(|p| p.color == color).cloned();
        return (GameStatus::Win, winner);
    }

    if stalemate(board, next_turn) {
        return (GameStatus::Draw, None);
    }

    (GameStatus::Active, None)
}
