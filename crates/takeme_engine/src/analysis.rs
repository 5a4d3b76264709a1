//! Capture and exposure analysis
//!
//! Composes the move generator into the queries the Take-Me protocol needs:
//! which moves capture, which of a color's pieces are currently capturable,
//! and which squares a declaring player's opponent is obligated to capture
//! into.

use crate::board::piece_at;
use crate::move_gen::legal_moves;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// One capture opportunity: a piece at `from` can take the piece at `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureMove {
    pub from: Square,
    pub to: Square,
}

/// All capture moves available to `color`: every legal destination occupied
/// by an enemy piece, across every piece of that color.
pub fn capture_moves(board: &Board, color: PieceColor) -> Vec<CaptureMove> {
    let mut captures = Vec::new();

    for row in 0..8 {
        for col in 0..8 {
            let from = Square::new(row, col);
            let Some(piece) = piece_at(board, from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }

            for to in legal_moves(board, from) {
                if piece_at(board, to).is_some_and(|target| target.color != color) {
                    captures.push(CaptureMove { from, to });
                }
            }
        }
    }

    captures
}

/// Deduplicated destination set of a color's capture moves, sorted for
/// stable output
fn capture_destinations(board: &Board, color: PieceColor) -> Vec<Square> {
    let mut squares: Vec<Square> = capture_moves(board, color)
        .into_iter()
        .map(|capture| capture.to)
        .collect();
    squares.sort();
    squares.dedup();
    squares
}

/// Squares holding a `color` piece the enemy could capture this turn.
/// Used to highlight pieces a declaration would offer up.
pub fn exposed_pieces(board: &Board, color: PieceColor) -> Vec<Square> {
    capture_destinations(board, color.opponent())
}

/// Enemy-occupied squares the `attacker` color can capture into. After a
/// Take-Me declaration this set becomes the opponent's obligation.
pub fn capturable_pieces_after_declaration(board: &Board, attacker: PieceColor) -> Vec<Square> {
    capture_destinations(board, attacker)
}

/// Whether `color` has at least one pseudo-legal move anywhere
pub fn has_legal_moves(board: &Board, color: PieceColor) -> bool {
    for row in 0..8 {
        for col in 0..8 {
            let from = Square::new(row, col);
            if piece_at(board, from).is_some_and(|piece| piece.color == color)
                && !legal_moves(board, from).is_empty()
            {
                return true;
            }
        }
    }
    false
}
