//! King move generation
//!
//! One step in any of the 8 directions, onto empty or enemy-occupied
//! squares. No castling, and no check restriction: walking the king into
//! attack range is legal (and, in this variant, often desirable).

use crate::board::piece_at;
use crate::constants::QUEEN_DIRECTIONS;
use crate::types::*;

/// Generate king moves from a given square
pub fn generate_king_moves(board: &Board, from: Square, color: PieceColor, moves: &mut Vec<Square>) {
    for (dr, dc) in QUEEN_DIRECTIONS {
        let target = Square::new(from.row + dr, from.col + dc);
        if !target.in_bounds() {
            continue;
        }

        match piece_at(board, target) {
            None => moves.push(target),
            Some(occupant) if occupant.color != color => moves.push(target),
            Some(_) => {}
        }
    }
}
