//! Knight move generation
//!
//! Knights jump in an L-shape: 2 squares in one direction, 1 square
//! perpendicular. They ignore pieces in between, so only the destination
//! square needs checking.

use crate::board::piece_at;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
pub fn generate_knight_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    for (dr, dc) in KNIGHT_OFFSETS {
        let target = Square::new(from.row + dr, from.col + dc);
        if !target.in_bounds() {
            continue;
        }

        // Valid if destination is empty or holds an opponent piece
        match piece_at(board, target) {
            None => moves.push(target),
            Some(occupant) if occupant.color != color => moves.push(target),
            Some(_) => {}
        }
    }
}
