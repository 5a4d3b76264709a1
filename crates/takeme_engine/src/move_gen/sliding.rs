//! Shared sliding-piece ray walker
//!
//! Bishops, rooks and queens differ only in their direction sets. Each ray
//! extends until the board edge, stops exclusively on an own piece, and
//! stops inclusively (capture) on an enemy piece.

use crate::board::piece_at;
use crate::types::*;

/// Walk each direction from `from`, appending reachable squares
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut target = Square::new(from.row + dr, from.col + dc);

        while target.in_bounds() {
            match piece_at(board, target) {
                None => moves.push(target),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
            target = Square::new(target.row + dr, target.col + dc);
        }
    }
}
