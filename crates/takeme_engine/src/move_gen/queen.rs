//! Queen move generation
//!
//! The queen combines rook and bishop movement: all 8 directions through
//! the shared sliding walker.

use super::sliding::generate_sliding_moves;
use crate::constants::QUEEN_DIRECTIONS;
use crate::types::*;

/// Generate queen moves from a given square
pub fn generate_queen_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    generate_sliding_moves(board, from, color, &QUEEN_DIRECTIONS, moves);
}
