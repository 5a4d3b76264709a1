//! Bishop move generation
//!
//! Bishops slide along the four diagonals. The shared sliding walker does
//! the work; this module just supplies the direction set.

use super::sliding::generate_sliding_moves;
use crate::constants::BISHOP_DIRECTIONS;
use crate::types::*;

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(
    board: &Board,
    from: Square,
    color: PieceColor,
    moves: &mut Vec<Square>,
) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, moves);
}
