//! Rook move generation
//!
//! Rooks slide along ranks and files. The shared sliding walker does the
//! work; this module just supplies the direction set.

use super::sliding::generate_sliding_moves;
use crate::constants::ROOK_DIRECTIONS;
use crate::types::*;

/// Generate rook moves from a given square
pub fn generate_rook_moves(board: &Board, from: Square, color: PieceColor, moves: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, moves);
}
