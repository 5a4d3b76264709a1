//! Pseudo-legal move generation
//!
//! Enumerates destination squares per piece type following standard chess
//! movement geometry. Deliberately ignores check and self-exposure: in this
//! variant nothing gates legality on leaving the king attacked, since the
//! objective rewards exposure. No castling, no en passant.
//!
//! ## Module Organization
//!
//! - `pawn` - pushes, double pushes, diagonal captures
//! - `knight` - the 8 L-shaped jumps
//! - `king` - single steps in 8 directions
//! - `sliding` - shared ray walker used by bishop, rook and queen
//! - `bishop` / `rook` / `queen` - direction sets over `sliding`

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

use crate::board::piece_at;
use crate::types::*;

/// Enumerate pseudo-legal destinations for the piece at `from`.
///
/// Returns an empty list when the square is empty. Destinations are always
/// on the board and never occupied by a same-color piece.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = piece_at(board, from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(board, from, piece.color, &mut moves),
        PieceType::Knight => knight::generate_knight_moves(board, from, piece.color, &mut moves),
        PieceType::Bishop => bishop::generate_bishop_moves(board, from, piece.color, &mut moves),
        PieceType::Rook => rook::generate_rook_moves(board, from, piece.color, &mut moves),
        PieceType::Queen => queen::generate_queen_moves(board, from, piece.color, &mut moves),
        PieceType::King => king::generate_king_moves(board, from, piece.color, &mut moves),
    }

    moves
}
