//! Core value types for the Take-Me Chess engine
//!
//! Every type here is a plain value: the engine never mutates shared state,
//! so boards and game states are cheap to clone and safe to hand across
//! threads or store in a keyed game store. `Board` is a fixed 8x8 grid of
//! optional pieces; row 0 is black's back rank, row 7 is white's.

use serde::{Deserialize, Serialize};

/// 8x8 grid of optional pieces, indexed `[row][col]`
pub type Board = [[Option<Piece>; 8]; 8];

/// Piece color. White pawns advance toward row 0, black toward row 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The other color
    #[inline]
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta a pawn of this color advances by
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Starting row for this color's pawns
    #[inline]
    pub fn pawn_rank(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on
    #[inline]
    pub fn promotion_rank(self) -> i8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece on the board. Immutable value; promotion replaces the piece
/// rather than mutating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: PieceColor) -> Piece {
        Piece { piece_type, color }
    }
}

/// Board coordinate. Valid squares have row and col in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    /// Whether the square lies on the 8x8 board
    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
}

/// One board transition. Applying a move never consults board state beyond
/// what is embedded here, so a recorded history can replay without context.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece as it was before moving
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_promotion: bool,
    pub promotion_piece: Option<PieceType>,
}

/// Live piece totals per color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCount {
    pub white: u32,
    pub black: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Setup,
    Active,
    Win,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[serde(rename = "1P")]
    SinglePlayer,
    #[serde(rename = "2P")]
    TwoPlayer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: PieceColor,
    pub is_bot: bool,
    pub avatar: Option<String>,
}

/// The forced-capture obligation created by a "Take Me!" declaration.
///
/// Reset to the empty state at the start of every turn that does not itself
/// declare; populated by `confirm_take_me` (or a declaring bot move); lifted
/// once the obligated player completes a capture.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TakeMeState {
    pub declared: bool,
    pub declarer: Option<PieceColor>,
    pub exposed_pieces: Vec<Square>,
    pub capturable_pieces: Vec<Square>,
    pub must_capture: bool,
}

/// Full game snapshot. Owned by the caller; every engine entry point takes a
/// snapshot and returns a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_turn: PieceColor,
    pub players: [Player; 2],
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub selected_piece: Option<Square>,
    pub legal_moves: Vec<Square>,
    pub take_me_state: TakeMeState,
    pub move_history: Vec<Move>,
    pub piece_count: PieceCount,
}

impl GameState {
    /// Player entry for a color
    pub fn player(&self, color: PieceColor) -> &Player {
        if self.players[0].color == color {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }
}
