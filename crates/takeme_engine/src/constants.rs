//! Engine constants and tuning values
//!
//! Board layout tables, movement direction sets, and the bot heuristic's
//! tuning knobs live here so they can be adjusted in one place.

use crate::types::PieceType;

/// Back-rank piece order, mirrored for both colors (king on column 4)
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8 L-shaped knight offsets
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Diagonal direction set (bishop)
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal direction set (rook)
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All 8 directions (queen slides, king steps)
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Bot heuristic tuning. The evaluation is inverted from standard chess:
// leaving the moved piece capturable is rewarded, since losing pieces wins.

/// Flat bonus when the moved piece ends up capturable by the opponent
pub const EXPOSURE_BONUS: f64 = 10.0;

/// Flat bonus when the move itself captures an enemy piece
pub const CAPTURE_BONUS: f64 = 2.0;

/// Upper bound of the uniform tie-break jitter added to every score
pub const SCORE_JITTER: f64 = 3.0;

/// The bot picks uniformly among this many top-scored moves
pub const TOP_MOVE_POOL: usize = 3;

/// Probability the bot declares "Take Me!" after an exposing move
pub const DECLARE_PROBABILITY: f64 = 0.6;

/// Offer value of a piece when exposed to capture
pub const fn exposure_value(piece_type: PieceType) -> f64 {
    match piece_type {
        PieceType::Pawn => 1.0,
        PieceType::Knight => 3.0,
        PieceType::Bishop => 3.0,
        PieceType::Rook => 5.0,
        PieceType::Queen => 9.0,
        PieceType::King => 15.0,
    }
}

pub const BOT_FIRST_NAMES: [&str; 16] = [
    "Chippy", "Buddy", "Sparky", "Ziggy", "Fuzzy", "Bumble", "Twinkle", "Whiskers", "Pebbles",
    "Sunny", "Biscuit", "Noodle", "Pickle", "Muffin", "Cookie", "Bubbles",
];

pub const BOT_LAST_NAMES: [&str; 16] = [
    "Bot", "Knight", "Pawn", "Rook", "Bishop", "King", "Queen", "Chess", "Move", "Play", "Think",
    "Smart", "Quick", "Clever", "Wise", "Fun",
];

pub const BOT_AVATARS: [&str; 8] = ["🤖", "🎮", "🎯", "🎲", "🧠", "⚡", "🌟", "🎪"];
