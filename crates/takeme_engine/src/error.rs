//! Error types for the rules engine
//!
//! Illegal player actions are expected traffic (misclicks, stale clients),
//! so every entry point rejects them with a typed error and leaves the input
//! state untouched instead of panicking.

use crate::types::PieceColor;
use thiserror::Error;

/// Rejections produced by the game rule engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Action attempted while the game is not in the active state
    #[error("game is not active")]
    GameNotActive,

    /// Selection targeted an empty square
    #[error("no piece at ({row}, {col})")]
    EmptySquare { row: i8, col: i8 },

    /// Selection targeted a piece that does not belong to the current turn
    #[error("piece at ({row}, {col}) does not belong to {color:?}")]
    NotYourPiece { row: i8, col: i8, color: PieceColor },

    /// Move or declaration attempted without a selected piece
    #[error("no piece selected")]
    NoSelection,

    /// Destination is not among the selected piece's legal moves
    #[error("illegal destination ({row}, {col})")]
    IllegalDestination { row: i8, col: i8 },

    /// Confirmation attempted with no staged destination
    #[error("no staged destination to confirm")]
    NothingStaged,

    /// A Take-Me obligation is active and the action does not capture one of
    /// the declared pieces
    #[error("must capture one of the declared pieces")]
    MustCapture,
}

/// Result type alias for rule engine operations
pub type ActionResult<T> = Result<T, ActionError>;
