//! # Take-Me Chess engine
//!
//! Rules and state engine for capture-seeking chess: a player wins by losing
//! all of their pieces first. The crate provides the board model, per-piece
//! pseudo-legal move generation, capture/exposure analysis, the "Take Me!"
//! forced-capture protocol, win/stalemate detection, and a heuristic bot
//! that plays to expose its own pieces.
//!
//! The engine is a pure library: callers (a UI state manager or an HTTP
//! service) own the authoritative `GameState` and feed each player action
//! through the entry points in [`api`], which return a fresh snapshot.
//! Nothing here blocks, performs I/O, or shares mutable state between
//! calls, so one game's actions can be driven from anywhere as long as the
//! caller serializes them.
//!
//! ```
//! use takeme_engine::api::{new_game, play_move};
//! use takeme_engine::types::{PieceColor, Player, Square};
//!
//! let players = [
//!     Player { name: "Ada".into(), color: PieceColor::White, is_bot: false, avatar: None },
//!     Player { name: "Grace".into(), color: PieceColor::Black, is_bot: false, avatar: None },
//! ];
//! let state = new_game(players);
//! let state = play_move(&state, Square::new(6, 4), Square::new(4, 4), None).unwrap();
//! assert_eq!(state.current_turn, PieceColor::Black);
//! ```

pub mod analysis;
pub mod api;
pub mod board;
pub mod bot;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;

pub use analysis::{
    capturable_pieces_after_declaration, capture_moves, exposed_pieces, has_legal_moves,
    CaptureMove,
};
pub use api::{
    cancel_take_me, check_win, confirm_take_me, declare_take_me, move_piece, new_game, play_move,
    play_move_declaring, select_piece, stalemate,
};
pub use board::{apply_move, count_pieces, init_board, should_promote};
pub use bot::{choose_bot_move, generate_bot_avatar, generate_bot_name, play_bot_turn, BotMove};
pub use error::{ActionError, ActionResult};
pub use move_gen::legal_moves;
pub use types::{
    Board, GameMode, GameState, GameStatus, Move, Piece, PieceColor, PieceCount, PieceType, Player,
    Square, TakeMeState,
};
