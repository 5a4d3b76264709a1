//! Public rule-engine API
//!
//! Pure entry points over caller-owned `GameState` snapshots: every function
//! validates, then returns a new state (or a typed rejection) without
//! touching the input.
//!
//! ## Module Organization
//!
//! - `game` - game lifecycle (new_game)
//! - `moves` - player actions (select, move, declare/cancel/confirm Take-Me)
//! - `state` - end-of-turn evaluation (check_win, stalemate)

mod game;
mod moves;
mod state;

pub use game::new_game;
pub use moves::{
    cancel_take_me, confirm_take_me, declare_take_me, move_piece, play_move, play_move_declaring,
    select_piece,
};
pub use state::{check_win, stalemate};
