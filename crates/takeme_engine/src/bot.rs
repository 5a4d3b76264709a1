//! Exposure-seeking bot heuristic
//!
//! A one-ply greedy opponent that plays to lose: each candidate move is
//! simulated and scored by how capturable it leaves the moved piece, with
//! a piece-value bonus for offering bigger material, a small bonus for
//! capturing (the game has to progress), and a jitter term so play varies.
//! The randomness source is injected so seeded tests are reproducible.

use crate::analysis::capture_moves;
use crate::board::{apply_move, piece_at, should_promote};
use crate::constants::*;
use crate::error::ActionResult;
use crate::move_gen::legal_moves;
use crate::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A bot's chosen move, with whether it declares "Take Me!" afterwards
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub declare_take_me: bool,
}

/// Pick a move for `color` on `board`.
///
/// Under an unmet forced-capture obligation the bot captures uniformly at
/// random into `capturable_pieces` and never re-declares. Otherwise it
/// scores every candidate, picks among the top three, and declares with
/// probability 0.6 when the chosen move leaves the moved piece en prise.
/// Returns `None` when the bot has no move at all (stalemate).
pub fn choose_bot_move<R: Rng>(
    board: &Board,
    color: PieceColor,
    must_capture: bool,
    capturable_pieces: &[Square],
    rng: &mut R,
) -> Option<BotMove> {
    if must_capture && !capturable_pieces.is_empty() {
        let forced: Vec<_> = capture_moves(board, color)
            .into_iter()
            .filter(|capture| capturable_pieces.contains(&capture.to))
            .collect();

        if !forced.is_empty() {
            let pick = forced[rng.random_range(0..forced.len())];
            return Some(BotMove {
                mv: build_move(board, pick.from, pick.to),
                declare_take_me: false,
            });
        }
        // No capture of ours reaches the declared set; fall through and
        // move normally.
    }

    let mut candidates = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let from = Square::new(row, col);
            if piece_at(board, from).is_some_and(|piece| piece.color == color) {
                for to in legal_moves(board, from) {
                    candidates.push(build_move(board, from, to));
                }
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let mut scored: Vec<(Move, f64)> = candidates
        .into_iter()
        .map(|mv| {
            let score = score_move(board, color, &mv) + rng.random_range(0.0..SCORE_JITTER);
            (mv, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let pool = scored.len().min(TOP_MOVE_POOL);
    let mv = scored[rng.random_range(0..pool)].0;

    // Re-simulate the committed move; only an exposed piece is worth
    // shouting about.
    let after = apply_move(board, &mv);
    let exposed = capture_moves(&after, color.opponent())
        .iter()
        .any(|capture| capture.to == mv.to);
    let declare_take_me = exposed && rng.random_bool(DECLARE_PROBABILITY);

    Some(BotMove {
        mv,
        declare_take_me,
    })
}

/// Score a candidate: exposure of the moved piece is the prize, captures a
/// small nudge. Higher is better.
fn score_move(board: &Board, color: PieceColor, mv: &Move) -> f64 {
    let mut score = 0.0;

    let after = apply_move(board, mv);
    let recaptures = capture_moves(&after, color.opponent());
    if recaptures.iter().any(|capture| capture.to == mv.to) {
        score += EXPOSURE_BONUS;
        score += exposure_value(mv.piece.piece_type);
    }

    if mv.captured_piece.is_some() {
        score += CAPTURE_BONUS;
    }

    score
}

/// Fill in the move record for a from/to pair: captured piece from the
/// board, promotion defaulting to queen
fn build_move(board: &Board, from: Square, to: Square) -> Move {
    // Callers only pass squares that hold a piece
    let piece = piece_at(board, from).expect("move source must hold a piece");
    let promoting = should_promote(piece, to.row);

    Move {
        from,
        to,
        piece,
        captured_piece: piece_at(board, to),
        is_promotion: promoting,
        promotion_piece: promoting.then_some(PieceType::Queen),
    }
}

/// Drive a full bot turn through the rule engine: select, move, and declare
/// when the heuristic asks for it. Returns `None` when the bot is
/// stalemated; the caller decides how to end the game.
pub fn play_bot_turn<R: Rng>(state: &GameState, rng: &mut R) -> Option<ActionResult<GameState>> {
    let choice = choose_bot_move(
        &state.board,
        state.current_turn,
        state.take_me_state.must_capture,
        &state.take_me_state.capturable_pieces,
        rng,
    )?;

    let result = if choice.declare_take_me {
        crate::api::play_move_declaring(state, choice.mv.from, choice.mv.to, None)
    } else {
        crate::api::play_move(state, choice.mv.from, choice.mv.to, None)
    };
    Some(result)
}

/// Random bot display name from the fixed first/last pools
pub fn generate_bot_name<R: Rng>(rng: &mut R) -> String {
    let first = BOT_FIRST_NAMES[rng.random_range(0..BOT_FIRST_NAMES.len())];
    let last = BOT_LAST_NAMES[rng.random_range(0..BOT_LAST_NAMES.len())];
    format!("{first} {last}")
}

/// Random bot avatar
pub fn generate_bot_avatar<R: Rng>(rng: &mut R) -> String {
    BOT_AVATARS[rng.random_range(0..BOT_AVATARS.len())].to_string()
}
