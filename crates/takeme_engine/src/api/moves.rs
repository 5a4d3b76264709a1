//! Player action entry points
//!
//! Turn sequencing and the Take-Me forced-capture protocol. Each function
//! takes the current snapshot and returns the next one; invalid actions come
//! back as `ActionError` with the input untouched.
//!
//! A turn normally runs select -> move. Declaring runs select ->
//! `declare_take_me` (flags intent, no board change) -> `confirm_take_me`
//! (commits the staged move and hands the opponent a forced-capture
//! obligation) or `cancel_take_me`. `play_move` / `play_move_declaring`
//! collapse select+move into one call for transport callers that send an
//! explicit from/to pair.

use super::state::evaluate_turn_end;
use crate::analysis::{capturable_pieces_after_declaration, capture_moves, exposed_pieces};
use crate::board::{apply_move, count_pieces, piece_at, should_promote};
use crate::error::{ActionError, ActionResult};
use crate::move_gen::legal_moves;
use crate::types::*;

/// Select a piece of the current turn's color, staging its legal moves.
///
/// Under an active must-capture obligation only pieces that can reach a
/// declared capturable square are selectable, and the staged moves are
/// filtered down to those squares.
pub fn select_piece(state: &GameState, square: Square) -> ActionResult<GameState> {
    if state.status != GameStatus::Active {
        return Err(ActionError::GameNotActive);
    }

    let piece = piece_at(&state.board, square).ok_or(ActionError::EmptySquare {
        row: square.row,
        col: square.col,
    })?;
    if piece.color != state.current_turn {
        return Err(ActionError::NotYourPiece {
            row: square.row,
            col: square.col,
            color: state.current_turn,
        });
    }

    let mut moves = legal_moves(&state.board, square);
    if state.take_me_state.must_capture {
        let captures = capture_moves(&state.board, state.current_turn);
        if !captures.iter().any(|capture| capture.from == square) {
            return Err(ActionError::MustCapture);
        }
        moves.retain(|to| state.take_me_state.capturable_pieces.contains(to));
    }

    let mut next = state.clone();
    next.selected_piece = Some(square);
    next.legal_moves = moves;
    Ok(next)
}

/// Move the selected piece to `to`.
///
/// `promotion` overrides the promotion choice when the move promotes;
/// queen otherwise. Clears the Take-Me state, advances the turn and runs
/// end-of-turn evaluation.
pub fn move_piece(
    state: &GameState,
    to: Square,
    promotion: Option<PieceType>,
) -> ActionResult<GameState> {
    if state.status != GameStatus::Active {
        return Err(ActionError::GameNotActive);
    }
    let from = state.selected_piece.ok_or(ActionError::NoSelection)?;
    if !state.legal_moves.contains(&to) {
        return Err(ActionError::IllegalDestination {
            row: to.row,
            col: to.col,
        });
    }

    commit(state, from, to, promotion, false)
}

/// Flag a "Take Me!" declaration for the selected piece.
///
/// Marks the declarer and highlights the declarer's currently exposed
/// pieces. Nothing moves and the turn does not change until the declaration
/// is confirmed or cancelled.
pub fn declare_take_me(state: &GameState) -> ActionResult<GameState> {
    if state.status != GameStatus::Active {
        return Err(ActionError::GameNotActive);
    }
    if state.selected_piece.is_none() {
        return Err(ActionError::NoSelection);
    }

    let mut next = state.clone();
    next.take_me_state.declared = true;
    next.take_me_state.declarer = Some(state.current_turn);
    next.take_me_state.exposed_pieces = exposed_pieces(&state.board, state.current_turn);
    Ok(next)
}

/// Withdraw a pending declaration. Always succeeds; the rest of the state
/// is left as it was.
pub fn cancel_take_me(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.take_me_state = TakeMeState::default();
    next
}

/// Commit the staged move under the pending declaration.
///
/// Executes exactly as `move_piece` would with the first staged destination,
/// then computes the opponent's forced-capture obligation from the new
/// board: the opponent's next move must capture into that set as long as it
/// is non-empty.
pub fn confirm_take_me(state: &GameState) -> ActionResult<GameState> {
    if state.status != GameStatus::Active {
        return Err(ActionError::GameNotActive);
    }
    let from = state.selected_piece.ok_or(ActionError::NoSelection)?;
    let to = *state.legal_moves.first().ok_or(ActionError::NothingStaged)?;

    commit(state, from, to, None, true)
}

/// Validate and play an explicit from/to move in one step
pub fn play_move(
    state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
) -> ActionResult<GameState> {
    let staged = select_piece(state, from)?;
    move_piece(&staged, to, promotion)
}

/// Validate and play an explicit from/to move, declaring "Take Me!" with it
pub fn play_move_declaring(
    state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
) -> ActionResult<GameState> {
    let staged = select_piece(state, from)?;
    if !staged.legal_moves.contains(&to) {
        return Err(ActionError::IllegalDestination {
            row: to.row,
            col: to.col,
        });
    }

    commit(&staged, from, to, promotion, true)
}

/// Apply a validated move and roll the game state forward one turn
fn commit(
    state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
    declaring: bool,
) -> ActionResult<GameState> {
    let piece = piece_at(&state.board, from).ok_or(ActionError::EmptySquare {
        row: from.row,
        col: from.col,
    })?;

    let promoting = should_promote(piece, to.row);
    let mv = Move {
        from,
        to,
        piece,
        captured_piece: piece_at(&state.board, to),
        is_promotion: promoting,
        promotion_piece: promoting.then(|| promotion.unwrap_or(PieceType::Queen)),
    };

    let board = apply_move(&state.board, &mv);
    let piece_count = count_pieces(&board);
    let next_turn = state.current_turn.opponent();
    let (status, winner) = evaluate_turn_end(&board, &piece_count, next_turn, &state.players);

    let take_me_state = if declaring {
        let capturable = capturable_pieces_after_declaration(&board, next_turn);
        TakeMeState {
            declared: true,
            declarer: Some(state.current_turn),
            exposed_pieces: exposed_pieces(&board, state.current_turn),
            must_capture: !capturable.is_empty(),
            capturable_pieces: capturable,
        }
    } else {
        TakeMeState::default()
    };

    let mut next = state.clone();
    next.board = board;
    next.current_turn = next_turn;
    next.selected_piece = None;
    next.legal_moves = Vec::new();
    next.take_me_state = take_me_state;
    next.move_history.push(mv);
    next.piece_count = piece_count;
    next.status = status;
    next.winner = winner;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::new_game;

    fn test_players() -> [Player; 2] {
        [
            Player {
                name: "Ada".to_string(),
                color: PieceColor::White,
                is_bot: false,
                avatar: None,
            },
            Player {
                name: "Grace".to_string(),
                color: PieceColor::Black,
                is_bot: false,
                avatar: None,
            },
        ]
    }

    fn state_with_board(board: Board, turn: PieceColor) -> GameState {
        let mut state = new_game(test_players());
        state.piece_count = crate::board::count_pieces(&board);
        state.board = board;
        state.current_turn = turn;
        state
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[test]
    fn test_select_own_piece_stages_moves() {
        let state = new_game(test_players());
        let next = select_piece(&state, Square::new(6, 4)).expect("Selection should succeed");

        assert_eq!(next.selected_piece, Some(Square::new(6, 4)));
        assert_eq!(next.legal_moves.len(), 2, "Pawn has single and double push");
        assert_eq!(
            state.selected_piece, None,
            "Input state must stay untouched"
        );
    }

    #[test]
    fn test_select_rejects_empty_and_enemy_squares() {
        let state = new_game(test_players());

        assert_eq!(
            select_piece(&state, Square::new(4, 4)),
            Err(ActionError::EmptySquare { row: 4, col: 4 })
        );
        assert_eq!(
            select_piece(&state, Square::new(1, 0)),
            Err(ActionError::NotYourPiece {
                row: 1,
                col: 0,
                color: PieceColor::White,
            })
        );
    }

    #[test]
    fn test_select_rejected_when_game_over() {
        let mut state = new_game(test_players());
        state.status = GameStatus::Win;

        assert_eq!(
            select_piece(&state, Square::new(6, 4)),
            Err(ActionError::GameNotActive)
        );
    }

    // ========================================================================
    // Moving
    // ========================================================================

    #[test]
    fn test_move_piece_advances_turn_and_records_history() {
        let state = new_game(test_players());
        let staged = select_piece(&state, Square::new(6, 4)).unwrap();
        let next = move_piece(&staged, Square::new(4, 4), None).expect("Move should succeed");

        assert_eq!(next.current_turn, PieceColor::Black);
        assert_eq!(next.move_history.len(), 1);
        assert_eq!(next.move_history[0].from, Square::new(6, 4));
        assert_eq!(next.selected_piece, None);
        assert!(next.legal_moves.is_empty());
        assert_eq!(next.status, GameStatus::Active);
    }

    #[test]
    fn test_move_piece_rejects_illegal_destination() {
        let state = new_game(test_players());
        let staged = select_piece(&state, Square::new(6, 4)).unwrap();

        assert_eq!(
            move_piece(&staged, Square::new(3, 4), None),
            Err(ActionError::IllegalDestination { row: 3, col: 4 })
        );
        assert_eq!(
            move_piece(&state, Square::new(5, 4), None),
            Err(ActionError::NoSelection),
            "Moving without a selection is rejected"
        );
    }

    #[test]
    fn test_capture_updates_piece_count() {
        let mut board: Board = [[None; 8]; 8];
        board[4][4] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[3][3] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
        board[0][0] = Some(Piece::new(PieceType::King, PieceColor::Black));
        board[7][7] = Some(Piece::new(PieceType::King, PieceColor::White));
        let state = state_with_board(board, PieceColor::White);

        let staged = select_piece(&state, Square::new(4, 4)).unwrap();
        let next = move_piece(&staged, Square::new(3, 3), None).unwrap();

        assert_eq!(next.piece_count, PieceCount { white: 2, black: 1 });
        assert_eq!(
            next.move_history[0].captured_piece,
            Some(Piece::new(PieceType::Pawn, PieceColor::Black))
        );
    }

    #[test]
    fn test_losing_last_piece_wins() {
        // Lone black pawn; capturing it empties black, and black wins
        let mut board: Board = [[None; 8]; 8];
        board[4][4] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[3][3] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
        let state = state_with_board(board, PieceColor::White);

        let staged = select_piece(&state, Square::new(4, 4)).unwrap();
        let next = move_piece(&staged, Square::new(3, 3), None).unwrap();

        assert_eq!(next.status, GameStatus::Win);
        assert_eq!(
            next.winner.as_ref().map(|p| p.name.as_str()),
            Some("Grace"),
            "Black emptied its pieces and wins"
        );
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let mut board: Board = [[None; 8]; 8];
        board[1][0] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[7][7] = Some(Piece::new(PieceType::King, PieceColor::Black));
        let state = state_with_board(board, PieceColor::White);

        let staged = select_piece(&state, Square::new(1, 0)).unwrap();
        let next = move_piece(&staged, Square::new(0, 0), None).unwrap();

        assert_eq!(
            crate::board::piece_at(&next.board, Square::new(0, 0)),
            Some(Piece::new(PieceType::Queen, PieceColor::White))
        );
        assert!(next.move_history[0].is_promotion);
        assert_eq!(next.move_history[0].promotion_piece, Some(PieceType::Queen));
    }

    #[test]
    fn test_explicit_promotion_choice() {
        let mut board: Board = [[None; 8]; 8];
        board[1][0] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[7][7] = Some(Piece::new(PieceType::King, PieceColor::Black));
        let state = state_with_board(board, PieceColor::White);

        let staged = select_piece(&state, Square::new(1, 0)).unwrap();
        let next = move_piece(&staged, Square::new(0, 0), Some(PieceType::Knight)).unwrap();

        assert_eq!(
            crate::board::piece_at(&next.board, Square::new(0, 0)),
            Some(Piece::new(PieceType::Knight, PieceColor::White))
        );
    }

    // ========================================================================
    // Take-Me protocol
    // ========================================================================

    #[test]
    fn test_declare_requires_selection() {
        let state = new_game(test_players());
        assert_eq!(declare_take_me(&state), Err(ActionError::NoSelection));
    }

    #[test]
    fn test_declare_and_cancel_roundtrip() {
        let mut board: Board = [[None; 8]; 8];
        board[4][4] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[3][3] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
        let state = state_with_board(board, PieceColor::White);

        let staged = select_piece(&state, Square::new(4, 4)).unwrap();
        let declared = declare_take_me(&staged).unwrap();

        assert!(declared.take_me_state.declared);
        assert_eq!(declared.take_me_state.declarer, Some(PieceColor::White));
        assert_eq!(
            declared.take_me_state.exposed_pieces,
            vec![Square::new(4, 4)],
            "The white pawn is already en prise"
        );
        assert!(
            !declared.take_me_state.must_capture,
            "Declaration alone does not create the obligation"
        );

        let cancelled = cancel_take_me(&declared);
        assert_eq!(cancelled.take_me_state, TakeMeState::default());
        assert_eq!(
            cancelled.selected_piece,
            Some(Square::new(4, 4)),
            "Cancelling keeps the selection"
        );
    }

    #[test]
    fn test_confirm_take_me_creates_obligation() {
        // White pushes a pawn next to a black pawn and declares: black must
        // then capture it.
        let mut board: Board = [[None; 8]; 8];
        board[5][4] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[3][3] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
        board[0][0] = Some(Piece::new(PieceType::King, PieceColor::Black));
        board[7][7] = Some(Piece::new(PieceType::King, PieceColor::White));
        let state = state_with_board(board, PieceColor::White);

        let next = play_move_declaring(
            &state,
            Square::new(5, 4),
            Square::new(4, 4),
            None,
        )
        .expect("Declared move should succeed");

        assert_eq!(next.current_turn, PieceColor::Black);
        assert!(next.take_me_state.declared);
        assert_eq!(next.take_me_state.declarer, Some(PieceColor::White));
        assert!(next.take_me_state.must_capture);
        assert_eq!(
            next.take_me_state.capturable_pieces,
            vec![Square::new(4, 4)],
            "Black's only capture is the offered pawn"
        );
        assert_eq!(next.take_me_state.exposed_pieces, vec![Square::new(4, 4)]);
    }

    #[test]
    fn test_confirm_uses_first_staged_destination() {
        let mut board: Board = [[None; 8]; 8];
        board[5][4] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[3][3] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
        board[0][0] = Some(Piece::new(PieceType::King, PieceColor::Black));
        board[7][7] = Some(Piece::new(PieceType::King, PieceColor::White));
        let state = state_with_board(board, PieceColor::White);

        let staged = select_piece(&state, Square::new(5, 4)).unwrap();
        let declared = declare_take_me(&staged).unwrap();
        let next = confirm_take_me(&declared).expect("Confirm should commit the staged move");

        assert_eq!(next.move_history.len(), 1);
        assert_eq!(next.move_history[0].to, Square::new(4, 4));
        assert!(next.take_me_state.must_capture);
    }

    #[test]
    fn test_must_capture_restricts_selection_and_moves() {
        // Obligation set up by white's declared pawn push
        let mut board: Board = [[None; 8]; 8];
        board[5][4] = Some(Piece::new(PieceType::Pawn, PieceColor::White));
        board[3][3] = Some(Piece::new(PieceType::Pawn, PieceColor::Black));
        board[0][0] = Some(Piece::new(PieceType::King, PieceColor::Black));
        board[7][7] = Some(Piece::new(PieceType::King, PieceColor::White));
        let state = state_with_board(board, PieceColor::White);
        let obligated =
            play_move_declaring(&state, Square::new(5, 4), Square::new(4, 4), None).unwrap();

        // The king cannot reach the offered pawn
        assert_eq!(
            select_piece(&obligated, Square::new(0, 0)),
            Err(ActionError::MustCapture)
        );

        // The pawn can, and its staged moves shrink to the capture
        let staged = select_piece(&obligated, Square::new(3, 3)).unwrap();
        assert_eq!(staged.legal_moves, vec![Square::new(4, 4)]);

        let resolved = move_piece(&staged, Square::new(4, 4), None).unwrap();
        assert_eq!(
            resolved.take_me_state,
            TakeMeState::default(),
            "Completing the capture lifts the obligation"
        );
        assert_eq!(resolved.piece_count.white, 1, "The offered pawn is gone");
    }

    #[test]
    fn test_play_move_validates_turn_and_legality() {
        let state = new_game(test_players());

        assert!(play_move(&state, Square::new(6, 4), Square::new(4, 4), None).is_ok());
        assert_eq!(
            play_move(&state, Square::new(1, 4), Square::new(3, 4), None),
            Err(ActionError::NotYourPiece {
                row: 1,
                col: 4,
                color: PieceColor::White,
            }),
            "Black cannot move on white's turn"
        );
        assert_eq!(
            play_move(&state, Square::new(7, 0), Square::new(5, 0), None),
            Err(ActionError::IllegalDestination { row: 5, col: 0 }),
            "The boxed-in rook has no such move"
        );
    }
}
