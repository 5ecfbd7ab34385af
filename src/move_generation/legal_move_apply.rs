//! Move executor.
//!
//! `apply_move` is the only state transition in the crate. It never mutates
//! its input: the board is copied, the move's side effects are resolved and
//! recorded, clocks and turn are advanced, and the status flags are recomputed
//! for the new side to move.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::CastleWing;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// Applies `mv` to `game_state` and returns the resulting state.
///
/// The destination is not validated; callers pick `mv` from the legal move
/// list. The piece is always taken from the board, so `mv.piece` only needs to
/// identify the request.
pub fn apply_move(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    if game_state.is_game_over() {
        return Err(ChessError::GameOver);
    }

    let piece = game_state
        .piece_at(mv.from)
        .ok_or(ChessError::EmptySquare(mv.from))?;
    if piece.color != game_state.current_player {
        return Err(ChessError::NotSideToMove(mv.from));
    }

    Ok(apply_unchecked(game_state, Move { piece, ..mv }))
}

/// Transition used by the generator once the move is known to be well formed.
pub(crate) fn apply_unchecked(game_state: &GameState, mv: Move) -> GameState {
    let (board, record) = play_on_board(&game_state.board, game_state.en_passant_target, &mv);

    let mut next = GameState {
        board,
        current_player: game_state.current_player.opposite(),
        move_history: Vec::with_capacity(game_state.move_history.len() + 1),
        captured_pieces: game_state.captured_pieces.clone(),
        check: false,
        checkmate: false,
        stalemate: false,
        half_move_clock: game_state.half_move_clock,
        full_move_number: game_state.full_move_number,
        en_passant_target: None,
    };

    if let Some(captured) = record.captured_piece {
        next.captured_pieces.push(captured);
    }

    let moved_rows = mv.to.row.abs_diff(mv.from.row);
    if record.piece.kind == PieceKind::Pawn && moved_rows == 2 {
        next.en_passant_target = Some(Position {
            row: (mv.from.row + mv.to.row) / 2,
            col: mv.from.col,
        });
    }

    if record.piece.kind == PieceKind::Pawn || record.is_capture() {
        next.half_move_clock = 0;
    } else {
        next.half_move_clock = next.half_move_clock.saturating_add(1);
    }

    next.move_history.extend_from_slice(&game_state.move_history);
    next.move_history.push(record);

    if next.current_player == Color::White {
        next.full_move_number = next.full_move_number.saturating_add(1);
    }

    next.refresh_status();
    next
}

/// Plays `mv` on a copy of `board` and returns the new board together with
/// the move record carrying its side effects.
///
/// Shared by the executor and the legality filter.
pub(crate) fn play_on_board(
    board: &Board,
    en_passant_target: Option<Position>,
    mv: &Move,
) -> (Board, Move) {
    let mut next = *board;
    let mut record = Move::new(mv.from, mv.to, mv.piece);
    let piece = mv.piece;

    record.captured_piece = next.get(mv.to);

    let is_diagonal_step = mv.from.col != mv.to.col;
    if piece.kind == PieceKind::Pawn
        && is_diagonal_step
        && record.captured_piece.is_none()
        && en_passant_target == Some(mv.to)
    {
        // The captured pawn sits beside the mover, on the mover's starting row.
        let victim_square = Position {
            row: mv.from.row,
            col: mv.to.col,
        };
        record.captured_piece = next.get(victim_square);
        record.is_en_passant = true;
        next.set(victim_square, None);
    }

    if piece.kind == PieceKind::King && mv.from.col.abs_diff(mv.to.col) == 2 {
        let wing = CastleWing::for_king_move(mv.from.col, mv.to.col);
        let rook_from = Position {
            row: mv.from.row,
            col: wing.rook_from_col,
        };
        let rook_to = Position {
            row: mv.from.row,
            col: wing.rook_to_col,
        };
        if let Some(rook) = next.get(rook_from) {
            next.set(rook_from, None);
            next.set(rook_to, Some(rook.moved()));
        }
        record.is_castle = true;
    }

    let mut placed = piece.moved();
    if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_rank() {
        let promotion = mv
            .promotion_piece
            .filter(|kind| !matches!(kind, PieceKind::Pawn | PieceKind::King))
            .unwrap_or(PieceKind::Queen);
        placed.kind = promotion;
        record.is_promotion = true;
        record.promotion_piece = Some(promotion);
    }

    next.set(mv.from, None);
    next.set(mv.to, Some(placed));

    (next, record)
}
