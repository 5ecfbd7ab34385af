use crate::game_state::chess_rules::{CastleWing, KINGSIDE, KING_START_COL, QUEENSIDE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked_on_board;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::move_offsets::KING_OFFSETS;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Position,
    king: Piece,
    out: &mut Vec<Position>,
) {
    push_step_moves(&game_state.board, from, king.color, &KING_OFFSETS, out);

    for wing in [KINGSIDE, QUEENSIDE] {
        if let Some(to) = castling_destination(&game_state.board, from, king, wing) {
            out.push(to);
        }
    }
}

/// King arrival square when castling on `wing` is currently allowed.
///
/// Checks history, emptiness between king and rook, that the king is not in
/// check and that the transit square is not attacked. The arrival square is
/// left to the common self-check filter.
fn castling_destination(
    board: &Board,
    from: Position,
    king: Piece,
    wing: CastleWing,
) -> Option<Position> {
    if king.has_moved || from.row != king.color.back_rank() || from.col != KING_START_COL {
        return None;
    }

    let rook_square = Position::new(from.row, wing.rook_from_col)?;
    let rook_ready = matches!(
        board.get(rook_square),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    );
    if !rook_ready {
        return None;
    }

    let (low, high) = if wing.rook_from_col < from.col {
        (wing.rook_from_col + 1, from.col)
    } else {
        (from.col + 1, wing.rook_from_col)
    };
    let path_clear = (low..high).all(|col| board.get(Position { row: from.row, col }).is_none());
    if !path_clear {
        return None;
    }

    let enemy = king.color.opposite();
    let transit = from.offset(0, wing.king_step)?;
    if is_square_attacked_on_board(board, from, enemy)
        || is_square_attacked_on_board(board, transit, enemy)
    {
        return None;
    }

    transit.offset(0, wing.king_step)
}
