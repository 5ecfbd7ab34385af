use crate::game_state::{chess_types::*, game_state::GameState};

/// Pseudo-legal pawn destinations: single push, double push from an unmoved
/// pawn, diagonal captures and en passant.
pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Position,
    pawn: Piece,
    out: &mut Vec<Position>,
) {
    let board = &game_state.board;
    let forward = pawn.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if !pawn.has_moved {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color != pawn.color => out.push(to),
            Some(_) => {}
            // The en passant target only belongs to the side to move.
            None if pawn.color == game_state.current_player
                && game_state.en_passant_target == Some(to) =>
            {
                out.push(to)
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn sq(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("square on board")
    }

    #[test]
    fn unmoved_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let e2 = sq(6, 4);
        let pawn = game.piece_at(e2).expect("pawn on e2");
        let mut out = Vec::new();
        generate_pawn_moves(&game, e2, pawn, &mut out);
        assert_eq!(out, vec![sq(5, 4), sq(4, 4)]);
    }

    #[test]
    fn moved_pawn_cannot_double_push() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(0, 4), Piece::new(PieceKind::King, Color::Black))
            .with_piece(sq(6, 0), Piece::new(PieceKind::Pawn, Color::White).moved());
        let game = GameState::from_board(board, Color::White);
        let a2 = sq(6, 0);
        let mut out = Vec::new();
        generate_pawn_moves(&game, a2, game.piece_at(a2).expect("pawn"), &mut out);
        assert_eq!(out, vec![sq(5, 0)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump_and_captures_diagonally() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(0, 4), Piece::new(PieceKind::King, Color::Black))
            .with_piece(sq(6, 3), Piece::new(PieceKind::Pawn, Color::White))
            .with_piece(sq(5, 3), Piece::new(PieceKind::Knight, Color::Black))
            .with_piece(sq(5, 2), Piece::new(PieceKind::Bishop, Color::Black))
            .with_piece(sq(5, 4), Piece::new(PieceKind::Knight, Color::White));
        let game = GameState::from_board(board, Color::White);
        let d2 = sq(6, 3);
        let mut out = Vec::new();
        generate_pawn_moves(&game, d2, game.piece_at(d2).expect("pawn"), &mut out);
        assert_eq!(out, vec![sq(5, 2)]);
    }
}
