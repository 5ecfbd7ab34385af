//! Attack and check detection.
//!
//! Attacks are tested backwards from the target square, one piece family at a
//! time, so the detector never has to generate moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves_for_piece;
use crate::moves::move_offsets::{is_diagonal, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS};

#[inline]
pub fn king_position(game_state: &GameState, color: Color) -> Option<Position> {
    game_state.board.king_position(color)
}

/// True when `color`'s king is attacked. A board without that king is never in check.
#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_king_attacked_on_board(&game_state.board, color)
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Position, attacker_color: Color) -> bool {
    is_square_attacked_on_board(&game_state.board, square, attacker_color)
}

pub(crate) fn is_king_attacked_on_board(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_position(color) else {
        return false;
    };
    is_square_attacked_on_board(board, king_sq, color.opposite())
}

pub fn is_square_attacked_on_board(board: &Board, square: Position, attacker_color: Color) -> bool {
    let attacker_at = |d_row: i8, d_col: i8, kind: PieceKind| {
        square
            .offset(d_row, d_col)
            .and_then(|pos| board.get(pos))
            .is_some_and(|piece| piece.color == attacker_color && piece.kind == kind)
    };

    // A pawn attacks diagonally forward, so look one row behind the target
    // from the attacker's point of view.
    let behind = -attacker_color.forward();
    if attacker_at(behind, -1, PieceKind::Pawn) || attacker_at(behind, 1, PieceKind::Pawn) {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(d_row, d_col)| attacker_at(d_row, d_col, PieceKind::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(d_row, d_col)| attacker_at(d_row, d_col, PieceKind::King))
    {
        return true;
    }

    for direction in QUEEN_DIRECTIONS {
        let mut cursor = square;
        while let Some(next) = cursor.offset(direction.0, direction.1) {
            if let Some(piece) = board.get(next) {
                if piece.color == attacker_color {
                    let slides_here = match piece.kind {
                        PieceKind::Queen => true,
                        PieceKind::Bishop => is_diagonal(direction),
                        PieceKind::Rook => !is_diagonal(direction),
                        _ => false,
                    };
                    if slides_here {
                        return true;
                    }
                }
                break;
            }
            cursor = next;
        }
    }

    false
}

/// Whether the side to move has at least one legal move anywhere on the board.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.current_player)
        .any(|(from, piece)| !legal_moves_for_piece(game_state, from, piece).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("square on board")
    }

    fn kings_only() -> Board {
        Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(0, 4), Piece::new(PieceKind::King, Color::Black))
    }

    #[test]
    fn pawn_attacks_only_forward_diagonals() {
        let board = kings_only().with_piece(sq(4, 4), Piece::new(PieceKind::Pawn, Color::White));
        // White pawn on e4 attacks d5 and f5, not d3 or e5.
        assert!(is_square_attacked_on_board(&board, sq(3, 3), Color::White));
        assert!(is_square_attacked_on_board(&board, sq(3, 5), Color::White));
        assert!(!is_square_attacked_on_board(&board, sq(5, 3), Color::White));
        assert!(!is_square_attacked_on_board(&board, sq(3, 4), Color::White));
    }

    #[test]
    fn black_pawn_attacks_downwards() {
        let board = kings_only().with_piece(sq(3, 3), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(is_square_attacked_on_board(&board, sq(4, 2), Color::Black));
        assert!(is_square_attacked_on_board(&board, sq(4, 4), Color::Black));
        assert!(!is_square_attacked_on_board(&board, sq(2, 2), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_occupant() {
        let board = kings_only()
            .with_piece(sq(4, 0), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(sq(4, 2), Piece::new(PieceKind::Pawn, Color::White));
        assert!(is_square_attacked_on_board(&board, sq(4, 1), Color::Black));
        assert!(is_square_attacked_on_board(&board, sq(4, 2), Color::Black));
        assert!(!is_square_attacked_on_board(&board, sq(4, 3), Color::Black));
    }

    #[test]
    fn bishop_does_not_attack_orthogonally() {
        let board = kings_only().with_piece(sq(4, 4), Piece::new(PieceKind::Bishop, Color::Black));
        assert!(is_square_attacked_on_board(&board, sq(6, 2), Color::Black));
        assert!(!is_square_attacked_on_board(&board, sq(6, 4), Color::Black));
    }

    #[test]
    fn knight_and_king_adjacency_are_detected() {
        let board = kings_only().with_piece(sq(2, 2), Piece::new(PieceKind::Knight, Color::White));
        assert!(is_square_attacked_on_board(&board, sq(0, 1), Color::White));
        assert!(is_square_attacked_on_board(&board, sq(0, 3), Color::Black));
        assert!(!is_square_attacked_on_board(&board, sq(2, 3), Color::White));
    }

    #[test]
    fn start_position_has_moves_and_no_check() {
        let game = GameState::new_game();
        assert!(!is_in_check(&game, Color::White));
        assert!(!is_in_check(&game, Color::Black));
        assert!(has_any_legal_move(&game));
        assert_eq!(king_position(&game, Color::White), Some(sq(7, 4)));
    }
}
