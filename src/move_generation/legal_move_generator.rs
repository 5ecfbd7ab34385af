//! Full legal move generation pipeline.
//!
//! Dispatches to the piece-wise pseudo-legal generators, then filters out
//! candidates that leave the mover's own king attacked. The filter replays the
//! candidate with the same board transition the executor uses, so there is a
//! single definition of what a move does to the board.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_unchecked, play_on_board};
use crate::move_generation::legal_move_checks::is_king_attacked_on_board;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::chess_move::Move;

/// Pseudo-legal destinations for the piece on `from`, ignoring self-check.
/// Empty when the square is empty.
pub fn potential_moves(game_state: &GameState, from: Position) -> Vec<Position> {
    match game_state.piece_at(from) {
        Some(piece) => potential_moves_for_piece(game_state, from, piece),
        None => Vec::new(),
    }
}

/// Legal destinations for the piece on `from`. Empty for an empty square or a
/// piece that does not belong to the side to move.
pub fn legal_moves(game_state: &GameState, from: Position) -> Vec<Position> {
    match game_state.piece_at(from) {
        Some(piece) if piece.color == game_state.current_player => {
            legal_moves_for_piece(game_state, from, piece)
        }
        _ => Vec::new(),
    }
}

/// Every legal move of the side to move, scanning the board from a8 to h1.
pub fn all_legal_moves(game_state: &GameState) -> Vec<Move> {
    legal_moves_for_color(game_state, game_state.current_player)
}

/// Number of legal moves `color` would have in this position, whether or not
/// it is that side's turn. Used by the mobility term.
pub fn legal_move_count(game_state: &GameState, color: Color) -> usize {
    game_state
        .board
        .pieces_of(color)
        .map(|(from, piece)| legal_moves_for_piece(game_state, from, piece).len())
        .sum()
}

pub(crate) fn legal_moves_for_color(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for (from, piece) in game_state.board.pieces_of(color) {
        for to in legal_moves_for_piece(game_state, from, piece) {
            moves.push(Move::new(from, to, piece));
        }
    }
    moves
}

pub(crate) fn potential_moves_for_piece(
    game_state: &GameState,
    from: Position,
    piece: Piece,
) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, piece, &mut out),
    }
    out
}

pub(crate) fn legal_moves_for_piece(
    game_state: &GameState,
    from: Position,
    piece: Piece,
) -> Vec<Position> {
    let mut candidates = potential_moves_for_piece(game_state, from, piece);
    candidates.retain(|&to| leaves_king_safe(game_state, Move::new(from, to, piece)));
    candidates
}

fn leaves_king_safe(game_state: &GameState, mv: Move) -> bool {
    let (board, _) = play_on_board(&game_state.board, game_state.en_passant_target, &mv);
    !is_king_attacked_on_board(&board, mv.piece.color)
}

/// Generator that expands every legal move of the side to move into the
/// resulting state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        all_legal_moves(game_state)
            .into_iter()
            .map(|mv| {
                let game_after_move = apply_unchecked(game_state, mv);
                let chess_move = game_after_move
                    .move_history
                    .last()
                    .copied()
                    .unwrap_or(mv);
                GeneratedMove {
                    chess_move,
                    game_after_move,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn sq(row: u8, col: u8) -> Position {
        Position::new(row, col).expect("square on board")
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).len(), 20);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&game).len(), 20);
        assert_eq!(legal_move_count(&game, Color::Black), 20);
    }

    #[test]
    fn selecting_empty_or_enemy_square_yields_nothing() {
        let game = GameState::new_game();
        assert!(legal_moves(&game, sq(4, 4)).is_empty());
        assert!(legal_moves(&game, sq(1, 4)).is_empty());
        assert!(!potential_moves(&game, sq(1, 4)).is_empty());
    }

    #[test]
    fn pinned_piece_keeps_potential_but_loses_legal_moves() {
        // White bishop e2 pinned by black rook e8 against king e1.
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(6, 4), Piece::new(PieceKind::Bishop, Color::White))
            .with_piece(sq(0, 4), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(sq(0, 0), Piece::new(PieceKind::King, Color::Black));
        let game = GameState::from_board(board, Color::White);
        assert!(!potential_moves(&game, sq(6, 4)).is_empty());
        assert!(legal_moves(&game, sq(6, 4)).is_empty());
    }

    #[test]
    fn generated_moves_never_leave_the_mover_in_check() {
        let mut game = GameState::new_game();
        for (from, to) in [((6, 4), (4, 4)), ((1, 5), (2, 5)), ((7, 3), (3, 7))] {
            let piece = game.piece_at(sq(from.0, from.1)).expect("piece to move");
            game = apply_move(&game, Move::new(sq(from.0, from.1), sq(to.0, to.1), piece))
                .expect("scripted move applies");
        }
        // Black is in check from the queen on h5; every reply must resolve it.
        assert!(game.check);
        let mover = game.current_player;
        for generated in LegalMoveGenerator.generate_legal_moves(&game) {
            assert!(!is_king_attacked_on_board(&generated.game_after_move.board, mover));
        }
    }

    #[test]
    fn generated_moves_carry_filled_in_side_effects() {
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(4, 4), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq(1, 4), Piece::new(PieceKind::Knight, Color::Black))
            .with_piece(sq(0, 0), Piece::new(PieceKind::King, Color::Black));
        let game = GameState::from_board(board, Color::White);
        let capture = LegalMoveGenerator
            .generate_legal_moves(&game)
            .into_iter()
            .find(|generated| generated.chess_move.to == sq(1, 4))
            .expect("rook can take the knight");
        assert_eq!(
            capture.chess_move.captured_piece.map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }
}
