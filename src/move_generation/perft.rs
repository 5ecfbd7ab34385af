//! Move-path enumeration used to validate move generation against published
//! node counts.
//!
//! Promotions are generated as queen promotions only, so a position where a
//! pawn can promote counts one move per promotion square where the published
//! tables count four. Counts match the tables for positions without
//! promotions in reach, such as the start position.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// Perft with the crate's own legal move generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        let record = &mv.chess_move;
        counts.nodes += 1;
        counts.captures += usize::from(record.is_capture());
        counts.en_passant += usize::from(record.is_en_passant);
        counts.castles += usize::from(record.is_castle);
        counts.promotions += usize::from(record.is_promotion);
        counts.checks += usize::from(mv.game_after_move.check);
        counts.checkmates += usize::from(mv.game_after_move.checkmate);
        return;
    }

    for child in generator.generate_legal_moves(&mv.game_after_move) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        assert_eq!(
            perft_legal(&game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_start_position_matches_reference_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_legal(&game, 1).nodes, 20);
        assert_eq!(perft_legal(&game, 2).nodes, 400);

        let depth3 = perft_legal(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn perft_counts_castles_in_an_open_position() {
        // Kings and rooks only: both White castles are available at depth 1.
        use crate::game_state::chess_types::*;
        let sq = |row, col| Position::new(row, col).expect("square");
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(7, 0), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq(7, 7), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
        let game = GameState::from_board(board, Color::White);
        assert_eq!(perft_legal(&game, 1).castles, 2);
    }

    #[test]
    fn promotion_counts_once_per_square() {
        use crate::game_state::chess_types::*;
        let sq = |row, col| Position::new(row, col).expect("square");
        // Pawn a7 with a8 empty, white king e1, black king h5.
        let board = Board::empty()
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White).moved())
            .with_piece(sq(1, 0), Piece::new(PieceKind::Pawn, Color::White).moved())
            .with_piece(sq(3, 7), Piece::new(PieceKind::King, Color::Black).moved());
        let game = GameState::from_board(board, Color::White);
        let counts = perft_legal(&game, 1);
        // Five king steps plus a8=Q.
        assert_eq!(counts.nodes, 6);
        assert_eq!(counts.promotions, 1);
    }
}
