//! Functional entry points for a host application.
//!
//! Every call takes a `GameState` by reference and returns new values; nothing
//! here holds state between calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::engines::difficulty::{Difficulty, DifficultySettings};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::game_state::chess_types::Position;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator;
use crate::moves::chess_move::Move;

pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Legal destinations of the piece on `pos`; empty when nothing of the side
/// to move stands there.
pub fn legal_moves(game_state: &GameState, pos: Position) -> Vec<Position> {
    legal_move_generator::legal_moves(game_state, pos)
}

pub fn apply(game_state: &GameState, mv: Move) -> ChessResult<GameState> {
    apply_move(game_state, mv)
}

/// Computer move at `difficulty`, randomized from the operating system.
pub fn best_move(game_state: &GameState, difficulty: Difficulty) -> Option<Move> {
    best_move_with_rng(game_state, difficulty.settings(), &mut StdRng::from_os_rng())
}

/// Computer move with explicit settings and random source.
pub fn best_move_with_rng<R: Rng + ?Sized>(
    game_state: &GameState,
    settings: DifficultySettings,
    rng: &mut R,
) -> Option<Move> {
    MinimaxEngine::new(settings, rng)
        .search(game_state)
        .map(|out| out.best_move)
}

/// Plays the computer's move. A finished game is returned unchanged.
pub fn computer_move(game_state: &GameState, difficulty: Difficulty) -> GameState {
    best_move(game_state, difficulty)
        .and_then(|mv| apply_move(game_state, mv).ok())
        .unwrap_or_else(|| game_state.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn host_flow_plays_a_few_moves() {
        let mut game = new_game();
        let e2: Position = "e2".parse().expect("square");
        let e4: Position = "e4".parse().expect("square");
        assert!(legal_moves(&game, e2).contains(&e4));

        let pawn = game.piece_at(e2).expect("pawn on e2");
        game = apply(&game, Move::new(e2, e4, pawn)).expect("e4 applies");
        assert_eq!(game.current_player, Color::Black);

        game = computer_move(&game, Difficulty::Medium);
        assert_eq!(game.current_player, Color::White);
        assert_eq!(game.move_history.len(), 2);
    }

    #[test]
    fn seeded_best_move_is_reproducible() {
        let game = new_game();
        let settings = Difficulty::Easy.settings();
        let first = best_move_with_rng(&game, settings, &mut StdRng::seed_from_u64(17));
        let second = best_move_with_rng(&game, settings, &mut StdRng::seed_from_u64(17));
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn finished_game_has_no_computer_move() {
        let board = Board::empty()
            .with_piece(
                "a8".parse().expect("square"),
                Piece::new(PieceKind::King, Color::Black).moved(),
            )
            .with_piece(
                "b6".parse().expect("square"),
                Piece::new(PieceKind::Queen, Color::White).moved(),
            )
            .with_piece(
                "c1".parse().expect("square"),
                Piece::new(PieceKind::King, Color::White).moved(),
            );
        let game = GameState::from_board(board, Color::Black);
        assert_eq!(best_move(&game, Difficulty::Hard), None);
        assert_eq!(computer_move(&game, Difficulty::Hard), game);
    }
}
