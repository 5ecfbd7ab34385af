use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// A legal move together with the state it produces. `chess_move` is the
/// executor's completed record (captures, castling and promotion filled in).
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: Move,
    pub game_after_move: GameState,
}

/// Seam between tree walkers (search, perft) and move generation.
pub trait MoveGenerator: Send + Sync {
    /// Legal moves of the side to move, in generation order.
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
