//! Engine abstraction so different move-choosing strategies can sit behind a
//! single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Where the chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Random,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Move,
    /// Noisy White-positive root score for searched moves, `None` otherwise.
    pub score: Option<i32>,
    /// Positions visited by the search.
    pub nodes: u64,
    pub source: MoveSource,
}

pub trait Engine {
    /// Returns `None` only when the side to move has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> Option<EngineOutput>;
}
