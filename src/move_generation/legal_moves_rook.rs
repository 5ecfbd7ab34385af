//! Rook ray generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_offsets::ROOK_DIRECTIONS;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Position,
    rook: Piece,
    out: &mut Vec<Position>,
) {
    push_ray_moves(&game_state.board, from, rook.color, &ROOK_DIRECTIONS, out);
}
