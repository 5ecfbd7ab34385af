use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_offsets::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Position,
    queen: Piece,
    out: &mut Vec<Position>,
) {
    push_ray_moves(&game_state.board, from, queen.color, &QUEEN_DIRECTIONS, out);
}
