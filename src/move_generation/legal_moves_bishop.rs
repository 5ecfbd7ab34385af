use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_offsets::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Position,
    bishop: Piece,
    out: &mut Vec<Position>,
) {
    push_ray_moves(&game_state.board, from, bishop.color, &BISHOP_DIRECTIONS, out);
}
