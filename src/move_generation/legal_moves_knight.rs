use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::move_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Position,
    knight: Piece,
    out: &mut Vec<Position>,
) {
    push_step_moves(&game_state.board, from, knight.color, &KNIGHT_OFFSETS, out);
}
