use crate::game_state::chess_types::{Board, Color, Position};

/// Walks each ray from `from` until the board edge or the first occupant.
/// Enemy occupants are included, own pieces are not.
pub fn push_ray_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.get(next) {
                None => out.push(next),
                Some(piece) => {
                    if piece.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Single-step jumps (knight, king) onto empty or enemy squares.
pub fn push_step_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(to),
        }
    }
}
