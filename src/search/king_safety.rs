//! King safety: pawn shield in front of a back-rank king, minus the pressure
//! of nearby enemy pieces (king tropism).

use crate::game_state::{chess_types::*, game_state::GameState};

const SHIELD_FRONT_BONUS: i32 = 20;
const SHIELD_DIAGONAL_BONUS: i32 = 10;
const SHIELD_MISSING_PENALTY: i32 = 10;
const TROPISM_REACH: i32 = 8;

/// King safety score, White minus Black.
pub fn king_safety_white_minus_black(game_state: &GameState) -> i32 {
    side_safety(&game_state.board, Color::White) - side_safety(&game_state.board, Color::Black)
}

fn side_safety(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_position(color) else {
        return 0;
    };
    pawn_shield(board, color, king) - king_tropism(board, color, king)
}

fn pawn_shield(board: &Board, color: Color, king: Position) -> i32 {
    if king.row != color.back_rank() {
        return 0;
    }

    let forward = color.forward();
    let shield = [
        (0i8, SHIELD_FRONT_BONUS),
        (-1, SHIELD_DIAGONAL_BONUS),
        (1, SHIELD_DIAGONAL_BONUS),
    ];

    shield
        .iter()
        .filter_map(|&(d_col, bonus)| king.offset(forward, d_col).map(|pos| (pos, bonus)))
        .map(|(pos, bonus)| match board.get(pos) {
            Some(piece) if piece.kind == PieceKind::Pawn && piece.color == color => bonus,
            _ => -SHIELD_MISSING_PENALTY,
        })
        .sum()
}

fn tropism_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Queen => 5,
        PieceKind::Rook => 3,
        PieceKind::Bishop | PieceKind::Knight => 2,
        PieceKind::Pawn => 1,
        PieceKind::King => 0,
    }
}

fn king_tropism(board: &Board, color: Color, king: Position) -> i32 {
    board
        .pieces_of(color.opposite())
        .map(|(pos, piece)| {
            tropism_weight(piece.kind) * (TROPISM_REACH - pos.manhattan(king))
        })
        .sum()
}
