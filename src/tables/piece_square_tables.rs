//! Piece-square tables in centipawns.
//!
//! Tables are laid out from White's point of view in board row order (first
//! row is rank 8). Black squares are mirrored vertically before lookup.

use crate::game_state::chess_types::{Color, PieceKind, Position};

type Table = [[i32; 8]; 8];

const PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

// Middlegame king: stay behind the pawn shield, preferably castled.
const KING_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

// Endgame king: walk to the center.
const KING_ENDGAME_TABLE: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

// Endgame pawns: advancement matters more than central structure.
const PAWN_ENDGAME_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [80, 80, 80, 80, 80, 80, 80, 80],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [30, 30, 30, 30, 30, 30, 30, 30],
    [20, 20, 20, 20, 20, 20, 20, 20],
    [10, 10, 10, 10, 10, 10, 10, 10],
    [10, 10, 10, 10, 10, 10, 10, 10],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

fn table_for(kind: PieceKind, endgame: bool) -> &'static Table {
    match (kind, endgame) {
        (PieceKind::Pawn, false) => &PAWN_TABLE,
        (PieceKind::Pawn, true) => &PAWN_ENDGAME_TABLE,
        (PieceKind::Knight, _) => &KNIGHT_TABLE,
        (PieceKind::Bishop, _) => &BISHOP_TABLE,
        (PieceKind::Rook, _) => &ROOK_TABLE,
        (PieceKind::Queen, _) => &QUEEN_TABLE,
        (PieceKind::King, false) => &KING_TABLE,
        (PieceKind::King, true) => &KING_ENDGAME_TABLE,
    }
}

/// Positional bonus for a `color` piece of `kind` on `pos`, from that side's
/// own point of view (not signed for White/Black).
pub fn piece_square_value(kind: PieceKind, color: Color, pos: Position, endgame: bool) -> i32 {
    let row = match color {
        Color::White => pos.row,
        Color::Black => 7 - pos.row,
    };
    table_for(kind, endgame)[row as usize][pos.col as usize]
}

#[cfg(test)]
mod tests {
    use super::piece_square_value;
    use crate::game_state::chess_types::{Color, PieceKind, Position};

    #[test]
    fn tables_are_mirrored_for_black() {
        let e4 = Position::new(4, 4).expect("e4");
        let e5 = Position::new(3, 4).expect("e5");
        assert_eq!(
            piece_square_value(PieceKind::Pawn, Color::White, e4, false),
            piece_square_value(PieceKind::Pawn, Color::Black, e5, false)
        );
    }

    #[test]
    fn king_prefers_shelter_then_center() {
        let g1 = Position::new(7, 6).expect("g1");
        let e4 = Position::new(4, 4).expect("e4");
        assert!(
            piece_square_value(PieceKind::King, Color::White, g1, false)
                > piece_square_value(PieceKind::King, Color::White, e4, false)
        );
        assert!(
            piece_square_value(PieceKind::King, Color::White, e4, true)
                > piece_square_value(PieceKind::King, Color::White, g1, true)
        );
    }
}
