//! Core value types shared by every subsystem: colors, piece kinds, pieces and
//! board coordinates.
//!
//! Everything here is `Copy` so boards and game states can be duplicated
//! freely when the search branches.

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::{CapturedPieces, GameState, GameStatus};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White moves towards row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }

    /// +1 for White, -1 for Black. Scores are White-positive.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece kind (color and history are stored on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used by the simplified notation. Pawns have none.
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board together with the one bit of history the rules need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// An unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// Board coordinate. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Builds a position, returning `None` outside the 8x8 board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Shifts by a signed `(d_row, d_col)` delta, staying on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Manhattan distance between two squares.
    #[inline]
    pub fn manhattan(self, other: Position) -> i32 {
        (self.row as i32 - other.row as i32).abs() + (self.col as i32 - other.col as i32).abs()
    }

    /// Iterates all 64 squares in row-major order starting from a8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let a8 = Position::new(0, 0).expect("a8 is on the board");
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Position::new(1, 1));
        assert_eq!(Position::new(8, 0), None);
    }

    #[test]
    fn pawn_direction_and_ranks_follow_row_layout() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::White.back_rank(), 7);
        assert_eq!(Color::White.promotion_rank(), 0);
        assert_eq!(Color::Black.promotion_rank(), 7);
    }

    #[test]
    fn all_squares_are_enumerated_once() {
        assert_eq!(Position::all().count(), 64);
        assert_eq!(Position::all().next(), Position::new(0, 0));
    }
}
