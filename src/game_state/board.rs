//! Fixed 8x8 mailbox board.
//!
//! The board is a plain `Copy` array; every transition works on a fresh copy so
//! positions reached during search never alias the position they came from.

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting layout with every piece unmoved.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = col as u8;
            board.squares[Color::Black.back_rank() as usize][col as usize] =
                Some(Piece::new(*kind, Color::Black));
            board.squares[1][col as usize] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col as usize] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[Color::White.back_rank() as usize][col as usize] =
                Some(Piece::new(*kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row as usize][pos.col as usize] = piece;
    }

    /// Builder-style placement, handy for setting up puzzles.
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Some(piece));
        self
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}
