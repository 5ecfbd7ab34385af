//! Move request / record type.
//!
//! A `Move` handed to the executor only needs `from`, `to`, `piece` and an
//! optional `promotion_piece`. The executor fills in the side-effect fields and
//! stores the completed record in the move history.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_promotion: bool,
    pub promotion_piece: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    /// A plain move request with no side effects recorded yet.
    pub const fn new(from: Position, to: Position, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured_piece: None,
            is_promotion: false,
            promotion_piece: None,
            is_castle: false,
            is_en_passant: false,
        }
    }

    /// Requests a specific promotion piece (queen is used otherwise).
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion_piece: Some(kind),
            ..self
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
