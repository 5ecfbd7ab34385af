//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry and the evaluator's fixed piece values.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from file a to file h.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_START_COL: u8 = 4;

/// Castling geometry for one wing: rook start column, rook arrival column and
/// the direction the king travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleWing {
    pub rook_from_col: u8,
    pub rook_to_col: u8,
    pub king_step: i8,
}

pub const KINGSIDE: CastleWing = CastleWing {
    rook_from_col: 7,
    rook_to_col: 5,
    king_step: 1,
};

pub const QUEENSIDE: CastleWing = CastleWing {
    rook_from_col: 0,
    rook_to_col: 3,
    king_step: -1,
};

impl CastleWing {
    /// Wing selected by a king travelling from `from_col` to `to_col`.
    pub const fn for_king_move(from_col: u8, to_col: u8) -> Self {
        if to_col > from_col {
            KINGSIDE
        } else {
            QUEENSIDE
        }
    }
}

/// Material values in centipawns. The king value is a sentinel; kings are never traded.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Score of a checkmated position, before applying the sign of the winner.
pub const CHECKMATE_SCORE: i32 = 10000;

/// Combined non-pawn, non-king material (both sides) at or below which the
/// endgame piece-square tables apply.
pub const ENDGAME_MATERIAL_THRESHOLD: i32 = 1400;
