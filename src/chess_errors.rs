//! Errors used throughout the chess core.
//!
//! Rule violations in normal play are not errors: the move generator simply
//! returns no destinations. `ChessError` covers the remaining fallible entry
//! points, namely misuse of the executor and malformed text input.

use thiserror::Error;

use crate::game_state::chess_types::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move's origin square holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Position),

    /// The piece on the origin square belongs to the side not to move.
    #[error("piece on {0} does not belong to the side to move")]
    NotSideToMove(Position),

    /// The position is checkmate or stalemate; start a new game instead.
    #[error("the game is over")]
    GameOver,

    /// A square name such as `e4` could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A difficulty name other than easy, medium or hard.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A row of an opening-book table is malformed.
    #[error("invalid opening book row {line}: {reason}")]
    InvalidBookRow { line: usize, reason: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
