//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! positions. Row 0 is rank 8, so `e4` maps to row 4, column 4.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a board position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }
    let (Some(col), Some(row)) = (file_to_col(bytes[0] as char), rank_to_row(bytes[1] as char))
    else {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    };
    Ok(Position { row, col })
}

/// Convert a board position to algebraic notation (for example: "e4").
pub fn position_to_algebraic(pos: Position) -> String {
    format!("{}{}", col_to_file(pos.col), row_to_rank(pos.row))
}

#[inline]
pub fn file_to_col(file: char) -> Option<u8> {
    ('a'..='h').contains(&file).then(|| file as u8 - b'a')
}

#[inline]
pub fn rank_to_row(rank: char) -> Option<u8> {
    ('1'..='8').contains(&rank).then(|| b'8' - rank as u8)
}

#[inline]
pub fn col_to_file(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn row_to_rank(row: u8) -> char {
    char::from(b'8' - row)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_to_file(self.col), row_to_rank(self.row))
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_position(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::chess_types::Position;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_position("a8").expect("a8"), Position { row: 0, col: 0 });
        assert_eq!(algebraic_to_position("h1").expect("h1"), Position { row: 7, col: 7 });
        assert_eq!(position_to_algebraic(Position { row: 4, col: 4 }), "e4");
        assert_eq!(Position { row: 2, col: 3 }.to_string(), "d6");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_position("i1").is_err());
        assert!(algebraic_to_position("a9").is_err());
        assert!(algebraic_to_position("e").is_err());
        assert!("e44".parse::<Position>().is_err());
    }
}
