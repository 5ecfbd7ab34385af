//! Immutable game state value.
//!
//! `GameState` is the central model for the engine. It stores the board, the
//! side to move, history and clocks, plus the status flags computed when the
//! state was produced. States are never mutated after construction; the move
//! executor always returns a new value.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Position};
use crate::move_generation::legal_move_checks::{has_any_legal_move, is_in_check};
use crate::moves::chess_move::Move;

/// Pieces removed from the board, grouped by the color of the captured piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// Exactly one of these describes any position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub move_history: Vec<Move>,
    pub captured_pieces: CapturedPieces,

    // Status of the side to move, computed on construction.
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,

    pub half_move_clock: u32,
    pub full_move_number: u32,
    pub en_passant_target: Option<Position>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            current_player: Color::White,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            check: false,
            checkmate: false,
            stalemate: false,
            half_move_clock: 0,
            full_move_number: 1,
            en_passant_target: None,
        }
    }

    /// Position set up from an explicit board with an empty history. The
    /// status flags are computed for `side_to_move`.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut state = Self {
            board,
            current_player: side_to_move,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            check: false,
            checkmate: false,
            stalemate: false,
            half_move_clock: 0,
            full_move_number: 1,
            en_passant_target: None,
        };
        state.refresh_status();
        state
    }

    /// Recomputes `check`, `checkmate` and `stalemate` for the side to move.
    pub(crate) fn refresh_status(&mut self) {
        self.check = is_in_check(self, self.current_player);
        let can_move = has_any_legal_move(self);
        self.checkmate = self.check && !can_move;
        self.stalemate = !self.check && !can_move;
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else if self.check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// The side that delivered mate, if any.
    pub fn winner(&self) -> Option<Color> {
        self.checkmate.then(|| self.current_player.opposite())
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }
}
