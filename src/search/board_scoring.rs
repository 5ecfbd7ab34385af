//! Pluggable board evaluation interfaces and the classic hand-tuned scorer.
//!
//! Search remains modular by delegating static position scoring to the
//! `BoardScorer` trait. Scores are centipawns from White's point of view.

use crate::game_state::chess_rules::{piece_value, CHECKMATE_SCORE, ENDGAME_MATERIAL_THRESHOLD};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_move_count;
use crate::search::king_safety::king_safety_white_minus_black;
use crate::search::pawn_structure::pawn_structure_white_minus_black;
use crate::tables::piece_square_tables::piece_square_value;

const MOBILITY_WEIGHT: i32 = 5;

pub trait BoardScorer: Send + Sync {
    /// Score in centipawns, positive when White is better.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Evaluates `game_state` with the classic scorer.
pub fn evaluate(game_state: &GameState) -> i32 {
    ClassicScorer.score(game_state)
}

/// Score of a finished game, or `None` while play continues.
#[inline]
pub fn terminal_score(game_state: &GameState) -> Option<i32> {
    if game_state.checkmate {
        // The side to move is mated.
        Some(-game_state.current_player.sign() * CHECKMATE_SCORE)
    } else if game_state.stalemate {
        Some(0)
    } else {
        None
    }
}

/// Material only, with terminal positions scored as usual.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub fn material_white_minus_black(game_state: &GameState) -> i32 {
        game_state
            .board
            .pieces()
            .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        terminal_score(game_state).unwrap_or_else(|| Self::material_white_minus_black(game_state))
    }
}

/// The individual terms of the classic evaluation, each White minus Black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub material: i32,
    pub positional: i32,
    pub pawn_structure: i32,
    pub mobility: i32,
    pub king_safety: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.material + self.positional + self.pawn_structure + self.mobility + self.king_safety
    }
}

/// Material, piece-square tables, pawn structure, mobility and king safety,
/// summed without further weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicScorer;

impl ClassicScorer {
    pub fn breakdown(game_state: &GameState) -> ScoreBreakdown {
        let endgame = is_endgame(&game_state.board);
        ScoreBreakdown {
            material: MaterialScorer::material_white_minus_black(game_state),
            positional: positional_white_minus_black(&game_state.board, endgame),
            pawn_structure: pawn_structure_white_minus_black(game_state),
            mobility: mobility_white_minus_black(game_state),
            king_safety: king_safety_white_minus_black(game_state),
        }
    }
}

impl BoardScorer for ClassicScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        terminal_score(game_state).unwrap_or_else(|| Self::breakdown(game_state).total())
    }
}

/// Endgame once both sides together keep at most 1400 centipawns of pieces
/// other than pawns and kings.
pub fn is_endgame(board: &Board) -> bool {
    let non_pawn_material: i32 = board
        .pieces()
        .filter(|(_, piece)| !matches!(piece.kind, PieceKind::Pawn | PieceKind::King))
        .map(|(_, piece)| piece_value(piece.kind))
        .sum();
    non_pawn_material <= ENDGAME_MATERIAL_THRESHOLD
}

fn positional_white_minus_black(board: &Board, endgame: bool) -> i32 {
    board
        .pieces()
        .map(|(pos, piece)| {
            piece.color.sign() * piece_square_value(piece.kind, piece.color, pos, endgame)
        })
        .sum()
}

fn mobility_white_minus_black(game_state: &GameState) -> i32 {
    let white = legal_move_count(game_state, Color::White) as i32;
    let black = legal_move_count(game_state, Color::Black) as i32;
    (white - black) * MOBILITY_WEIGHT
}
