//! Pawn-structure terms: doubled, isolated and passed pawns.

use crate::game_state::{chess_types::*, game_state::GameState};

const DOUBLED_PAWN_PENALTY: i32 = 20;
const ISOLATED_PAWN_PENALTY: i32 = 10;
const PASSED_PAWN_BASE: i32 = 20;
const PASSED_PAWN_PER_RANK: i32 = 10;

/// Pawn structure score, White minus Black.
pub fn pawn_structure_white_minus_black(game_state: &GameState) -> i32 {
    let white = PawnFiles::collect(&game_state.board, Color::White);
    let black = PawnFiles::collect(&game_state.board, Color::Black);
    side_score(&white, &black) - side_score(&black, &white)
}

/// Pawn rows per file for one color.
struct PawnFiles {
    color: Color,
    rows_by_file: [Vec<u8>; 8],
}

impl PawnFiles {
    fn collect(board: &Board, color: Color) -> Self {
        let mut rows_by_file: [Vec<u8>; 8] = Default::default();
        for (pos, piece) in board.pieces_of(color) {
            if piece.kind == PieceKind::Pawn {
                rows_by_file[pos.col as usize].push(pos.row);
            }
        }
        Self {
            color,
            rows_by_file,
        }
    }

    fn count(&self, file: i8) -> usize {
        if (0..8).contains(&file) {
            self.rows_by_file[file as usize].len()
        } else {
            0
        }
    }

    /// Whether an enemy pawn on this file stands ahead of `row` from the
    /// point of view of `mover`.
    fn any_ahead(&self, file: i8, row: u8, mover: Color) -> bool {
        if !(0..8).contains(&file) {
            return false;
        }
        self.rows_by_file[file as usize].iter().any(|&r| match mover {
            Color::White => r < row,
            Color::Black => r > row,
        })
    }
}

fn side_score(own: &PawnFiles, enemy: &PawnFiles) -> i32 {
    let mut score = 0i32;

    for file in 0..8i8 {
        let count = own.count(file) as i32;
        if count == 0 {
            continue;
        }
        if count > 1 {
            score -= DOUBLED_PAWN_PENALTY * (count - 1);
        }
        if own.count(file - 1) == 0 && own.count(file + 1) == 0 {
            score -= ISOLATED_PAWN_PENALTY * count;
        }

        for &row in &own.rows_by_file[file as usize] {
            let blocked = (file - 1..=file + 1).any(|f| enemy.any_ahead(f, row, own.color));
            if !blocked {
                score += PASSED_PAWN_BASE + PASSED_PAWN_PER_RANK * ranks_advanced(own.color, row);
            }
        }
    }

    score
}

/// Ranks travelled from the pawn's starting row.
fn ranks_advanced(color: Color, row: u8) -> i32 {
    match color {
        Color::White => (6 - row as i32).max(0),
        Color::Black => (row as i32 - 1).max(0),
    }
}
