//! Result record of a finished game, seen from the human player's side.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameOutcome,
    /// Half-moves played by both sides.
    pub move_count: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GameSummary {
    /// Summary for `player`, or `None` while the game is still going.
    pub fn from_game(
        game_state: &GameState,
        player: Color,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Option<Self> {
        if !game_state.is_game_over() {
            return None;
        }

        let result = match game_state.winner() {
            Some(winner) if winner == player => GameOutcome::Win,
            Some(_) => GameOutcome::Loss,
            None => GameOutcome::Draw,
        };

        Some(Self {
            result,
            move_count: game_state.move_history.len(),
            started_at,
            finished_at,
        })
    }

    /// Wall-clock length of the game, zero if the timestamps are reversed.
    pub fn duration(&self) -> TimeDelta {
        (self.finished_at - self.started_at).max(TimeDelta::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::moves::chess_move::Move;

    fn fools_mate() -> GameState {
        let mut game = GameState::new_game();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            let from: Position = from.parse().expect("square");
            let piece = game.piece_at(from).expect("piece to move");
            game = apply_move(&game, Move::new(from, to.parse().expect("square"), piece))
                .expect("move applies");
        }
        game
    }

    #[test]
    fn outcome_depends_on_the_player_color() {
        let game = fools_mate();
        let start = Utc::now();
        let end = start + TimeDelta::seconds(95);

        let white = GameSummary::from_game(&game, Color::White, start, end).expect("game over");
        assert_eq!(white.result, GameOutcome::Loss);
        assert_eq!(white.move_count, 4);
        assert_eq!(white.duration(), TimeDelta::seconds(95));

        let black = GameSummary::from_game(&game, Color::Black, start, end).expect("game over");
        assert_eq!(black.result, GameOutcome::Win);
    }

    #[test]
    fn unfinished_games_have_no_summary() {
        let now = Utc::now();
        assert_eq!(
            GameSummary::from_game(&GameState::new_game(), Color::White, now, now),
            None
        );
    }

    #[test]
    fn stalemate_is_a_draw() {
        let board = Board::empty()
            .with_piece("a8".parse().expect("square"), Piece::new(PieceKind::King, Color::Black))
            .with_piece("b6".parse().expect("square"), Piece::new(PieceKind::Queen, Color::White))
            .with_piece("c1".parse().expect("square"), Piece::new(PieceKind::King, Color::White));
        let game = GameState::from_board(board, Color::Black);
        let now = Utc::now();
        let summary = GameSummary::from_game(&game, Color::White, now, now).expect("game over");
        assert_eq!(summary.result, GameOutcome::Draw);

        let json = serde_json::to_string(&summary).expect("summary serializes");
        assert!(json.contains("\"result\":\"draw\""));
    }
}
