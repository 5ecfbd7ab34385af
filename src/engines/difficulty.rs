//! Difficulty presets for the computer player.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                depth: 2,
                use_opening_book: false,
                random_move_chance: 0.3,
                evaluation_noise: 100,
                use_alpha_beta: false,
            },
            Difficulty::Medium => DifficultySettings {
                depth: 3,
                use_opening_book: true,
                random_move_chance: 0.1,
                evaluation_noise: 50,
                use_alpha_beta: true,
            },
            Difficulty::Hard => DifficultySettings {
                depth: 4,
                use_opening_book: true,
                random_move_chance: 0.0,
                evaluation_noise: 0,
                use_alpha_beta: true,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChessError::UnknownDifficulty(s.to_string()))
    }
}

/// Search parameters. Presets come from [`Difficulty::settings`]; hosts may
/// also build their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    /// Plies searched from the root, counting the root move.
    pub depth: u8,
    pub use_opening_book: bool,
    /// Probability in `[0, 1]` of playing a uniformly random legal move.
    pub random_move_chance: f64,
    /// Half-width in centipawns of the uniform noise added to root scores.
    pub evaluation_noise: i32,
    pub use_alpha_beta: bool,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Difficulty::default().settings()
    }
}

impl From<Difficulty> for DifficultySettings {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.settings()
    }
}
