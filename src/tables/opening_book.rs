//! Opening book keyed by the game's move history.
//!
//! Rows come from a tab-separated table with a `sequence` column (moves played
//! so far, space separated, empty for the start position) and a `replies`
//! column (candidate answers). Both use the simplified move notation. Every row
//! is replayed from the start position when the table is loaded, so a loaded
//! book only holds lines that are legal. The replayed board is kept with each
//! entry; a game set up from an arbitrary board never matches the book even
//! when its history happens to share a key.

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::chess_move::Move;
use crate::utils::move_notation::{history_to_simplified, simplified_to_move};

const DEFAULT_BOOK_TSV: &str = include_str!("data/opening_book.tsv");

#[derive(Debug, Clone, PartialEq, Eq)]
struct BookEntry {
    board: Board,
    replies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningBook {
    by_history: HashMap<String, BookEntry>,
}

impl OpeningBook {
    /// The embedded book. Falls back to an empty book if the table is
    /// rejected.
    pub fn load_default() -> Self {
        match Self::from_tsv_str(DEFAULT_BOOK_TSV) {
            Ok(book) => book,
            Err(err) => {
                warn!(%err, "embedded opening book rejected");
                Self::default()
            }
        }
    }

    /// Process-wide copy of [`OpeningBook::load_default`], parsed once.
    pub fn shared() -> &'static OpeningBook {
        static BOOK: OnceLock<OpeningBook> = OnceLock::new();
        BOOK.get_or_init(Self::load_default)
    }

    pub fn from_tsv_str(tsv: &str) -> ChessResult<Self> {
        let mut rows = tsv
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

        let (header_line, header) = rows.next().ok_or_else(|| ChessError::InvalidBookRow {
            line: 1,
            reason: "table is empty".to_string(),
        })?;
        let columns: Vec<String> = header
            .split('\t')
            .map(|name| name.trim().to_ascii_lowercase())
            .collect();
        let column = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| ChessError::InvalidBookRow {
                    line: header_line,
                    reason: format!("missing '{name}' column"),
                })
        };
        let sequence_idx = column("sequence")?;
        let replies_idx = column("replies")?;

        let mut by_history: HashMap<String, BookEntry> = HashMap::new();
        for (line, row) in rows {
            let fields: Vec<&str> = row.split('\t').collect();
            let sequence = fields.get(sequence_idx).map_or("", |s| s.trim());
            let replies = fields.get(replies_idx).map_or("", |s| s.trim());

            if replies.is_empty() {
                return Err(ChessError::InvalidBookRow {
                    line,
                    reason: "no replies".to_string(),
                });
            }

            let position = replay_sequence(sequence, line)?;
            let entry = by_history
                .entry(history_to_simplified(&position))
                .or_insert_with(|| BookEntry {
                    board: position.board,
                    replies: Vec::new(),
                });
            for reply in replies.split_whitespace() {
                if simplified_to_move(&position, reply).is_none() {
                    return Err(ChessError::InvalidBookRow {
                        line,
                        reason: format!("reply '{reply}' is not a legal move"),
                    });
                }
                if !entry.replies.iter().any(|known| known == reply) {
                    entry.replies.push(reply.to_string());
                }
            }
        }

        trace!(positions = by_history.len(), "opening book loaded");
        Ok(Self { by_history })
    }

    pub fn len(&self) -> usize {
        self.by_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_history.is_empty()
    }

    /// Book replies for the history of `game_state`, if any.
    pub fn replies_for(&self, game_state: &GameState) -> Option<&[String]> {
        self.by_history
            .get(&history_to_simplified(game_state))
            .filter(|entry| entry.board == game_state.board)
            .map(|entry| entry.replies.as_slice())
    }

    /// Picks one book reply uniformly and turns it into a move for the side
    /// to move. `None` on a miss or when the reply does not resolve to exactly
    /// one legal move.
    pub fn lookup<R: Rng + ?Sized>(&self, game_state: &GameState, rng: &mut R) -> Option<Move> {
        let replies = self.replies_for(game_state)?;
        let reply = replies.choose(rng)?;

        match simplified_to_move(game_state, reply) {
            Some(mv) => {
                debug!(reply = %reply, "opening book hit");
                Some(mv)
            }
            None => {
                warn!(reply = %reply, "opening book reply does not resolve");
                None
            }
        }
    }
}

fn replay_sequence(sequence: &str, line: usize) -> ChessResult<GameState> {
    let mut game = GameState::new_game();
    for token in sequence.split_whitespace() {
        let mv = simplified_to_move(&game, token).ok_or_else(|| ChessError::InvalidBookRow {
            line,
            reason: format!("move '{token}' is not legal here"),
        })?;
        game = apply_move(&game, mv)?;
    }
    Ok(game)
}
