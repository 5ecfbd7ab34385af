//! Difficulty-scaled minimax engine.
//!
//! Order of decisions for one move:
//! 1. the opening book, when the settings allow it;
//! 2. no legal move means no answer;
//! 3. with probability `random_move_chance` a uniformly random legal move;
//! 4. otherwise every root move is searched to `depth - 1` further plies, a
//!    uniform noise in `[-evaluation_noise, evaluation_noise]` is added, and
//!    the best score for the side to move wins. Ties keep the earlier move.

use std::borrow::Cow;

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::engines::difficulty::DifficultySettings;
use crate::engines::engine_trait::{Engine, EngineOutput, MoveSource};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, ClassicScorer};
use crate::search::minimax::search_score;
use crate::tables::opening_book::OpeningBook;
use crate::utils::move_notation::move_to_simplified;

pub struct MinimaxEngine<R, S = ClassicScorer> {
    settings: DifficultySettings,
    book: Cow<'static, OpeningBook>,
    move_generator: LegalMoveGenerator,
    scorer: S,
    rng: R,
}

impl<R: Rng> MinimaxEngine<R> {
    /// Engine with the classic scorer and the embedded opening book.
    pub fn new(settings: DifficultySettings, rng: R) -> Self {
        Self {
            settings,
            book: Cow::Borrowed(OpeningBook::shared()),
            move_generator: LegalMoveGenerator,
            scorer: ClassicScorer,
            rng,
        }
    }
}

impl<R: Rng, S: BoardScorer> MinimaxEngine<R, S> {
    pub fn with_scorer<T: BoardScorer>(self, scorer: T) -> MinimaxEngine<R, T> {
        MinimaxEngine {
            settings: self.settings,
            book: self.book,
            move_generator: self.move_generator,
            scorer,
            rng: self.rng,
        }
    }

    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = Cow::Owned(book);
        self
    }

    pub fn settings(&self) -> &DifficultySettings {
        &self.settings
    }

    fn random_move_chance(&self) -> f64 {
        let chance = self.settings.random_move_chance;
        if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn noise(&mut self) -> i32 {
        let spread = self.settings.evaluation_noise.abs();
        if spread == 0 {
            0
        } else {
            self.rng.random_range(-spread..=spread)
        }
    }

    pub fn search(&mut self, game_state: &GameState) -> Option<EngineOutput> {
        if self.settings.use_opening_book {
            if let Some(best_move) = self.book.lookup(game_state, &mut self.rng) {
                return Some(EngineOutput {
                    best_move,
                    score: None,
                    nodes: 0,
                    source: MoveSource::Book,
                });
            }
        }

        let root_moves = self.move_generator.generate_legal_moves(game_state);
        if root_moves.is_empty() {
            return None;
        }

        let chance = self.random_move_chance();
        if chance > 0.0 && self.rng.random_bool(chance) {
            let picked = root_moves.choose(&mut self.rng)?;
            debug!(mv = %move_to_simplified(&picked.chess_move), "random move");
            return Some(EngineOutput {
                best_move: picked.chess_move,
                score: None,
                nodes: 0,
                source: MoveSource::Random,
            });
        }

        let maximizing = game_state.current_player == Color::White;
        let child_depth = self.settings.depth.saturating_sub(1);
        let mut nodes = 0u64;
        let mut best: Option<(usize, i32)> = None;

        for (idx, root) in root_moves.iter().enumerate() {
            let score = search_score(
                &root.game_after_move,
                child_depth,
                self.settings.use_alpha_beta,
                &self.move_generator,
                &self.scorer,
                &mut nodes,
            )
            .saturating_add(self.noise());

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((idx, score));
            }
        }

        let (idx, score) = best?;
        let best_move = root_moves.get(idx)?.chess_move;
        debug!(
            mv = %move_to_simplified(&best_move),
            score,
            nodes,
            depth = self.settings.depth,
            "search finished"
        );

        Some(EngineOutput {
            best_move,
            score: Some(score),
            nodes,
            source: MoveSource::Search,
        })
    }
}

impl<R: Rng, S: BoardScorer> Engine for MinimaxEngine<R, S> {
    fn choose_move(&mut self, game_state: &GameState) -> Option<EngineOutput> {
        self.search(game_state)
    }
}
