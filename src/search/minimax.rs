//! Depth-limited minimax search, with and without alpha-beta pruning.
//!
//! Scores are White-positive: White maximizes, Black minimizes. Both searches
//! stop at depth zero or at a finished game and return the static score there.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Window bound wider than any reachable score.
pub const SCORE_INFINITY: i32 = i32::MAX;

/// Plain minimax to `depth` plies.
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    depth: u8,
    generator: &G,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || game_state.is_game_over() {
        return scorer.score(game_state);
    }

    let children = generator.generate_legal_moves(game_state);
    let maximizing = game_state.current_player == Color::White;
    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for child in &children {
        let score = minimax(&child.game_after_move, depth - 1, generator, scorer, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax with alpha-beta cutoffs. Called with the full window it returns
/// the same score as [`minimax`] at the same depth.
#[allow(clippy::too_many_arguments)]
pub fn minimax_alpha_beta<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    generator: &G,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || game_state.is_game_over() {
        return scorer.score(game_state);
    }

    let children = generator.generate_legal_moves(game_state);

    if game_state.current_player == Color::White {
        let mut best = -SCORE_INFINITY;
        for child in &children {
            let score = minimax_alpha_beta(
                &child.game_after_move,
                depth - 1,
                alpha,
                beta,
                generator,
                scorer,
                nodes,
            );
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for child in &children {
            let score = minimax_alpha_beta(
                &child.game_after_move,
                depth - 1,
                alpha,
                beta,
                generator,
                scorer,
                nodes,
            );
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Runs the selected search over the full window.
pub fn search_score<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    depth: u8,
    use_alpha_beta: bool,
    generator: &G,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    if use_alpha_beta {
        minimax_alpha_beta(
            game_state,
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            generator,
            scorer,
            nodes,
        )
    } else {
        minimax(game_state, depth, generator, scorer, nodes)
    }
}
