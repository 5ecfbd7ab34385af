use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_core::engines::difficulty::Difficulty;
use chess_core::engines::engine_minimax::MinimaxEngine;
use chess_core::engines::engine_trait::Engine;
use chess_core::game_state::chess_types::Color;
use chess_core::game_state::game_state::{GameState, GameStatus};
use chess_core::game_state::game_summary::GameSummary;
use chess_core::move_generation::legal_move_apply::apply_move;
use chess_core::utils::move_notation::move_to_simplified;
use chess_core::utils::render_game_state::render_game_state;

/// Plays the engine against itself and prints the game.
#[derive(Debug, Parser)]
#[command(about, version)]
struct Cli {
    /// Difficulty of the White player (easy, medium, hard).
    #[arg(long, default_value_t = Difficulty::Medium)]
    white: Difficulty,

    /// Difficulty of the Black player (easy, medium, hard).
    #[arg(long, default_value_t = Difficulty::Medium)]
    black: Difficulty,

    /// Stop after this many half-moves if the game has not ended.
    #[arg(long, default_value_t = 120)]
    max_moves: usize,

    /// Seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let rng = |offset: u64| match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
        None => StdRng::from_os_rng(),
    };
    let mut white = MinimaxEngine::new(cli.white.settings(), rng(0));
    let mut black = MinimaxEngine::new(cli.black.settings(), rng(1));

    let started_at = Utc::now();
    let mut game = GameState::new_game();
    let mut line = Vec::new();

    while !game.is_game_over() && game.move_history.len() < cli.max_moves {
        let engine: &mut dyn Engine = match game.current_player {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(out) = engine.choose_move(&game) else {
            break;
        };
        game = apply_move(&game, out.best_move)?;
        if let Some(last) = game.move_history.last() {
            line.push(move_to_simplified(last));
        }
        info!(ply = game.move_history.len(), source = ?out.source, score = ?out.score, "move played");
    }

    for (idx, pair) in line.chunks(2).enumerate() {
        println!("{}. {}", idx + 1, pair.join(" "));
    }
    println!("{}", render_game_state(&game));

    match game.status() {
        GameStatus::Checkmate | GameStatus::Stalemate => {
            if let Some(summary) = GameSummary::from_game(&game, Color::White, started_at, Utc::now())
            {
                println!(
                    "{:?} after {} half-moves for White ({} ms)",
                    summary.result,
                    summary.move_count,
                    summary.duration().num_milliseconds()
                );
            }
        }
        status => println!("stopped after {} half-moves ({status:?})", game.move_history.len()),
    }

    Ok(())
}
