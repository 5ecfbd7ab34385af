//! Crate root module declarations for the chess core.
//!
//! Exposes the rules model (game state, move generation, check detection),
//! the evaluator and minimax search, the opening book and the notation
//! helpers. `api` collects the functional entry points a host calls.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_summary;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod king_safety;
    pub mod minimax;
    pub mod pawn_structure;
}

pub mod tables {
    pub mod opening_book;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_notation;
    pub mod render_game_state;
}

pub mod api;
pub mod chess_errors;
