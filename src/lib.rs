//! Crate root module declarations for the chess position engine.
//!
//! This file exposes the board state, move representation, legal move
//! generation and the notation/utility helpers so binaries, tests, and
//! rendering front ends can import stable module paths.
//!
//! ```
//! use chess_engine::game_state::game_state::GameState;
//!
//! let mut game = GameState::new_game();
//! assert_eq!(game.generate_legal_moves().len(), 20);
//! game.apply_long_algebraic("e2e4").unwrap();
//! game.undo_move().unwrap();
//! assert_eq!(game, GameState::new_game());
//! ```

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
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
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_game;
    pub mod render_game_state;
    pub mod session_config;
}
