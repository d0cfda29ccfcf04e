//! Move-path enumeration for validating the generator.
//!
//! Counts the leaves of the legal move tree to a fixed depth by making and
//! unmaking moves on a single state. `perft_detailed` also classifies leaf
//! moves the way published perft tables do.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count only.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        apply_move(game_state, mv);
        nodes += perft(game_state, depth - 1);
        undo_move(game_state);
    }
    nodes
}

/// Leaf count per root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generate_legal_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        apply_move(game_state, mv);
        out.push((mv, perft(game_state, depth - 1)));
        undo_move(game_state);
    }
    out
}

pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        apply_move(game_state, mv);
        if depth == 1 {
            total.merge(classify_leaf(game_state, mv));
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        undo_move(game_state);
    }
    total
}

/// Expects `mv` to have just been applied to `game_state`.
fn classify_leaf(game_state: &mut GameState, mv: Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if mv.is_capture() {
        counts.captures = 1;
    }
    if mv.is_en_passant() {
        counts.en_passant = 1;
    }
    if mv.is_castle() {
        counts.castles = 1;
    }
    if mv.promotion().is_some() {
        counts.promotions = 1;
    }

    let defender: Color = game_state.side_to_move();
    if is_king_in_check(game_state, defender) {
        counts.checks = 1;
        if generate_legal_moves(game_state).is_empty() {
            counts.checkmates = 1;
        }
    }

    counts
}
