//! Uniformly random legal playouts.
//!
//! Used for headless legality testing and by the console driver's `random`
//! command. Each ply picks uniformly among the legal moves; the playout stops
//! early at checkmate or stalemate.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Plays one random legal move. Returns `None` when no legal move exists.
pub fn play_random_move<R: Rng + ?Sized>(game_state: &mut GameState, rng: &mut R) -> Option<Move> {
    let moves = game_state.generate_legal_moves();
    let mv = *moves.choose(rng)?;
    game_state.apply_move(mv);
    Some(mv)
}

/// Plays up to `max_plies` random legal moves and returns them in order.
pub fn play_random_game<R: Rng + ?Sized>(
    game_state: &mut GameState,
    max_plies: usize,
    rng: &mut R,
) -> Vec<Move> {
    let mut played = Vec::with_capacity(max_plies);
    while played.len() < max_plies {
        match play_random_move(game_state, rng) {
            Some(mv) => played.push(mv),
            None => {
                trace!(plies = played.len(), "random playout reached a terminal position");
                break;
            }
        }
    }
    played
}
