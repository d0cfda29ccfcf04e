use crate::game_state::chess_rules::QUEEN_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_slide_moves(
        game_state.board(),
        from,
        game_state.side_to_move(),
        &QUEEN_DIRECTIONS,
        out,
    );
}
