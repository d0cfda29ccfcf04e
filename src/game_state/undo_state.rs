use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Move-log entry: the move plus the metadata it overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
}
