//! Full legal move generation pipeline.
//!
//! Scans the board row by row, dispatches every piece of the side to move to
//! its generator, then drops each candidate that leaves the mover's own king
//! attacked. Candidates are tested by making them on the live state and
//! unmaking them again, so the state is unchanged on return.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Moves that follow each piece's movement pattern, ignoring self-check.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    let mut pseudo = Vec::with_capacity(64);

    for from in Square::all() {
        let Piece::Occupied(color, kind) = game_state.piece_at(from) else {
            continue;
        };
        if color != side {
            continue;
        }

        match kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut pseudo),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut pseudo),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut pseudo),
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut pseudo),
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut pseudo),
            PieceKind::King => generate_king_moves(game_state, from, &mut pseudo),
        }
    }

    pseudo
}

pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let mover = game_state.side_to_move();
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        apply_move(game_state, mv);
        let exposes_king = is_king_in_check(game_state, mover);
        undo_move(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    legal
}
