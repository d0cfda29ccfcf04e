use crate::game_state::chess_rules::{king_home, rook_home, KING_OFFSETS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{piece_on, push_step_moves};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_step_moves(
        game_state.board(),
        from,
        game_state.side_to_move(),
        &KING_OFFSETS,
        out,
    );
    generate_castling_moves(game_state, from, out);
}

/// Kingside first, then queenside.
fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let board = game_state.board();
    let side = game_state.side_to_move();
    let enemy = side.opposite();

    if king_from != king_home(side) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    for castle_side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if game_state.castling_rights() & castle_side.right(side) == 0 {
            continue;
        }
        let rook_from = rook_home(side, castle_side);
        if !piece_on(board, rook_from).is(side, PieceKind::Rook) {
            continue;
        }

        let row = king_from.row();
        let (low, high) = if rook_from.col() < king_from.col() {
            (rook_from.col() + 1, king_from.col())
        } else {
            (king_from.col() + 1, rook_from.col())
        };
        let path_is_empty =
            (low..high).all(|col| piece_on(board, Square::from_row_col(row, col)).is_empty());
        if !path_is_empty {
            continue;
        }

        let transit = Square::from_row_col(row, castle_side.rook_to_col());
        let destination = Square::from_row_col(row, castle_side.king_to_col());
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, destination, enemy)
        {
            continue;
        }

        out.push(Move::castle(king_from, destination, board));
    }
}
