//! In-place make/unmake primitives.
//!
//! `apply_move` and `undo_move` are exact inverses. Neither validates
//! legality; callers hand them moves produced by the generators for the
//! current position. Metadata that a move overwrites (castling rights,
//! en-passant target, halfmove clock) is snapshotted on the move log so that
//! undo never has to recompute it.

use crate::game_state::chess_rules::rights_touched_by;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub(crate) fn apply_move(game_state: &mut GameState, mv: Move) {
    let mover = game_state.side_to_move;
    let start = mv.start();
    let end = mv.end();

    debug_assert_eq!(
        game_state.piece_at(start),
        mv.piece_moved(),
        "move {mv} does not match the board"
    );

    game_state.move_log.push(UndoState {
        mv,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
    });

    game_state.set_piece(start, Piece::Empty);
    if mv.is_en_passant() {
        game_state.set_piece(mv.capture_square(), Piece::Empty);
    }
    game_state.set_piece(end, mv.piece_placed());

    if mv.is_castle() {
        let side = CastleSide::from_king_destination(end.col());
        let row = start.row();
        move_rook(
            game_state,
            Square::from_row_col(row, side.rook_from_col()),
            Square::from_row_col(row, side.rook_to_col()),
        );
    }

    let moved_kind = mv.piece_moved().kind();
    if moved_kind == Some(PieceKind::King) {
        game_state.king_squares[mover.index()] = end;
    }

    // Leaving a home square or landing on one (capturing the rook) revokes.
    game_state.castling_rights &= !(rights_touched_by(start) | rights_touched_by(end));

    game_state.en_passant_square = if moved_kind == Some(PieceKind::Pawn)
        && start.row().abs_diff(end.row()) == 2
    {
        Some(Square::from_row_col((start.row() + end.row()) / 2, start.col()))
    } else {
        None
    };

    if moved_kind == Some(PieceKind::Pawn) || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
}

/// Pops and reverts the last move. Returns `None` when the log is empty.
pub(crate) fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let entry = game_state.move_log.pop()?;
    let mv = entry.mv;
    let mover = game_state.side_to_move.opposite();
    let start = mv.start();
    let end = mv.end();

    if mv.is_castle() {
        let side = CastleSide::from_king_destination(end.col());
        let row = start.row();
        move_rook(
            game_state,
            Square::from_row_col(row, side.rook_to_col()),
            Square::from_row_col(row, side.rook_from_col()),
        );
    }

    game_state.set_piece(end, Piece::Empty);
    game_state.set_piece(mv.capture_square(), mv.piece_captured());
    game_state.set_piece(start, mv.piece_moved());

    if mv.piece_moved().kind() == Some(PieceKind::King) {
        game_state.king_squares[mover.index()] = start;
    }

    game_state.castling_rights = entry.prev_castling_rights;
    game_state.en_passant_square = entry.prev_en_passant_square;
    game_state.halfmove_clock = entry.prev_halfmove_clock;
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }

    game_state.side_to_move = mover;

    Some(mv)
}

fn move_rook(game_state: &mut GameState, from: Square, to: Square) {
    let rook = game_state.piece_at(from);
    game_state.set_piece(from, Piece::Empty);
    game_state.set_piece(to, rook);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::from_row_col(row, col)
    }

    #[test]
    fn double_push_sets_en_passant_target_and_undo_clears_it() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let mv = Move::new(sq(6, 4), sq(4, 4), game.board());

        apply_move(&mut game, mv);
        assert_eq!(game.en_passant_square(), Some(sq(5, 4)));
        assert_eq!(game.piece_at(sq(6, 4)), Piece::Empty);
        assert_eq!(game.piece_at(sq(4, 4)), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(game.side_to_move(), Color::Black);

        assert_eq!(undo_move(&mut game), Some(mv));
        assert_eq!(game, before);
    }

    #[test]
    fn castle_moves_rook_and_undo_restores_it() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid FEN");
        let before = game.clone();
        let mv = Move::castle(sq(7, 4), sq(7, 2), game.board());

        apply_move(&mut game, mv);
        assert_eq!(game.piece_at(sq(7, 2)), Piece::new(Color::White, PieceKind::King));
        assert_eq!(game.piece_at(sq(7, 3)), Piece::new(Color::White, PieceKind::Rook));
        assert_eq!(game.piece_at(sq(7, 0)), Piece::Empty);
        assert_eq!(game.king_square(Color::White), sq(7, 2));
        assert_eq!(
            game.castling_rights(),
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );

        undo_move(&mut game);
        assert_eq!(game, before);
    }

    #[test]
    fn capturing_a_home_rook_revokes_its_right() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid FEN");
        let mv = Move::new(sq(7, 7), sq(0, 7), game.board());

        apply_move(&mut game, mv);
        assert_eq!(game.castling_rights(), CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_QUEENSIDE);
    }

    #[test]
    fn promotion_places_chosen_piece_and_undo_restores_pawn() {
        let mut game = GameState::from_fen("3r3k/4P3/8/8/8/8/8/K7 w - - 0 1").expect("valid FEN");
        let before = game.clone();
        let mv = Move::with_promotion(sq(1, 4), sq(0, 3), game.board(), PieceKind::Rook);

        apply_move(&mut game, mv);
        assert_eq!(game.piece_at(sq(0, 3)), Piece::new(Color::White, PieceKind::Rook));
        assert_eq!(game.piece_at(sq(1, 4)), Piece::Empty);

        undo_move(&mut game);
        assert_eq!(game.piece_at(sq(0, 3)), Piece::new(Color::Black, PieceKind::Rook));
        assert_eq!(game, before);
    }

    #[test]
    fn undo_on_fresh_game_returns_none() {
        let mut game = GameState::new_game();
        assert_eq!(undo_move(&mut game), None);
        assert_eq!(game, GameState::new_game());
    }
}
