//! Canonical chess-rule constants.
//!
//! Static rule tables shared by move generation and attack detection: the
//! starting position, movement offsets for each piece kind and the home
//! squares that govern castling rights.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Knight jumps as `(d_row, d_col)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as `(d_row, d_col)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal slide directions: up, left, down, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Diagonal slide directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonals first, then diagonals.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Column of both kings in the initial position.
pub const KING_HOME_COL: u8 = 4;

/// Home square of `color`'s king.
#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::from_row_col(color.back_row(), KING_HOME_COL)
}

/// Home square of the rook castling on `side`.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    Square::from_row_col(color.back_row(), side.rook_from_col())
}

/// Rights lost when a piece leaves or arrives on `square`.
///
/// Covers the king and rook home squares; any other square yields 0.
pub const fn rights_touched_by(square: Square) -> CastlingRights {
    match (square.row(), square.col()) {
        (7, 4) => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        (7, 7) => CASTLE_WHITE_KINGSIDE,
        (7, 0) => CASTLE_WHITE_QUEENSIDE,
        (0, 4) => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        (0, 7) => CASTLE_BLACK_KINGSIDE,
        (0, 0) => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}
