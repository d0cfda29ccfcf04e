use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[inline]
pub fn piece_on(board: &Board, square: Square) -> Piece {
    board[square.row() as usize][square.col() as usize]
}

/// True when `square` is empty or holds a piece of the other side.
#[inline]
pub fn is_open_for(board: &Board, square: Square, side: Color) -> bool {
    !piece_on(board, square).is_color(side)
}

/// Single-step moves (knight jumps, king steps) onto empty or enemy squares.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    side: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if is_open_for(board, to, side) {
                out.push(Move::new(from, to, board));
            }
        }
    }
}

/// Sliding moves along each direction: stop at the edge, before a friendly
/// piece, or on an enemy piece (captured).
pub fn push_slide_moves(
    board: &Board,
    from: Square,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            let occupant = piece_on(board, to);
            if occupant.is_color(side) {
                break;
            }
            out.push(Move::new(from, to, board));
            if !occupant.is_empty() {
                break;
            }
            current = to;
        }
    }
}
