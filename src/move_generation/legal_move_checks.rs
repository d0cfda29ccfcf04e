use crate::game_state::chess_rules::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::piece_on;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state.board(), game_state.king_square(color), color.opposite())
}

/// True if any piece of `attacker_color` could capture on `square`.
///
/// Pawn pushes never attack, so an empty square in front of a pawn is not
/// attacked by it.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    // A pawn attacks diagonally forward, so look one row behind the target.
    let pawn_row = -attacker_color.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(from) = square.offset(pawn_row, d_col) {
            if piece_on(board, from).is(attacker_color, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if any_piece_at_offsets(board, square, &KNIGHT_OFFSETS, attacker_color, PieceKind::Knight) {
        return true;
    }

    if any_piece_at_offsets(board, square, &KING_OFFSETS, attacker_color, PieceKind::King) {
        return true;
    }

    if any_slider_on_rays(board, square, &ROOK_DIRECTIONS, attacker_color, PieceKind::Rook) {
        return true;
    }

    any_slider_on_rays(board, square, &BISHOP_DIRECTIONS, attacker_color, PieceKind::Bishop)
}

fn any_piece_at_offsets(
    board: &Board,
    square: Square,
    offsets: &[(i8, i8)],
    color: Color,
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .is_some_and(|from| piece_on(board, from).is(color, kind))
    })
}

/// Walks each ray until the first occupied square; a hit is `kind` or a
/// queen of `color`.
fn any_slider_on_rays(
    board: &Board,
    square: Square,
    directions: &[(i8, i8)],
    color: Color,
    kind: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut current = square;
        while let Some(next) = current.offset(d_row, d_col) {
            let piece = piece_on(board, next);
            if !piece.is_empty() {
                if piece.is(color, kind) || piece.is(color, PieceKind::Queen) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::from_row_col(row, col)
    }

    #[test]
    fn pawn_attacks_diagonally_but_not_forward() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("valid FEN");
        // e2 pawn attacks d3 and f3, not e3.
        assert!(is_square_attacked(game.board(), sq(5, 3), Color::White));
        assert!(is_square_attacked(game.board(), sq(5, 5), Color::White));
        assert!(!is_square_attacked(game.board(), sq(5, 4), Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_intervening_pieces() {
        let game = GameState::from_fen("4r1k1/8/8/8/4N3/8/8/4K3 w - - 0 1").expect("valid FEN");
        assert!(!is_king_in_check(&game, Color::White));
        assert!(is_square_attacked(game.board(), sq(4, 4), Color::Black));
    }

    #[test]
    fn open_file_rook_gives_check() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        assert!(is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }

    #[test]
    fn knight_and_queen_attacks_reach_the_king() {
        let game = GameState::from_fen("6k1/8/8/8/8/3n4/8/q3K3 w - - 0 1").expect("valid FEN");
        assert!(is_king_in_check(&game, Color::White));
        // d3 knight covers f2; a1 queen is stopped by the e1 king.
        assert!(is_square_attacked(game.board(), sq(6, 5), Color::Black));
        assert!(!is_square_attacked(game.board(), sq(7, 6), Color::Black));
    }
}
