use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::piece_on;
use crate::moves::chess_move::Move;

/// Single push, double push, then captures toward lower and higher columns.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let board = game_state.board();
    let side = game_state.side_to_move();
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if piece_on(board, one_step).is_empty() {
            push_pawn_move(board, side, from, one_step, out);

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if piece_on(board, two_step).is_empty() {
                        out.push(Move::new(from, two_step, board));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        let occupant = piece_on(board, target);
        if occupant.is_color(side.opposite()) {
            push_pawn_move(board, side, from, target, out);
        } else if occupant.is_empty()
            && game_state.en_passant_square() == Some(target)
            && piece_on(board, Square::from_row_col(from.row(), target.col()))
                .is(side.opposite(), PieceKind::Pawn)
        {
            out.push(Move::en_passant(from, target, board));
        }
    }
}

fn push_pawn_move(board: &Board, side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.row() == side.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(Move::with_promotion(from, to, board, kind));
        }
    } else {
        out.push(Move::new(from, to, board));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notation(moves: &[Move]) -> Vec<String> {
        moves.iter().map(|mv| mv.to_long_algebraic()).collect()
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&game, Square::from_row_col(6, 4), &mut out);
        assert_eq!(notation(&out), vec!["e2e3", "e2e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("valid FEN");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Square::from_row_col(6, 4), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let game = GameState::from_fen("4k3/3p4/2N5/8/8/8/8/4K3 b - - 0 1").expect("valid FEN");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Square::from_row_col(1, 3), &mut out);
        assert_eq!(notation(&out), vec!["d7d6", "d7d5", "d7c6"]);
    }

    #[test]
    fn capture_onto_last_rank_promotes() {
        let game = GameState::from_fen("3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Square::from_row_col(1, 4), &mut out);
        // e8 is occupied by the king, so only the capture on d8 remains.
        assert_eq!(notation(&out), vec!["e7d8q", "e7d8r", "e7d8b", "e7d8n"]);
        assert!(out.iter().all(|mv| mv.is_capture()));
    }

    #[test]
    fn en_passant_target_generates_capture() {
        let game =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("valid FEN");
        let mut out = Vec::new();
        generate_pawn_moves(&game, Square::from_row_col(3, 4), &mut out);
        assert_eq!(notation(&out), vec!["e5e6", "e5d6"]);
        assert!(out[1].is_en_passant());
    }
}
