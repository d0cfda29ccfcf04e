//! Single-ply move value.
//!
//! A `Move` is built against a board snapshot before it is applied and never
//! changes afterwards. The moved and captured pieces are read from the board
//! at construction time so that `undo_move` can restore both squares without
//! consulting anything else.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Piece,
    promotion: Option<PieceKind>,
    is_castle: bool,
    is_en_passant: bool,
}

impl Move {
    /// Plain move or capture between two validated squares.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        Move {
            start,
            end,
            piece_moved: piece_on(board, start),
            piece_captured: piece_on(board, end),
            promotion: None,
            is_castle: false,
            is_en_passant: false,
        }
    }

    /// Builds a move from raw `(row, col)` pairs such as two UI clicks.
    pub fn from_coordinates(
        start: (i8, i8),
        end: (i8, i8),
        board: &Board,
    ) -> Result<Self, ChessErrors> {
        let start = Square::new(start.0, start.1)?;
        let end = Square::new(end.0, end.1)?;
        Ok(Move::new(start, end, board))
    }

    /// Pawn move onto the last rank, replaced by `promotion` on arrival.
    pub fn with_promotion(start: Square, end: Square, board: &Board, promotion: PieceKind) -> Self {
        Move {
            promotion: Some(promotion),
            ..Move::new(start, end, board)
        }
    }

    /// King move of a castle; the rook's hop is implied by `end`.
    pub fn castle(start: Square, end: Square, board: &Board) -> Self {
        Move {
            is_castle: true,
            ..Move::new(start, end, board)
        }
    }

    /// En-passant capture. The captured pawn stands beside `start`, on the
    /// same row, in the column of `end`.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        let victim = Square::from_row_col(start.row(), end.col());
        Move {
            piece_captured: piece_on(board, victim),
            is_en_passant: true,
            ..Move::new(start, end, board)
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Piece {
        self.piece_captured
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.piece_captured.is_empty()
    }

    /// Square the captured piece is removed from. Differs from `end` only
    /// for en passant.
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::from_row_col(self.start.row(), self.end.col())
        } else {
            self.end
        }
    }

    /// Piece standing on `end` once the move is made.
    pub fn piece_placed(&self) -> Piece {
        match (self.promotion, self.piece_moved.color()) {
            (Some(kind), Some(color)) => Piece::new(color, kind),
            _ => self.piece_moved,
        }
    }

    /// Start and end square in coordinate notation, e.g. `e2e4`.
    pub fn to_notation(&self) -> String {
        format!("{}{}", self.start, self.end)
    }

    /// Coordinate notation with a lowercase promotion suffix, e.g. `e7e8q`.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = self.to_notation();
        if let Some(kind) = self.promotion {
            out.push(kind.to_char());
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_long_algebraic())
    }
}

#[inline]
fn piece_on(board: &Board, square: Square) -> Piece {
    board[square.row() as usize][square.col() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn notation_of_king_pawn_opening() {
        let game = GameState::new_game();
        let mv = Move::from_coordinates((6, 4), (4, 4), game.board()).expect("squares are on board");
        assert_eq!(mv.to_notation(), "e2e4");
        assert_eq!(mv.piece_moved(), Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(mv.piece_captured(), Piece::Empty);
    }

    #[test]
    fn construction_rejects_off_board_squares() {
        let game = GameState::new_game();
        assert_eq!(
            Move::from_coordinates((6, 4), (8, 4), game.board()),
            Err(ChessErrors::InvalidSquare((8, 4)))
        );
        assert_eq!(
            Move::from_coordinates((-1, 0), (0, 0), game.board()),
            Err(ChessErrors::InvalidSquare((-1, 0)))
        );
    }

    #[test]
    fn equal_moves_from_same_board_compare_equal() {
        let game = GameState::new_game();
        let a = Move::from_coordinates((7, 6), (5, 5), game.board()).expect("valid");
        let b = Move::new(Square::from_row_col(7, 6), Square::from_row_col(5, 5), game.board());
        assert_eq!(a, b);
        assert_ne!(
            a,
            Move::new(Square::from_row_col(7, 6), Square::from_row_col(5, 7), game.board())
        );
    }

    #[test]
    fn promotion_suffix_appears_in_long_algebraic() {
        let game = GameState::from_fen("8/4P3/8/8/8/k7/8/K7 w - - 0 1").expect("valid FEN");
        let mv = Move::with_promotion(
            Square::from_row_col(1, 4),
            Square::from_row_col(0, 4),
            game.board(),
            PieceKind::Knight,
        );
        assert_eq!(mv.to_notation(), "e7e8");
        assert_eq!(mv.to_long_algebraic(), "e7e8n");
        assert_eq!(mv.to_string(), "e7e8n");
        assert_eq!(mv.piece_placed(), Piece::new(Color::White, PieceKind::Knight));
    }

    #[test]
    fn en_passant_captures_pawn_beside_start() {
        let game =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("valid FEN");
        let mv = Move::en_passant(
            Square::from_row_col(3, 4),
            Square::from_row_col(2, 3),
            game.board(),
        );
        assert_eq!(mv.piece_captured(), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(mv.capture_square(), Square::from_row_col(3, 3));
        assert!(mv.is_capture());
    }
}
