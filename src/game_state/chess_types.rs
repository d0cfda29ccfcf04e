//! Core vocabulary of the board: colours, piece kinds, piece cells and
//! squares.
//!
//! Squares use `(row, col)` coordinates. Row 0 is Black's back rank (rank 8)
//! and row 7 is White's back rank (rank 1); column 0 is the a-file.

use std::fmt;

use crate::chess_errors::ChessErrors;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the side's pawns start on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which the side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding the side's king and rooks in the initial position.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (colour is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    /// Lowercase letter used by FEN and coordinate notation.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Inverse of [`PieceKind::to_char`], accepting either case.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied(Color, PieceKind),
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece::Occupied(color, kind)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(color, _) => Some(color),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(_, kind) => Some(kind),
        }
    }

    /// True when the cell holds a piece of `color`.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True when the cell holds exactly this colour and kind.
    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self == Piece::Occupied(color, kind)
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_fen_char(self) -> Option<char> {
        match self {
            Piece::Empty => None,
            Piece::Occupied(Color::White, kind) => Some(kind.to_char().to_ascii_uppercase()),
            Piece::Occupied(Color::Black, kind) => Some(kind.to_char()),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_char(ch).map(|kind| Piece::Occupied(color, kind))
    }
}

/// The 8x8 grid, indexed `[row][col]`.
pub type Board = [[Piece; 8]; 8];

/// An empty board.
pub const EMPTY_BOARD: Board = [[Piece::Empty; 8]; 8];

/// A board coordinate. Always within `0..=7` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Validated constructor; fails with `InvalidSquare` outside the board.
    pub fn new(row: i8, col: i8) -> Result<Self, ChessErrors> {
        Self::offset_from(row, col).ok_or(ChessErrors::InvalidSquare((row, col)))
    }

    /// Constructor for coordinates that are known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is larger than 7.
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinate out of range");
        Square { row, col }
    }

    #[inline]
    fn offset_from(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `(d_row, d_col)` away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::offset_from(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// File letter `a..=h`.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    /// Rank digit `1..=8`; row 7 is rank 1.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// Kingside or queenside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Rights bit for `color` castling on this side.
    pub const fn right(self, color: Color) -> CastlingRights {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => CASTLE_WHITE_KINGSIDE,
            (Color::White, CastleSide::QueenSide) => CASTLE_WHITE_QUEENSIDE,
            (Color::Black, CastleSide::KingSide) => CASTLE_BLACK_KINGSIDE,
            (Color::Black, CastleSide::QueenSide) => CASTLE_BLACK_QUEENSIDE,
        }
    }

    /// Column of the rook before castling.
    pub const fn rook_from_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column of the rook after castling.
    pub const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Column the king lands on.
    pub const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Side of a castling king move judged by its destination column.
    pub const fn from_king_destination(col: u8) -> Self {
        if col > 4 {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_construction_rejects_off_board_coordinates() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(Square::new(8, 0), Err(ChessErrors::InvalidSquare((8, 0))));
        assert_eq!(Square::new(3, -1), Err(ChessErrors::InvalidSquare((3, -1))));
    }

    #[test]
    fn square_display_maps_rows_to_ranks() {
        assert_eq!(Square::from_row_col(7, 0).to_string(), "a1");
        assert_eq!(Square::from_row_col(0, 7).to_string(), "h8");
        assert_eq!(Square::from_row_col(6, 4).to_string(), "e2");
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::from_row_col(0, 0));
        assert_eq!(squares[1], Square::from_row_col(0, 1));
        assert_eq!(squares[8], Square::from_row_col(1, 0));
    }

    #[test]
    fn fen_chars_round_trip_through_piece() {
        for ch in "PNBRQKpnbrqk".chars() {
            let piece = Piece::from_fen_char(ch).expect("valid FEN letter");
            assert_eq!(piece.to_fen_char(), Some(ch));
        }
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::Empty.to_fen_char(), None);
    }
}
