//! Authoritative position state.
//!
//! `GameState` owns the 8x8 board, the side to move, castling rights, the
//! en-passant target, cached king squares and the move log. The board is
//! mutated only through `apply_move` and `undo_move`; everything else is
//! read-only access for renderers and search layers.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, generate_pseudo_legal_moves,
};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::parse_long_algebraic;
use crate::utils::render_game_state::render_game_state;

/// Outcome of the current position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    // [color]
    pub(crate) king_squares: [Square; 2],
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
    pub(crate) move_log: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = EMPTY_BOARD;
        for (col, kind) in back_rank.into_iter().enumerate() {
            board[0][col] = Piece::new(Color::Black, kind);
            board[1][col] = Piece::new(Color::Black, PieceKind::Pawn);
            board[6][col] = Piece::new(Color::White, PieceKind::Pawn);
            board[7][col] = Piece::new(Color::White, kind);
        }

        GameState {
            board,
            side_to_move: Color::White,
            castling_rights: CASTLE_ALL,
            en_passant_square: None,
            king_squares: [Square::from_row_col(7, 4), Square::from_row_col(0, 4)],
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
        }
    }

    /// Arbitrary placement with no castling rights and no en-passant target.
    ///
    /// Placement errors share the `InvalidFenString` variant with the FEN
    /// parser: each side needs exactly one king, and the side not to move
    /// must not be in check.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, ChessErrors> {
        let king_squares = validate_placement(&board, side_to_move)?;
        Ok(GameState {
            board,
            side_to_move,
            castling_rights: 0,
            en_passant_square: None,
            king_squares,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
        })
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen).inspect_err(|err| debug!(%fen, %err, "rejected FEN"))
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Unicode diagram of the board, White at the bottom.
    #[inline]
    pub fn render(&self) -> String {
        render_game_state(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & side.right(color) != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Played moves, oldest first.
    pub fn move_log(&self) -> impl ExactSizeIterator<Item = &Move> + '_ {
        self.move_log.iter().map(|entry| &entry.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last().map(|entry| &entry.mv)
    }

    /// Number of plies played since this state was created.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    /// Makes `mv` on the board. Legality is not re-checked; `mv` must come
    /// from `generate_legal_moves` for this position.
    pub fn apply_move(&mut self, mv: Move) {
        trace!(mv = %mv, side = %self.side_to_move, "apply move");
        legal_move_apply::apply_move(self, mv);
    }

    /// Reverts the last move and returns it.
    pub fn undo_move(&mut self) -> Result<Move, ChessErrors> {
        match legal_move_apply::undo_move(self) {
            Some(mv) => {
                trace!(mv = %mv, "undo move");
                Ok(mv)
            }
            None => {
                warn!("undo requested with an empty move log");
                Err(ChessErrors::EmptyMoveLog)
            }
        }
    }

    /// All legal moves for the side to move, in row-major board order.
    ///
    /// Takes `&mut self` because candidates are tried on the live board; the
    /// state is identical before and after the call.
    pub fn generate_legal_moves(&mut self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    pub fn generate_pseudo_legal_moves(&self) -> Vec<Move> {
        generate_pseudo_legal_moves(self)
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        is_square_attacked(&self.board, square, by)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status() == GameStatus::Stalemate
    }

    pub fn status(&mut self) -> GameStatus {
        let in_check = self.is_in_check();
        let has_moves = !self.generate_legal_moves().is_empty();
        match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Finds the legal move joining two selected squares.
    ///
    /// When the squares describe a promotion and `promotion` is `None`, the
    /// queen promotion is returned.
    pub fn resolve_move(
        &mut self,
        start: (i8, i8),
        end: (i8, i8),
        promotion: Option<PieceKind>,
    ) -> Result<Move, ChessErrors> {
        let start = Square::new(start.0, start.1)?;
        let end = Square::new(end.0, end.1)?;
        self.resolve_squares(start, end, promotion)
    }

    /// Validates `candidate` against the legal moves and applies the matching
    /// generated move. Matching uses the squares and the promotion choice, so
    /// a candidate built from two clicks resolves to the castle or en-passant
    /// move it describes. On error the state is unchanged.
    pub fn try_apply_move(&mut self, candidate: Move) -> Result<Move, ChessErrors> {
        let mv = self.resolve_squares(candidate.start(), candidate.end(), candidate.promotion())?;
        self.apply_move(mv);
        Ok(mv)
    }

    /// Parses coordinate notation (`e2e4`, `e7e8q`) and applies the move.
    pub fn apply_long_algebraic(&mut self, notation: &str) -> Result<Move, ChessErrors> {
        let (start, end, promotion) = parse_long_algebraic(notation)?;
        let mv = self.resolve_squares(start, end, promotion)?;
        self.apply_move(mv);
        Ok(mv)
    }

    fn resolve_squares(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, ChessErrors> {
        let candidates: Vec<Move> = self
            .generate_legal_moves()
            .into_iter()
            .filter(|mv| mv.start() == start && mv.end() == end)
            .collect();

        let is_promotion = candidates.iter().any(|mv| mv.promotion().is_some());
        let wanted = match promotion {
            Some(kind) => Some(kind),
            None if is_promotion => Some(PieceKind::Queen),
            None => None,
        };

        candidates
            .into_iter()
            .find(|mv| mv.promotion() == wanted)
            .ok_or_else(|| {
                let mut notation = format!("{start}{end}");
                if let Some(kind) = promotion {
                    notation.push(kind.to_char());
                }
                debug!(%notation, side = %self.side_to_move, "rejected illegal move");
                ChessErrors::IllegalMove(notation)
            })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// King square per colour for a placement that can be played from.
///
/// Exactly one king of each colour is required, and the king of the side
/// that just moved must not be attacked.
pub(crate) fn validate_placement(
    board: &Board,
    side_to_move: Color,
) -> Result<[Square; 2], ChessErrors> {
    let king_squares = locate_kings(board)?;
    let waiting_king = king_squares[side_to_move.opposite().index()];
    if is_square_attacked(board, waiting_king, side_to_move) {
        return Err(ChessErrors::InvalidFenString(
            "side not to move is in check".to_owned(),
        ));
    }
    Ok(king_squares)
}

fn locate_kings(board: &Board) -> Result<[Square; 2], ChessErrors> {
    let mut found: [Option<Square>; 2] = [None, None];
    for square in Square::all() {
        if let Piece::Occupied(color, PieceKind::King) = board[square.row() as usize][square.col() as usize] {
            if found[color.index()].replace(square).is_some() {
                return Err(ChessErrors::InvalidFenString(format!(
                    "more than one {color} king"
                )));
            }
        }
    }

    match found {
        [Some(white), Some(black)] => Ok([white, black]),
        [None, _] => Err(ChessErrors::InvalidFenString("missing white king".to_owned())),
        [_, None] => Err(ChessErrors::InvalidFenString("missing black king".to_owned())),
    }
}
