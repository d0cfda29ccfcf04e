//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by board construction,
//! move intake, undo and the notation parsers. Every variant is recoverable:
//! a call that fails leaves the `GameState` exactly as it was before the
//! call, so callers can report the problem and keep using the position.

use std::error::Error;
use std::fmt;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate was outside the 8x8 board.
    ///
    /// Payload: the offending `(row, col)` pair.
    InvalidSquare((i8, i8)),

    /// A proposed move is not among the legal moves of the current position.
    ///
    /// Payload: the move in coordinate notation (for example `e2e5`).
    IllegalMove(String),

    /// `undo_move` was called before any move was played.
    EmptyMoveLog,

    /// A FEN string could not be parsed into a valid position.
    ///
    /// Payload: a description of the first problem found.
    InvalidFenString(String),

    /// A coordinate-notation square or move could not be parsed.
    ///
    /// Payload: the original input.
    InvalidAlgebraicString(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquare((row, col)) => {
                write!(f, "square ({row}, {col}) is outside the board")
            }
            ChessErrors::IllegalMove(notation) => write!(f, "illegal move: {notation}"),
            ChessErrors::EmptyMoveLog => write!(f, "no move to undo"),
            ChessErrors::InvalidFenString(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidAlgebraicString(input) => {
                write!(f, "invalid coordinate notation: {input}")
            }
        }
    }
}

impl Error for ChessErrors {}
