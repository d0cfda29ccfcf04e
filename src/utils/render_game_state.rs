//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! console driver. Row 0 (rank 8) is printed first so White sits at the
//! bottom.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, cells) in game_state.board().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, piece) in cells.iter().enumerate() {
            out.push(piece_to_unicode(*piece));
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match piece {
        Piece::Empty => '·',
        Piece::Occupied(Color::White, PieceKind::Pawn) => '♙',
        Piece::Occupied(Color::White, PieceKind::Knight) => '♘',
        Piece::Occupied(Color::White, PieceKind::Bishop) => '♗',
        Piece::Occupied(Color::White, PieceKind::Rook) => '♖',
        Piece::Occupied(Color::White, PieceKind::Queen) => '♕',
        Piece::Occupied(Color::White, PieceKind::King) => '♔',
        Piece::Occupied(Color::Black, PieceKind::Pawn) => '♟',
        Piece::Occupied(Color::Black, PieceKind::Knight) => '♞',
        Piece::Occupied(Color::Black, PieceKind::Bishop) => '♝',
        Piece::Occupied(Color::Black, PieceKind::Rook) => '♜',
        Piece::Occupied(Color::Black, PieceKind::Queen) => '♛',
        Piece::Occupied(Color::Black, PieceKind::King) => '♚',
    }
}
