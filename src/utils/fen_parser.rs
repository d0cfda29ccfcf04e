//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string:
//! board, side to move, castling rights, en-passant target and clocks.
//! Castling rights whose king or rook is not on its home square are dropped.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{validate_placement, GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    // Clocks are optional; many tools emit four-field FEN.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let king_squares = validate_placement(&board, side_to_move)?;
    let castling_rights = sanitize_castling_rights(&board, parse_castling_rights(castling_part)?);
    let en_passant_square = parse_en_passant_square(en_passant_part, side_to_move)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;

    Ok(GameState {
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        king_squares,
        halfmove_clock,
        fullmove_number,
        move_log: Vec::new(),
    })
}

fn invalid(msg: &str) -> ChessErrors {
    ChessErrors::InvalidFenString(msg.to_owned())
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = EMPTY_BOARD;
    // FEN lists rank 8 first, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(invalid(&format!("rank '{row_str}' has more than 8 files")));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid(&format!("rank '{row_str}' has more than 8 files")));
            }
            board[row][col] = piece;
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank '{row_str}' does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

fn sanitize_castling_rights(board: &Board, rights: CastlingRights) -> CastlingRights {
    let mut kept = rights;
    for color in [Color::White, Color::Black] {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let right = side.right(color);
            if rights & right == 0 {
                continue;
            }
            let king = king_home(color);
            let rook = rook_home(color, side);
            let king_ok = board[king.row() as usize][king.col() as usize].is(color, PieceKind::King);
            let rook_ok = board[rook.row() as usize][rook.col() as usize].is(color, PieceKind::Rook);
            if !(king_ok && rook_ok) {
                debug!(%color, ?side, "dropping castling right without pieces on home squares");
                kept &= !right;
            }
        }
    }
    kept
}

/// The target must sit on the rank a double push passes over, relative to
/// the side that just moved.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("en-passant square '{en_passant_part}'")))?;
    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    if square.row() != expected_row {
        return Err(invalid(&format!(
            "en-passant square '{en_passant_part}' is not on the passed-over rank"
        )));
    }

    Ok(Some(square))
}
