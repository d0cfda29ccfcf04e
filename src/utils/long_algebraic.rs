use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Splits coordinate move notation (`e2e4`, `e7e8q`) into its squares and
/// optional promotion piece. Does not consult any position.
pub fn parse_long_algebraic(
    notation: &str,
) -> Result<(Square, Square, Option<PieceKind>), ChessErrors> {
    let trimmed = notation.trim();
    let invalid = || ChessErrors::InvalidAlgebraicString(notation.to_owned());

    if !trimmed.is_ascii() || !(4..=5).contains(&trimmed.len()) {
        return Err(invalid());
    }

    let start = algebraic_to_square(&trimmed[0..2]).map_err(|_| invalid())?;
    let end = algebraic_to_square(&trimmed[2..4]).map_err(|_| invalid())?;

    let promotion = match trimmed[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(kind)
            }
            _ => return Err(invalid()),
        },
    };

    Ok((start, end, promotion))
}
