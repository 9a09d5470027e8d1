use crate::{board::Position, movegen::legal_moves, types::*};

/// Resolves long algebraic text (`e2e4`, `e7e8n`) against the legal moves of
/// `pos`, so castle and en-passant flags come from the generator.
pub fn parse_move(pos: &Position, txt: &str) -> Option<Move> {
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.as_bytes().get(4).map(|b| b.to_ascii_lowercase()) {
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
        None => None,
    };

    legal_moves(pos).into_iter().find(|m| {
        m.from == from && m.to == to && (m.promo.is_none() || m.promo == promo.or(Some(PieceKind::Queen)))
    })
}

/// Plays a sequence of long algebraic moves from `pos`. Returns the first
/// move text that is not legal in the position it is applied to.
pub fn play_moves<'a>(pos: &Position, moves: &[&'a str]) -> Result<Position, &'a str> {
    let mut current = pos.clone();
    for &txt in moves {
        let mv = parse_move(&current, txt).ok_or(txt)?;
        current.make_move(mv);
    }
    Ok(current)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
