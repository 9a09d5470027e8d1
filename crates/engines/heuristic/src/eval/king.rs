//! King placement in the opening: wandering, castling, and a weakened
//! f-pawn shield in front of a kingside-castled king.

use chess_core::{BoardState, Color, Coord, PieceKind};

use super::{Weights, has, phase, pieces, rel, rel_rank};

/// Kings that stepped off their back rank.
pub(crate) fn early_king<B: BoardState>(board: &B, w: &Weights) -> i32 {
    let mut score = 0;
    for (s, pc) in pieces(board) {
        if pc.kind != PieceKind::King {
            continue;
        }
        let at = Coord::from_sq(s);
        let climbed = rel_rank(pc.color, at);
        if at != rel(pc.color, 4, 0) && climbed > 0 {
            let penalty = w.king_left_home_rank + w.king_per_rank * climbed as i32;
            score -= pc.color.sign() * penalty;
        }
    }
    score
}

/// Castled kings, and kings still home next to unmoved rooks.
pub(crate) fn castling<B: BoardState>(board: &B, w: &Weights) -> i32 {
    let mut score = 0;
    for (s, pc) in pieces(board) {
        if pc.kind != PieceKind::King {
            continue;
        }
        let color = pc.color;
        let at = Coord::from_sq(s);
        let mut bonus = 0;
        if at == rel(color, 6, 0) || at == rel(color, 2, 0) {
            bonus += w.castled;
        } else if at == rel(color, 4, 0) {
            if has(board, rel(color, 7, 0), color, PieceKind::Rook) {
                bonus += w.kingside_rights;
            }
            if has(board, rel(color, 0, 0), color, PieceKind::Rook) {
                bonus += w.queenside_rights;
            }
        }
        score += color.sign() * bonus;
    }
    score
}

pub(crate) fn king_pawn_shield<B: BoardState>(board: &B, w: &Weights) -> i32 {
    if phase::past_opening_by_origin(board, w) {
        return 0;
    }
    shield_for(board, w, Color::White) - shield_for(board, w, Color::Black)
}

/// Penalty (as a negative score) for a king on g1/g8 whose f-pawn has
/// advanced one square. Zero if the king is missing or elsewhere.
fn shield_for<B: BoardState>(board: &B, w: &Weights, color: Color) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    let king = Coord::from_sq(king);
    if king != rel(color, 6, 0) || !has(board, rel(color, 5, 2), color, PieceKind::Pawn) {
        return 0;
    }

    let enemy = color.other();
    let mut score = -w.shield_pawn_pushed;

    // Heavy pieces further up the f-file. No blocker check.
    for r in 3..8 {
        if has(board, rel(color, 5, r), enemy, PieceKind::Queen)
            || has(board, rel(color, 5, r), enemy, PieceKind::Rook)
        {
            score -= w.shield_file_exposed;
        }
    }

    // The g1-a7 (g8-a2) diagonal the missing pawn used to cover.
    let mut at = king.offset(-1, color.forward());
    while at.is_valid() {
        if let Some(pc) = board.piece_on(at) {
            if pc.color == enemy && matches!(pc.kind, PieceKind::Bishop | PieceKind::Queen) {
                score -= w.shield_diagonal_exposed;
            }
            break;
        }
        at = at.offset(-1, color.forward());
    }

    score
}
