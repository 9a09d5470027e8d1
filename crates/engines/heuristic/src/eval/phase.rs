//! Opening-phase proxies.
//!
//! Two developed-piece counts are in use and they disagree on purpose: the
//! rank-based count gates center control and the f-pawn term, while the
//! origin-based count gates the pawn-safety terms. Keep them separate.

use chess_core::{BoardState, Coord, PieceKind};

use super::{Weights, pieces};

/// Non-pawn, non-king pieces (both sides) standing off their own back rank.
pub fn developed_by_rank<B: BoardState>(board: &B) -> u32 {
    pieces(board)
        .filter(|&(s, pc)| {
            !matches!(pc.kind, PieceKind::Pawn | PieceKind::King)
                && Coord::from_sq(s).rank != pc.color.back_rank()
        })
        .count() as u32
}

/// Non-pawn, non-king pieces (both sides) that have left their origin.
///
/// Knights only count once they leave the b and g files, whatever the rank.
pub fn developed_by_origin<B: BoardState>(board: &B) -> u32 {
    pieces(board)
        .filter(|&(s, pc)| {
            let at = Coord::from_sq(s);
            let home = pc.color.back_rank();
            match pc.kind {
                PieceKind::Knight => at.file != 1 && at.file != 6,
                PieceKind::Bishop | PieceKind::Rook => at.rank != home,
                PieceKind::Queen => at != Coord::new(3, home),
                PieceKind::Pawn | PieceKind::King => false,
            }
        })
        .count() as u32
}

/// All pieces on the board, kings and pawns included.
pub fn piece_count<B: BoardState>(board: &B) -> u32 {
    pieces(board).count() as u32
}

/// Opening by the rank-based count.
pub fn is_opening<B: BoardState>(board: &B, w: &Weights) -> bool {
    developed_by_rank(board) < w.opening_developed_below
}

/// Opening-only pawn-safety terms are skipped once this holds.
pub fn past_opening_by_origin<B: BoardState>(board: &B, w: &Weights) -> bool {
    developed_by_origin(board) > w.opening_developed_max
}
