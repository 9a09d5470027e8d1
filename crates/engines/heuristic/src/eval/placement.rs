//! Knight placement: centralisation and exposure to enemy pawns.

use chess_core::{BoardState, Color, Coord, Piece, PieceKind};

use super::{Weights, pieces};

pub(crate) fn knight_placement<B: BoardState>(board: &B, w: &Weights) -> i32 {
    pieces(board)
        .filter(|(_, pc)| pc.kind == PieceKind::Knight)
        .map(|(s, pc)| pc.color.sign() * knight_score(board, w, Coord::from_sq(s), pc.color))
        .sum()
}

/// Score of one knight from its own side's point of view.
///
/// The three pawn checks overlap and stack: a single enemy pawn can trigger
/// more than one of them.
fn knight_score<B: BoardState>(board: &B, w: &Weights, at: Coord, color: Color) -> i32 {
    let file_dist = (at.file - 3).abs().min((at.file - 4).abs());
    let rank_dist = (at.rank - 3).abs().min((at.rank - 4).abs());
    let mut score = (w.knight_center_max - (file_dist + rank_dist) as i32).max(0);

    let enemy_pawn = Piece::new(color.other(), PieceKind::Pawn);
    let dir = color.other().forward();

    for df in [-1, 1] {
        // A pawn one push away from hitting the knight, landing where the
        // knight's side cannot take it.
        let strike = at.offset(df, -dir);
        let start = at.offset(df, -2 * dir);
        if start.is_valid()
            && strike.is_valid()
            && board.piece_on(start) == Some(enemy_pawn)
            && board.piece_on(strike).is_none()
            && !board.attacked_at(strike, color)
        {
            score -= w.knight_push_threat;
        }

        // Already attacking.
        if board.piece_on(strike) == Some(enemy_pawn) {
            score -= w.knight_pawn_attack;
        }
    }

    for df in [-1, 1] {
        let beside = at.offset(df, 0);
        let push = at.offset(df, dir);
        if push.is_valid() && board.piece_on(beside) == Some(enemy_pawn) && board.piece_on(push).is_none() {
            score -= w.knight_side_pawn;
        }
    }

    score
}
