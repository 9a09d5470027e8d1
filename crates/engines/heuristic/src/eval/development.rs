//! Minor piece development, early rook moves and early queen sorties.

use chess_core::{BoardState, Color, Coord, PieceKind};

use super::{Weights, pawn_under_attack, pieces, rel};

const KNIGHT_FILES: [i8; 2] = [1, 6];
const BISHOP_FILES: [i8; 2] = [2, 5];
const ROOK_FILES: [i8; 2] = [0, 7];

// (file, rank) from White's side; mirrored for Black.
const GOOD_KNIGHT_SQUARES: [(i8, i8); 4] = [(2, 2), (5, 2), (3, 2), (4, 2)];
const GOOD_BISHOP_SQUARES: [(i8, i8); 6] = [(2, 2), (5, 2), (3, 1), (4, 1), (1, 2), (6, 2)];

/// Queens that have left d1/d8 pay a flat fee plus a distance charge.
pub(crate) fn early_queen<B: BoardState>(board: &B, w: &Weights) -> i32 {
    let mut score = 0;
    for (s, pc) in pieces(board) {
        if pc.kind != PieceKind::Queen {
            continue;
        }
        let at = Coord::from_sq(s);
        let home = rel(pc.color, 3, 0);
        if at != home {
            score -= pc.color.sign() * (w.queen_moved + w.queen_distance * at.manhattan(home));
        }
    }
    score
}

pub(crate) fn piece_development<B: BoardState>(board: &B, w: &Weights) -> i32 {
    development_for(board, w, Color::White) - development_for(board, w, Color::Black)
}

fn on_home(color: Color, at: Coord, files: &[i8]) -> bool {
    files.iter().any(|&f| rel(color, f, 0) == at)
}

/// Development score for one side, positive when it is doing well.
fn development_for<B: BoardState>(board: &B, w: &Weights, color: Color) -> i32 {
    let urgent = pawn_under_attack(board, color);
    let mut score = 0;

    for (s, pc) in pieces(board) {
        if pc.color != color {
            continue;
        }
        let at = Coord::from_sq(s);
        let (home_files, good, good_bonus): (&[i8], &[(i8, i8)], i32) = match pc.kind {
            PieceKind::Knight => (&KNIGHT_FILES, &GOOD_KNIGHT_SQUARES, w.knight_good_square),
            PieceKind::Bishop => (&BISHOP_FILES, &GOOD_BISHOP_SQUARES, w.bishop_good_square),
            PieceKind::Rook => {
                if !on_home(color, at, &ROOK_FILES) && !board.is_attacked(s, color.other()) {
                    score -= w.rook_moved;
                }
                continue;
            }
            _ => continue,
        };

        if on_home(color, at, home_files) {
            score -= if urgent {
                w.undeveloped_minor_urgent
            } else {
                w.undeveloped_minor
            };
        } else if good.iter().any(|&(f, r)| rel(color, f, r) == at) {
            score += good_bonus;
            if urgent {
                score += w.good_square_urgent;
            }
        } else if !board.is_attacked(s, color.other()) {
            score -= w.misplaced_minor;
        }
    }

    score
}
