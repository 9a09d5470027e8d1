use chess_core::{BoardState, Color, PieceKind};

use super::{CENTER, Weights, phase};

/// Occupancy of and attacks on d4, d5, e4 and e5.
pub(crate) fn center_control<B: BoardState>(board: &B, w: &Weights) -> i32 {
    let opening = phase::is_opening(board, w);
    let mut score = 0;

    for at in CENTER {
        let Some(pc) = board.piece_on(at) else {
            continue;
        };
        let mut bonus = if pc.kind == PieceKind::Pawn {
            w.center_pawn
        } else {
            w.center_piece
        };
        if opening {
            bonus *= w.center_opening_factor;
        }
        if board.attacked_at(at, pc.color.other()) {
            bonus -= w.center_occupant_attacked;
        }
        score += pc.color.sign() * bonus;
    }

    let attack = if opening {
        w.center_attack_opening
    } else {
        w.center_attack
    };
    for at in CENTER {
        for color in [Color::White, Color::Black] {
            if board.attacked_at(at, color) {
                score += color.sign() * attack;
            }
        }
    }

    score
}
