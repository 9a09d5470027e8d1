use crate::{
    board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position},
    types::*,
};

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    let mover = pos.side_to_move;
    for from in 0..64u8 {
        if matches!(pos.piece_at(from), Some(pc) if pc.color == mover) {
            pseudo_moves_from(pos, from, out);
        }
    }

    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// Pseudo-legal moves of the piece standing on `from`, whichever side owns
/// it. Pins and checks are ignored. An empty square yields nothing.
pub fn pseudo_legal_moves(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    pseudo_moves_from(pos, from, &mut out);
    out
}

fn pseudo_moves_from(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let Some(pc) = pos.piece_at(from) else {
        return;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ORTHOGONALS),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.color, out, &DIAGONALS);
            gen_slider(pos, from, pc.color, out, &ORTHOGONALS);
        }
        PieceKind::King => {
            gen_steps(pos, from, pc.color, out, &KING_DELTAS);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for pk in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank = c.back_rank() + dir;
    let promo_rank = c.other().back_rank();

    // forward 1, then 2 from the start rank
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, promo_rank, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => push_pawn_move(from, to, promo_rank, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

// Squares between king and rook that must be empty.
const WHITE_KINGSIDE_EMPTY: [u8; 2] = [5, 6];
const WHITE_QUEENSIDE_EMPTY: [u8; 3] = [3, 2, 1];
const BLACK_KINGSIDE_EMPTY: [u8; 2] = [61, 62];
const BLACK_QUEENSIDE_EMPTY: [u8; 3] = [59, 58, 57];

/// Castling candidates: (right held, squares that must be empty, squares the
/// king crosses, king destination).
fn castle_paths(pos: &Position, c: Color) -> [(bool, &'static [u8], [u8; 2], u8); 2] {
    match c {
        Color::White => [
            (pos.castling.wk, &WHITE_KINGSIDE_EMPTY, [5, 6], 6),
            (pos.castling.wq, &WHITE_QUEENSIDE_EMPTY, [3, 2], 2),
        ],
        Color::Black => [
            (pos.castling.bk, &BLACK_KINGSIDE_EMPTY, [61, 62], 62),
            (pos.castling.bq, &BLACK_QUEENSIDE_EMPTY, [59, 58], 58),
        ],
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let king_from = match c {
        Color::White => 4u8,
        Color::Black => 60u8,
    };
    if from != king_from {
        return;
    }

    // Can't castle out of/through check.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for (allowed, empty, crossed, to) in castle_paths(pos, c) {
        if allowed
            && empty.iter().all(|&s| pos.piece_at(s).is_none())
            && crossed.iter().all(|&s| !pos.is_square_attacked(s, enemy))
        {
            let mut mv = Move::new(from, to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
