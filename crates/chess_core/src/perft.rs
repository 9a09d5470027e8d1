//! Move-generation self checks.
//!
//! `perft` counts leaf positions with make/unmake on one board. The
//! `BoardState` variants walk the same tree through `apply_move` copies,
//! the way the search does, so agreement between the two checks the trait
//! surface as well as the generator.

use crate::{BoardState, board::Position, movegen::legal_moves_into, types::Move};

/// Leaf positions `depth` plies below `pos`.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Same count as [`perft`], built from independent copies.
pub fn perft_copy<B: BoardState>(board: &B, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    board
        .legal_moves()
        .into_iter()
        .map(|mv| perft_copy(&board.apply_move(mv), depth - 1))
        .sum()
}

/// Per-root-move leaf counts, in generation order. Handy for bisecting a
/// mismatch against another generator.
pub fn divide<B: BoardState>(board: &B, depth: u8) -> Vec<(Move, u64)> {
    board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, perft_copy(&board.apply_move(mv), depth.saturating_sub(1))))
        .collect()
}
