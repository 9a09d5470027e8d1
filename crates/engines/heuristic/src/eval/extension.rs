//! Reserved terms. Each is wired into the evaluator under its own name so
//! it can be filled in and tuned without touching the term table.

use chess_core::BoardState;

pub(crate) fn mobility<B: BoardState>(_board: &B) -> i32 {
    0
}

pub(crate) fn pawn_structure<B: BoardState>(_board: &B) -> i32 {
    0
}

pub(crate) fn king_safety<B: BoardState>(_board: &B) -> i32 {
    0
}
