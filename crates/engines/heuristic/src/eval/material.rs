use chess_core::BoardState;

use super::pieces;

/// Fixed piece values, Black's subtracted.
pub(crate) fn material<B: BoardState>(board: &B) -> i32 {
    pieces(board)
        .map(|(_, pc)| pc.color.sign() * pc.value())
        .sum()
}
