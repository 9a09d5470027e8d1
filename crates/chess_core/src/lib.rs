pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::FenError;
pub use movegen::*;
pub use notation::*;
pub use perft::{divide, perft, perft_copy};
pub use types::*;

// =============================================================================
// BoardState trait: the read/apply surface a search consumes
// =============================================================================

/// Queryable snapshot of a game position.
///
/// A search never mutates a snapshot it was handed: every explored branch is
/// produced by [`BoardState::apply_move`], which returns an independent copy.
pub trait BoardState: Clone {
    /// Side whose turn it is
    fn side_to_move(&self) -> Color;

    /// Whether the side to move is in check
    fn is_in_check(&self) -> bool;

    /// Legal moves for the side to move, in generation order
    fn legal_moves(&self) -> Vec<Move>;

    /// Pseudo-legal moves of the piece on `sq` (either colour). Used for
    /// reachability scans; no legality filtering is applied.
    fn pseudo_legal_moves_from(&self, sq: u8) -> Vec<Move>;

    /// Returns the position after `mv`, leaving `self` untouched
    fn apply_move(&self, mv: Move) -> Self;

    /// Piece on `sq`, or `None` for an empty square
    fn piece_at(&self, sq: u8) -> Option<Piece>;

    /// Whether any piece of `by` attacks `sq`
    fn is_attacked(&self, sq: u8, by: Color) -> bool;

    /// Like `piece_at`, but off-board coordinates read as empty.
    fn piece_on(&self, c: Coord) -> Option<Piece> {
        c.sq().and_then(|s| self.piece_at(s))
    }

    /// Like `is_attacked`, but off-board coordinates are never attacked.
    fn attacked_at(&self, c: Coord, by: Color) -> bool {
        c.sq().is_some_and(|s| self.is_attacked(s, by))
    }

    /// First square holding `color`'s king, scanning a1..h8.
    fn king_square(&self, color: Color) -> Option<u8> {
        (0..64u8).find(|&s| matches!(self.piece_at(s), Some(pc) if pc.is(color, PieceKind::King)))
    }
}

impl BoardState for Position {
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn is_in_check(&self) -> bool {
        self.in_check(self.side_to_move)
    }

    fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    fn pseudo_legal_moves_from(&self, sq: u8) -> Vec<Move> {
        movegen::pseudo_legal_moves(self, sq)
    }

    fn apply_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    fn is_attacked(&self, sq: u8, by: Color) -> bool {
        self.is_square_attacked(sq, by)
    }

    fn king_square(&self, color: Color) -> Option<u8> {
        self.king_sq(color)
    }
}
