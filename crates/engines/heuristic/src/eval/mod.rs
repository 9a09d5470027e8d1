//! Static position evaluation.
//!
//! The score is the sum of independent heuristic terms. Every term reports
//! white-minus-black: positive favours White, negative favours Black. Terms
//! share no state; each one rescans the board for whatever phase facts it
//! needs.

mod center;
mod development;
mod extension;
mod king;
mod material;
mod pawns;
pub mod phase;
mod placement;
pub mod weights;

use std::fmt;

use chess_core::{BoardState, Color, Coord, Piece, PieceKind};
use serde::{Deserialize, Serialize};

pub use weights::Weights;

/// d4, d5, e4, e5
pub(crate) const CENTER: [Coord; 4] = [
    Coord::new(3, 3),
    Coord::new(3, 4),
    Coord::new(4, 3),
    Coord::new(4, 4),
];

/// A named evaluation term, listed in summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Material,
    PiecePlacement,
    CenterControl,
    Mobility,
    PawnStructure,
    KingSafety,
    EarlyQueen,
    PieceDevelopment,
    EarlyKing,
    Castling,
    PawnDoubleMove,
    UndefendedPawns,
    KingPawnShield,
    MinorDefenseDevelopment,
    EarlyFPawn,
}

impl Term {
    pub const COUNT: usize = 15;

    pub const ALL: [Term; Term::COUNT] = [
        Term::Material,
        Term::PiecePlacement,
        Term::CenterControl,
        Term::Mobility,
        Term::PawnStructure,
        Term::KingSafety,
        Term::EarlyQueen,
        Term::PieceDevelopment,
        Term::EarlyKing,
        Term::Castling,
        Term::PawnDoubleMove,
        Term::UndefendedPawns,
        Term::KingPawnShield,
        Term::MinorDefenseDevelopment,
        Term::EarlyFPawn,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Name as written in config files
    pub fn name(self) -> &'static str {
        match self {
            Term::Material => "material",
            Term::PiecePlacement => "piece_placement",
            Term::CenterControl => "center_control",
            Term::Mobility => "mobility",
            Term::PawnStructure => "pawn_structure",
            Term::KingSafety => "king_safety",
            Term::EarlyQueen => "early_queen",
            Term::PieceDevelopment => "piece_development",
            Term::EarlyKing => "early_king",
            Term::Castling => "castling",
            Term::PawnDoubleMove => "pawn_double_move",
            Term::UndefendedPawns => "undefended_pawns",
            Term::KingPawnShield => "king_pawn_shield",
            Term::MinorDefenseDevelopment => "minor_defense_development",
            Term::EarlyFPawn => "early_f_pawn",
        }
    }

    /// Reserved terms that currently always score zero.
    pub fn is_extension_point(self) -> bool {
        matches!(self, Term::Mobility | Term::PawnStructure | Term::KingSafety)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Composite evaluator: a weight table plus the set of enabled terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    weights: Weights,
    enabled: [bool; Term::COUNT],
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// All terms enabled, default weights.
    pub fn new() -> Self {
        Self::with_weights(Weights::default())
    }

    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights,
            enabled: [true; Term::COUNT],
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn set_enabled(&mut self, term: Term, enabled: bool) {
        self.enabled[term.idx()] = enabled;
    }

    pub fn is_enabled(&self, term: Term) -> bool {
        self.enabled[term.idx()]
    }

    /// Sum of all enabled terms, white-minus-black.
    pub fn evaluate<B: BoardState>(&self, board: &B) -> i32 {
        Term::ALL
            .iter()
            .filter(|&&t| self.is_enabled(t))
            .map(|&t| self.term(t, board))
            .sum()
    }

    /// Score of a single term, whether or not it is enabled.
    pub fn term<B: BoardState>(&self, term: Term, board: &B) -> i32 {
        let w = &self.weights;
        match term {
            Term::Material => material::material(board),
            Term::PiecePlacement => placement::knight_placement(board, w),
            Term::CenterControl => center::center_control(board, w),
            Term::Mobility => extension::mobility(board),
            Term::PawnStructure => extension::pawn_structure(board),
            Term::KingSafety => extension::king_safety(board),
            Term::EarlyQueen => development::early_queen(board, w),
            Term::PieceDevelopment => development::piece_development(board, w),
            Term::EarlyKing => king::early_king(board, w),
            Term::Castling => king::castling(board, w),
            Term::PawnDoubleMove => pawns::pawn_double_move(board, w),
            Term::UndefendedPawns => pawns::undefended_pawns(board, w),
            Term::KingPawnShield => king::king_pawn_shield(board, w),
            Term::MinorDefenseDevelopment => pawns::minor_defense(board, w),
            Term::EarlyFPawn => pawns::early_f_pawn(board, w),
        }
    }

    /// Per-term scores of the enabled terms, in summation order.
    pub fn breakdown<B: BoardState>(&self, board: &B) -> Vec<(Term, i32)> {
        Term::ALL
            .iter()
            .filter(|&&t| self.is_enabled(t))
            .map(|&t| (t, self.term(t, board)))
            .collect()
    }
}

// =============================================================================
// Board scanning helpers shared by the terms
// =============================================================================

/// Every occupied square, a1..h8.
pub(crate) fn pieces<B: BoardState>(board: &B) -> impl Iterator<Item = (u8, Piece)> + '_ {
    (0..64u8).filter_map(move |s| board.piece_at(s).map(|pc| (s, pc)))
}

/// Square given from `color`'s side of the board: rank 0 is its back rank.
pub(crate) fn rel(color: Color, file: i8, rank: i8) -> Coord {
    match color {
        Color::White => Coord::new(file, rank),
        Color::Black => Coord::new(file, 7 - rank),
    }
}

/// Ranks `color` has advanced from its back rank.
pub(crate) fn rel_rank(color: Color, at: Coord) -> i8 {
    (at.rank - color.back_rank()).abs()
}

pub(crate) fn has<B: BoardState>(board: &B, at: Coord, color: Color, kind: PieceKind) -> bool {
    matches!(board.piece_on(at), Some(pc) if pc.is(color, kind))
}

/// The central 4x4 block, c3..f6.
pub(crate) fn is_central(at: Coord) -> bool {
    (2..=5).contains(&at.file) && (2..=5).contains(&at.rank)
}

/// A piece landing on `to` is close enough to cover `target`: adjacent
/// (diagonals included) or a knight's jump away.
pub(crate) fn covers(to: Coord, target: Coord) -> bool {
    let df = (to.file - target.file).abs();
    let dr = (to.rank - target.rank).abs();
    (df <= 1 && dr <= 1) || (df == 1 && dr == 2) || (df == 2 && dr == 1)
}

/// Whether any `color` pawn stands on a square the opponent attacks.
pub(crate) fn pawn_under_attack<B: BoardState>(board: &B, color: Color) -> bool {
    pieces(board).any(|(s, pc)| pc.is(color, PieceKind::Pawn) && board.is_attacked(s, color.other()))
}

/// Pawns of `color` that are attacked and not covered by their own side.
pub(crate) fn hanging_pawns<B: BoardState>(board: &B, color: Color) -> Vec<u8> {
    pieces(board)
        .filter(|&(s, pc)| {
            pc.is(color, PieceKind::Pawn)
                && board.is_attacked(s, color.other())
                && !board.is_attacked(s, color)
        })
        .map(|(s, _)| s)
        .collect()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
