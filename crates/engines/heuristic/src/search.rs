//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Moves are searched in the order the board generates them; there is no
//! move ordering, so the amount of pruning depends entirely on that order.
//! Every branch is explored on its own copy of the position.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chess_core::{BoardState, Color, Move};
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::eval::Evaluator;

/// Score of being mated at the root. Mates further from the root score
/// one less per ply, so shorter mates are always preferred.
pub const MATE_SCORE: i32 = 20_000;

/// Deepest search the engine accepts.
pub const MAX_DEPTH: u8 = 10;

pub const DEFAULT_DEPTH: u8 = 2;

/// Per-call search state: node counter, start time and the root depth used
/// to measure mate distance.
///
/// One context belongs to one top-level search, so concurrent searches on a
/// shared engine never mix their counts.
#[derive(Debug, Clone)]
pub struct SearchContext {
    nodes: u64,
    started: Instant,
    root_depth: u8,
}

impl SearchContext {
    pub fn new(root_depth: u8) -> Self {
        Self {
            nodes: 0,
            started: Instant::now(),
            root_depth,
        }
    }

    /// Nodes visited so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn root_depth(&self) -> u8 {
        self.root_depth
    }
}

/// Outcome of one top-level search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// White-minus-black score of the chosen move (0 without a move)
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub depth: u8,
}

impl SearchReport {
    /// Long algebraic form of the chosen move, or `0000` if there is none.
    pub fn notation(&self) -> String {
        self.best_move
            .map_or_else(|| "0000".to_string(), |mv| mv.to_string())
    }

    /// Whether the score reports a forced mate for either side.
    pub fn is_mate_score(&self) -> bool {
        self.score.abs() > MATE_SCORE - i32::from(MAX_DEPTH) - 1
    }
}

/// Minimax engine over any [`BoardState`].
///
/// Scores are always white-minus-black: White maximizes, Black minimizes.
#[derive(Debug)]
pub struct SearchEngine {
    depth: u8,
    alpha_beta: bool,
    evaluator: Evaluator,
    /// Node count of the most recently completed search
    last_nodes: AtomicU64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl SearchEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.clamp(1, MAX_DEPTH),
            alpha_beta: true,
            evaluator: Evaluator::new(),
            last_nodes: AtomicU64::new(0),
        }
    }

    /// Engine configured from a (validated) [`EngineConfig`].
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            depth: config.depth.clamp(1, MAX_DEPTH),
            alpha_beta: config.alpha_beta,
            evaluator: config.evaluator(),
            last_nodes: AtomicU64::new(0),
        }
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Set the search depth, clamped to `1..=MAX_DEPTH`.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.clamp(1, MAX_DEPTH);
    }

    pub fn alpha_beta(&self) -> bool {
        self.alpha_beta
    }

    pub fn set_alpha_beta(&mut self, enabled: bool) {
        self.alpha_beta = enabled;
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Nodes visited by the last completed [`search`](Self::search).
    pub fn nodes_searched(&self) -> u64 {
        self.last_nodes.load(Ordering::Relaxed)
    }

    pub fn reset_nodes_searched(&self) {
        self.last_nodes.store(0, Ordering::Relaxed);
    }

    /// Pick the best move for the side to move.
    ///
    /// Root moves are tried in generation order and only a strictly better
    /// score replaces the current best, so ties go to the earliest move.
    pub fn search<B: BoardState>(&self, board: &B) -> SearchReport {
        let mut ctx = SearchContext::new(self.depth);
        let white = board.side_to_move() == Color::White;

        let mut best: Option<(Move, i32)> = None;
        for mv in board.legal_moves() {
            let child = board.apply_move(mv);
            let score = self.minimax(&child, self.depth - 1, i32::MIN, i32::MAX, !white, &mut ctx);
            debug!(mv = %mv, score, "root move");

            let improves = match best {
                None => true,
                Some((_, best_score)) if white => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let report = SearchReport {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, s)| s),
            nodes: ctx.nodes,
            elapsed: ctx.elapsed(),
            depth: self.depth,
        };
        self.last_nodes.store(report.nodes, Ordering::Relaxed);

        info!(
            nodes = report.nodes,
            elapsed_ms = report.elapsed.as_millis() as u64,
            best = %report.notation(),
            score = report.score,
            "search complete"
        );
        report
    }

    /// Convenience wrapper around [`search`](Self::search).
    pub fn best_move<B: BoardState>(&self, board: &B) -> Option<Move> {
        self.search(board).best_move
    }

    /// Minimax value of `board` searched `depth` more plies.
    ///
    /// `maximizing` is true when White is to move at this node. Mates are
    /// scored by their ply distance from the root of `ctx`; stalemate is 0.
    pub fn minimax<B: BoardState>(
        &self,
        board: &B,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ctx: &mut SearchContext,
    ) -> i32 {
        ctx.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            if board.is_in_check() {
                let ply = i32::from(ctx.root_depth) - i32::from(depth);
                trace!(ply, maximizing, "checkmate");
                return if maximizing {
                    -(MATE_SCORE - ply)
                } else {
                    MATE_SCORE - ply
                };
            }
            trace!(depth, "stalemate");
            return 0;
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let child = board.apply_move(mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, false, ctx);
                best = best.max(score);
                if self.alpha_beta {
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let child = board.apply_move(mv);
                let score = self.minimax(&child, depth - 1, alpha, beta, true, ctx);
                best = best.min(score);
                if self.alpha_beta {
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
