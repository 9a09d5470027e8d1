//! Heuristic Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over any
//! [`BoardState`](chess_core::BoardState), scored by a composite evaluator
//! tuned for opening play: material, knight placement, center control,
//! development, king safety and a handful of pawn heuristics.
//!
//! There is no move ordering, transposition table, quiescence or time
//! control. A search always runs to the configured depth.
//!
//! ```no_run
//! use chess_core::Position;
//! use heuristic_engine::SearchEngine;
//!
//! let engine = SearchEngine::new(2);
//! let report = engine.search(&Position::startpos());
//! println!("{} ({})", report.notation(), report.score);
//! ```

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::EngineConfig;
pub use error::{ConfigError, ConfigResult};
pub use eval::{Evaluator, Term, Weights};
pub use search::{DEFAULT_DEPTH, MATE_SCORE, MAX_DEPTH, SearchContext, SearchEngine, SearchReport};
