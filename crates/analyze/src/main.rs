//! Analyze
//!
//! Runs a single fixed-depth search and prints the chosen move, its score
//! and the search statistics. Set `RUST_LOG=debug` to see every root move.
//!
//! ```text
//! analyze --moves "e2e4 e7e5" --depth 3 --breakdown
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chess_core::{BoardState, Position, START_FEN, play_moves};
use clap::Parser;
use heuristic_engine::{EngineConfig, Evaluator, SearchEngine, SearchReport};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Fixed-depth minimax analysis of a chess position", long_about = None)]
struct Args {
    /// Position to analyze
    #[arg(short, long, default_value = START_FEN)]
    fen: String,

    /// Moves to play from the position first, in long algebraic notation
    #[arg(short, long, value_delimiter = ' ', num_args = 0..)]
    moves: Vec<String>,

    /// Search depth in plies (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Engine config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search without alpha-beta pruning
    #[arg(long)]
    no_prune: bool,

    /// Also print the per-term evaluation of the position
    #[arg(short, long)]
    breakdown: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Serialize)]
struct Analysis {
    fen: String,
    depth: u8,
    best_move: String,
    score: i32,
    nodes: u64,
    elapsed_ms: u128,
    /// "checkmate" or "stalemate" when there was nothing to play
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<TermScore>>,
}

#[derive(Serialize)]
struct TermScore {
    term: String,
    score: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    if args.print_config {
        print!("{}", config.to_toml().context("failed to serialise config")?);
        return Ok(());
    }

    let start = Position::from_fen(&args.fen).with_context(|| format!("invalid FEN: {}", args.fen))?;
    let moves: Vec<&str> = args.moves.iter().map(String::as_str).filter(|m| !m.is_empty()).collect();
    let position = play_moves(&start, &moves).map_err(|bad| anyhow!("illegal move: {bad}"))?;

    info!(fen = %position.to_fen(), depth = config.depth, "analyzing");
    let engine = SearchEngine::from_config(&config);
    let report = engine.search(&position);

    let breakdown = args.breakdown.then(|| term_scores(engine.evaluator(), &position));
    let analysis = Analysis {
        fen: position.to_fen(),
        depth: report.depth,
        best_move: report.notation(),
        score: report.score,
        nodes: report.nodes,
        elapsed_ms: report.elapsed.as_millis(),
        outcome: outcome(&position, &report),
        breakdown,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_text(&analysis);
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.no_prune {
        config.alpha_beta = false;
    }
    config.validate()?;
    Ok(config)
}

fn outcome(position: &Position, report: &SearchReport) -> Option<&'static str> {
    if report.best_move.is_some() {
        None
    } else if position.is_in_check() {
        Some("checkmate")
    } else {
        Some("stalemate")
    }
}

fn term_scores(evaluator: &Evaluator, position: &Position) -> Vec<TermScore> {
    evaluator
        .breakdown(position)
        .into_iter()
        .map(|(term, score)| TermScore {
            term: term.to_string(),
            score,
        })
        .collect()
}

fn print_text(a: &Analysis) {
    println!("Position:  {}", a.fen);
    match a.outcome {
        Some(outcome) => println!("No legal moves ({outcome})"),
        None => println!("Best move: {} with score: {}", a.best_move, a.score),
    }
    println!("Depth:     {}", a.depth);
    println!("Nodes:     {}", a.nodes);
    println!("Time:      {} ms", a.elapsed_ms);

    if let Some(terms) = &a.breakdown {
        println!();
        println!("{:<28} {:>6}", "Term", "Score");
        println!("{}", "-".repeat(35));
        for t in terms {
            println!("{:<28} {:>6}", t.term, t.score);
        }
        println!("{}", "-".repeat(35));
        println!("{:<28} {:>6}", "total", terms.iter().map(|t| t.score).sum::<i32>());
    }
}
