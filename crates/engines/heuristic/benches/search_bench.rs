//! Evaluation and fixed-depth search benchmarks.

use chess_core::Position;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use heuristic_engine::{Evaluator, SearchEngine};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ITALIAN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";

fn bench_evaluate(c: &mut Criterion) {
    let eval = Evaluator::new();
    for (name, fen) in [("startpos", chess_core::START_FEN), ("italian", ITALIAN), ("kiwipete", KIWIPETE)] {
        let pos = Position::from_fen(fen).unwrap();
        c.bench_function(&format!("evaluate {name}"), |b| {
            b.iter(|| black_box(eval.evaluate(black_box(&pos))))
        });
    }
}

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::new(2);
    let mut group = c.benchmark_group("search depth 2");
    group.sample_size(10);
    for (name, fen) in [("startpos", chess_core::START_FEN), ("italian", ITALIAN)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || Position::from_fen(fen).unwrap(),
                |pos| black_box(engine.search(&pos)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
