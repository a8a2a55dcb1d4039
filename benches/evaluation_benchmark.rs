use chess_heuristics::board::Board;
use chess_heuristics::evaluate::{self, ChessEvaluator};
use chess_heuristics::traits::Evaluator;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP3PPP/R2QKB1R w KQ - 0 8";
const ENDGAME: &str = "8/5pk1/6p1/3P4/1p6/1P4P1/5PK1/8 w - - 0 40";

fn criterion_benchmark(c: &mut Criterion) {
    let starting_position = Board::starting_position();
    let middlegame = Board::from_fen(MIDDLEGAME).unwrap();
    let endgame = Board::from_fen(ENDGAME).unwrap();

    c.bench_function("evaluate starting position", |b| {
        b.iter(|| evaluate::evaluate(black_box(&starting_position)).unwrap())
    });

    c.bench_function("evaluate middlegame", |b| {
        b.iter(|| evaluate::evaluate(black_box(&middlegame)).unwrap())
    });

    let evaluator = ChessEvaluator::default();
    c.bench_function("evaluate pawn endgame", |b| {
        b.iter(|| evaluator.evaluate(black_box(&endgame)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
