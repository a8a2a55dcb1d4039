use chess_heuristics::board::color::Color;
use chess_heuristics::board::piece::Piece;
use chess_heuristics::board::square::*;
use chess_heuristics::board::Board;
use chess_heuristics::chess_move::{Capture, ChessMove};
use chess_heuristics::move_orderer;
use chess_heuristics::traits::{MoveOrderer, NoOpMoveOrderer};
use chess_heuristics::{castle_kingside, en_passant_move, promotion, std_move};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let root = Board::starting_position();
    let siblings: Vec<Board> = typical_sibling_moves()
        .into_iter()
        .map(|chess_move| root.with_last_move(chess_move))
        .collect();

    c.bench_function("order siblings", |b| {
        b.iter_batched(
            || siblings.clone(),
            |nodes| move_orderer::order(black_box(nodes)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("order borrowed siblings", |b| {
        b.iter_batched(
            || siblings.iter().collect::<Vec<_>>(),
            |nodes| move_orderer::order(black_box(nodes)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("no-op order siblings", |b| {
        b.iter_batched(
            || siblings.clone(),
            |nodes| NoOpMoveOrderer.order(black_box(nodes)),
            BatchSize::SmallInput,
        )
    });
}

/// Roughly the mix of a busy middlegame: mostly quiet moves with a handful of
/// captures scattered through generation order.
fn typical_sibling_moves() -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for from in [A2, B2, C2, D2, E2, F2, G2, H2] {
        let up = from.offset(1, 0).unwrap();
        moves.push(std_move!(from, up));
        moves.push(std_move!(from, up.offset(1, 0).unwrap()));
    }
    for (from, to) in [(B1, A3), (B1, C3), (G1, F3), (G1, H3), (D1, H5), (F1, C4)] {
        moves.push(std_move!(from, to));
    }
    moves.insert(3, std_move!(E4, D5, Capture(Piece::Pawn)));
    moves.insert(9, std_move!(C4, F7, Capture(Piece::Pawn)));
    moves.insert(14, en_passant_move!(E5, D6));
    moves.insert(20, promotion!(A7, B8, Some(Capture(Piece::Knight)), Piece::Queen));
    moves.push(castle_kingside!(Color::White));
    moves.push(std_move!(H5, F7, Capture(Piece::Pawn)));
    for (from, to) in [(A1, A2), (H1, H2), (E1, E2), (D1, D3), (F1, E2)] {
        moves.push(std_move!(from, to));
    }
    moves
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
