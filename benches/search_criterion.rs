use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use connect_bot::{
    bitboard::BitBoard, config::SearchConfig, disc::DiscColor, heuristic::evaluate,
    search::Engine,
};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    moves: &'static str,
    to_move: DiscColor,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "empty",
        moves: "",
        to_move: DiscColor::Black,
    },
    BenchCase {
        name: "opening",
        moves: "4453",
        to_move: DiscColor::Black,
    },
    BenchCase {
        name: "middle_game",
        moves: "44433352256",
        to_move: DiscColor::Red,
    },
];

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for case in CASES {
        let board = BitBoard::from_moves(case.moves).expect("valid bench position");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| evaluate(black_box(board)))
        });
    }
    group.finish();
}

fn bench_choose_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move");
    group.sample_size(10);
    for &depth in [5, 7].iter() {
        for case in CASES {
            let board = BitBoard::from_moves(case.moves).expect("valid bench position");
            let mut engine =
                Engine::new(SearchConfig::with_max_depth(depth)).expect("valid bench depth");
            group.bench_with_input(
                BenchmarkId::new(format!("depth_{}", depth), case.name),
                &board,
                |b, board| b.iter(|| engine.choose_move(black_box(board), case.to_move)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_choose_move);
criterion_main!(benches);
