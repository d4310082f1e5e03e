//! Criterion benchmarks measuring move generation and fixed-depth search.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tabiya::chess::position::Position;
use tabiya::search;

fn positions() -> Vec<Position> {
    [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ]
    .iter()
    .map(|fen| Position::from_fen(fen).expect("benchmark FEN is well-formed"))
    .collect()
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move generation");
    let mut positions = positions();
    group.throughput(Throughput::Elements(positions.len() as u64));
    group.bench_function(BenchmarkId::new("legal_moves", positions.len()), |b| {
        b.iter(|| {
            for position in &mut positions {
                std::hint::black_box(position.legal_moves());
            }
        });
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for depth in [1u8, 2, 3] {
        group.bench_with_input(BenchmarkId::new("best_move", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut position = Position::starting();
                std::hint::black_box(search::best_move(&mut position, depth));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_search);
criterion_main!(benches);
