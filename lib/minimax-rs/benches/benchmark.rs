use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use minimax::{
    best_move,
    best_move_cached,
    OpeningCache,
};
use std::time::Duration;
use tic_tac_toe::{
    Board,
    Player,
};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax all", |b| {
        b.iter(|| best_move(black_box(Board::new()), black_box(Player::X)))
    });
    c.bench_function("minimax cached", |b| {
        b.iter(|| best_move_cached(black_box(Board::new()), black_box(Player::X)))
    });

    let mut group = c.benchmark_group("opening cache");
    group.sample_size(10);
    group.bench_function("compile", |b| b.iter(OpeningCache::compile));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
