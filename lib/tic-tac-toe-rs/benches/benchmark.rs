use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;
use tic_tac_toe::{
    Board,
    Move,
    Player,
};

fn criterion_benchmark(c: &mut Criterion) {
    let board: Board = "XOXXOOOX.".parse().expect("failed to parse board");

    c.bench_function("winner", |b| b.iter(|| black_box(board).winner()));
    c.bench_function("available moves", |b| {
        b.iter(|| black_box(Board::new()).available_moves())
    });
    c.bench_function("apply", |b| {
        b.iter(|| tic_tac_toe::apply(black_box(board), Player::X, black_box(Move::new(2, 2))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
