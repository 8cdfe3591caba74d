use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe::board::{Board, Mark, Pos};
use tictactoe::eval::Neutral;
use tictactoe::search::{minimax, Searcher};

fn bench_alpha_beta_empty_3x3(c: &mut Criterion) {
    let mut board = Board::new(3, 3, 3).unwrap();
    let mut searcher = Searcher::new(9);
    c.bench_function("alpha-beta 3x3 full depth", |b| {
        b.iter(|| black_box(searcher.search(&mut board, Mark::X)))
    });
}

fn bench_minimax_empty_3x3(c: &mut Criterion) {
    let mut board = Board::new(3, 3, 3).unwrap();
    c.bench_function("minimax 3x3 full depth", |b| {
        b.iter(|| black_box(minimax(&mut board, 0, 9, Mark::X, Mark::X, &Neutral)))
    });
}

fn bench_alpha_beta_4x4(c: &mut Criterion) {
    let mut board = Board::new(4, 4, 3).unwrap();
    board.apply(Pos::new(2, 2), Mark::X);
    board.apply(Pos::new(2, 3), Mark::O);
    let mut searcher = Searcher::new(5);
    c.bench_function("alpha-beta 4x4 depth 5", |b| {
        b.iter(|| black_box(searcher.search(&mut board, Mark::X)))
    });
}

criterion_group!(
    benches,
    bench_alpha_beta_empty_3x3,
    bench_minimax_empty_3x3,
    bench_alpha_beta_4x4
);
criterion_main!(benches);
