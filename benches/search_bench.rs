use criterion::{criterion_group, criterion_main, Criterion, black_box};
use morrisbot::board::{Board, Piece, Position};
use morrisbot::search::alphabeta::{SearchParams, Searcher};

fn midgame() -> Board {
    let p = |i: usize| Position::new(i).unwrap();
    Board::setup(&[p(0), p(2), p(9), p(12), p(20)], &[p(1), p(4), p(14), p(17)], 4, 5).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let start = Board::new();
    c.bench_function("search_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::default();
            let r = s.search_with_params(black_box(&start), Piece::White, SearchParams { depth: 4 }, None);
            black_box(r.map(|r| r.nodes))
        })
    });

    let mid = midgame();
    c.bench_function("search_depth_4_midgame", |ben| {
        ben.iter(|| {
            let mut s = Searcher::default();
            let r = s.search_with_params(black_box(&mid), Piece::White, SearchParams { depth: 4 }, None);
            black_box(r.map(|r| r.nodes))
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
